//! Built-in exercise catalog.

use super::types::{Difficulty, Exercise, MuscleGroup};

struct Entry {
    id: &'static str,
    name: &'static str,
    name_ru: &'static str,
    muscle_group: MuscleGroup,
    difficulty: Difficulty,
    ai_checks: &'static [&'static str],
}

const ENTRIES: &[Entry] = &[
    Entry {
        id: "squat",
        name: "Barbell Squat",
        name_ru: "Приседания со штангой",
        muscle_group: MuscleGroup::Legs,
        difficulty: Difficulty::Intermediate,
        ai_checks: &["Глубина приседа", "Стабильность коленей", "Положение корпуса"],
    },
    Entry {
        id: "bench-press",
        name: "Bench Press",
        name_ru: "Жим лёжа",
        muscle_group: MuscleGroup::Chest,
        difficulty: Difficulty::Intermediate,
        ai_checks: &["Стабильность лопаток", "Траектория штанги"],
    },
    Entry {
        id: "deadlift",
        name: "Deadlift",
        name_ru: "Становая тяга",
        muscle_group: MuscleGroup::Back,
        difficulty: Difficulty::Advanced,
        ai_checks: &["Хип-хиндж", "Стабильность спины"],
    },
    Entry {
        id: "pull-up",
        name: "Pull-Up",
        name_ru: "Подтягивания",
        muscle_group: MuscleGroup::Back,
        difficulty: Difficulty::Intermediate,
        ai_checks: &["Скорость эксцентрической фазы", "Симметрия захвата"],
    },
    Entry {
        id: "overhead-press",
        name: "Overhead Press",
        name_ru: "Жим стоя",
        muscle_group: MuscleGroup::Shoulders,
        difficulty: Difficulty::Intermediate,
        ai_checks: &["Линия пресса", "Амплитуда движения"],
    },
    Entry {
        id: "plank",
        name: "Plank",
        name_ru: "Планка",
        muscle_group: MuscleGroup::Core,
        difficulty: Difficulty::Beginner,
        ai_checks: &["Линия корпуса"],
    },
    Entry {
        id: "push-up",
        name: "Push-Up",
        name_ru: "Отжимания",
        muscle_group: MuscleGroup::Chest,
        difficulty: Difficulty::Beginner,
        ai_checks: &["Амплитуда", "Провисание корпуса"],
    },
    Entry {
        id: "hip-thrust",
        name: "Hip Thrust",
        name_ru: "Ягодичный мост",
        muscle_group: MuscleGroup::Legs,
        difficulty: Difficulty::Intermediate,
        ai_checks: &["Пиковое сокращение", "Контроль коленей"],
    },
    Entry {
        id: "barbell-row",
        name: "Bent-Over Row",
        name_ru: "Тяга штанги в наклоне",
        muscle_group: MuscleGroup::Back,
        difficulty: Difficulty::Intermediate,
        ai_checks: &["Наклон корпуса", "Стабильность корпуса"],
    },
    Entry {
        id: "face-pull",
        name: "Face Pull",
        name_ru: "Тяга к лицу",
        muscle_group: MuscleGroup::Shoulders,
        difficulty: Difficulty::Beginner,
        ai_checks: &["Симметрия тяги", "Положение плеч"],
    },
    Entry {
        id: "bicep-curl",
        name: "Dumbbell Curl",
        name_ru: "Подъём гантелей на бицепс",
        muscle_group: MuscleGroup::Arms,
        difficulty: Difficulty::Beginner,
        ai_checks: &["Контроль локтей"],
    },
    Entry {
        id: "split-squat",
        name: "Bulgarian Split Squat",
        name_ru: "Болгарский сплит-присед",
        muscle_group: MuscleGroup::Legs,
        difficulty: Difficulty::Intermediate,
        ai_checks: &["Баланс", "Положение колена"],
    },
];

impl Entry {
    fn to_exercise(&self) -> Exercise {
        Exercise {
            id: self.id.to_string(),
            name: self.name.to_string(),
            name_ru: self.name_ru.to_string(),
            muscle_group: self.muscle_group,
            difficulty: self.difficulty,
            ai_checks: self.ai_checks.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// All built-in exercises, in catalog order.
pub fn all() -> Vec<Exercise> {
    ENTRIES.iter().map(Entry::to_exercise).collect()
}

/// Look up a built-in exercise by id.
pub fn find(id: &str) -> Option<Exercise> {
    ENTRIES
        .iter()
        .find(|entry| entry.id == id)
        .map(Entry::to_exercise)
}

/// Built-in exercises of one muscle group.
pub fn by_muscle_group(group: MuscleGroup) -> Vec<Exercise> {
    ENTRIES
        .iter()
        .filter(|entry| entry.muscle_group == group)
        .map(Entry::to_exercise)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size_and_unique_ids() {
        let exercises = all();
        assert_eq!(exercises.len(), 12);

        let mut ids: Vec<_> = exercises.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn test_find() {
        let row = find("barbell-row").unwrap();
        assert_eq!(row.muscle_group, MuscleGroup::Back);
        assert_eq!(row.ai_checks.len(), 2);
        assert!(find("zercher-squat").is_none());
    }

    #[test]
    fn test_by_muscle_group() {
        let legs = by_muscle_group(MuscleGroup::Legs);
        let ids: Vec<_> = legs.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["squat", "hip-thrust", "split-squat"]);
    }
}
