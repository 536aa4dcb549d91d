//! Exercise records.

use serde::{Deserialize, Serialize};

/// Primary muscle group of an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MuscleGroup {
    Chest,
    Back,
    Legs,
    Shoulders,
    Arms,
    Core,
    /// Any group this client does not know about.
    #[serde(other)]
    Other,
}

impl MuscleGroup {
    /// Russian display name.
    pub fn name_ru(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Грудь",
            MuscleGroup::Back => "Спина",
            MuscleGroup::Legs => "Ноги",
            MuscleGroup::Shoulders => "Плечи",
            MuscleGroup::Arms => "Руки",
            MuscleGroup::Core => "Кор",
            MuscleGroup::Other => "Другое",
        }
    }
}

/// Exercise difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn name_ru(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Начинающий",
            Difficulty::Intermediate => "Средний",
            Difficulty::Advanced => "Продвинутый",
        }
    }
}

/// An exercise the user can log and have analyzed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Stable identifier, also the key of its pose sample.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub name_ru: String,
    pub muscle_group: MuscleGroup,
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Aspects of technique the analyzer is expected to look at.
    #[serde(default)]
    pub ai_checks: Vec<String>,
}

impl Exercise {
    /// Minimal record with an id, a name and a muscle group.
    pub fn new(id: impl Into<String>, name: impl Into<String>, muscle_group: MuscleGroup) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            name_ru: name.clone(),
            name,
            muscle_group,
            difficulty: Difficulty::default(),
            ai_checks: Vec::new(),
        }
    }

    /// Name shown to the user.
    pub fn display_name(&self) -> &str {
        if self.name_ru.is_empty() {
            &self.name
        } else {
            &self.name_ru
        }
    }
}
