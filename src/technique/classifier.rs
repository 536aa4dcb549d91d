//! Exercise to movement-pattern classification.
//!
//! Classification is an ordered rule table: the first matching rule wins and
//! anything unmatched is scored as a hinge. Rule order is behavior; an
//! exercise matching several rules resolves to the earliest one.

use serde::{Deserialize, Serialize};

use crate::exercises::{Exercise, MuscleGroup};

use super::evaluator::MovementEvaluator;
use super::hinge::HingeEvaluator;
use super::push_up::PushUpEvaluator;
use super::report;
use super::squat::SquatEvaluator;
use super::types::{PoseFrame, TechniqueReport};

/// Movement pattern an exercise is scored as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Movement {
    Squat,
    PushUp,
    Hinge,
}

impl Movement {
    /// Evaluator for this pattern.
    pub fn evaluator(&self) -> &'static dyn MovementEvaluator {
        match self {
            Movement::Squat => &SquatEvaluator,
            Movement::PushUp => &PushUpEvaluator,
            Movement::Hinge => &HingeEvaluator,
        }
    }

    /// Score a frame sequence with this pattern's evaluator.
    ///
    /// An empty sequence yields the insufficient-data report.
    pub fn evaluate(&self, frames: &[PoseFrame]) -> TechniqueReport {
        if frames.is_empty() {
            return report::insufficient_data();
        }
        let evaluator = self.evaluator();
        report::assemble(evaluator.assess(frames), evaluator.verdicts(), frames.len())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Movement::Squat => "Squat",
            Movement::PushUp => "Push-up",
            Movement::Hinge => "Hinge",
        }
    }
}

impl std::fmt::Display for Movement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Predicate over an exercise record.
#[derive(Debug, Clone, Copy)]
pub enum Condition {
    MuscleGroup(MuscleGroup),
    IdContains(&'static str),
    AnyOf(&'static [Condition]),
    AllOf(&'static [Condition]),
}

impl Condition {
    pub fn matches(&self, exercise: &Exercise) -> bool {
        match self {
            Condition::MuscleGroup(group) => exercise.muscle_group == *group,
            Condition::IdContains(needle) => exercise.id.contains(needle),
            Condition::AnyOf(conditions) => conditions.iter().any(|c| c.matches(exercise)),
            Condition::AllOf(conditions) => conditions.iter().all(|c| c.matches(exercise)),
        }
    }
}

/// One classification rule.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub when: Condition,
    pub movement: Movement,
}

/// Classification rules, in precedence order.
pub const RULES: &[Rule] = &[
    Rule {
        when: Condition::AnyOf(&[
            Condition::MuscleGroup(MuscleGroup::Chest),
            Condition::IdContains("push"),
        ]),
        movement: Movement::PushUp,
    },
    Rule {
        when: Condition::AllOf(&[
            Condition::MuscleGroup(MuscleGroup::Back),
            Condition::IdContains("row"),
        ]),
        movement: Movement::Hinge,
    },
    Rule {
        when: Condition::AnyOf(&[
            Condition::MuscleGroup(MuscleGroup::Legs),
            Condition::IdContains("squat"),
        ]),
        movement: Movement::Squat,
    },
];

/// Pattern used when no rule matches.
pub const DEFAULT_MOVEMENT: Movement = Movement::Hinge;

/// Pick the movement pattern for an exercise.
pub fn classify(exercise: &Exercise) -> Movement {
    RULES
        .iter()
        .find(|rule| rule.when.matches(exercise))
        .map(|rule| rule.movement)
        .unwrap_or(DEFAULT_MOVEMENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(id: &str, group: MuscleGroup) -> Exercise {
        Exercise::new(id, id, group)
    }

    #[test]
    fn test_chest_is_push_up() {
        assert_eq!(classify(&exercise("bench-press", MuscleGroup::Chest)), Movement::PushUp);
    }

    #[test]
    fn test_push_id_wins_over_legs() {
        assert_eq!(classify(&exercise("push-squat", MuscleGroup::Legs)), Movement::PushUp);
    }

    #[test]
    fn test_back_row_is_hinge() {
        assert_eq!(classify(&exercise("barbell-row", MuscleGroup::Back)), Movement::Hinge);
    }

    #[test]
    fn test_row_rule_precedes_squat_rule() {
        // Back + row + squat: rule 2 fires before rule 3.
        assert_eq!(classify(&exercise("row-squat", MuscleGroup::Back)), Movement::Hinge);
        // Legs + row: rule 2 needs back, so rule 3 fires.
        assert_eq!(classify(&exercise("sled-row", MuscleGroup::Legs)), Movement::Squat);
    }

    #[test]
    fn test_squat_id_outside_legs() {
        assert_eq!(classify(&exercise("goblet-squat", MuscleGroup::Core)), Movement::Squat);
    }

    #[test]
    fn test_unmatched_defaults_to_hinge() {
        assert_eq!(classify(&exercise("bicep-curl", MuscleGroup::Arms)), Movement::Hinge);
        assert_eq!(classify(&exercise("deadlift", MuscleGroup::Back)), Movement::Hinge);
        assert_eq!(classify(&exercise("mystery", MuscleGroup::Other)), Movement::Hinge);
    }

    #[test]
    fn test_empty_frames_give_placeholder() {
        let report = Movement::Squat.evaluate(&[]);
        assert!(report.is_placeholder());
        assert_eq!(report.score, 75);
    }
}
