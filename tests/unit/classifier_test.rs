//! Unit tests for exercise classification.

use formcoach::exercises::{catalog, Exercise, MuscleGroup};
use formcoach::technique::{classify, Movement};

#[test]
fn test_catalog_classification() {
    let expected = [
        ("squat", Movement::Squat),
        ("bench-press", Movement::PushUp),
        ("deadlift", Movement::Hinge),
        ("pull-up", Movement::Hinge),
        ("overhead-press", Movement::Hinge),
        ("plank", Movement::Hinge),
        ("push-up", Movement::PushUp),
        ("hip-thrust", Movement::Squat),
        ("barbell-row", Movement::Hinge),
        ("face-pull", Movement::Hinge),
        ("bicep-curl", Movement::Hinge),
        ("split-squat", Movement::Squat),
    ];

    for (id, movement) in expected {
        let exercise = catalog::find(id).unwrap();
        assert_eq!(classify(&exercise), movement, "exercise {}", id);
    }
}

#[test]
fn test_push_rule_wins_over_legs() {
    // Matches both the push rule and the legs rule
    let sled = Exercise::new("sled-push", "Sled Push", MuscleGroup::Legs);
    assert_eq!(classify(&sled), Movement::PushUp);
}

#[test]
fn test_row_needs_back_group() {
    let back_row = Exercise::new("cable-row", "Cable Row", MuscleGroup::Back);
    assert_eq!(classify(&back_row), Movement::Hinge);

    let leg_row = Exercise::new("rower-squat", "Rower Squat", MuscleGroup::Legs);
    assert_eq!(classify(&leg_row), Movement::Squat);
}

#[test]
fn test_squat_by_id_outside_legs() {
    let goblet = Exercise::new("goblet-squat", "Goblet Squat", MuscleGroup::Other);
    assert_eq!(classify(&goblet), Movement::Squat);
}

#[test]
fn test_unmatched_defaults_to_hinge() {
    let curl = Exercise::new("hammer-curl", "Hammer Curl", MuscleGroup::Arms);
    assert_eq!(classify(&curl), Movement::Hinge);

    let unknown = Exercise::new("", "", MuscleGroup::Other);
    assert_eq!(classify(&unknown), Movement::Hinge);
}
