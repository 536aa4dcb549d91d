//! Integration tests for the analysis pipeline.
//!
//! Tests the end-to-end flow:
//! 1. Look up an exercise in the catalog
//! 2. Resolve its pose sample (built-in, map or JSON file)
//! 3. Classify and score it
//! 4. Check the report against known values

use std::collections::HashMap;

use formcoach::exercises::{catalog, Exercise, MuscleGroup};
use formcoach::technique::{
    analyze, analyze_checked, FrameSampleLookup, Joint, PoseFrame, SampleLibrary, TechniqueError, Verdict,
};
use tempfile::tempdir;

#[test]
fn test_builtin_samples() {
    let library = SampleLibrary::builtin();

    let squat = analyze(&catalog::find("squat").unwrap(), &library);
    assert_eq!(squat.score, 83);
    assert_eq!(squat.verdict, Verdict::GoodRefineDetails);
    assert_eq!(squat.frame_count, 3);
    assert_eq!(squat.focus_areas, vec!["Опуститесь ниже параллели".to_string()]);

    let push_up = analyze(&catalog::find("push-up").unwrap(), &library);
    assert_eq!(push_up.score, 98);
    assert_eq!(push_up.verdict, Verdict::CleanPushUps);
    assert!(push_up.focus_areas.is_empty());

    let row = analyze(&catalog::find("barbell-row").unwrap(), &library);
    assert_eq!(row.score, 80);
    assert_eq!(row.verdict, Verdict::FocusOnPelvisTilt);
    assert_eq!(row.focus_areas, vec!["Отводите таз назад сильнее".to_string()]);

    let split = analyze(&catalog::find("split-squat").unwrap(), &library);
    assert_eq!(split.score, 83);
}

#[test]
fn test_unsampled_exercises_get_placeholder() {
    let library = SampleLibrary::builtin();

    for exercise in catalog::all() {
        if library.contains(&exercise.id) {
            continue;
        }
        let report = analyze(&exercise, &library);
        assert_eq!(report.score, 75, "exercise {}", exercise.id);
        assert_eq!(report.verdict, Verdict::InsufficientData);
        assert_eq!(report.frame_count, 0);
        assert_eq!(report.focus_areas.len(), 1);
        assert!(report.metrics.is_empty());
    }
}

#[test]
fn test_unknown_exercise() {
    let exercise = Exercise::new("jefferson-curl", "Jefferson Curl", MuscleGroup::Other);
    let report = analyze(&exercise, &SampleLibrary::builtin());
    assert!(report.is_placeholder());
    assert_eq!(report.score, 75);
}

#[test]
fn test_hashmap_lookup() {
    let library = SampleLibrary::builtin();
    let mut samples: HashMap<String, Vec<PoseFrame>> = HashMap::new();
    samples.insert(
        "goblet-squat".to_string(),
        library.sample("squat").unwrap().to_vec(),
    );
    samples.insert("empty".to_string(), Vec::new());

    let goblet = Exercise::new("goblet-squat", "Goblet Squat", MuscleGroup::Legs);
    assert_eq!(analyze(&goblet, &samples).score, 83);

    let empty = Exercise::new("empty", "Empty", MuscleGroup::Legs);
    assert!(analyze(&empty, &samples).is_placeholder());
}

#[test]
fn test_json_samples_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("samples.json");
    std::fs::write(&path, SampleLibrary::builtin().to_json().unwrap()).unwrap();

    let mut library = SampleLibrary::empty();
    library.merge(SampleLibrary::load(&path).unwrap());
    assert_eq!(library.len(), 4);

    let push_up = analyze(&catalog::find("push-up").unwrap(), &library);
    assert_eq!(push_up.score, 98);
}

#[test]
fn test_incomplete_json_frame_rejected() {
    let json = r#"{
        "squat": [
            { "timestamp": 0, "keypoints": { "leftHip": { "x": 0.4, "y": 0.5 } } }
        ]
    }"#;

    match SampleLibrary::from_json(json) {
        Err(TechniqueError::ParseError(message)) => assert!(message.contains("missing")),
        other => panic!("expected parse error, got {:?}", other.map(|l| l.len())),
    }
}

#[test]
fn test_checked_analysis_rejects_bad_samples() {
    let squat = catalog::find("squat").unwrap();
    let frame = |t: u64| PoseFrame::with_fallback(t, &[(Joint::LeftHip, 0.5, 0.5)]);

    let mut samples: HashMap<String, Vec<PoseFrame>> = HashMap::new();
    samples.insert("squat".to_string(), vec![frame(100), frame(50)]);
    assert!(matches!(
        analyze_checked(&squat, &samples),
        Err(TechniqueError::TimestampsOutOfOrder {
            previous_ms: 100,
            current_ms: 50
        })
    ));

    let mut broken = frame(0);
    broken.right_knee.x = f64::NAN;
    samples.insert("squat".to_string(), vec![broken]);
    assert!(matches!(
        analyze_checked(&squat, &samples),
        Err(TechniqueError::NonFiniteCoordinate {
            joint: Joint::RightKnee,
            ..
        })
    ));

    // The unchecked entry point still produces a report
    assert!(analyze(&squat, &samples).score <= 100);
}

#[test]
fn test_checked_analysis_accepts_builtin() {
    let library = SampleLibrary::builtin();
    for id in library.exercise_ids() {
        let exercise = catalog::find(id).unwrap();
        assert!(analyze_checked(&exercise, &library).is_ok());
    }
}
