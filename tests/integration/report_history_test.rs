//! Integration tests for report history and workout logging on disk.

use formcoach::exercises::catalog;
use formcoach::storage::config::{load_config_from, save_config_to, AppConfig};
use formcoach::storage::{Database, SetEntry};
use formcoach::technique::SampleLibrary;
use formcoach::TechniqueCoach;
use tempfile::tempdir;

fn coach_at(config: &AppConfig) -> TechniqueCoach {
    let db = Database::open(&config.database_path()).unwrap();
    TechniqueCoach::new(db, SampleLibrary::builtin(), config.history.max_reports)
}

#[test]
fn test_history_survives_reopen() {
    let dir = tempdir().unwrap();
    let config = load_config_from(&dir.path().join("config.toml")).unwrap();

    {
        let coach = coach_at(&config);
        coach.review(&catalog::find("squat").unwrap()).unwrap();
        coach.review(&catalog::find("push-up").unwrap()).unwrap();
    }

    let coach = coach_at(&config);
    let history = coach.history(10).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].exercise_id, "push-up");
    assert_eq!(history[0].score, 98);
    assert_eq!(history[1].exercise_id, "squat");
    assert_eq!(history[1].focus_areas, vec!["Опуститесь ниже параллели".to_string()]);
    assert_eq!(history[1].metrics[0].value, 176.0);
    assert_eq!(history[1].metrics[2].value, 98.0);
}

#[test]
fn test_configured_retention_cap() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = AppConfig::default();
    config.history.max_reports = 3;
    save_config_to(&config, &path).unwrap();
    let config = load_config_from(&path).unwrap();

    let coach = coach_at(&config);
    let ids = ["squat", "push-up", "barbell-row", "plank", "deadlift"];
    for id in ids {
        coach.review(&catalog::find(id).unwrap()).unwrap();
    }

    let history = coach.history(50).unwrap();
    let kept: Vec<&str> = history.iter().map(|r| r.exercise_id.as_str()).collect();
    assert_eq!(kept, vec!["deadlift", "plank", "barbell-row"]);
    assert_eq!(history[0].score, 75);
}

#[test]
fn test_workout_log_flow() {
    let dir = tempdir().unwrap();
    let config = load_config_from(&dir.path().join("config.toml")).unwrap();
    let coach = coach_at(&config);

    let squat = catalog::find("squat").unwrap();
    let log = coach
        .log_workout(
            &squat,
            vec![SetEntry::new(8, 60.0), SetEntry::new(8, 60.0), SetEntry::new(6, 70.0)],
            Some("Heavy day".to_string()),
        )
        .unwrap();

    assert_eq!(log.ai_score, Some(83));
    assert_eq!(log.total_reps(), 22);

    let logs = coach.database().workout_logs().for_exercise("squat").unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0], log);

    // Logging also records the analysis
    assert_eq!(coach.history(10).unwrap().len(), 1);
}
