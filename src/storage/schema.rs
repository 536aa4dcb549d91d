//! Database schema definitions for FormCoach.

/// SQL schema for creating all database tables.
pub const SCHEMA: &str = r#"
-- Technique report history
CREATE TABLE IF NOT EXISTS technique_reports (
    id TEXT PRIMARY KEY,
    exercise_id TEXT NOT NULL,
    exercise_name TEXT NOT NULL,
    score INTEGER NOT NULL,
    verdict TEXT NOT NULL,
    focus_areas_json TEXT NOT NULL,
    metrics_json TEXT NOT NULL,
    frame_count INTEGER NOT NULL,
    created_at TEXT NOT NULL
);

-- Workout log entries
CREATE TABLE IF NOT EXISTS workout_logs (
    id TEXT PRIMARY KEY,
    date TEXT NOT NULL,
    exercise_id TEXT NOT NULL,
    sets_json TEXT NOT NULL,
    notes TEXT,
    ai_score INTEGER,
    ai_tips_json TEXT
);

-- Indexes for common queries
CREATE INDEX IF NOT EXISTS idx_reports_exercise ON technique_reports(exercise_id);
CREATE INDEX IF NOT EXISTS idx_workout_logs_date ON workout_logs(date);
CREATE INDEX IF NOT EXISTS idx_workout_logs_exercise ON workout_logs(exercise_id);
"#;

/// Schema version table for migrations.
pub const SCHEMA_VERSION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL
);
"#;

/// Current schema version.
pub const CURRENT_VERSION: i32 = 1;
