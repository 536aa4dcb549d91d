//! Technique coach service.
//!
//! Runs analyses against the sample library and records the outcome in the
//! report history and the workout log.

use thiserror::Error;

use crate::exercises::Exercise;
use crate::storage::{Database, DatabaseError, SetEntry, StoredReport, WorkoutLog};
use crate::technique::{analyze_checked, SampleLibrary, TechniqueError, TechniqueReport};

/// Coach errors.
#[derive(Debug, Error)]
pub enum CoachError {
    #[error("Invalid pose sample: {0}")]
    InvalidSample(#[from] TechniqueError),

    #[error("Storage error: {0}")]
    Storage(#[from] DatabaseError),
}

/// Result of a single review.
#[derive(Debug, Clone)]
pub struct Review {
    pub report: TechniqueReport,
    pub stored: StoredReport,
}

/// Ties the analysis core to persistent history.
pub struct TechniqueCoach {
    db: Database,
    samples: SampleLibrary,
    max_reports: usize,
}

impl TechniqueCoach {
    pub fn new(db: Database, samples: SampleLibrary, max_reports: usize) -> Self {
        Self {
            db,
            samples,
            max_reports,
        }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Analyze an exercise and append the report to history.
    ///
    /// A sample with non-finite coordinates or unordered timestamps is
    /// rejected before anything is saved.
    pub fn review(&self, exercise: &Exercise) -> Result<Review, CoachError> {
        let report = analyze_checked(exercise, &self.samples)?;
        let stored = self.db.reports(self.max_reports).save(exercise, &report)?;

        tracing::info!(
            "Reviewed {}: score {} ({})",
            exercise.id,
            report.score,
            report.verdict
        );

        Ok(Review { report, stored })
    }

    /// Log performed sets with the technique score and tips attached.
    pub fn log_workout(
        &self,
        exercise: &Exercise,
        sets: Vec<SetEntry>,
        notes: Option<String>,
    ) -> Result<WorkoutLog, CoachError> {
        let review = self.review(exercise)?;

        let mut log = WorkoutLog::new(exercise.id.clone(), sets);
        log.notes = notes.filter(|n| !n.trim().is_empty());
        log.ai_score = Some(review.report.score);
        log.ai_tips = review.report.focus_areas;

        self.db.workout_logs().insert(&log)?;
        tracing::info!(
            "Logged {} sets of {} ({} reps)",
            log.sets.len(),
            exercise.id,
            log.total_reps()
        );

        Ok(log)
    }

    /// Most recent reports, newest first.
    pub fn history(&self, limit: usize) -> Result<Vec<StoredReport>, DatabaseError> {
        self.db.reports(self.max_reports).list_recent(limit)
    }
}
