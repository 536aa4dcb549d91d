//! FormCoach - exercise technique analysis
//!
//! Scores a short sequence of 2D pose keypoints for an exercise and produces a
//! technique report: a 0-100 score, a verdict, per-metric measurements and
//! focus areas. Reports and workout logs are kept in a local SQLite database.

pub mod coach;
pub mod exercises;
pub mod storage;
pub mod technique;

// Re-export commonly used types
pub use coach::{CoachError, TechniqueCoach};
pub use exercises::{Exercise, MuscleGroup};
pub use storage::config::AppConfig;
pub use technique::{analyze, classify, Movement, SampleLibrary, TechniqueReport};
