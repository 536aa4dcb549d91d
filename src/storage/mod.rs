//! Storage module for the database and configuration.

pub mod config;
pub mod database;
pub mod report_store;
pub mod schema;
pub mod workout_store;

pub use config::{AppConfig, AnalysisSettings, ConfigError, HistorySettings};
pub use database::{Database, DatabaseError};
pub use report_store::{MetricSummary, ReportStore, StoredReport};
pub use workout_store::{SetEntry, WorkoutLog, WorkoutStore};
