//! Technique analysis error types.

use thiserror::Error;

use super::types::Joint;

/// Errors raised while building or validating pose samples.
///
/// Analysis itself never fails: unknown exercises and degenerate geometry
/// produce degraded reports instead.
#[derive(Debug, Error)]
pub enum TechniqueError {
    /// A frame did not carry all twelve joints.
    #[error("Incomplete frame at {timestamp_ms} ms: missing {}", joint_keys(.missing))]
    IncompleteFrame { timestamp_ms: u64, missing: Vec<Joint> },

    /// A joint coordinate was NaN or infinite.
    #[error("Non-finite coordinate for {joint} at {timestamp_ms} ms")]
    NonFiniteCoordinate { timestamp_ms: u64, joint: Joint },

    /// Frame timestamps must strictly increase.
    #[error("Frame timestamps out of order: {previous_ms} ms followed by {current_ms} ms")]
    TimestampsOutOfOrder { previous_ms: u64, current_ms: u64 },

    /// Sample file could not be read.
    #[error("IO error: {0}")]
    IoError(String),

    /// Sample file could not be parsed.
    #[error("Sample parse error: {0}")]
    ParseError(String),
}

impl From<serde_json::Error> for TechniqueError {
    fn from(err: serde_json::Error) -> Self {
        TechniqueError::ParseError(err.to_string())
    }
}

/// Joints as they are spelled in sample files.
fn joint_keys(joints: &[Joint]) -> String {
    joints.iter().map(Joint::key).collect::<Vec<_>>().join(", ")
}

/// Result type for technique operations.
pub type TechniqueResult<T> = Result<T, TechniqueError>;
