//! Technique analysis engine.
//!
//! Converts a sequence of pose frames into a technique report:
//! - Geometry: joint angles and averages
//! - Classifier: exercise to movement pattern (squat, push-up, hinge)
//! - Evaluators: per-pattern scoring heuristics over a shared pipeline
//! - Report assembly and the insufficient-data placeholder
//!
//! Analysis is pure and synchronous; it performs no I/O and holds no state.

pub mod analyzer;
pub mod classifier;
pub mod error;
pub mod evaluator;
pub mod geometry;
pub mod hinge;
pub mod push_up;
pub mod report;
pub mod samples;
pub mod squat;
pub mod types;

pub use analyzer::{analyze, analyze_checked, validate_sample};
pub use classifier::{classify, Movement};
pub use error::{TechniqueError, TechniqueResult};
pub use evaluator::MovementEvaluator;
pub use samples::{FrameSampleLookup, SampleLibrary};
pub use types::{
    Joint, MetricStatus, PoseFrame, PosePoint, Side, TechniqueMetric, TechniqueReport, Verdict,
};
