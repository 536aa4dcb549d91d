//! Technique analysis entry points.

use crate::exercises::Exercise;

use super::classifier::classify;
use super::error::{TechniqueError, TechniqueResult};
use super::report;
use super::samples::FrameSampleLookup;
use super::types::{PoseFrame, TechniqueReport};

/// Analyze the recorded sample of an exercise.
///
/// Never fails: exercises without a sample get the insufficient-data report.
pub fn analyze(exercise: &Exercise, samples: &impl FrameSampleLookup) -> TechniqueReport {
    let frames = match samples.sample(&exercise.id) {
        Some(frames) if !frames.is_empty() => frames,
        _ => {
            tracing::debug!("No pose sample for '{}', using placeholder report", exercise.id);
            return report::insufficient_data();
        }
    };

    let movement = classify(exercise);
    let report = movement.evaluate(frames);

    tracing::debug!(
        exercise = %exercise.id,
        movement = %movement,
        score = report.score,
        frames = report.frame_count,
        "Technique analyzed"
    );

    report
}

/// Like [`analyze`], but rejects samples with bad coordinates or timestamps.
pub fn analyze_checked(
    exercise: &Exercise,
    samples: &impl FrameSampleLookup,
) -> TechniqueResult<TechniqueReport> {
    if let Some(frames) = samples.sample(&exercise.id) {
        validate_sample(frames)?;
    }
    Ok(analyze(exercise, samples))
}

/// Check that every coordinate is finite and timestamps strictly increase.
pub fn validate_sample(frames: &[PoseFrame]) -> TechniqueResult<()> {
    for frame in frames {
        if let Some(joint) = frame.first_non_finite() {
            return Err(TechniqueError::NonFiniteCoordinate {
                timestamp_ms: frame.timestamp_ms,
                joint,
            });
        }
    }

    if let Some(pair) = frames
        .windows(2)
        .find(|pair| pair[1].timestamp_ms <= pair[0].timestamp_ms)
    {
        return Err(TechniqueError::TimestampsOutOfOrder {
            previous_ms: pair[0].timestamp_ms,
            current_ms: pair[1].timestamp_ms,
        });
    }

    Ok(())
}
