//! Pose sample lookup and the built-in sample library.
//!
//! Samples are keyed by exercise id. External samples use the client JSON
//! shape:
//!
//! ```json
//! { "squat": [ { "timestamp": 0, "keypoints": { "leftHip": { "x": 0.45, "y": 0.55 }, ... } } ] }
//! ```
//!
//! Every frame in a JSON sample must list all twelve joints.

use std::collections::HashMap;
use std::path::Path;

use super::error::{TechniqueError, TechniqueResult};
use super::types::{Joint, PoseFrame};

/// Source of recorded movement samples.
pub trait FrameSampleLookup {
    /// Frames recorded for an exercise, if any.
    fn sample(&self, exercise_id: &str) -> Option<&[PoseFrame]>;
}

impl FrameSampleLookup for HashMap<String, Vec<PoseFrame>> {
    fn sample(&self, exercise_id: &str) -> Option<&[PoseFrame]> {
        self.get(exercise_id).map(Vec::as_slice)
    }
}

/// In-memory collection of movement samples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleLibrary {
    samples: HashMap<String, Vec<PoseFrame>>,
}

impl SampleLibrary {
    /// Library without any samples.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Library with the bundled demo recordings.
    pub fn builtin() -> Self {
        let mut library = Self::empty();
        library.insert("squat", squat_frames());
        library.insert("split-squat", split_squat_frames());
        library.insert("push-up", push_up_frames());
        library.insert("barbell-row", barbell_row_frames());
        library
    }

    /// Parse samples from JSON.
    pub fn from_json(json: &str) -> TechniqueResult<Self> {
        let samples: HashMap<String, Vec<PoseFrame>> = serde_json::from_str(json)?;
        Ok(Self { samples })
    }

    /// Load samples from a JSON file.
    pub fn load(path: &Path) -> TechniqueResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| TechniqueError::IoError(e.to_string()))?;
        let library = Self::from_json(&content)?;
        tracing::info!("Loaded {} pose samples from {}", library.len(), path.display());
        Ok(library)
    }

    /// Serialize all samples to JSON.
    pub fn to_json(&self) -> TechniqueResult<String> {
        Ok(serde_json::to_string_pretty(&self.samples)?)
    }

    /// Add or replace the sample for an exercise.
    pub fn insert(&mut self, exercise_id: impl Into<String>, frames: Vec<PoseFrame>) {
        self.samples.insert(exercise_id.into(), frames);
    }

    /// Add all samples of `other`, replacing samples with the same id.
    pub fn merge(&mut self, other: SampleLibrary) {
        self.samples.extend(other.samples);
    }

    /// Exercise ids with a sample, sorted.
    pub fn exercise_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.samples.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn contains(&self, exercise_id: &str) -> bool {
        self.samples.contains_key(exercise_id)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl FrameSampleLookup for SampleLibrary {
    fn sample(&self, exercise_id: &str) -> Option<&[PoseFrame]> {
        self.samples.sample(exercise_id)
    }
}

fn squat_frames() -> Vec<PoseFrame> {
    use Joint::*;
    vec![
        PoseFrame::with_fallback(
            0,
            &[
                (LeftShoulder, 0.42, 0.25),
                (RightShoulder, 0.58, 0.25),
                (LeftHip, 0.45, 0.55),
                (RightHip, 0.55, 0.55),
                (LeftKnee, 0.46, 0.85),
                (RightKnee, 0.54, 0.85),
                (LeftAnkle, 0.47, 1.05),
                (RightAnkle, 0.53, 1.05),
            ],
        ),
        PoseFrame::with_fallback(
            400,
            &[
                (LeftShoulder, 0.42, 0.27),
                (RightShoulder, 0.58, 0.27),
                (LeftHip, 0.44, 0.68),
                (RightHip, 0.56, 0.68),
                (LeftKnee, 0.46, 0.95),
                (RightKnee, 0.54, 0.95),
                (LeftAnkle, 0.47, 1.07),
                (RightAnkle, 0.53, 1.07),
            ],
        ),
        PoseFrame::with_fallback(
            800,
            &[
                (LeftShoulder, 0.43, 0.28),
                (RightShoulder, 0.57, 0.28),
                (LeftHip, 0.45, 0.72),
                (RightHip, 0.55, 0.72),
                (LeftKnee, 0.46, 0.98),
                (RightKnee, 0.54, 0.98),
                (LeftAnkle, 0.47, 1.07),
                (RightAnkle, 0.53, 1.07),
            ],
        ),
    ]
}

fn split_squat_frames() -> Vec<PoseFrame> {
    use Joint::*;
    vec![
        PoseFrame::with_fallback(
            0,
            &[
                (LeftShoulder, 0.42, 0.24),
                (RightShoulder, 0.58, 0.24),
                (LeftHip, 0.46, 0.52),
                (RightHip, 0.56, 0.58),
                (LeftKnee, 0.48, 0.82),
                (RightKnee, 0.58, 0.9),
                (LeftAnkle, 0.50, 1.05),
                (RightAnkle, 0.62, 1.08),
            ],
        ),
        PoseFrame::with_fallback(
            500,
            &[
                (LeftShoulder, 0.43, 0.26),
                (RightShoulder, 0.57, 0.26),
                (LeftHip, 0.45, 0.68),
                (RightHip, 0.56, 0.74),
                (LeftKnee, 0.48, 0.98),
                (RightKnee, 0.58, 1.02),
                (LeftAnkle, 0.50, 1.09),
                (RightAnkle, 0.62, 1.11),
            ],
        ),
    ]
}

fn push_up_frames() -> Vec<PoseFrame> {
    use Joint::*;
    vec![
        PoseFrame::with_fallback(
            0,
            &[
                (LeftShoulder, 0.42, 0.48),
                (RightShoulder, 0.58, 0.48),
                (LeftElbow, 0.42, 0.62),
                (RightElbow, 0.58, 0.62),
                (LeftWrist, 0.42, 0.76),
                (RightWrist, 0.58, 0.76),
                (LeftHip, 0.46, 0.70),
                (RightHip, 0.54, 0.70),
                (LeftKnee, 0.48, 0.92),
                (RightKnee, 0.52, 0.92),
                (LeftAnkle, 0.50, 1.08),
                (RightAnkle, 0.50, 1.08),
            ],
        ),
        PoseFrame::with_fallback(
            400,
            &[
                (LeftShoulder, 0.42, 0.50),
                (RightShoulder, 0.58, 0.50),
                (LeftElbow, 0.44, 0.68),
                (RightElbow, 0.56, 0.68),
                (LeftWrist, 0.46, 0.82),
                (RightWrist, 0.54, 0.82),
                (LeftHip, 0.46, 0.72),
                (RightHip, 0.54, 0.72),
                (LeftKnee, 0.48, 0.93),
                (RightKnee, 0.52, 0.93),
                (LeftAnkle, 0.50, 1.09),
                (RightAnkle, 0.50, 1.09),
            ],
        ),
        PoseFrame::with_fallback(
            800,
            &[
                (LeftShoulder, 0.42, 0.46),
                (RightShoulder, 0.58, 0.46),
                (LeftElbow, 0.43, 0.60),
                (RightElbow, 0.57, 0.60),
                (LeftWrist, 0.45, 0.74),
                (RightWrist, 0.55, 0.74),
                (LeftHip, 0.46, 0.68),
                (RightHip, 0.54, 0.68),
                (LeftKnee, 0.48, 0.90),
                (RightKnee, 0.52, 0.90),
                (LeftAnkle, 0.50, 1.08),
                (RightAnkle, 0.50, 1.08),
            ],
        ),
    ]
}

fn barbell_row_frames() -> Vec<PoseFrame> {
    use Joint::*;
    vec![
        PoseFrame::with_fallback(
            0,
            &[
                (LeftShoulder, 0.40, 0.32),
                (RightShoulder, 0.60, 0.32),
                (LeftHip, 0.46, 0.62),
                (RightHip, 0.54, 0.62),
                (LeftKnee, 0.48, 0.92),
                (RightKnee, 0.52, 0.92),
                (LeftAnkle, 0.50, 1.08),
                (RightAnkle, 0.50, 1.08),
            ],
        ),
        PoseFrame::with_fallback(
            500,
            &[
                (LeftShoulder, 0.40, 0.34),
                (RightShoulder, 0.60, 0.34),
                (LeftHip, 0.46, 0.66),
                (RightHip, 0.54, 0.66),
                (LeftKnee, 0.48, 0.94),
                (RightKnee, 0.52, 0.94),
                (LeftAnkle, 0.50, 1.08),
                (RightAnkle, 0.50, 1.08),
            ],
        ),
    ]
}
