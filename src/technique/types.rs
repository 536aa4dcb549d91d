//! Pose and report types for technique analysis.
//!
//! Frames are stored as records with one field per tracked joint, so an
//! evaluator can never hit a missing keypoint. Open joint maps (JSON samples,
//! camera pipelines) are converted through [`PoseFrame::from_keypoints`],
//! which rejects incomplete input.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::TechniqueError;

/// A tracked body landmark in normalized image space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PosePoint {
    pub x: f64,
    pub y: f64,
    /// Depth, when the tracker provides it. Ignored by the angle math.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    /// Tracker confidence (0.0 - 1.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl PosePoint {
    /// Point without depth or confidence.
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            score: None,
        }
    }

    /// Attach a confidence score.
    pub const fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    /// A point is unavailable when the tracker reported zero confidence for it.
    pub fn is_available(&self) -> bool {
        self.score.map_or(true, |score| score > 0.0)
    }

    /// This point, or `fallback` when this one is unavailable.
    pub fn or_if_unavailable(self, fallback: PosePoint) -> PosePoint {
        if self.is_available() {
            self
        } else {
            fallback
        }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.map_or(true, f64::is_finite)
    }
}

/// The closed set of joints every frame carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Joint {
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
}

impl Joint {
    /// All joints in declaration order.
    pub const ALL: [Joint; 12] = [
        Joint::LeftShoulder,
        Joint::RightShoulder,
        Joint::LeftElbow,
        Joint::RightElbow,
        Joint::LeftWrist,
        Joint::RightWrist,
        Joint::LeftHip,
        Joint::RightHip,
        Joint::LeftKnee,
        Joint::RightKnee,
        Joint::LeftAnkle,
        Joint::RightAnkle,
    ];

    /// Key used by the JSON sample format.
    pub fn key(&self) -> &'static str {
        match self {
            Joint::LeftShoulder => "leftShoulder",
            Joint::RightShoulder => "rightShoulder",
            Joint::LeftElbow => "leftElbow",
            Joint::RightElbow => "rightElbow",
            Joint::LeftWrist => "leftWrist",
            Joint::RightWrist => "rightWrist",
            Joint::LeftHip => "leftHip",
            Joint::RightHip => "rightHip",
            Joint::LeftKnee => "leftKnee",
            Joint::RightKnee => "rightKnee",
            Joint::LeftAnkle => "leftAnkle",
            Joint::RightAnkle => "rightAnkle",
        }
    }
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Body side selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];
}

/// The six joints of one body side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limbs {
    pub shoulder: PosePoint,
    pub elbow: PosePoint,
    pub wrist: PosePoint,
    pub hip: PosePoint,
    pub knee: PosePoint,
    pub ankle: PosePoint,
}

/// One timestamped snapshot of all tracked joints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFrame", into = "RawFrame")]
pub struct PoseFrame {
    /// Monotonic capture time in milliseconds.
    pub timestamp_ms: u64,
    pub left_shoulder: PosePoint,
    pub right_shoulder: PosePoint,
    pub left_elbow: PosePoint,
    pub right_elbow: PosePoint,
    pub left_wrist: PosePoint,
    pub right_wrist: PosePoint,
    pub left_hip: PosePoint,
    pub right_hip: PosePoint,
    pub left_knee: PosePoint,
    pub right_knee: PosePoint,
    pub left_ankle: PosePoint,
    pub right_ankle: PosePoint,
}

/// Fill position for a tracked sample that has no hip either.
const DEFAULT_FILL: PosePoint = PosePoint::new(0.5, 0.7);

/// Confidence attached to points declared in a built-in sample.
const SAMPLE_CONFIDENCE: f64 = 0.9;

impl PoseFrame {
    /// Build a frame from an open joint map.
    ///
    /// Every one of the twelve joints must be present; the error lists the
    /// missing ones in declaration order.
    pub fn from_keypoints(
        timestamp_ms: u64,
        keypoints: &BTreeMap<Joint, PosePoint>,
    ) -> Result<Self, TechniqueError> {
        let missing: Vec<Joint> = Joint::ALL
            .iter()
            .copied()
            .filter(|joint| !keypoints.contains_key(joint))
            .collect();

        if !missing.is_empty() {
            return Err(TechniqueError::IncompleteFrame {
                timestamp_ms,
                missing,
            });
        }

        let get = |joint: Joint| keypoints[&joint];

        Ok(Self {
            timestamp_ms,
            left_shoulder: get(Joint::LeftShoulder),
            right_shoulder: get(Joint::RightShoulder),
            left_elbow: get(Joint::LeftElbow),
            right_elbow: get(Joint::RightElbow),
            left_wrist: get(Joint::LeftWrist),
            right_wrist: get(Joint::RightWrist),
            left_hip: get(Joint::LeftHip),
            right_hip: get(Joint::RightHip),
            left_knee: get(Joint::LeftKnee),
            right_knee: get(Joint::RightKnee),
            left_ankle: get(Joint::LeftAnkle),
            right_ankle: get(Joint::RightAnkle),
        })
    }

    /// Build a frame from the joints a recording actually tracked.
    ///
    /// Tracked points get the sample confidence. Untracked joints copy the
    /// left hip, or a fixed mid-frame position when the hip is untracked too.
    pub fn with_fallback(timestamp_ms: u64, tracked: &[(Joint, f64, f64)]) -> Self {
        let keypoints: BTreeMap<Joint, PosePoint> = tracked
            .iter()
            .map(|&(joint, x, y)| (joint, PosePoint::new(x, y).with_score(SAMPLE_CONFIDENCE)))
            .collect();
        let fill = keypoints
            .get(&Joint::LeftHip)
            .copied()
            .unwrap_or(DEFAULT_FILL);

        let point = |joint: Joint| keypoints.get(&joint).copied().unwrap_or(fill);

        Self {
            timestamp_ms,
            left_shoulder: point(Joint::LeftShoulder),
            right_shoulder: point(Joint::RightShoulder),
            left_elbow: point(Joint::LeftElbow),
            right_elbow: point(Joint::RightElbow),
            left_wrist: point(Joint::LeftWrist),
            right_wrist: point(Joint::RightWrist),
            left_hip: point(Joint::LeftHip),
            right_hip: point(Joint::RightHip),
            left_knee: point(Joint::LeftKnee),
            right_knee: point(Joint::RightKnee),
            left_ankle: point(Joint::LeftAnkle),
            right_ankle: point(Joint::RightAnkle),
        }
    }

    /// Position of a single joint.
    pub fn point(&self, joint: Joint) -> PosePoint {
        match joint {
            Joint::LeftShoulder => self.left_shoulder,
            Joint::RightShoulder => self.right_shoulder,
            Joint::LeftElbow => self.left_elbow,
            Joint::RightElbow => self.right_elbow,
            Joint::LeftWrist => self.left_wrist,
            Joint::RightWrist => self.right_wrist,
            Joint::LeftHip => self.left_hip,
            Joint::RightHip => self.right_hip,
            Joint::LeftKnee => self.left_knee,
            Joint::RightKnee => self.right_knee,
            Joint::LeftAnkle => self.left_ankle,
            Joint::RightAnkle => self.right_ankle,
        }
    }

    /// All joints of one side.
    pub fn side(&self, side: Side) -> Limbs {
        match side {
            Side::Left => Limbs {
                shoulder: self.left_shoulder,
                elbow: self.left_elbow,
                wrist: self.left_wrist,
                hip: self.left_hip,
                knee: self.left_knee,
                ankle: self.left_ankle,
            },
            Side::Right => Limbs {
                shoulder: self.right_shoulder,
                elbow: self.right_elbow,
                wrist: self.right_wrist,
                hip: self.right_hip,
                knee: self.right_knee,
                ankle: self.right_ankle,
            },
        }
    }

    /// First joint with a NaN or infinite coordinate, if any.
    pub fn first_non_finite(&self) -> Option<Joint> {
        Joint::ALL
            .iter()
            .copied()
            .find(|&joint| !self.point(joint).is_finite())
    }
}

/// Wire shape of a frame: `{ "timestamp": ms, "keypoints": { "leftHip": {..}, .. } }`.
#[derive(Serialize, Deserialize)]
struct RawFrame {
    timestamp: u64,
    keypoints: BTreeMap<Joint, PosePoint>,
}

impl TryFrom<RawFrame> for PoseFrame {
    type Error = TechniqueError;

    fn try_from(raw: RawFrame) -> Result<Self, Self::Error> {
        PoseFrame::from_keypoints(raw.timestamp, &raw.keypoints)
    }
}

impl From<PoseFrame> for RawFrame {
    fn from(frame: PoseFrame) -> Self {
        RawFrame {
            timestamp: frame.timestamp_ms,
            keypoints: Joint::ALL
                .iter()
                .map(|&joint| (joint, frame.point(joint)))
                .collect(),
        }
    }
}

/// Outcome of a single metric check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricStatus {
    Good,
    Warn,
}

impl MetricStatus {
    pub fn from_check(passed: bool) -> Self {
        if passed {
            MetricStatus::Good
        } else {
            MetricStatus::Warn
        }
    }

    pub fn is_warn(&self) -> bool {
        matches!(self, MetricStatus::Warn)
    }
}

impl fmt::Display for MetricStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricStatus::Good => write!(f, "good"),
            MetricStatus::Warn => write!(f, "warn"),
        }
    }
}

/// One named observation in a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechniqueMetric {
    pub label: String,
    /// Rounded to the nearest whole unit.
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub status: MetricStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insight: Option<String>,
}

impl TechniqueMetric {
    /// Text shown as a focus area when this metric is flagged.
    pub fn focus_text(&self) -> &str {
        self.insight.as_deref().unwrap_or(&self.label)
    }
}

/// Overall verdict attached to a report.
///
/// Serialized as the user-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Отличная техника")]
    Excellent,
    #[serde(rename = "Хорошо, доработайте детали")]
    GoodRefineDetails,
    #[serde(rename = "Нужна коррекция")]
    NeedsCorrection,
    #[serde(rename = "Чистые отжимания")]
    CleanPushUps,
    #[serde(rename = "Есть куда расти")]
    RoomToGrow,
    #[serde(rename = "Сильный корпус")]
    StrongCore,
    #[serde(rename = "Сфокусируйтесь на наклоне таза")]
    FocusOnPelvisTilt,
    #[serde(rename = "Недостаточно данных — ориентируйтесь на базовые подсказки")]
    InsufficientData,
}

impl Verdict {
    pub fn text(&self) -> &'static str {
        match self {
            Verdict::Excellent => "Отличная техника",
            Verdict::GoodRefineDetails => "Хорошо, доработайте детали",
            Verdict::NeedsCorrection => "Нужна коррекция",
            Verdict::CleanPushUps => "Чистые отжимания",
            Verdict::RoomToGrow => "Есть куда расти",
            Verdict::StrongCore => "Сильный корпус",
            Verdict::FocusOnPelvisTilt => "Сфокусируйтесь на наклоне таза",
            Verdict::InsufficientData => {
                "Недостаточно данных — ориентируйтесь на базовые подсказки"
            }
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// Result of analyzing one movement sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechniqueReport {
    /// Overall quality, 0-100.
    pub score: u8,
    pub verdict: Verdict,
    /// Insights of every flagged metric, in metric order.
    pub focus_areas: Vec<String>,
    pub metrics: Vec<TechniqueMetric>,
    /// Frames analyzed; zero when no sample was available.
    pub frame_count: usize,
}

impl TechniqueReport {
    /// Metrics in warn state.
    pub fn warnings(&self) -> impl Iterator<Item = &TechniqueMetric> {
        self.metrics.iter().filter(|metric| metric.status.is_warn())
    }

    /// True when this is the no-sample placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.frame_count == 0
    }
}
