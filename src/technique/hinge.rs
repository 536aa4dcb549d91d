//! Hip-hinge evaluator (deadlift and row pattern).
//!
//! Also the default for exercises no other rule claims.

use super::evaluator::{clamp_score, series, Assessment, MetricCheck, MovementEvaluator, VerdictBands};
use super::geometry::{angle, average};
use super::types::{PoseFrame, Verdict};

/// Mean torso-thigh angle at or below which the hinge counts as deep enough.
const HIP_THRESHOLD_DEG: f64 = 140.0;
/// Mean knee angle at or above which the shins count as stable.
const SHIN_THRESHOLD_DEG: f64 = 165.0;

const BANDS: VerdictBands = VerdictBands {
    bands: &[(85, Verdict::StrongCore)],
    otherwise: Verdict::FocusOnPelvisTilt,
};

/// Hinge pattern scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct HingeEvaluator;

impl MovementEvaluator for HingeEvaluator {
    fn assess(&self, frames: &[PoseFrame]) -> Assessment {
        let hip_angles = series(frames, |s| angle(s.shoulder, s.hip, s.knee));
        let shin_angles = series(frames, |s| angle(s.hip, s.knee, s.ankle));

        let mean_hip = average(&hip_angles);
        let mean_shin = average(&shin_angles);

        let hinge_score = clamp_score((200.0 - mean_hip) * 1.2, 60.0, 100.0);
        let shin_score = clamp_score(110.0 - (mean_shin - 170.0).abs(), 55.0, 100.0);

        tracing::debug!(mean_hip, mean_shin, "hinge reductions over {} frames", frames.len());

        Assessment {
            sub_scores: vec![hinge_score, shin_score],
            checks: vec![
                MetricCheck {
                    label: "Наклон таза",
                    value: mean_hip,
                    unit: "°",
                    passed: mean_hip <= HIP_THRESHOLD_DEG,
                    good_insight: "Хороший хип-хиндж",
                    warn_insight: "Отводите таз назад сильнее",
                },
                MetricCheck {
                    label: "Колени",
                    value: mean_shin,
                    unit: "°",
                    passed: mean_shin >= SHIN_THRESHOLD_DEG,
                    good_insight: "Голень стабильна",
                    warn_insight: "Не смещайте колени вперёд",
                },
            ],
        }
    }

    fn verdicts(&self) -> VerdictBands {
        BANDS
    }
}
