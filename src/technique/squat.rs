//! Squat evaluator.
//!
//! Scores depth (deepest knee angle), back stability (worst deviation of the
//! torso-thigh angle from a straight line) and knee tracking (left/right
//! asymmetry of the knee-over-ankle offset).

use super::evaluator::{clamp_score, series, Assessment, MetricCheck, MovementEvaluator, VerdictBands};
use super::geometry::{angle, max_of, min_of};
use super::types::{PoseFrame, Verdict};

/// Knee angle at or below which depth counts as sufficient.
const DEPTH_THRESHOLD_DEG: f64 = 105.0;
/// Minimum back stability considered solid.
const BACK_THRESHOLD_DEG: f64 = 160.0;
/// Minimum knee-tracking sub-score considered solid.
const VALGUS_THRESHOLD: f64 = 80.0;

const BANDS: VerdictBands = VerdictBands {
    bands: &[(85, Verdict::Excellent), (70, Verdict::GoodRefineDetails)],
    otherwise: Verdict::NeedsCorrection,
};

/// Squat pattern scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquatEvaluator;

impl MovementEvaluator for SquatEvaluator {
    fn assess(&self, frames: &[PoseFrame]) -> Assessment {
        let depth_angles = series(frames, |s| angle(s.hip, s.knee, s.ankle));
        let back_angles = series(frames, |s| angle(s.shoulder, s.hip, s.knee));

        let min_depth = min_of(&depth_angles).unwrap_or(0.0);
        let worst_back_deviation = back_angles
            .iter()
            .map(|back| (180.0 - back).abs())
            .reduce(f64::max)
            .unwrap_or(0.0);
        let back_stability = 180.0 - worst_back_deviation;

        let knee_offsets: Vec<f64> = frames
            .iter()
            .map(|f| {
                let left = f.left_knee.x - f.left_ankle.x;
                let right = f.right_knee.x - f.right_ankle.x;
                (left - right).abs()
            })
            .collect();
        let knee_valgus = max_of(&knee_offsets).unwrap_or(0.0);

        let depth_score = clamp_score((150.0 - min_depth) * 1.4, 50.0, 100.0);
        let back_score = clamp_score(back_stability, 60.0, 100.0);
        let valgus_score = clamp_score(100.0 - knee_valgus * 90.0, 50.0, 100.0);

        tracing::debug!(
            min_depth,
            back_stability,
            knee_valgus,
            "squat reductions over {} frames",
            frames.len()
        );

        Assessment {
            sub_scores: vec![depth_score, back_score, valgus_score],
            checks: vec![
                MetricCheck {
                    label: "Глубина приседа",
                    value: min_depth,
                    unit: "°",
                    passed: min_depth <= DEPTH_THRESHOLD_DEG,
                    good_insight: "Достаточная глубина",
                    warn_insight: "Опуститесь ниже параллели",
                },
                MetricCheck {
                    label: "Спина",
                    value: back_stability,
                    unit: "°",
                    passed: back_stability >= BACK_THRESHOLD_DEG,
                    good_insight: "Кор стабилен",
                    warn_insight: "Укрепите корпус и держите грудь расправленной",
                },
                MetricCheck {
                    label: "Колени",
                    value: valgus_score,
                    unit: "баллов",
                    passed: valgus_score >= VALGUS_THRESHOLD,
                    good_insight: "Колени двигаются ровно",
                    warn_insight: "Следите, чтобы колени не сводились внутрь",
                },
            ],
        }
    }

    fn verdicts(&self) -> VerdictBands {
        BANDS
    }
}
