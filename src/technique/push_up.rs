//! Push-up evaluator.

use super::evaluator::{clamp_score, series, Assessment, MetricCheck, MovementEvaluator, VerdictBands};
use super::geometry::{angle, average, max_of};
use super::types::{PoseFrame, Verdict};

/// Peak elbow extension needed for a full-range rep.
const DEPTH_THRESHOLD_DEG: f64 = 100.0;
/// Allowed average sag or pike of the shoulder-hip-ankle line.
const BODY_LINE_TOLERANCE_DEG: f64 = 12.0;

const BANDS: VerdictBands = VerdictBands {
    bands: &[(85, Verdict::CleanPushUps)],
    otherwise: Verdict::RoomToGrow,
};

/// Push-up pattern scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PushUpEvaluator;

impl MovementEvaluator for PushUpEvaluator {
    fn assess(&self, frames: &[PoseFrame]) -> Assessment {
        // An untracked wrist is replaced by the ankle of the same side.
        let elbow_angles = series(frames, |s| {
            angle(s.shoulder, s.elbow, s.wrist.or_if_unavailable(s.ankle))
        });
        let body_line = series(frames, |s| angle(s.shoulder, s.hip, s.ankle));

        let max_elbow = max_of(&elbow_angles).unwrap_or(0.0);
        let mean_line = average(&body_line);
        let line_deviation = (180.0 - mean_line).abs();

        let depth_score = clamp_score((max_elbow - 60.0) * 0.8, 40.0, 100.0);
        let body_line_score = clamp_score(200.0 - line_deviation * 2.0, 50.0, 100.0);

        tracing::debug!(max_elbow, mean_line, "push-up reductions over {} frames", frames.len());

        Assessment {
            sub_scores: vec![depth_score, body_line_score],
            checks: vec![
                MetricCheck {
                    label: "Глубина",
                    value: max_elbow,
                    unit: "°",
                    passed: max_elbow >= DEPTH_THRESHOLD_DEG,
                    good_insight: "Отличная амплитуда",
                    warn_insight: "Опускайтесь ниже, сохраняя контроль",
                },
                MetricCheck {
                    label: "Линия корпуса",
                    value: mean_line,
                    unit: "°",
                    passed: line_deviation <= BODY_LINE_TOLERANCE_DEG,
                    good_insight: "Корпус ровный",
                    warn_insight: "Избегайте прогиба в пояснице",
                },
            ],
        }
    }

    fn verdicts(&self) -> VerdictBands {
        BANDS
    }
}
