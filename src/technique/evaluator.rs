//! Shared shape of the movement evaluators.
//!
//! Every evaluator follows the same pipeline:
//! 1. Derive per-frame angle series from both body sides
//! 2. Reduce each series to a scalar (min, max or mean)
//! 3. Map scalars to clamped sub-scores
//! 4. Check each scalar against its own threshold
//!
//! Evaluators only supply steps 1-4 as an [`Assessment`]; averaging, rounding,
//! focus-area collection and verdict selection live in [`super::report`].

use super::geometry::average;
use super::types::{Limbs, PoseFrame, Side, Verdict};

/// A movement-specific scorer.
pub trait MovementEvaluator: Send + Sync {
    /// Score a non-empty frame sequence.
    fn assess(&self, frames: &[PoseFrame]) -> Assessment;

    /// Score bands used to pick the verdict.
    fn verdicts(&self) -> VerdictBands;
}

/// Sub-scores and metric checks produced by an evaluator.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    /// Clamped sub-scores; the report score is their rounded mean.
    pub sub_scores: Vec<f64>,
    /// Metric checks in display order.
    pub checks: Vec<MetricCheck>,
}

/// One thresholded observation with its two possible insights.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricCheck {
    pub label: &'static str,
    /// Unrounded value; rounding happens at report assembly.
    pub value: f64,
    pub unit: &'static str,
    pub passed: bool,
    pub good_insight: &'static str,
    pub warn_insight: &'static str,
}

impl MetricCheck {
    pub fn insight(&self) -> &'static str {
        if self.passed {
            self.good_insight
        } else {
            self.warn_insight
        }
    }
}

/// Descending score thresholds with a catch-all verdict.
#[derive(Debug, Clone, Copy)]
pub struct VerdictBands {
    /// `(minimum score, verdict)` pairs, highest threshold first.
    pub bands: &'static [(u8, Verdict)],
    pub otherwise: Verdict,
}

impl VerdictBands {
    pub fn pick(&self, score: u8) -> Verdict {
        self.bands
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, verdict)| *verdict)
            .unwrap_or(self.otherwise)
    }
}

/// Clamp a raw sub-score into `[min, max]`.
pub fn clamp_score(raw: f64, min: f64, max: f64) -> f64 {
    raw.max(min).min(max)
}

/// Mean of a per-side measurement over both sides of a frame.
pub fn bilateral(frame: &PoseFrame, measure: impl Fn(&Limbs) -> f64) -> f64 {
    let values: Vec<f64> = Side::BOTH
        .iter()
        .map(|&side| measure(&frame.side(side)))
        .collect();
    average(&values)
}

/// Bilateral measurement for every frame, in frame order.
pub fn series(frames: &[PoseFrame], measure: impl Fn(&Limbs) -> f64) -> Vec<f64> {
    frames
        .iter()
        .map(|frame| bilateral(frame, &measure))
        .collect()
}
