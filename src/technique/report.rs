//! Report assembly.

use super::evaluator::{Assessment, VerdictBands};
use super::geometry::average;
use super::types::{MetricStatus, TechniqueMetric, TechniqueReport, Verdict};

/// Score given when there is nothing to analyze.
pub const PLACEHOLDER_SCORE: u8 = 75;

/// Focus area given when there is nothing to analyze.
pub const RECORD_CLIP_HINT: &str = "Запишите короткое видео для анализа";

/// Turn an evaluator assessment into a report.
pub fn assemble(assessment: Assessment, bands: VerdictBands, frame_count: usize) -> TechniqueReport {
    let score = round_score(average(&assessment.sub_scores));

    let metrics: Vec<TechniqueMetric> = assessment
        .checks
        .iter()
        .map(|check| TechniqueMetric {
            label: check.label.to_string(),
            value: finite_or_zero(check.value.round()),
            unit: Some(check.unit.to_string()),
            status: MetricStatus::from_check(check.passed),
            insight: Some(check.insight().to_string()),
        })
        .collect();

    let focus_areas = metrics
        .iter()
        .filter(|metric| metric.status.is_warn())
        .map(|metric| metric.focus_text().to_string())
        .collect();

    TechniqueReport {
        score,
        verdict: bands.pick(score),
        focus_areas,
        metrics,
        frame_count,
    }
}

/// Report for an exercise with no motion sample.
pub fn insufficient_data() -> TechniqueReport {
    TechniqueReport {
        score: PLACEHOLDER_SCORE,
        verdict: Verdict::InsufficientData,
        focus_areas: vec![RECORD_CLIP_HINT.to_string()],
        metrics: Vec::new(),
        frame_count: 0,
    }
}

/// Metric values must stay representable in JSON.
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Round half up and pin to 0-100.
fn round_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    (raw + 0.5).floor().clamp(0.0, 100.0) as u8
}
