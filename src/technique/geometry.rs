//! Joint-angle geometry.

use super::types::PosePoint;

/// Interior angle at `b` between rays `b→a` and `b→c`, in degrees.
///
/// Works on the 2D projection; `z` is ignored. A zero-length ray yields 0.
pub fn angle(a: PosePoint, b: PosePoint, c: PosePoint) -> f64 {
    let ab = (a.x - b.x, a.y - b.y);
    let cb = (c.x - b.x, c.y - b.y);

    let dot = ab.0 * cb.0 + ab.1 * cb.1;
    let mag_ab = (ab.0 * ab.0 + ab.1 * ab.1).sqrt();
    let mag_cb = (cb.0 * cb.0 + cb.1 * cb.1).sqrt();

    if mag_ab == 0.0 || mag_cb == 0.0 {
        return 0.0;
    }

    let cosine = (dot / (mag_ab * mag_cb)).clamp(-1.0, 1.0);
    cosine.acos().to_degrees()
}

/// Arithmetic mean, 0 for an empty slice.
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Largest value, `None` for an empty slice.
pub fn max_of(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

/// Smallest value, `None` for an empty slice.
pub fn min_of(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}
