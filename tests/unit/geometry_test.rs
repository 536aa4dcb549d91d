//! Unit tests for joint angle geometry.

use formcoach::technique::geometry::{angle, average, max_of, min_of};
use formcoach::technique::PosePoint;

fn p(x: f64, y: f64) -> PosePoint {
    PosePoint::new(x, y)
}

#[test]
fn test_straight_line_is_180() {
    let a = angle(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0));
    assert!((a - 180.0).abs() < 1e-9);
}

#[test]
fn test_right_angle() {
    let a = angle(p(0.4, 0.5), p(0.5, 0.5), p(0.5, 0.6));
    assert!((a - 90.0).abs() < 1e-9);
}

#[test]
fn test_angle_is_symmetric() {
    let triples = [
        (p(0.1, 0.2), p(0.5, 0.5), p(0.9, 0.1)),
        (p(0.45, 0.35), p(0.5, 0.58), p(0.5, 0.82)),
        (p(-3.0, 7.0), p(2.0, -1.0), p(4.0, 4.0)),
    ];
    for (a, b, c) in triples {
        assert!((angle(a, b, c) - angle(c, b, a)).abs() < 1e-9);
    }
}

#[test]
fn test_zero_length_ray_is_zero() {
    assert_eq!(angle(p(1.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)), 0.0);
    assert_eq!(angle(p(0.0, 0.0), p(1.0, 0.0), p(1.0, 0.0)), 0.0);
    assert_eq!(angle(p(0.5, 0.5), p(0.5, 0.5), p(0.5, 0.5)), 0.0);
}

#[test]
fn test_folded_back_is_zero_degrees() {
    // Both rays point the same way; rounding must not push acos out of range
    let a = angle(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 0.0));
    assert!(a.abs() < 1e-6);
    assert!(!a.is_nan());
}

#[test]
fn test_angle_within_range() {
    let points = [p(0.0, 0.0), p(0.3, 0.9), p(-0.2, 0.4), p(1e6, -1e6), p(1e-9, 1e-9)];
    for a in points {
        for b in points {
            for c in points {
                let value = angle(a, b, c);
                assert!(
                    (0.0..=180.0 + 1e-9).contains(&value),
                    "angle {} out of range",
                    value
                );
            }
        }
    }
}

#[test]
fn test_average() {
    assert_eq!(average(&[]), 0.0);
    assert_eq!(average(&[4.0, 6.0]), 5.0);
    assert_eq!(average(&[170.0]), 170.0);
}

#[test]
fn test_extremes() {
    assert_eq!(max_of(&[]), None);
    assert_eq!(min_of(&[]), None);
    assert_eq!(max_of(&[3.0, 9.0, 1.0]), Some(9.0));
    assert_eq!(min_of(&[3.0, 9.0, 1.0]), Some(1.0));
}
