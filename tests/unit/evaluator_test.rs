//! Unit tests for the movement evaluators and report assembly.

use formcoach::technique::{Joint, MetricStatus, Movement, PoseFrame, TechniqueReport, Verdict};

const MOVEMENTS: [Movement; 3] = [Movement::Squat, Movement::PushUp, Movement::Hinge];

/// Deterministic pseudo-random coordinates in [0, 1).
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn random_frames(rng: &mut Lcg, count: usize) -> Vec<PoseFrame> {
    (0..count)
        .map(|i| {
            let tracked: Vec<(Joint, f64, f64)> = Joint::ALL
                .iter()
                .map(|&joint| (joint, rng.next(), rng.next()))
                .collect();
            PoseFrame::with_fallback(i as u64 * 33, &tracked)
        })
        .collect()
}

/// Both legs bent to exactly 90 degrees at the knee, torso upright.
fn right_angle_squat() -> PoseFrame {
    PoseFrame::with_fallback(
        0,
        &[
            (Joint::LeftShoulder, 0.4, 0.2),
            (Joint::RightShoulder, 0.4, 0.2),
            (Joint::LeftHip, 0.4, 0.5),
            (Joint::RightHip, 0.4, 0.5),
            (Joint::LeftKnee, 0.5, 0.5),
            (Joint::RightKnee, 0.5, 0.5),
            (Joint::LeftAnkle, 0.5, 0.6),
            (Joint::RightAnkle, 0.5, 0.6),
        ],
    )
}

fn assert_focus_matches_warnings(report: &TechniqueReport) {
    let expected: Vec<String> = report
        .metrics
        .iter()
        .filter(|m| m.status == MetricStatus::Warn)
        .map(|m| m.focus_text().to_string())
        .collect();
    assert_eq!(report.focus_areas, expected);
}

#[test]
fn test_score_bounds_on_random_input() {
    let mut rng = Lcg(7);
    for count in [1, 2, 5, 30] {
        for _ in 0..20 {
            let frames = random_frames(&mut rng, count);
            for movement in MOVEMENTS {
                let report = movement.evaluate(&frames);
                assert!(report.score <= 100);
                assert_eq!(report.frame_count, count);
            }
        }
    }
}

#[test]
fn test_score_bounds_on_degenerate_input() {
    // Every joint at the hip: all angles collapse to 0
    let frames = vec![PoseFrame::with_fallback(0, &[(Joint::LeftHip, 0.5, 0.5)])];
    for movement in MOVEMENTS {
        let report = movement.evaluate(&frames);
        assert!(report.score <= 100);
        assert!(report.metrics.iter().all(|m| m.value.is_finite()));
    }
}

#[test]
fn test_right_angle_squat_depth_is_good() {
    let report = Movement::Squat.evaluate(&[right_angle_squat()]);

    let depth = &report.metrics[0];
    assert_eq!(depth.label, "Глубина приседа");
    assert_eq!(depth.value, 90.0);
    assert_eq!(depth.status, MetricStatus::Good);

    // Upright torso over a horizontal thigh is a 90 degree back angle
    let back = &report.metrics[1];
    assert_eq!(back.value, 90.0);
    assert_eq!(back.status, MetricStatus::Warn);

    // depth 84, back 90, knees 100
    assert_eq!(report.score, 91);
    assert_eq!(report.verdict, Verdict::Excellent);
    assert_eq!(
        report.focus_areas,
        vec!["Укрепите корпус и держите грудь расправленной".to_string()]
    );
}

#[test]
fn test_focus_areas_match_warn_metrics() {
    let mut rng = Lcg(42);
    for _ in 0..30 {
        let frames = random_frames(&mut rng, 4);
        for movement in MOVEMENTS {
            assert_focus_matches_warnings(&movement.evaluate(&frames));
        }
    }
    assert_focus_matches_warnings(&Movement::Squat.evaluate(&[right_angle_squat()]));
}

#[test]
fn test_evaluation_is_idempotent() {
    let mut rng = Lcg(3);
    let frames = random_frames(&mut rng, 6);
    for movement in MOVEMENTS {
        assert_eq!(movement.evaluate(&frames), movement.evaluate(&frames));
    }
}

#[test]
fn test_metric_counts_per_movement() {
    let frames = vec![right_angle_squat()];
    assert_eq!(Movement::Squat.evaluate(&frames).metrics.len(), 3);
    assert_eq!(Movement::PushUp.evaluate(&frames).metrics.len(), 2);
    assert_eq!(Movement::Hinge.evaluate(&frames).metrics.len(), 2);
}

#[test]
fn test_empty_frames_give_placeholder() {
    for movement in MOVEMENTS {
        let report = movement.evaluate(&[]);
        assert!(report.is_placeholder());
        assert_eq!(report.score, 75);
        assert_eq!(report.focus_areas.len(), 1);
    }
}
