//! End-to-end runs through the public engine API

use gait_web::history::GaitHistory;
use gait_web::keypoints::{
    LEFT_ANKLE, LEFT_HIP, LEFT_KNEE, RIGHT_ANKLE, RIGHT_HIP, RIGHT_KNEE,
};
use gait_web::posture::{PostureAssessor, PostureMetric, PostureReading};
use gait_web::symmetry::BalanceBand;
use gait_web::{
    EngineConfig, GaitEngine, GaitMetric, GaitTiming, KeypointFrame, ScoreCategory,
    SeverityLabel, TimingMetric,
};

/// Flat `[x, y, score] × 17` buffer as the JS side sends it
fn flat(joints: &[(usize, f32, f32, f32)]) -> Vec<f32> {
    let mut data = vec![0.0; 51];
    for &(joint, x, y, conf) in joints {
        data[joint * 3..joint * 3 + 3].copy_from_slice(&[x, y, conf]);
    }
    data
}

fn frame(joints: &[(usize, f32, f32, f32)]) -> KeypointFrame {
    KeypointFrame::from_flat(&flat(joints)).unwrap()
}

#[test]
fn ankles_only_frame_scores_step_width() {
    let mut engine = GaitEngine::default();
    let report = engine.process(&frame(&[
        (LEFT_ANKLE, 100.0, 500.0, 0.9),
        (RIGHT_ANKLE, 140.0, 500.0, 0.9),
    ]));

    let width = report.metrics.get(GaitMetric::StepWidth).unwrap();
    assert_eq!(width.value, 40.0);
    assert_eq!(width.label, SeverityLabel::Severe);
    assert_eq!(report.score.points(ScoreCategory::StepWidth), Some(0.0));
    assert_eq!(report.score.max_total, 68.0);
}

#[test]
fn level_hips_are_normal_pelvic_rotation() {
    let mut engine = GaitEngine::default();
    let report = engine.process(&frame(&[
        (LEFT_HIP, 100.0, 400.0, 0.9),
        (RIGHT_HIP, 140.0, 400.0, 0.9),
    ]));

    let pelvis = report.metrics.get(GaitMetric::PelvicRotation).unwrap();
    assert_eq!(pelvis.value, 0.0);
    assert_eq!(pelvis.label, SeverityLabel::Normal);
    assert_eq!(report.score.total, 5.0);
}

#[test]
fn straight_leg_is_normal_knee() {
    let mut engine = GaitEngine::default();
    let report = engine.process(&frame(&[
        (LEFT_HIP, 100.0, 300.0, 0.9),
        (LEFT_KNEE, 100.0, 200.0, 0.9),
        (LEFT_ANKLE, 100.0, 100.0, 0.9),
    ]));

    let knee = report.metrics.get(GaitMetric::LeftKneeAngle).unwrap();
    assert!((knee.value - 180.0).abs() < 1e-3);
    assert_eq!(knee.label, SeverityLabel::Normal);
    assert!(!report.metrics.contains(GaitMetric::RightKneeAngle));
    // One leg only: the per-leg category is not scored
    assert_eq!(report.score.points(ScoreCategory::KneeAngle), None);
}

#[test]
fn equal_leg_lift_is_balanced() {
    let mut engine = GaitEngine::default();
    let summary = engine.record_timing(&GaitTiming {
        left_leg_lift: Some(0.3),
        right_leg_lift: Some(0.3),
        ..GaitTiming::default()
    });

    assert_eq!(summary.balance.index, 50.0);
    assert_eq!(summary.balance.deviation, 0.0);
    assert_eq!(summary.balance.band, BalanceBand::Good);
    assert!(summary.cadence.is_none());
}

#[test]
fn history_keeps_latest_values() {
    let mut history = GaitHistory::new(3).unwrap();
    for v in [1.0, 2.0, 3.0, 4.0] {
        history.update(&GaitTiming {
            swing_time: Some(v),
            ..GaitTiming::default()
        });
    }
    assert_eq!(history.to_vec(TimingMetric::SwingTime), vec![2.0, 3.0, 4.0]);
    assert!(history.to_vec(TimingMetric::StepTime).is_empty());
}

#[test]
fn walking_sequence_threads_state() {
    let legs = |left_ankle_y: f32, right_ankle_y: f32| {
        frame(&[
            (LEFT_HIP, 100.0, 300.0, 0.9),
            (RIGHT_HIP, 140.0, 300.0, 0.9),
            (LEFT_KNEE, 100.0, 400.0, 0.9),
            (RIGHT_KNEE, 140.0, 400.0, 0.9),
            (LEFT_ANKLE, 100.0, left_ankle_y, 0.9),
            (RIGHT_ANKLE, 140.0, right_ankle_y, 0.9),
        ])
    };

    let mut engine = GaitEngine::default();
    let first = engine.process(&legs(500.0, 500.0));
    assert!(!first.metrics.contains(GaitMetric::LeftStepLength));

    let second = engine.process(&legs(440.0, 560.0));
    let left = second.metrics.get(GaitMetric::LeftStepLength).unwrap();
    let right = second.metrics.get(GaitMetric::RightStepLength).unwrap();
    assert_eq!(left.value, 60.0);
    assert_eq!(right.value, 60.0);
    assert_eq!(left.label, right.label);
    assert_eq!(second.frame_index, 1);
}

#[test]
fn low_confidence_joints_are_omitted() {
    let mut engine = GaitEngine::default();
    let report = engine.process(&frame(&[
        (LEFT_ANKLE, 100.0, 500.0, 0.3),
        (RIGHT_ANKLE, 140.0, 500.0, 0.9),
        (LEFT_HIP, 100.0, 400.0, 0.9),
        (RIGHT_HIP, 140.0, 400.0, 0.9),
    ]));

    assert!(!report.metrics.contains(GaitMetric::StepWidth));
    assert!(!report.metrics.contains(GaitMetric::WeightShift));
    assert!(report.metrics.contains(GaitMetric::PelvicRotation));
    assert_eq!(engine.previous_state().and_then(|s| s.left_ankle_y), None);
}

#[test]
fn configured_gate_changes_what_passes() {
    let config = EngineConfig::from_json(r#"{ "confidence_gate": 0.95 }"#).unwrap();
    let mut engine = GaitEngine::new(config).unwrap();
    let report = engine.process(&frame(&[
        (LEFT_ANKLE, 100.0, 500.0, 0.9),
        (RIGHT_ANKLE, 140.0, 500.0, 0.9),
    ]));
    assert!(report.metrics.is_empty());
    assert_eq!(report.score.total, 0.0);
}

#[test]
fn frame_report_serializes_for_js() {
    let mut engine = GaitEngine::default();
    let report = engine.process(&frame(&[
        (LEFT_HIP, 100.0, 400.0, 0.9),
        (RIGHT_HIP, 140.0, 400.0, 0.9),
    ]));

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["metrics"]["pelvic_rotation"]["label"], "normal");
    assert!(value["metrics"].get("step_width").is_none());
}

#[test]
fn posture_reading_summary() {
    let reading: PostureReading = [
        (PostureMetric::HeadForwardTilt, 2.0),
        (PostureMetric::BackAngle, 42.0),
        (PostureMetric::FootProgression, 4.0),
    ]
    .into_iter()
    .collect();

    let summary = PostureAssessor::default().summarize(&reading);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.normal, 2);
    assert_eq!(summary.abnormal, vec![PostureMetric::BackAngle]);
    assert!(summary.headline.contains("Back angle"));
}
