//! Gait engine bridge
//!
//! Receives keypoint frames and timing samples from JavaScript, runs them
//! through the engine held for this WASM instance and hands back JSON.

use std::cell::RefCell;

use anyhow::{Context, Result};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::EngineConfig;
use crate::engine::GaitEngine;
use crate::keypoints::KeypointFrame;
use crate::symmetry::GaitSummary;
use crate::timing::GaitTiming;

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static ENGINE: RefCell<GaitEngine> = RefCell::new(GaitEngine::default());
}

/// Timing sample plus the judgment made from it
#[derive(Serialize)]
struct TimingReport<'a> {
    timing: &'a GaitTiming,
    summary: GaitSummary,
    lines: Vec<String>,
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Replace the engine with one built from a JSON config.
/// Missing fields fall back to defaults; carried state and history are dropped.
#[wasm_bindgen]
pub fn configure_engine(json: &str) -> Result<(), JsValue> {
    let engine = EngineConfig::from_json(json)
        .and_then(GaitEngine::new)
        .map_err(|err| warn(&err))?;

    ENGINE.with(|cell| *cell.borrow_mut() = engine);
    web_sys::console::log_1(&"✅ Gait engine configured".into());
    Ok(())
}

/// Called from JavaScript with flat Float32Array of 51 values
/// (17 keypoints × 3 values: x, y, score). Returns the frame report as JSON.
#[wasm_bindgen]
pub fn analyze_keypoints(data: &[f32]) -> Result<String, JsValue> {
    ENGINE
        .with(|cell| analyze(&mut cell.borrow_mut(), data))
        .map_err(|err| warn(&err))
}

/// Push one timing sample (seconds). Negative or NaN arguments mean
/// "not measured". Returns the balance/cadence summary as JSON.
#[wasm_bindgen]
pub fn record_gait_timing(
    left_leg_lift: f32,
    right_leg_lift: f32,
    double_support: f32,
    step_time: f32,
    swing_time: f32,
    stance_time: f32,
) -> Result<String, JsValue> {
    let timing = timing_from_args([
        left_leg_lift,
        right_leg_lift,
        double_support,
        step_time,
        swing_time,
        stance_time,
    ]);

    ENGINE
        .with(|cell| record(&mut cell.borrow_mut(), &timing))
        .map_err(|err| warn(&err))
}

/// Rolling timing history as JSON, oldest value first per metric
#[wasm_bindgen]
pub fn get_gait_history() -> Result<String, JsValue> {
    ENGINE
        .with(|cell| serde_json::to_string(cell.borrow().history()))
        .context("failed to serialize gait history")
        .map_err(|err| warn(&err))
}

/// Forget carried frame state and timing history
#[wasm_bindgen]
pub fn reset_engine() {
    ENGINE.with(|cell| cell.borrow_mut().reset());
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

fn analyze(engine: &mut GaitEngine, data: &[f32]) -> Result<String> {
    let frame = KeypointFrame::from_flat(data).context("failed to read keypoint frame")?;
    let report = engine.process(&frame);
    serde_json::to_string(&report).context("failed to serialize frame report")
}

fn record(engine: &mut GaitEngine, timing: &GaitTiming) -> Result<String> {
    let summary = engine.record_timing(timing);
    let report = TimingReport {
        timing,
        lines: summary.lines(),
        summary,
    };
    serde_json::to_string(&report).context("failed to serialize timing report")
}

/// Args in `TimingMetric::ALL` order
fn timing_from_args(args: [f32; 6]) -> GaitTiming {
    let [left, right, double_support, step, swing, stance] = args.map(measured);
    GaitTiming {
        left_leg_lift: left,
        right_leg_lift: right,
        double_support,
        step_time: step,
        swing_time: swing,
        stance_time: stance,
    }
}

fn measured(value: f32) -> Option<f32> {
    (value >= 0.0).then_some(value)
}

fn warn(err: &anyhow::Error) -> JsValue {
    let message = format!("{err:#}");
    web_sys::console::warn_1(&message.as_str().into());
    JsValue::from_str(&message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypoints::{KEYPOINT_COUNT, VALUES_PER_KEYPOINT};
    use crate::timing::TimingMetric;

    fn standing_frame() -> Vec<f32> {
        let mut data = vec![0.0; KEYPOINT_COUNT * VALUES_PER_KEYPOINT];
        let mut put = |joint: usize, x: f32, y: f32| {
            data[joint * 3] = x;
            data[joint * 3 + 1] = y;
            data[joint * 3 + 2] = 0.9;
        };
        put(crate::keypoints::LEFT_ANKLE, 100.0, 500.0);
        put(crate::keypoints::RIGHT_ANKLE, 140.0, 500.0);
        data
    }

    #[test]
    fn test_measured_drops_negative_and_nan() {
        assert_eq!(measured(0.4), Some(0.4));
        assert_eq!(measured(0.0), Some(0.0));
        assert_eq!(measured(-1.0), None);
        assert_eq!(measured(f32::NAN), None);
    }

    #[test]
    fn test_timing_from_args_order() {
        let timing = timing_from_args([0.3, 0.4, -1.0, 1.0, 0.4, f32::NAN]);
        assert_eq!(timing.get(TimingMetric::LeftLegLift), Some(0.3));
        assert_eq!(timing.get(TimingMetric::RightLegLift), Some(0.4));
        assert_eq!(timing.get(TimingMetric::DoubleSupport), None);
        assert_eq!(timing.get(TimingMetric::StepTime), Some(1.0));
        assert_eq!(timing.get(TimingMetric::SwingTime), Some(0.4));
        assert_eq!(timing.get(TimingMetric::StanceTime), None);
    }

    #[test]
    fn test_analyze_returns_report_json() {
        let mut engine = GaitEngine::default();
        let json = analyze(&mut engine, &standing_frame()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["frame_index"], 0);
        assert_eq!(value["metrics"]["step_width"]["label"], "severe");
        assert_eq!(value["score"]["max_total"], 68.0);
    }

    #[test]
    fn test_analyze_rejects_short_slice() {
        let mut engine = GaitEngine::default();
        let err = analyze(&mut engine, &[0.0; 50]).unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "failed to read keypoint frame: invalid keypoint data length: 50 (expected 51)"
        );
        assert_eq!(engine.frame_count(), 0);
    }

    #[test]
    fn test_record_includes_summary_lines() {
        let mut engine = GaitEngine::default();
        let timing = timing_from_args([0.5, 0.5, 0.1, 1.0, 0.4, 0.6]);
        let json = record(&mut engine, &timing).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["lines"].as_array().is_some_and(|l| !l.is_empty()));
        assert_eq!(engine.history().len(TimingMetric::StepTime), 1);
    }
}
