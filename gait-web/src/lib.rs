//! Gait Web - gait and posture metrics for a browser pose estimator
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - Public re-exports of the engine API
//! - wasm_bindgen start hook

mod bridge;
pub mod config;
pub mod engine;
pub mod gait;
pub mod geometry;
pub mod history;
pub mod keypoints;
pub mod posture;
pub mod score;
pub mod severity;
pub mod symmetry;
pub mod timing;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    analyze_keypoints, assess_posture, configure_engine, get_gait_history, record_gait_timing,
    reset_engine,
};

pub use config::EngineConfig;
pub use engine::{FrameReport, GaitEngine};
pub use gait::{GaitMetric, GaitMetrics, GaitMetricsEvaluator, MetricValue};
pub use keypoints::{ConfidenceGate, FrameState, Keypoint, KeypointFrame};
pub use score::{score, ScoreBreakdown, ScoreCategory, MAX_TOTAL};
pub use severity::{classify, GaitRangeTables, Interval, RangeTable, SeverityLabel};
pub use timing::{GaitTiming, TimingMetric, TimingRanges};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads.
/// Installs the panic hook and routes `tracing` output to the console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    bridge::init_tracing();
    web_sys::console::log_1(&"✅ Gait engine loaded".into());
}
