//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod console_log;
mod engine_bridge;
mod posture_bridge;

pub use console_log::init_tracing;
pub use engine_bridge::{
    analyze_keypoints, configure_engine, get_gait_history, record_gait_timing, reset_engine,
};
pub use posture_bridge::assess_posture;
