//! Score module - weighted composite gait score
//!
//! Re-exports only. All logic in submodules.

mod engine;

pub use engine::{score, CategoryScore, ScoreBreakdown, ScoreCategory, MAX_TOTAL};
