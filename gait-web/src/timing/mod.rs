//! Timing module - step-cycle durations and their normal windows
//!
//! Re-exports only. All logic in submodules.

mod ranges;
mod sample;

pub use ranges::TimingRanges;
pub use sample::{GaitTiming, TimingMetric};
