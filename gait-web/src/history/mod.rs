//! History module - bounded rolling buffers of gait timing values
//!
//! Re-exports only. All logic in submodules.

mod buffer;

pub use buffer::{GaitHistory, DEFAULT_HISTORY_CAPACITY};
