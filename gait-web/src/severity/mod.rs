//! Severity module - tiered range tables and the classifier over them
//!
//! Re-exports only. All logic in submodules.

mod classifier;
mod label;
mod ranges;

pub use classifier::classify;
pub use label::SeverityLabel;
pub use ranges::{GaitRangeTables, Interval, RangeTable};
