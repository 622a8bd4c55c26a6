//! Posture module - normal-range checks over externally measured posture
//!
//! Re-exports only. All logic in submodules.

mod assessor;
mod ranges;

pub use assessor::{PostureAssessor, PostureCard, PostureReading, PostureSummary, RegionGroup};
pub use ranges::{BodyRegion, NormalRange, PostureMetric};
