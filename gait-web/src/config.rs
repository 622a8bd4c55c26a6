//! Engine configuration - gate, history size and every range table
//!
//! Built once per engine and never shared, so separate camera streams can
//! run with separate tables.

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::history::{GaitHistory, DEFAULT_HISTORY_CAPACITY};
use crate::keypoints::DEFAULT_CONFIDENCE_GATE;
use crate::severity::GaitRangeTables;
use crate::timing::TimingRanges;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Joint confidence must be strictly above this
    pub confidence_gate: f32,
    /// Samples kept per timing metric
    pub history_capacity: usize,
    pub ranges: GaitRangeTables,
    pub timing_ranges: TimingRanges,
}

impl EngineConfig {
    /// Parse a JSON config; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig =
            serde_json::from_str(json).context("failed to parse engine config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            (0.0..=1.0).contains(&self.confidence_gate),
            "confidence_gate must be within [0, 1], got {}",
            self.confidence_gate
        );
        GaitHistory::new(self.history_capacity)?;
        self.ranges.validate()?;
        self.timing_ranges.validate()?;
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            confidence_gate: DEFAULT_CONFIDENCE_GATE,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            ranges: GaitRangeTables::default(),
            timing_ranges: TimingRanges::default(),
        }
    }
}
