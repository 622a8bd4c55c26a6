//! Gait engine - per-stream analysis loop state
//!
//! Owns the evaluator, the previous frame's state and the timing history.
//! One engine per keypoint stream; nothing here is shared.

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::gait::{GaitMetrics, GaitMetricsEvaluator};
use crate::history::GaitHistory;
use crate::keypoints::{ConfidenceGate, FrameState, KeypointFrame};
use crate::score::{score, ScoreBreakdown};
use crate::symmetry::{summarize, GaitSummary};
use crate::timing::{GaitTiming, TimingRanges};

/// Everything the overlay needs for one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameReport {
    pub frame_index: u64,
    pub metrics: GaitMetrics,
    pub score: ScoreBreakdown,
}

pub struct GaitEngine {
    evaluator: GaitMetricsEvaluator,
    timing_ranges: TimingRanges,
    previous: Option<FrameState>,
    history: GaitHistory,
    frame_count: u64,
}

impl GaitEngine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        if let Err(err) = config.validate() {
            warn!(error = %err, "rejected gait engine config");
            return Err(err);
        }
        let history = GaitHistory::new(config.history_capacity)?;
        info!(
            gate = config.confidence_gate,
            history_capacity = config.history_capacity,
            "gait engine configured"
        );
        Ok(Self::assemble(config, history))
    }

    fn assemble(config: EngineConfig, history: GaitHistory) -> Self {
        Self {
            evaluator: GaitMetricsEvaluator::new(
                ConfidenceGate::new(config.confidence_gate),
                config.ranges,
            ),
            timing_ranges: config.timing_ranges,
            previous: None,
            history,
            frame_count: 0,
        }
    }

    /// Evaluate and score one frame, carrying its knee/ankle state forward
    pub fn process(&mut self, frame: &KeypointFrame) -> FrameReport {
        let (metrics, state) = self.evaluator.evaluate(frame, self.previous.as_ref());
        self.previous = Some(state);

        let score = score(&metrics);
        let frame_index = self.frame_count;
        self.frame_count += 1;

        debug!(
            frame = frame_index,
            metrics = metrics.len(),
            total = score.total,
            "frame processed"
        );

        FrameReport {
            frame_index,
            metrics,
            score,
        }
    }

    /// Record one timing sample and judge balance and cadence from it
    pub fn record_timing(&mut self, timing: &GaitTiming) -> GaitSummary {
        self.history.update(timing);
        summarize(timing, &self.timing_ranges)
    }

    pub fn history(&self) -> &GaitHistory {
        &self.history
    }

    pub fn previous_state(&self) -> Option<&FrameState> {
        self.previous.as_ref()
    }

    pub fn timing_ranges(&self) -> &TimingRanges {
        &self.timing_ranges
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Forget carried state and history (new video / new subject)
    pub fn reset(&mut self) {
        self.previous = None;
        self.history.clear();
        self.frame_count = 0;
        info!("gait engine reset");
    }
}

impl Default for GaitEngine {
    fn default() -> Self {
        Self::assemble(EngineConfig::default(), GaitHistory::default())
    }
}
