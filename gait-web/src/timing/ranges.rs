//! Normal ranges for step-cycle durations

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::sample::TimingMetric;
use crate::severity::Interval;

/// Normal duration window per timing metric, seconds
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingRanges {
    pub left_leg_lift: Interval,
    pub right_leg_lift: Interval,
    pub double_support: Interval,
    pub step_time: Interval,
    pub swing_time: Interval,
    pub stance_time: Interval,
}

impl TimingRanges {
    pub fn get(&self, metric: TimingMetric) -> Interval {
        match metric {
            TimingMetric::LeftLegLift => self.left_leg_lift,
            TimingMetric::RightLegLift => self.right_leg_lift,
            TimingMetric::DoubleSupport => self.double_support,
            TimingMetric::StepTime => self.step_time,
            TimingMetric::SwingTime => self.swing_time,
            TimingMetric::StanceTime => self.stance_time,
        }
    }

    /// Whether a measured duration sits inside its normal window
    pub fn is_normal(&self, metric: TimingMetric, seconds: f32) -> bool {
        self.get(metric).contains(seconds)
    }

    pub fn validate(&self) -> Result<()> {
        for metric in TimingMetric::ALL {
            let range = self.get(metric);
            anyhow::ensure!(
                range.lo <= range.hi,
                "timing range {}: lower bound {} exceeds upper bound {}",
                metric.as_str(),
                range.lo,
                range.hi
            );
        }
        Ok(())
    }
}

impl Default for TimingRanges {
    fn default() -> Self {
        Self {
            left_leg_lift: Interval::new(0.25, 0.6),
            right_leg_lift: Interval::new(0.25, 0.6),
            double_support: Interval::new(0.05, 0.25),
            step_time: Interval::new(0.8, 1.2),
            swing_time: Interval::new(0.25, 0.55),
            stance_time: Interval::new(0.5, 0.8),
        }
    }
}
