//! Rolling gait history for charting
//!
//! One sliding window per timing metric. Windows fill independently:
//! a metric missing from a sample is simply not appended that round.

use std::collections::VecDeque;

use anyhow::ensure;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::timing::{GaitTiming, TimingMetric};

/// Default number of samples kept per metric
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Per-metric ring of recent values, oldest first
#[derive(Clone, Debug)]
pub struct GaitHistory {
    series: [VecDeque<f32>; TimingMetric::COUNT],
    capacity: usize,
}

impl GaitHistory {
    /// Create an empty history. A capacity of 0 is rejected.
    pub fn new(capacity: usize) -> anyhow::Result<Self> {
        ensure!(capacity > 0, "history_capacity must be positive");
        Ok(Self::with_capacity(capacity))
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            series: std::array::from_fn(|_| VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Append every present value, dropping the oldest past capacity
    pub fn update(&mut self, timing: &GaitTiming) {
        for (metric, value) in timing.iter() {
            let window = &mut self.series[metric.index()];
            window.push_back(value);
            while window.len() > self.capacity {
                window.pop_front();
            }
        }
    }

    /// Values for one metric in chronological order
    pub fn series(&self, metric: TimingMetric) -> impl Iterator<Item = f32> + '_ {
        self.series[metric.index()].iter().copied()
    }

    /// Values for one metric as a flat vector (for JS charting)
    pub fn to_vec(&self, metric: TimingMetric) -> Vec<f32> {
        self.series(metric).collect()
    }

    pub fn latest(&self, metric: TimingMetric) -> Option<f32> {
        self.series[metric.index()].back().copied()
    }

    pub fn len(&self, metric: TimingMetric) -> usize {
        self.series[metric.index()].len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.iter().all(VecDeque::is_empty)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Clear all windows (useful on reset)
    pub fn clear(&mut self) {
        for window in &mut self.series {
            window.clear();
        }
    }
}

impl Default for GaitHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl Serialize for GaitHistory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(TimingMetric::COUNT))?;
        for metric in TimingMetric::ALL {
            map.serialize_entry(metric.as_str(), &self.series[metric.index()])?;
        }
        map.end()
    }
}
