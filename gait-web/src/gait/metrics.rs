//! Gait metric kinds and the per-frame metric set

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::severity::SeverityLabel;

/// Every quantity the evaluator can produce for a frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GaitMetric {
    /// Ankle-to-ankle distance
    StepWidth,
    /// Vertical left-ankle travel since the previous frame
    LeftStepLength,
    RightStepLength,
    /// |left step − right step|
    StepSymmetry,
    /// Hip line angle against the horizontal, signed degrees
    PelvicRotation,
    /// Hip-knee-ankle interior angle
    LeftKneeAngle,
    RightKneeAngle,
    /// Knee→ankle shank angle against the horizontal
    LeftAnkleAngle,
    RightAnkleAngle,
    /// Hip-center to ankle-center offset, % of ankle spacing
    WeightShift,
}

impl GaitMetric {
    pub const COUNT: usize = 10;

    pub const ALL: [GaitMetric; Self::COUNT] = [
        GaitMetric::StepWidth,
        GaitMetric::LeftStepLength,
        GaitMetric::RightStepLength,
        GaitMetric::StepSymmetry,
        GaitMetric::PelvicRotation,
        GaitMetric::LeftKneeAngle,
        GaitMetric::RightKneeAngle,
        GaitMetric::LeftAnkleAngle,
        GaitMetric::RightAnkleAngle,
        GaitMetric::WeightShift,
    ];

    fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GaitMetric::StepWidth => "step_width",
            GaitMetric::LeftStepLength => "left_step_length",
            GaitMetric::RightStepLength => "right_step_length",
            GaitMetric::StepSymmetry => "step_symmetry",
            GaitMetric::PelvicRotation => "pelvic_rotation",
            GaitMetric::LeftKneeAngle => "left_knee_angle",
            GaitMetric::RightKneeAngle => "right_knee_angle",
            GaitMetric::LeftAnkleAngle => "left_ankle_angle",
            GaitMetric::RightAnkleAngle => "right_ankle_angle",
            GaitMetric::WeightShift => "weight_shift",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            GaitMetric::StepWidth
            | GaitMetric::LeftStepLength
            | GaitMetric::RightStepLength
            | GaitMetric::StepSymmetry => "cm",
            GaitMetric::PelvicRotation
            | GaitMetric::LeftKneeAngle
            | GaitMetric::RightKneeAngle
            | GaitMetric::LeftAnkleAngle
            | GaitMetric::RightAnkleAngle => "°",
            GaitMetric::WeightShift => "%",
        }
    }
}

/// A measured value with its severity
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricValue {
    pub value: f32,
    pub label: SeverityLabel,
}

impl MetricValue {
    pub fn new(value: f32, label: SeverityLabel) -> Self {
        Self { value, label }
    }
}

/// Metrics computed for one frame. A `None` slot means the inputs did not
/// pass the confidence gate or the geometry was degenerate.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GaitMetrics {
    slots: [Option<MetricValue>; GaitMetric::COUNT],
}

impl GaitMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, metric: GaitMetric) -> Option<MetricValue> {
        self.slots[metric.index()]
    }

    pub fn insert(&mut self, metric: GaitMetric, value: MetricValue) {
        self.slots[metric.index()] = Some(value);
    }

    pub fn contains(&self, metric: GaitMetric) -> bool {
        self.slots[metric.index()].is_some()
    }

    /// Present metrics in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (GaitMetric, MetricValue)> + '_ {
        GaitMetric::ALL
            .iter()
            .filter_map(move |&m| self.get(m).map(|v| (m, v)))
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

impl Serialize for GaitMetrics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (metric, value) in self.iter() {
            map.serialize_entry(metric.as_str(), &value)?;
        }
        map.end()
    }
}
