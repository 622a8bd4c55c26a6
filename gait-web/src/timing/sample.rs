//! Gait timing sample - step-cycle durations for one analysis window

use serde::{Deserialize, Serialize};

/// Step-cycle durations tracked over time, in seconds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimingMetric {
    LeftLegLift,
    RightLegLift,
    DoubleSupport,
    StepTime,
    SwingTime,
    StanceTime,
}

impl TimingMetric {
    pub const COUNT: usize = 6;

    pub const ALL: [TimingMetric; Self::COUNT] = [
        TimingMetric::LeftLegLift,
        TimingMetric::RightLegLift,
        TimingMetric::DoubleSupport,
        TimingMetric::StepTime,
        TimingMetric::SwingTime,
        TimingMetric::StanceTime,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimingMetric::LeftLegLift => "left_leg_lift",
            TimingMetric::RightLegLift => "right_leg_lift",
            TimingMetric::DoubleSupport => "double_support",
            TimingMetric::StepTime => "step_time",
            TimingMetric::SwingTime => "swing_time",
            TimingMetric::StanceTime => "stance_time",
        }
    }
}

/// One set of timing measurements; any field may be missing
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaitTiming {
    pub left_leg_lift: Option<f32>,
    pub right_leg_lift: Option<f32>,
    pub double_support: Option<f32>,
    pub step_time: Option<f32>,
    pub swing_time: Option<f32>,
    pub stance_time: Option<f32>,
}

impl GaitTiming {
    pub fn get(&self, metric: TimingMetric) -> Option<f32> {
        match metric {
            TimingMetric::LeftLegLift => self.left_leg_lift,
            TimingMetric::RightLegLift => self.right_leg_lift,
            TimingMetric::DoubleSupport => self.double_support,
            TimingMetric::StepTime => self.step_time,
            TimingMetric::SwingTime => self.swing_time,
            TimingMetric::StanceTime => self.stance_time,
        }
    }

    pub fn set(&mut self, metric: TimingMetric, value: Option<f32>) {
        let slot = match metric {
            TimingMetric::LeftLegLift => &mut self.left_leg_lift,
            TimingMetric::RightLegLift => &mut self.right_leg_lift,
            TimingMetric::DoubleSupport => &mut self.double_support,
            TimingMetric::StepTime => &mut self.step_time,
            TimingMetric::SwingTime => &mut self.swing_time,
            TimingMetric::StanceTime => &mut self.stance_time,
        };
        *slot = value;
    }

    /// Present measurements in `TimingMetric::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = (TimingMetric, f32)> + '_ {
        TimingMetric::ALL
            .iter()
            .filter_map(move |&m| self.get(m).map(|v| (m, v)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_roundtrip_per_field() {
        let mut timing = GaitTiming::default();
        assert!(timing.is_empty());

        timing.set(TimingMetric::StepTime, Some(1.0));
        timing.set(TimingMetric::LeftLegLift, Some(0.3));
        assert_eq!(timing.step_time, Some(1.0));

        let present: Vec<_> = timing.iter().collect();
        assert_eq!(
            present,
            vec![(TimingMetric::LeftLegLift, 0.3), (TimingMetric::StepTime, 1.0)]
        );
    }

    #[test]
    fn test_partial_json() {
        let timing: GaitTiming = serde_json::from_str(r#"{"step_time": 0.9}"#).unwrap();
        assert_eq!(timing.step_time, Some(0.9));
        assert_eq!(timing.left_leg_lift, None);
    }
}
