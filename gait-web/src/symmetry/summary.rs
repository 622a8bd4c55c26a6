//! Gait summary - balance judgment plus cadence judgment
//!
//! The two judgments are independent; each carries its own advice text
//! for the dashboard.

use serde::{Deserialize, Serialize};

use super::balance::{balance_band, balance_index, deviation, BalanceBand};
use crate::severity::Interval;
use crate::timing::{GaitTiming, TimingRanges};

/// Cadence judgment from step time against its normal window
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CadenceBand {
    /// Step time shorter than normal
    Fast,
    Normal,
    /// Step time longer than normal
    Slow,
}

impl CadenceBand {
    pub fn classify(step_time: f32, normal: Interval) -> Self {
        if step_time < normal.lo {
            CadenceBand::Fast
        } else if step_time > normal.hi {
            CadenceBand::Slow
        } else {
            CadenceBand::Normal
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CadenceBand::Fast => "Cadence is fast",
            CadenceBand::Normal => "Cadence is normal",
            CadenceBand::Slow => "Cadence is slow",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            CadenceBand::Fast => "Slow the cadence slightly to gain stability",
            CadenceBand::Normal => "Current cadence is within the healthy range",
            CadenceBand::Slow => "Raise the cadence slightly to walk more efficiently",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BalanceJudgment {
    /// 0-100, 50 = balanced
    pub index: f32,
    /// 0-100 %, 0 = balanced
    pub deviation: f32,
    #[serde(flatten)]
    pub band: BalanceBand,
    pub description: &'static str,
    pub advice: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CadenceJudgment {
    pub step_time: f32,
    pub normal_range: Interval,
    pub band: CadenceBand,
    pub description: &'static str,
    pub advice: &'static str,
}

/// Combined narrative result for one timing sample
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GaitSummary {
    pub balance: BalanceJudgment,
    /// Absent when the sample carries no step time
    pub cadence: Option<CadenceJudgment>,
}

impl GaitSummary {
    /// One line per judgment, for plain-text consumers
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "{}: {}",
            self.balance.description, self.balance.advice
        )];
        if let Some(cadence) = &self.cadence {
            lines.push(format!("{}: {}", cadence.description, cadence.advice));
            lines.push(format!(
                "Step time: {:.2}s (normal range: {}s)",
                cadence.step_time, cadence.normal_range
            ));
        }
        lines
    }
}

/// Judge a timing sample. A missing leg-lift time counts as 0, which the
/// balance index reports as balanced.
pub fn summarize(timing: &GaitTiming, ranges: &TimingRanges) -> GaitSummary {
    let index = balance_index(
        timing.left_leg_lift.unwrap_or(0.0),
        timing.right_leg_lift.unwrap_or(0.0),
    );
    let band = balance_band(index);
    let balance = BalanceJudgment {
        index,
        deviation: deviation(index),
        band,
        description: band.description(),
        advice: band.advice(),
    };

    let cadence = timing.step_time.map(|step_time| {
        let band = CadenceBand::classify(step_time, ranges.step_time);
        CadenceJudgment {
            step_time,
            normal_range: ranges.step_time,
            band,
            description: band.description(),
            advice: band.advice(),
        }
    });

    GaitSummary { balance, cadence }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symmetry::balance::Side;

    fn sample(left: f32, right: f32, step: f32) -> GaitTiming {
        GaitTiming {
            left_leg_lift: Some(left),
            right_leg_lift: Some(right),
            step_time: Some(step),
            ..GaitTiming::default()
        }
    }

    #[test]
    fn test_balanced_normal_walk() {
        let summary = summarize(&sample(0.3, 0.3, 1.0), &TimingRanges::default());
        assert_eq!(summary.balance.index, 50.0);
        assert_eq!(summary.balance.deviation, 0.0);
        assert_eq!(summary.balance.band, BalanceBand::Good);

        let cadence = summary.cadence.unwrap();
        assert_eq!(cadence.band, CadenceBand::Normal);
        assert_eq!(cadence.advice, "Current cadence is within the healthy range");
    }

    #[test]
    fn test_cadence_bands() {
        let ranges = TimingRanges::default();
        let fast = summarize(&sample(0.3, 0.3, 0.6), &ranges);
        assert_eq!(fast.cadence.unwrap().band, CadenceBand::Fast);

        let slow = summarize(&sample(0.3, 0.3, 1.5), &ranges);
        assert_eq!(slow.cadence.unwrap().band, CadenceBand::Slow);

        // Window edges are normal
        assert_eq!(CadenceBand::classify(0.8, ranges.step_time), CadenceBand::Normal);
        assert_eq!(CadenceBand::classify(1.2, ranges.step_time), CadenceBand::Normal);
    }

    #[test]
    fn test_marked_asymmetry_right() {
        let summary = summarize(&sample(0.2, 0.6, 1.0), &TimingRanges::default());
        assert_eq!(
            summary.balance.band,
            BalanceBand::MarkedAsymmetry { dominant: Side::Right }
        );
        assert!(summary.balance.advice.starts_with("Right-side"));
    }

    #[test]
    fn test_missing_timing() {
        let summary = summarize(&GaitTiming::default(), &TimingRanges::default());
        assert_eq!(summary.balance.index, 50.0);
        assert!(summary.cadence.is_none());
        assert_eq!(summary.lines().len(), 1);
    }

    #[test]
    fn test_lines_open_ended_window() {
        let bounded = summarize(&sample(0.3, 0.3, 1.0), &TimingRanges::default());
        assert_eq!(
            bounded.lines()[2],
            "Step time: 1.00s (normal range: 0.8-1.2s)"
        );

        let ranges = TimingRanges {
            step_time: Interval::at_least(0.8),
            ..TimingRanges::default()
        };
        let open = summarize(&sample(0.3, 0.3, 1.0), &ranges);
        assert_eq!(open.lines()[2], "Step time: 1.00s (normal range: ≥0.8s)");
    }

    #[test]
    fn test_json_shape() {
        let summary = summarize(&sample(0.3, 0.3, 1.0), &TimingRanges::default());
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["balance"]["band"], "good");
        assert_eq!(json["balance"]["index"], 50.0);
        assert_eq!(json["cadence"]["band"], "normal");
    }
}
