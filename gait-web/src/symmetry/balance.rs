//! Left/right balance index from paired leg timings
//!
//! 50 = perfectly balanced, below 50 = right-dominant, above 50 =
//! left-dominant.

use serde::{Deserialize, Serialize};

/// Perfect balance on the 0-100 index
pub const BALANCED_INDEX: f32 = 50.0;

/// Deviation below this is good symmetry (percent)
const MILD_ASYMMETRY_PCT: f32 = 10.0;

/// Deviation at or above this is marked asymmetry (percent)
const MARKED_ASYMMETRY_PCT: f32 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// Symmetry judgment derived from the balance index
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "band", rename_all = "snake_case")]
pub enum BalanceBand {
    Good,
    MildAsymmetry,
    MarkedAsymmetry { dominant: Side },
}

impl BalanceBand {
    pub fn description(&self) -> &'static str {
        match self {
            BalanceBand::Good => "Gait symmetry is good",
            BalanceBand::MildAsymmetry => "Gait is mildly asymmetric",
            BalanceBand::MarkedAsymmetry { .. } => "Gait is markedly asymmetric",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            BalanceBand::Good => "Keep the current walking rhythm",
            BalanceBand::MildAsymmetry => "Pay attention to balancing left and right leg movement",
            BalanceBand::MarkedAsymmetry { dominant: Side::Left } => {
                "Left-side preference detected, work on rebalancing the gait"
            }
            BalanceBand::MarkedAsymmetry { dominant: Side::Right } => {
                "Right-side preference detected, work on rebalancing the gait"
            }
        }
    }
}

/// Share of the left leg in total lift time, 0-100
///
/// Returns 50 when either timing is missing or non-positive: degenerate
/// timing data is reported as balanced rather than as an extreme.
pub fn balance_index(left_time: f32, right_time: f32) -> f32 {
    let usable = |t: f32| t.is_finite() && t > 0.0;
    if !usable(left_time) || !usable(right_time) {
        return BALANCED_INDEX;
    }
    left_time / (left_time + right_time) * 100.0
}

/// Asymmetry magnitude, 0% (balanced) to 100% (one leg only)
pub fn deviation(index: f32) -> f32 {
    (index - BALANCED_INDEX).abs() * 2.0
}

/// Band a balance index
pub fn balance_band(index: f32) -> BalanceBand {
    let deviation = deviation(index);
    if deviation < MILD_ASYMMETRY_PCT {
        BalanceBand::Good
    } else if deviation < MARKED_ASYMMETRY_PCT {
        BalanceBand::MildAsymmetry
    } else {
        let dominant = if index > BALANCED_INDEX { Side::Left } else { Side::Right };
        BalanceBand::MarkedAsymmetry { dominant }
    }
}
