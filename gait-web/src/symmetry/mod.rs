//! Symmetry module - left/right balance and cadence narrative
//!
//! Re-exports only. All logic in submodules.

mod balance;
mod summary;

pub use balance::{balance_band, balance_index, deviation, BalanceBand, Side, BALANCED_INDEX};
pub use summary::{summarize, BalanceJudgment, CadenceBand, CadenceJudgment, GaitSummary};
