//! Severity classification against a range table
//!
//! Evaluation order is fixed: normal, then mild, then moderate, then the
//! severe catch-all. Upper-side bands are never consulted, so a value
//! above the normal band on a table that defines `mild_upper` still reads
//! as severe.

use super::label::SeverityLabel;
use super::ranges::RangeTable;

/// Classify a value. Total over all f32 inputs; NaN lands on `Severe`.
pub fn classify(value: f32, table: &RangeTable) -> SeverityLabel {
    if table.normal.contains(value) {
        return SeverityLabel::Normal;
    }
    if table.mild.is_some_and(|band| band.contains(value)) {
        return SeverityLabel::Mild;
    }
    if table.moderate.is_some_and(|band| band.contains(value)) {
        return SeverityLabel::Moderate;
    }
    SeverityLabel::Severe
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::ranges::{GaitRangeTables, Interval};

    #[test]
    fn test_tier_order() {
        let table = RangeTable::tiered(
            Interval::new(0.0, 3.0),
            Interval::new(3.0, 6.0),
            Interval::new(6.0, 10.0),
        );
        assert_eq!(classify(0.0, &table), SeverityLabel::Normal);
        // Shared boundary goes to the earlier tier
        assert_eq!(classify(3.0, &table), SeverityLabel::Normal);
        assert_eq!(classify(4.5, &table), SeverityLabel::Mild);
        assert_eq!(classify(6.0, &table), SeverityLabel::Mild);
        assert_eq!(classify(8.0, &table), SeverityLabel::Moderate);
        assert_eq!(classify(10.5, &table), SeverityLabel::Severe);
        assert_eq!(classify(-1.0, &table), SeverityLabel::Severe);
    }

    #[test]
    fn test_normal_only_table() {
        let table = RangeTable::normal_only(Interval::new(0.25, 0.6));
        assert_eq!(classify(0.4, &table), SeverityLabel::Normal);
        assert_eq!(classify(0.2, &table), SeverityLabel::Severe);
        assert_eq!(classify(0.7, &table), SeverityLabel::Severe);
        assert_eq!(classify(f32::INFINITY, &table), SeverityLabel::Severe);
        assert_eq!(classify(f32::NAN, &table), SeverityLabel::Severe);
    }

    #[test]
    fn test_upper_bands_are_not_consulted() {
        let tables = GaitRangeTables::default();
        // 10 lies in step_width.mild_upper [9, 11] but still falls through
        assert_eq!(classify(10.0, &tables.step_width), SeverityLabel::Severe);
        assert_eq!(classify(12.0, &tables.step_width), SeverityLabel::Severe);
        assert_eq!(classify(6.0, &tables.step_width), SeverityLabel::Mild);
        assert_eq!(classify(40.0, &tables.step_width), SeverityLabel::Severe);
    }

    #[test]
    fn test_open_ended_normal() {
        let table = RangeTable::normal_only(Interval::at_least(65.0));
        assert_eq!(classify(1e9, &table), SeverityLabel::Normal);
        assert_eq!(classify(64.9, &table), SeverityLabel::Severe);
    }
}
