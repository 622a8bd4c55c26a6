//! Severity labels, ordered from best to worst

use serde::{Deserialize, Serialize};

/// Outcome of comparing one metric to its range table
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLabel {
    Normal,
    Mild,
    Moderate,
    Severe,
}

impl SeverityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityLabel::Normal => "normal",
            SeverityLabel::Mild => "mild",
            SeverityLabel::Moderate => "moderate",
            SeverityLabel::Severe => "severe",
        }
    }

    pub fn is_normal(&self) -> bool {
        matches!(self, SeverityLabel::Normal)
    }
}

impl std::fmt::Display for SeverityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
