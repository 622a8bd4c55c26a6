//! Composite gait score from classified metrics
//!
//! Each category awards points by severity. Categories whose metrics are
//! missing for the frame are left out of the breakdown and award nothing;
//! the ceiling stays at `MAX_TOTAL` regardless.

use serde::{Deserialize, Serialize};

use crate::gait::{GaitMetric, GaitMetrics};
use crate::severity::SeverityLabel;

/// Fixed score ceiling. Includes display-only categories that are never
/// scored here, so a perfect frame still reads below it.
pub const MAX_TOTAL: f32 = 68.0;

/// Scored categories
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    StepWidth,
    StepLength,
    StepSymmetry,
    PelvicRotation,
    KneeAngle,
    AnkleAngle,
    WeightShift,
}

impl ScoreCategory {
    pub const ALL: [ScoreCategory; 7] = [
        ScoreCategory::StepWidth,
        ScoreCategory::StepLength,
        ScoreCategory::StepSymmetry,
        ScoreCategory::PelvicRotation,
        ScoreCategory::KneeAngle,
        ScoreCategory::AnkleAngle,
        ScoreCategory::WeightShift,
    ];

    /// Points for a fully normal category
    pub fn max_points(&self) -> f32 {
        match self {
            ScoreCategory::StepWidth => 10.0,
            ScoreCategory::StepLength => 5.0,
            ScoreCategory::StepSymmetry => 5.0,
            ScoreCategory::PelvicRotation => 5.0,
            ScoreCategory::KneeAngle => 3.0,
            ScoreCategory::AnkleAngle => 1.0,
            ScoreCategory::WeightShift => 10.0,
        }
    }

    /// Metrics the category reads. Two entries means one per leg, each
    /// worth half the category.
    fn metrics(&self) -> &'static [GaitMetric] {
        match self {
            ScoreCategory::StepWidth => &[GaitMetric::StepWidth],
            ScoreCategory::StepLength => &[GaitMetric::LeftStepLength, GaitMetric::RightStepLength],
            ScoreCategory::StepSymmetry => &[GaitMetric::StepSymmetry],
            ScoreCategory::PelvicRotation => &[GaitMetric::PelvicRotation],
            ScoreCategory::KneeAngle => &[GaitMetric::LeftKneeAngle, GaitMetric::RightKneeAngle],
            ScoreCategory::AnkleAngle => &[GaitMetric::LeftAnkleAngle, GaitMetric::RightAnkleAngle],
            ScoreCategory::WeightShift => &[GaitMetric::WeightShift],
        }
    }

    fn is_per_leg(&self) -> bool {
        matches!(self, ScoreCategory::KneeAngle | ScoreCategory::AnkleAngle)
    }
}

/// Share of category points per severity, whole-category scoring
fn category_fraction(label: SeverityLabel) -> f32 {
    match label {
        SeverityLabel::Normal => 1.0,
        SeverityLabel::Mild => 0.7,
        SeverityLabel::Moderate => 0.4,
        SeverityLabel::Severe => 0.0,
    }
}

/// Share of per-leg points per severity
fn leg_fraction(label: SeverityLabel) -> f32 {
    match label {
        SeverityLabel::Normal => 1.0,
        SeverityLabel::Mild => 2.0 / 3.0,
        SeverityLabel::Moderate => 1.0 / 3.0,
        SeverityLabel::Severe => 0.0,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CategoryScore {
    pub category: ScoreCategory,
    pub points: f32,
    pub max_points: f32,
}

/// Points per scored category plus the total
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Only categories whose metrics were present, in fixed category order
    pub categories: Vec<CategoryScore>,
    pub total: f32,
    pub max_total: f32,
}

impl ScoreBreakdown {
    pub fn points(&self, category: ScoreCategory) -> Option<f32> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.points)
    }
}

/// Score one frame's metrics
pub fn score(metrics: &GaitMetrics) -> ScoreBreakdown {
    let categories: Vec<CategoryScore> = ScoreCategory::ALL
        .iter()
        .filter_map(|&category| {
            score_category(category, metrics).map(|points| CategoryScore {
                category,
                points,
                max_points: category.max_points(),
            })
        })
        .collect();

    let total = categories.iter().fold(0.0, |acc, c| acc + c.points);

    ScoreBreakdown {
        categories,
        total,
        max_total: MAX_TOTAL,
    }
}

/// `None` unless every metric the category reads is present
fn score_category(category: ScoreCategory, metrics: &GaitMetrics) -> Option<f32> {
    let labels = category
        .metrics()
        .iter()
        .map(|&m| metrics.get(m).map(|v| v.label))
        .collect::<Option<Vec<_>>>()?;

    let max = category.max_points();
    if category.is_per_leg() {
        let per_leg = max / labels.len() as f32;
        Some(labels.iter().map(|&l| per_leg * leg_fraction(l)).sum())
    } else {
        // Both step lengths carry the same status; read the first
        Some(max * category_fraction(labels[0]))
    }
}
