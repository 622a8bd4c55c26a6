//! Posture metrics and their normal ranges

use serde::{Deserialize, Serialize};

/// Externally measured static posture quantities
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostureMetric {
    HeadForwardTilt,
    HeadSideTilt,
    HeadRotation,
    ShoulderTilt,
    RoundShoulder,
    BackAngle,
    AbdominalObesity,
    LumbarCurvature,
    PelvicAnteriorTilt,
    LateralMidline,
    LeftLegShape,
    RightLegShape,
    LeftKneeAssessment,
    RightKneeAssessment,
    BodyTilt,
    FootProgression,
}

/// Body region used to group posture cards
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyRegion {
    Head,
    UpperBody,
    Core,
    LowerLimb,
}

impl BodyRegion {
    pub const ALL: [BodyRegion; 4] = [
        BodyRegion::Head,
        BodyRegion::UpperBody,
        BodyRegion::Core,
        BodyRegion::LowerLimb,
    ];
}

impl PostureMetric {
    pub const COUNT: usize = 16;

    pub const ALL: [PostureMetric; Self::COUNT] = [
        PostureMetric::HeadForwardTilt,
        PostureMetric::HeadSideTilt,
        PostureMetric::HeadRotation,
        PostureMetric::ShoulderTilt,
        PostureMetric::RoundShoulder,
        PostureMetric::BackAngle,
        PostureMetric::AbdominalObesity,
        PostureMetric::LumbarCurvature,
        PostureMetric::PelvicAnteriorTilt,
        PostureMetric::LateralMidline,
        PostureMetric::LeftLegShape,
        PostureMetric::RightLegShape,
        PostureMetric::LeftKneeAssessment,
        PostureMetric::RightKneeAssessment,
        PostureMetric::BodyTilt,
        PostureMetric::FootProgression,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PostureMetric::HeadForwardTilt => "Head forward tilt",
            PostureMetric::HeadSideTilt => "Head side tilt",
            PostureMetric::HeadRotation => "Head rotation",
            PostureMetric::ShoulderTilt => "Shoulder tilt",
            PostureMetric::RoundShoulder => "Round shoulder",
            PostureMetric::BackAngle => "Back angle",
            PostureMetric::AbdominalObesity => "Abdominal obesity",
            PostureMetric::LumbarCurvature => "Lumbar curvature",
            PostureMetric::PelvicAnteriorTilt => "Pelvic anterior tilt",
            PostureMetric::LateralMidline => "Lateral midline",
            PostureMetric::LeftLegShape => "Leg shape (left)",
            PostureMetric::RightLegShape => "Leg shape (right)",
            PostureMetric::LeftKneeAssessment => "Left knee assessment",
            PostureMetric::RightKneeAssessment => "Right knee assessment",
            PostureMetric::BodyTilt => "Body tilt",
            PostureMetric::FootProgression => "Foot progression",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            PostureMetric::AbdominalObesity => "%",
            _ => "°",
        }
    }

    pub fn region(&self) -> BodyRegion {
        use PostureMetric::*;
        match self {
            HeadForwardTilt | HeadSideTilt | HeadRotation => BodyRegion::Head,
            ShoulderTilt | RoundShoulder | BackAngle => BodyRegion::UpperBody,
            AbdominalObesity | LumbarCurvature | PelvicAnteriorTilt | LateralMidline => {
                BodyRegion::Core
            }
            LeftLegShape | RightLegShape | LeftKneeAssessment | RightKneeAssessment | BodyTilt
            | FootProgression => BodyRegion::LowerLimb,
        }
    }

    /// Default normal range for the metric
    pub fn normal_range(&self) -> NormalRange {
        use PostureMetric::*;
        let between = |lo, hi| NormalRange::Between { lo, hi };
        match self {
            HeadForwardTilt => between(0.0, 5.0),
            HeadSideTilt => between(0.0, 2.0),
            HeadRotation => between(0.0, 5.0),
            ShoulderTilt => between(0.0, 2.0),
            RoundShoulder => NormalRange::Above { limit: 65.0 },
            BackAngle => NormalRange::Below { limit: 39.0 },
            AbdominalObesity => between(0.0, 35.0),
            LumbarCurvature => between(0.0, 5.0),
            PelvicAnteriorTilt => between(-7.0, 7.0),
            LateralMidline => between(175.0, 185.0),
            LeftLegShape | RightLegShape => between(177.0, 183.0),
            LeftKneeAssessment | RightKneeAssessment => between(175.0, 185.0),
            BodyTilt => between(0.0, 2.0),
            FootProgression => between(-5.0, 11.0),
        }
    }
}

/// Normal range of a posture metric
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NormalRange {
    /// lo ≤ value ≤ hi
    Between { lo: f32, hi: f32 },
    /// value < limit
    Below { limit: f32 },
    /// value > limit
    Above { limit: f32 },
}

impl NormalRange {
    pub fn contains(&self, value: f32) -> bool {
        match *self {
            NormalRange::Between { lo, hi } => lo <= value && value <= hi,
            NormalRange::Below { limit } => value < limit,
            NormalRange::Above { limit } => value > limit,
        }
    }
}

impl std::fmt::Display for NormalRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NormalRange::Between { lo, hi } => write!(f, "{lo}~{hi}"),
            NormalRange::Below { limit } => write!(f, "<{limit}"),
            NormalRange::Above { limit } => write!(f, ">{limit}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_inclusive() {
        let range = PostureMetric::PelvicAnteriorTilt.normal_range();
        assert!(range.contains(-7.0));
        assert!(range.contains(7.0));
        assert!(!range.contains(7.5));
    }

    #[test]
    fn test_open_bounds_strict() {
        let round = PostureMetric::RoundShoulder.normal_range();
        assert!(round.contains(70.0));
        assert!(!round.contains(65.0));

        let back = PostureMetric::BackAngle.normal_range();
        assert!(back.contains(20.0));
        assert!(!back.contains(39.0));
    }

    #[test]
    fn test_nan_never_normal() {
        for metric in PostureMetric::ALL {
            assert!(!metric.normal_range().contains(f32::NAN));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(PostureMetric::BackAngle.normal_range().to_string(), "<39");
        assert_eq!(PostureMetric::HeadRotation.normal_range().to_string(), "0~5");
    }

    #[test]
    fn test_all_order_matches_index() {
        for (i, m) in PostureMetric::ALL.iter().enumerate() {
            assert_eq!(m.index(), i);
        }
    }
}
