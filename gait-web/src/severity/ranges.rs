//! Range tables - tiered intervals per gait metric family
//!
//! Every table has a `normal` band. Lower-side `mild`/`moderate` bands are
//! optional. Some tables also describe upper-side bands for values above
//! normal; the classifier does not consult those (see `classify`).

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// Closed interval [lo, hi]; `hi` may be +∞
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub lo: f32,
    #[serde(default = "unbounded", skip_serializing_if = "is_unbounded")]
    pub hi: f32,
}

fn unbounded() -> f32 {
    f32::INFINITY
}

fn is_unbounded(hi: &f32) -> bool {
    *hi == f32::INFINITY
}

impl Interval {
    pub const fn new(lo: f32, hi: f32) -> Self {
        Self { lo, hi }
    }

    /// [lo, +∞)
    pub const fn at_least(lo: f32) -> Self {
        Self { lo, hi: f32::INFINITY }
    }

    /// Inclusive on both ends. NaN is contained nowhere.
    pub fn contains(&self, value: f32) -> bool {
        self.lo <= value && value <= self.hi
    }

    fn validate(&self, name: &str) -> Result<()> {
        ensure!(
            !self.lo.is_nan() && !self.hi.is_nan(),
            "{name}: interval bounds must not be NaN"
        );
        ensure!(
            self.lo <= self.hi,
            "{name}: interval lower bound {} exceeds upper bound {}",
            self.lo,
            self.hi
        );
        Ok(())
    }
}

/// `lo-hi`, or `≥lo` when open-ended
impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.hi == f32::INFINITY {
            write!(f, "≥{}", self.lo)
        } else {
            write!(f, "{}-{}", self.lo, self.hi)
        }
    }
}

/// Tiered ranges for one metric family
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RangeTable {
    pub normal: Interval,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mild: Option<Interval>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moderate: Option<Interval>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mild_upper: Option<Interval>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moderate_upper: Option<Interval>,
}

impl RangeTable {
    /// Table with only a normal band; everything else is severe
    pub fn normal_only(normal: Interval) -> Self {
        Self {
            normal,
            mild: None,
            moderate: None,
            mild_upper: None,
            moderate_upper: None,
        }
    }

    /// Table with lower-side mild and moderate bands
    pub fn tiered(normal: Interval, mild: Interval, moderate: Interval) -> Self {
        Self {
            mild: Some(mild),
            moderate: Some(moderate),
            ..Self::normal_only(normal)
        }
    }

    pub fn with_upper(mut self, mild_upper: Interval, moderate_upper: Interval) -> Self {
        self.mild_upper = Some(mild_upper);
        self.moderate_upper = Some(moderate_upper);
        self
    }

    pub fn validate(&self, name: &str) -> Result<()> {
        self.normal.validate(&format!("{name}.normal"))?;
        let optional = [
            ("mild", self.mild),
            ("moderate", self.moderate),
            ("mild_upper", self.mild_upper),
            ("moderate_upper", self.moderate_upper),
        ];
        for (tier, interval) in optional {
            if let Some(interval) = interval {
                interval.validate(&format!("{name}.{tier}"))?;
            }
        }
        Ok(())
    }
}

/// One range table per gait metric family
///
/// Distances are in the same units the keypoints arrive in; angles are
/// degrees of deviation from the neutral pose.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaitRangeTables {
    pub step_width: RangeTable,
    pub step_length: RangeTable,
    pub step_symmetry: RangeTable,
    pub pelvic_rotation: RangeTable,
    /// Deviation of the knee angle from 180°
    pub knee_flexion: RangeTable,
    /// Deviation of the shank angle from 90°
    pub ankle_flexion: RangeTable,
    /// Hip-center to ankle-center offset as % of ankle spacing
    pub weight_shift: RangeTable,
}

impl GaitRangeTables {
    pub fn validate(&self) -> Result<()> {
        self.step_width.validate("step_width")?;
        self.step_length.validate("step_length")?;
        self.step_symmetry.validate("step_symmetry")?;
        self.pelvic_rotation.validate("pelvic_rotation")?;
        self.knee_flexion.validate("knee_flexion")?;
        self.ankle_flexion.validate("ankle_flexion")?;
        self.weight_shift.validate("weight_shift")?;
        Ok(())
    }
}

impl Default for GaitRangeTables {
    fn default() -> Self {
        Self {
            step_width: RangeTable::tiered(
                Interval::new(7.0, 9.0),
                Interval::new(5.0, 7.0),
                Interval::new(3.0, 5.0),
            )
            .with_upper(Interval::new(9.0, 11.0), Interval::new(11.0, 13.0)),
            step_length: RangeTable::tiered(
                Interval::new(50.0, 80.0),
                Interval::new(40.0, 50.0),
                Interval::new(30.0, 40.0),
            )
            .with_upper(Interval::new(80.0, 90.0), Interval::new(90.0, 100.0)),
            step_symmetry: RangeTable::tiered(
                Interval::new(0.0, 2.0),
                Interval::new(2.0, 4.0),
                Interval::new(4.0, 6.0),
            ),
            pelvic_rotation: RangeTable::tiered(
                Interval::new(0.0, 3.0),
                Interval::new(3.0, 6.0),
                Interval::new(6.0, 10.0),
            ),
            knee_flexion: RangeTable::tiered(
                Interval::new(0.0, 5.0),
                Interval::new(5.0, 10.0),
                Interval::new(10.0, 15.0),
            ),
            ankle_flexion: RangeTable::tiered(
                Interval::new(0.0, 5.0),
                Interval::new(5.0, 10.0),
                Interval::new(10.0, 15.0),
            ),
            weight_shift: RangeTable::tiered(
                Interval::new(0.0, 5.0),
                Interval::new(5.0, 10.0),
                Interval::new(10.0, 15.0),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_closed() {
        let i = Interval::new(7.0, 9.0);
        assert!(i.contains(7.0));
        assert!(i.contains(9.0));
        assert!(!i.contains(9.000_1));
        assert!(!i.contains(f32::NAN));
        assert!(Interval::at_least(13.0).contains(1e30));
    }

    #[test]
    fn test_unbounded_hi_json() {
        let json = serde_json::to_string(&Interval::at_least(13.0)).unwrap();
        assert_eq!(json, r#"{"lo":13.0}"#);

        let back: Interval = serde_json::from_str(&json).unwrap();
        assert_eq!(back.hi, f32::INFINITY);
    }

    #[test]
    fn test_validate_rejects_inverted_interval() {
        let mut tables = GaitRangeTables::default();
        tables.validate().unwrap();

        tables.pelvic_rotation.moderate = Some(Interval::new(10.0, 6.0));
        let err = tables.validate().unwrap_err();
        assert!(err.to_string().contains("pelvic_rotation.moderate"));
    }
}
