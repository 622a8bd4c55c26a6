//! Keypoint frame - one pose estimate with 17 COCO joints
//!
//! Receives keypoints from the external pose estimator as a flat
//! `[x, y, score] × 17` array and exposes typed per-joint access.

use anyhow::{bail, Result};
use tracing::warn;

use crate::geometry::Point2D;

// ============================================================================
// KEYPOINT INDICES (COCO - 17 total)
// ============================================================================

pub const NOSE: usize = 0;
pub const LEFT_EYE: usize = 1;
pub const RIGHT_EYE: usize = 2;
pub const LEFT_EAR: usize = 3;
pub const RIGHT_EAR: usize = 4;
pub const LEFT_SHOULDER: usize = 5;
pub const RIGHT_SHOULDER: usize = 6;
pub const LEFT_ELBOW: usize = 7;
pub const RIGHT_ELBOW: usize = 8;
pub const LEFT_WRIST: usize = 9;
pub const RIGHT_WRIST: usize = 10;
pub const LEFT_HIP: usize = 11;
pub const RIGHT_HIP: usize = 12;
pub const LEFT_KNEE: usize = 13;
pub const RIGHT_KNEE: usize = 14;
pub const LEFT_ANKLE: usize = 15;
pub const RIGHT_ANKLE: usize = 16;

/// Number of joints in a frame
pub const KEYPOINT_COUNT: usize = 17;

/// Floats per joint in the flat layout (x, y, score)
pub const VALUES_PER_KEYPOINT: usize = 3;

// ============================================================================
// KEYPOINT DATA STRUCTURE
// ============================================================================

/// A single tracked joint
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keypoint {
    /// Image-space position in pixels
    pub position: Point2D,
    /// Detector confidence, 0-1
    pub confidence: f32,
}

impl Default for Keypoint {
    fn default() -> Self {
        Self {
            position: Point2D::origin(),
            confidence: 0.0,
        }
    }
}

/// All 17 joints of one detected person in one video frame
#[derive(Clone, Debug, PartialEq)]
pub struct KeypointFrame {
    keypoints: [Keypoint; KEYPOINT_COUNT],
}

impl KeypointFrame {
    pub fn new(keypoints: [Keypoint; KEYPOINT_COUNT]) -> Self {
        Self { keypoints }
    }

    /// Build from parallel position / score arrays, the layout most pose
    /// estimators emit.
    pub fn from_parts(
        positions: &[(f32, f32); KEYPOINT_COUNT],
        scores: &[f32; KEYPOINT_COUNT],
    ) -> Self {
        let mut keypoints = [Keypoint::default(); KEYPOINT_COUNT];
        for (i, kp) in keypoints.iter_mut().enumerate() {
            *kp = Keypoint {
                position: Point2D::new(positions[i].0, positions[i].1),
                confidence: scores[i],
            };
        }
        Self { keypoints }
    }

    /// Build from a flat `[x0, y0, s0, x1, y1, s1, ...]` slice of 51 values
    pub fn from_flat(data: &[f32]) -> Result<Self> {
        let expected = KEYPOINT_COUNT * VALUES_PER_KEYPOINT;
        if data.len() != expected {
            warn!(len = data.len(), expected, "rejected keypoint frame");
            bail!("invalid keypoint data length: {} (expected {expected})", data.len());
        }

        let mut keypoints = [Keypoint::default(); KEYPOINT_COUNT];
        for (kp, chunk) in keypoints
            .iter_mut()
            .zip(data.chunks_exact(VALUES_PER_KEYPOINT))
        {
            *kp = Keypoint {
                position: Point2D::new(chunk[0], chunk[1]),
                confidence: chunk[2],
            };
        }
        Ok(Self { keypoints })
    }

    /// Joint by COCO index. Panics on an index >= 17, like slice indexing.
    pub fn get(&self, index: usize) -> Keypoint {
        self.keypoints[index]
    }

    pub fn position(&self, index: usize) -> Point2D {
        self.keypoints[index].position
    }

    pub fn confidence(&self, index: usize) -> f32 {
        self.keypoints[index].confidence
    }

    pub fn keypoints(&self) -> &[Keypoint; KEYPOINT_COUNT] {
        &self.keypoints
    }
}

impl Default for KeypointFrame {
    fn default() -> Self {
        Self {
            keypoints: [Keypoint::default(); KEYPOINT_COUNT],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flat() {
        let mut data = vec![0.0; 51];
        data[LEFT_ANKLE * 3] = 100.0;
        data[LEFT_ANKLE * 3 + 1] = 500.0;
        data[LEFT_ANKLE * 3 + 2] = 0.9;

        let frame = KeypointFrame::from_flat(&data).unwrap();
        assert_eq!(frame.position(LEFT_ANKLE), Point2D::new(100.0, 500.0));
        assert_eq!(frame.confidence(LEFT_ANKLE), 0.9);
        assert_eq!(frame.confidence(RIGHT_ANKLE), 0.0);
    }

    #[test]
    fn test_from_flat_rejects_bad_length() {
        let err = KeypointFrame::from_flat(&[0.0; 50]).unwrap_err();
        assert!(err.to_string().contains("expected 51"));
        assert!(KeypointFrame::from_flat(&[]).is_err());
    }

    #[test]
    fn test_from_parts() {
        let mut positions = [(0.0, 0.0); KEYPOINT_COUNT];
        let mut scores = [0.0; KEYPOINT_COUNT];
        positions[NOSE] = (320.0, 80.0);
        scores[NOSE] = 0.75;

        let frame = KeypointFrame::from_parts(&positions, &scores);
        assert_eq!(frame.get(NOSE).position, Point2D::new(320.0, 80.0));
        assert_eq!(frame.get(NOSE).confidence, 0.75);
    }
}
