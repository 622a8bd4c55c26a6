//! Confidence Gate - trust check applied before any joint is used
//!
//! A joint is usable only when its confidence is strictly above the
//! threshold. Metrics that depend on a gated-out joint are dropped, never
//! filled with a placeholder.

use super::frame::KeypointFrame;
use crate::geometry::Point2D;

/// Default gate used by the pose pipeline
pub const DEFAULT_CONFIDENCE_GATE: f32 = 0.3;

/// Confidence gate over a whole keypoint frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfidenceGate {
    /// Confidence must be strictly greater than this
    threshold: f32,
}

impl ConfidenceGate {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Whether a raw confidence passes (strict `>`)
    pub fn passes(&self, confidence: f32) -> bool {
        confidence > self.threshold
    }

    /// Whether every listed joint in the frame passes
    pub fn all_pass(&self, frame: &KeypointFrame, joints: &[usize]) -> bool {
        joints.iter().all(|&j| self.passes(frame.confidence(j)))
    }

    /// Position of a joint if it passes the gate
    pub fn position(&self, frame: &KeypointFrame, joint: usize) -> Option<Point2D> {
        let kp = frame.get(joint);
        self.passes(kp.confidence).then_some(kp.position)
    }
}

impl Default for ConfidenceGate {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIDENCE_GATE)
    }
}
