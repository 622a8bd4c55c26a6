//! Frame state - the slice of one frame carried into the next
//!
//! Step-cycle quantities need the previous knee/ankle heights. Each field
//! is present only if that joint passed the confidence gate in the frame
//! that produced the snapshot.

use serde::{Deserialize, Serialize};

use super::confidence_gate::ConfidenceGate;
use super::frame::{KeypointFrame, LEFT_ANKLE, LEFT_KNEE, RIGHT_ANKLE, RIGHT_KNEE};

/// Knee and ankle heights (image y) from the previous frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameState {
    pub left_knee_y: Option<f32>,
    pub right_knee_y: Option<f32>,
    pub left_ankle_y: Option<f32>,
    pub right_ankle_y: Option<f32>,
}

impl FrameState {
    /// Snapshot the gated knee/ankle heights of a frame
    pub fn capture(frame: &KeypointFrame, gate: &ConfidenceGate) -> Self {
        let y = |joint| gate.position(frame, joint).map(|p| p.y);
        Self {
            left_knee_y: y(LEFT_KNEE),
            right_knee_y: y(RIGHT_KNEE),
            left_ankle_y: y(LEFT_ANKLE),
            right_ankle_y: y(RIGHT_ANKLE),
        }
    }

    /// Ankle heights, only when every field of the snapshot is present
    pub fn complete_ankles(&self) -> Option<(f32, f32)> {
        match (
            self.left_knee_y,
            self.right_knee_y,
            self.left_ankle_y,
            self.right_ankle_y,
        ) {
            (Some(_), Some(_), Some(left), Some(right)) => Some((left, right)),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.left_knee_y.is_none()
            && self.right_knee_y.is_none()
            && self.left_ankle_y.is_none()
            && self.right_ankle_y.is_none()
    }
}
