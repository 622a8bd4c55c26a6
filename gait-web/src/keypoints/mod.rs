//! Keypoints module - pose estimator output and per-frame carry-over state
//!
//! Re-exports only. All logic in submodules.

mod confidence_gate;
mod frame;
mod state;

pub use confidence_gate::{ConfidenceGate, DEFAULT_CONFIDENCE_GATE};
pub use frame::{
    Keypoint, KeypointFrame, KEYPOINT_COUNT, VALUES_PER_KEYPOINT,
    // Constants
    NOSE, LEFT_EYE, RIGHT_EYE, LEFT_EAR, RIGHT_EAR,
    LEFT_SHOULDER, RIGHT_SHOULDER, LEFT_ELBOW, RIGHT_ELBOW,
    LEFT_WRIST, RIGHT_WRIST, LEFT_HIP, RIGHT_HIP,
    LEFT_KNEE, RIGHT_KNEE, LEFT_ANKLE, RIGHT_ANKLE,
};
pub use state::FrameState;
