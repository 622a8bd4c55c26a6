//! Geometry module - pure angle and distance primitives over 2D points
//!
//! Re-exports only. All logic in submodules.

mod angles;
mod distance;

/// Image-space point (pixels, y grows downwards)
pub type Point2D = nalgebra::Point2<f32>;

pub use angles::{line_angle, vertex_angle};
pub use distance::{distance, midpoint};
