//! Joint angle calculation using atan2 and the dot product
//!
//! Two flavours:
//! - line angle: direction of a segment against the image horizontal
//! - vertex angle: interior angle at a joint between two body segments

use nalgebra::Vector2;

use super::Point2D;

/// Rays shorter than this are treated as zero length
const MIN_RAY_LENGTH: f32 = 1e-6;

/// Angle of the vector p1 → p2 against the horizontal axis, in degrees
///
/// Image coordinates grow downwards, so a segment pointing "down" the
/// screen reads as +90°.
///
/// Returns a value in (-180°, 180°].
pub fn line_angle(p1: Point2D, p2: Point2D) -> f32 {
    let d = p2 - p1;
    d.y.atan2(d.x).to_degrees()
}

/// Interior angle at `vertex` between rays vertex → a and vertex → b
///
/// Uses dot product formula: cos(θ) = (v1 · v2) / (|v1| × |v2|)
///
/// Returns angle in degrees:
/// - 180° = straight limb (hip, knee, ankle collinear)
/// - 90° = right-angle bend
///
/// Returns `None` when either ray has zero length; there is no angle to
/// report and the caller must drop the metric.
pub fn vertex_angle(a: Point2D, vertex: Point2D, b: Point2D) -> Option<f32> {
    let v1: Vector2<f32> = a - vertex;
    let v2: Vector2<f32> = b - vertex;

    let mag1 = v1.norm();
    let mag2 = v2.norm();
    if mag1 < MIN_RAY_LENGTH || mag2 < MIN_RAY_LENGTH {
        return None;
    }

    // Clamp: rounding can push the cosine just outside [-1, 1]
    let cos_angle = (v1.dot(&v2) / (mag1 * mag2)).clamp(-1.0, 1.0);
    let angle = cos_angle.acos().to_degrees();

    angle.is_finite().then_some(angle)
}
