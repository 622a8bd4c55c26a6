//! Segment length and midpoint helpers

use nalgebra::center;

use super::Point2D;

/// Euclidean distance between two image points
pub fn distance(p1: Point2D, p2: Point2D) -> f32 {
    nalgebra::distance(&p1, &p2)
}

/// Midpoint of the segment p1–p2 (hip center, ankle center)
pub fn midpoint(p1: Point2D, p2: Point2D) -> Point2D {
    center(&p1, &p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_ankles() {
        let d = distance(Point2D::new(100.0, 500.0), Point2D::new(140.0, 500.0));
        assert_eq!(d, 40.0);
    }

    #[test]
    fn test_distance_pythagorean() {
        let d = distance(Point2D::new(0.0, 0.0), Point2D::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_midpoint() {
        let m = midpoint(Point2D::new(100.0, 400.0), Point2D::new(140.0, 410.0));
        assert_eq!(m, Point2D::new(120.0, 405.0));
    }
}
