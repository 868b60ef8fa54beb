//! Line feature type using endpoint representation.
//!
//! Features are represented by their two endpoints only. Orientation,
//! length, and the reference point are always derived from the endpoints,
//! never stored, so a feature cannot drift into an inconsistent state.

use crate::core::Point2D;

/// A straight line feature defined by its endpoints.
///
/// The start/end distinction carries no meaning for matching: lines are
/// treated as undirected, and angle statistics fold orientations onto the
/// half-turn circle. The endpoints matter only for adjacency tests, where
/// either end may touch either end of a neighbour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineFeature {
    /// Start point of the line.
    pub start: Point2D,
    /// End point of the line.
    pub end: Point2D,
}

impl LineFeature {
    /// Create a new line feature from two endpoints.
    #[inline]
    pub fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }

    /// Direction of the start-to-end ray in radians, in `[-π, π]`.
    ///
    /// Callers that need an undirected orientation fold this through
    /// [`wrap_half_turn`](crate::core::math::wrap_half_turn).
    #[inline]
    pub fn angle(&self) -> f32 {
        let d = self.end - self.start;
        d.y.atan2(d.x)
    }

    /// Length of the feature.
    #[inline]
    pub fn length(&self) -> f32 {
        self.start.distance(&self.end)
    }

    /// Reference point (midpoint) used for position statistics.
    #[inline]
    pub fn midpoint(&self) -> Point2D {
        Point2D::new(
            (self.start.x + self.end.x) * 0.5,
            (self.start.y + self.end.y) * 0.5,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn test_angle() {
        let horizontal = LineFeature::new(Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0));
        assert_relative_eq!(horizontal.angle(), 0.0, epsilon = 1e-6);

        let vertical = LineFeature::new(Point2D::new(5.0, 2.0), Point2D::new(5.0, 12.0));
        assert_relative_eq!(vertical.angle(), FRAC_PI_2, epsilon = 1e-6);

        let diagonal = LineFeature::new(Point2D::new(0.0, 0.0), Point2D::new(-3.0, -3.0));
        assert_relative_eq!(diagonal.angle(), FRAC_PI_4 - std::f32::consts::PI, epsilon = 1e-6);
    }

    #[test]
    fn test_length() {
        let line = LineFeature::new(Point2D::new(1.0, 1.0), Point2D::new(4.0, 5.0));
        assert_relative_eq!(line.length(), 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_midpoint() {
        let line = LineFeature::new(Point2D::new(2.0, 4.0), Point2D::new(8.0, 10.0));
        assert_eq!(line.midpoint(), Point2D::new(5.0, 7.0));
    }

    #[test]
    fn test_derived_values_follow_endpoints() {
        let a = LineFeature::new(Point2D::new(0.0, 0.0), Point2D::new(6.0, 0.0));
        let b = LineFeature::new(Point2D::new(0.0, 0.0), Point2D::new(0.0, 6.0));
        assert_relative_eq!(a.length(), b.length(), epsilon = 1e-6);
        assert!(a.angle() != b.angle());
    }
}
