//! Pairwise similarity scoring for line features.

use crate::config::SimilarityConfig;
use crate::core::math::{circular_diff, deg_to_rad, TWO_PI};
use crate::features::LineFeature;

/// Score how alike two line features are, in `[0, 1]`.
///
/// The score is the product of two linear decay weights: an angle weight
/// that reaches zero at `angle_tolerance_deg` of full-circle angular
/// difference, and a length weight that reaches zero at
/// `length_tolerance` of length difference.
///
/// With `angle_invariant` set, the angle weight is pinned to 1. This is
/// how the diagonal scanner calls it: the rotation between two chains is
/// unknown until offset estimation, so only lengths can be compared.
pub fn similarity(
    line1: &LineFeature,
    line2: &LineFeature,
    angle_invariant: bool,
    config: &SimilarityConfig,
) -> f32 {
    let angle_weight = if angle_invariant {
        1.0
    } else {
        let tolerance = deg_to_rad(config.angle_tolerance_deg);
        let diff = circular_diff(line1.angle(), line2.angle(), TWO_PI);
        (1.0 - diff.abs() / tolerance).max(0.0)
    };

    let length_weight =
        (1.0 - (line1.length() - line2.length()).abs() / config.length_tolerance).max(0.0);

    angle_weight * length_weight
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Point2D;
    use approx::assert_relative_eq;

    fn line(x1: f32, y1: f32, x2: f32, y2: f32) -> LineFeature {
        LineFeature::new(Point2D::new(x1, y1), Point2D::new(x2, y2))
    }

    #[test]
    fn test_identical_lines_score_one() {
        let a = line(0.0, 0.0, 20.0, 0.0);
        let config = SimilarityConfig::default();
        assert_relative_eq!(similarity(&a, &a, false, &config), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_length_weight_decays_linearly() {
        let a = line(0.0, 0.0, 20.0, 0.0);
        let b = line(0.0, 0.0, 26.0, 0.0);
        let config = SimilarityConfig::default();
        // 6 units of difference against a tolerance of 11.
        assert_relative_eq!(
            similarity(&a, &b, false, &config),
            1.0 - 6.0 / 11.0,
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_length_gap_at_tolerance_scores_zero() {
        let a = line(0.0, 0.0, 20.0, 0.0);
        let b = line(0.0, 0.0, 31.0, 0.0);
        let config = SimilarityConfig::default();
        assert_relative_eq!(similarity(&a, &b, false, &config), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_angle_weight_decays_linearly() {
        let a = line(0.0, 0.0, 20.0, 0.0);
        // 5 degrees off, equal length.
        let angle = deg_to_rad(5.0);
        let b = line(0.0, 0.0, 20.0 * angle.cos(), 20.0 * angle.sin());
        let config = SimilarityConfig::default();
        assert_relative_eq!(similarity(&a, &b, false, &config), 0.5, epsilon = 1e-4);
    }

    #[test]
    fn test_angle_invariant_ignores_orientation() {
        let a = line(0.0, 0.0, 20.0, 0.0);
        let b = line(0.0, 0.0, 0.0, 20.0);
        let config = SimilarityConfig::default();
        // Perpendicular but the same length.
        assert_relative_eq!(similarity(&a, &b, true, &config), 1.0, epsilon = 1e-6);
        assert_relative_eq!(similarity(&a, &b, false, &config), 0.0, epsilon = 1e-6);
    }
}
