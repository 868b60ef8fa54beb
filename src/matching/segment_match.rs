//! Candidate alignments and their offset estimation.

use std::f32::consts::PI;

use crate::config::ValidationConfig;
use crate::core::math::{circular_diff, deg_to_rad, sq, wrap_half_turn};
use crate::core::Point2D;
use crate::error::MatchError;
use crate::segment::Segment;

/// Number of line pairs at which the confidence length factor saturates.
const CONFIDENCE_LENGTH_SATURATION: f32 = 6.0;

/// A correspondence between a contiguous run of one segment and an
/// equal-length run of another.
///
/// Created by the diagonal scanner with the geometry fields zeroed, then
/// populated by [`compute_offsets`](SegmentMatch::compute_offsets) and
/// immutable afterwards. All angle statistics treat lines as undirected,
/// so the rotation is only meaningful modulo π.
#[derive(Clone, Debug)]
pub struct SegmentMatch {
    segment1: Segment,
    segment2: Segment,
    range1: (usize, usize),
    range2: (usize, usize),
    rotation: f32,
    translation: Point2D,
    flipped: bool,
    confidence: f32,
}

impl SegmentMatch {
    /// Build a candidate from two source segments and the inclusive index
    /// ranges of the aligned runs.
    ///
    /// A range given with `end < begin` slices a reversed sub-chain (the
    /// anti-diagonal case). The stored ranges are normalized to ascending
    /// order.
    ///
    /// # Panics
    /// Panics when a range index is out of bounds for its segment.
    pub fn from_ranges(
        source1: &Segment,
        begin1: usize,
        end1: usize,
        source2: &Segment,
        begin2: usize,
        end2: usize,
    ) -> Self {
        Self {
            segment1: source1.slice(begin1, end1),
            segment2: source2.slice(begin2, end2),
            range1: (begin1.min(end1), begin1.max(end1)),
            range2: (begin2.min(end2), begin2.max(end2)),
            rotation: 0.0,
            translation: Point2D::ZERO,
            flipped: false,
            confidence: 0.0,
        }
    }

    /// Matched sub-chain cut from the first (row) segment.
    #[inline]
    pub fn segment1(&self) -> &Segment {
        &self.segment1
    }

    /// Matched sub-chain cut from the second (column) segment.
    #[inline]
    pub fn segment2(&self) -> &Segment {
        &self.segment2
    }

    /// Inclusive line index range the first sub-chain was cut from.
    #[inline]
    pub fn range1(&self) -> (usize, usize) {
        self.range1
    }

    /// Inclusive line index range the second sub-chain was cut from.
    #[inline]
    pub fn range2(&self) -> (usize, usize) {
        self.range2
    }

    /// Rotation from the first sub-chain's frame to the second's, in
    /// radians, π-periodic.
    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Translation component of the alignment: where the first sub-chain's
    /// reference point lands in the second's frame.
    #[inline]
    pub fn translation(&self) -> Point2D {
        self.translation
    }

    /// True when the winning alignment mirrors the chain instead of
    /// rotating it.
    #[inline]
    pub fn flipped(&self) -> bool {
        self.flipped
    }

    /// Quality score in `[0, 1]`; higher is better.
    #[inline]
    pub fn confidence(&self) -> f32 {
        self.confidence
    }

    /// Estimate rotation, translation, mirror state, and confidence for
    /// this candidate.
    ///
    /// Fails with [`MatchError::SizeMismatch`] when the two runs differ
    /// in length or hold fewer than two lines, and with
    /// [`MatchError::MatchRejected`] when the residual standard
    /// deviations reach the configured limits. The geometry fields are
    /// only written on success.
    pub fn compute_offsets(&mut self, config: &ValidationConfig) -> Result<(), MatchError> {
        let lines1 = self.segment1.lines();
        let lines2 = self.segment2.lines();
        let n = lines1.len();
        if n != lines2.len() || n < 2 {
            return Err(MatchError::SizeMismatch);
        }

        // Orientations are π-periodic: a line at -30° duplicates one at
        // 150°, so all angle arithmetic runs on the half-turn circle.
        let pair_diffs: Vec<f32> = lines1
            .iter()
            .zip(lines2)
            .map(|(l1, l2)| {
                circular_diff(wrap_half_turn(l2.angle()), wrap_half_turn(l1.angle()), PI)
            })
            .collect();
        let angle_offset = pair_diffs.iter().sum::<f32>() / n as f32;
        let angle_variance = pair_diffs
            .iter()
            .map(|d| sq(circular_diff(*d, angle_offset, PI)))
            .sum::<f32>()
            / (n - 1) as f32;
        let angle_std_dev = angle_variance.sqrt();

        // Reference points taken relative to each run's first line are
        // translation invariant; rotating the first run's by the angle
        // offset makes the pairing rotation invariant too.
        let base1 = lines1[0].midpoint();
        let base2 = lines2[0].midpoint();
        let mut displacements = Vec::with_capacity(n - 1);
        let mut mirrored_displacements = Vec::with_capacity(n - 1);
        for (l1, l2) in lines1.iter().zip(lines2).skip(1) {
            let d1 = (l1.midpoint() - base1).rotate(angle_offset);
            let d2 = l2.midpoint() - base2;
            displacements.push(d2 - d1);
            // Mirrored interpretation: swap the axes and negate both.
            let mirrored = Point2D::new(-d2.y, -d2.x);
            mirrored_displacements.push(mirrored - d1);
        }

        let count = (n - 1) as f32;
        let plain_sum_sq: f32 = displacements.iter().map(|d| d.length_squared()).sum();
        let mirrored_sum_sq: f32 = mirrored_displacements.iter().map(|d| d.length_squared()).sum();

        // Ties go to the mirrored interpretation.
        let flipped = plain_sum_sq >= mirrored_sum_sq;
        let chosen = if flipped {
            &mirrored_displacements
        } else {
            &displacements
        };
        let position_std_dev = if flipped {
            (mirrored_sum_sq / count).sqrt()
        } else {
            (plain_sum_sq / count).sqrt()
        };
        let mean_displacement =
            chosen.iter().fold(Point2D::ZERO, |acc, d| acc + *d) * (1.0 / count);

        if angle_std_dev >= deg_to_rad(config.max_angle_deviation_deg)
            || position_std_dev >= config.max_position_deviation
        {
            return Err(MatchError::MatchRejected);
        }

        self.rotation = angle_offset;
        self.translation = mean_displacement + base2 - base1;
        self.flipped = flipped;
        self.confidence = confidence(n, angle_std_dev, position_std_dev, config);
        Ok(())
    }
}

/// Quality score for an accepted match: the product of a run-length
/// factor saturating at [`CONFIDENCE_LENGTH_SATURATION`] line pairs and
/// two residual factors decaying linearly toward the rejection limits.
fn confidence(
    count: usize,
    angle_std_dev: f32,
    position_std_dev: f32,
    config: &ValidationConfig,
) -> f32 {
    let length_factor = (count as f32 / CONFIDENCE_LENGTH_SATURATION).min(1.0);
    let angle_factor =
        (1.0 - angle_std_dev / deg_to_rad(config.max_angle_deviation_deg)).clamp(0.0, 1.0);
    let position_factor =
        (1.0 - position_std_dev / config.max_position_deviation).clamp(0.0, 1.0);
    (length_factor * angle_factor * position_factor).clamp(0.0, 1.0)
}
