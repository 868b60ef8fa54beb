//! Ordered, non-branching chains of line features.

use crate::config::MatcherConfig;
use crate::error::MatchError;
use crate::features::{line_joint, LineFeature};
use crate::matching::{compare_segments, SegmentMatch};

/// Which end of a segment takes part in a joint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentEnd {
    /// The first line of the chain.
    Front,
    /// The last line of the chain.
    Back,
}

/// Joint descriptor between two segments: which end of each connects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentJoint {
    /// Connected end of the first segment.
    pub first: SegmentEnd,
    /// Connected end of the second segment.
    pub second: SegmentEnd,
}

/// An ordered chain of line features forming one connected polyline.
///
/// Consecutive lines share an endpoint within the connection tolerance
/// that was in force when the chain was built; the invariant is enforced
/// at join time only. A segment never represents a junction: every line
/// has at most two neighbours.
///
/// A segment absorbed by [`join`](Segment::join) is left empty and should
/// be treated as dead; nothing in the crate reuses absorbed segments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Segment {
    lines: Vec<LineFeature>,
}

impl Segment {
    /// Create an empty segment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a segment holding a single line feature.
    pub fn from_line(line: LineFeature) -> Self {
        Self { lines: vec![line] }
    }

    /// Copy the inclusive index range `[begin, end]` into a new segment.
    ///
    /// When `end < begin` the copied lines are reversed, yielding the
    /// sub-chain walked from `begin` down to `end`.
    ///
    /// # Panics
    /// Panics when either index is out of bounds.
    pub fn slice(&self, begin: usize, end: usize) -> Segment {
        let (lo, hi) = (begin.min(end), begin.max(end));
        let mut lines = self.lines[lo..=hi].to_vec();
        if end < begin {
            lines.reverse();
        }
        Segment { lines }
    }

    /// Lines in chain order.
    #[inline]
    pub fn lines(&self) -> &[LineFeature] {
        &self.lines
    }

    /// Number of lines in the chain.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when the chain holds no lines, e.g. after being absorbed by a
    /// join.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// First line of the chain.
    ///
    /// # Panics
    /// Panics when the segment is empty.
    #[inline]
    pub fn front(&self) -> &LineFeature {
        &self.lines[0]
    }

    /// Last line of the chain.
    ///
    /// # Panics
    /// Panics when the segment is empty.
    #[inline]
    pub fn back(&self) -> &LineFeature {
        &self.lines[self.lines.len() - 1]
    }

    fn reverse(&mut self) {
        self.lines.reverse();
    }

    /// Determine whether this segment connects to `other`, and at which
    /// ends.
    ///
    /// The four end combinations are tested in a fixed order (front-front,
    /// front-back, back-front, back-back) with the line-level adjacency
    /// test; the first hit wins.
    ///
    /// # Panics
    /// Panics when either segment is empty.
    pub fn joint_to(&self, other: &Segment, tolerance: f32) -> Option<SegmentJoint> {
        let self_ends = [
            (SegmentEnd::Front, self.front()),
            (SegmentEnd::Back, self.back()),
        ];
        let other_ends = [
            (SegmentEnd::Front, other.front()),
            (SegmentEnd::Back, other.back()),
        ];
        for (first, line1) in self_ends {
            for (second, line2) in other_ends {
                if line_joint(line1, line2, tolerance).is_some() {
                    return Some(SegmentJoint { first, second });
                }
            }
        }
        None
    }

    /// Join `other` onto this segment.
    ///
    /// The chains are normalized so the joint sits between this segment's
    /// back and `other`'s front: this segment is reversed in place when
    /// the joint is at its front, and `other` is reversed when the joint
    /// is at its back. `other`'s lines are then moved over, leaving it
    /// empty.
    ///
    /// Fails with [`MatchError::LinesUnconnected`], both operands
    /// untouched, when the segments share no endpoint within `tolerance`.
    pub fn join(&mut self, other: &mut Segment, tolerance: f32) -> Result<(), MatchError> {
        let joint = self
            .joint_to(other, tolerance)
            .ok_or(MatchError::LinesUnconnected)?;

        if joint.first == SegmentEnd::Front {
            self.reverse();
        }
        if joint.second == SegmentEnd::Back {
            other.reverse();
        }
        self.lines.append(&mut other.lines);
        Ok(())
    }

    /// Find aligned sub-chain pairs between this segment and `other`.
    ///
    /// Shorthand for [`compare_segments`] with this segment providing the
    /// matrix rows.
    pub fn compare_with(&self, other: &Segment, config: &MatcherConfig) -> Vec<SegmentMatch> {
        compare_segments(self, other, config)
    }
}
