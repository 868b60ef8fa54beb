//! Incremental stitching of line features into disjoint segments.

use log::debug;

use crate::config::MatcherConfig;
use crate::features::LineFeature;
use crate::matching::SegmentMatch;

use super::Segment;

/// A set of disjoint polyline segments built incrementally from line
/// features.
///
/// After a batch of lines has been processed, no two entries are
/// endpoint-connected: every line that could extend or bridge existing
/// chains has been folded in. Intermediate states during a batch may hold
/// connected entries; they are reduced before the batch returns.
///
/// Stitching is greedy, single-pass, and order-dependent. It assumes
/// modest input sizes and a connection tolerance tight enough that false
/// joins are rare.
#[derive(Clone, Debug, Default)]
pub struct SegmentCollection {
    segments: Vec<Segment>,
    config: MatcherConfig,
}

impl SegmentCollection {
    /// Create an empty collection with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty collection with the given configuration.
    pub fn with_config(config: MatcherConfig) -> Self {
        Self {
            segments: Vec::new(),
            config,
        }
    }

    /// Segments currently held, in insertion order.
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments held.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True when no segments are held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Insert a pre-built segment as its own entry. No joining is
    /// attempted.
    pub fn add_segment(&mut self, segment: &Segment) {
        self.segments.push(segment.clone());
    }

    /// Stitch a batch of line features into the collection.
    ///
    /// Lines are processed in input order. Each line starts a fresh chain
    /// that is offered to every live entry in turn; entries that connect
    /// are absorbed into the chain, and the scan continues, because a
    /// single line can bridge two previously disjoint chains. The grown
    /// chain is then stored as a new entry. Entries absorbed along the
    /// way are left empty in place and compacted away once the whole
    /// batch has been processed.
    ///
    /// An ambiguous junction goes to the first qualifying entry in
    /// collection order.
    pub fn add_lines(&mut self, lines: &[LineFeature]) {
        let tolerance = self.config.stitching.connection_tolerance;
        for line in lines {
            let mut chain = Segment::from_line(*line);
            for slot in self.segments.iter_mut() {
                if slot.is_empty() {
                    continue;
                }
                // A failed join leaves both operands untouched; keep
                // offering the chain to the remaining entries either way.
                let _ = chain.join(slot, tolerance);
            }
            self.segments.push(chain);
        }
        self.segments.retain(|segment| !segment.is_empty());
        debug!(
            "[Stitch] batch of {} lines -> {} segments",
            lines.len(),
            self.segments.len()
        );
    }

    /// Match every segment of this collection against every segment of
    /// `other`, returning all valid alignments in one list.
    ///
    /// `other` supplies the outer loop; each of this collection's
    /// segments provides the matrix rows, and therefore the first
    /// sub-chain of every resulting match. No deduplication or ranking is
    /// applied across segment pairs.
    pub fn match_segments(&self, other: &SegmentCollection) -> Vec<SegmentMatch> {
        let mut matches = Vec::new();
        for other_segment in other.segments() {
            for segment in &self.segments {
                matches.extend(segment.compare_with(other_segment, &self.config));
            }
        }
        debug!(
            "[Match] {}x{} segment pairs -> {} matches",
            self.segments.len(),
            other.segments.len(),
            matches.len()
        );
        matches
    }

    /// Remove all segments. Configuration is retained.
    pub fn clear(&mut self) {
        self.segments.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Point2D;

    fn line(x1: f32, y1: f32, x2: f32, y2: f32) -> LineFeature {
        LineFeature::new(Point2D::new(x1, y1), Point2D::new(x2, y2))
    }

    /// Same line set regardless of endpoint direction or storage order.
    fn holds_lines(segment: &Segment, expected: &[LineFeature]) -> bool {
        if segment.len() != expected.len() {
            return false;
        }
        expected.iter().all(|e| {
            segment.lines().iter().any(|l| {
                (l.start == e.start && l.end == e.end) || (l.start == e.end && l.end == e.start)
            })
        })
    }

    #[test]
    fn test_add_lines_joins_connected_and_keeps_disjoint() {
        let diagonal = line(21.0, 33.0, 57.0, 69.0);
        let horizontal = line(21.0, 69.0, 57.0, 69.0);
        let lone = line(82.0, 12.0, 82.0, 51.0);

        let mut collection = SegmentCollection::new();
        collection.add_lines(&[diagonal, horizontal, lone]);

        assert_eq!(collection.len(), 2);
        assert!(holds_lines(&collection.segments()[0], &[diagonal, horizontal]));
        assert!(holds_lines(&collection.segments()[1], &[lone]));
    }

    #[test]
    fn test_add_lines_bridges_two_chains() {
        let left = line(0.0, 0.0, 10.0, 0.0);
        let right = line(20.0, 0.0, 30.0, 0.0);
        let bridge = line(10.0, 0.0, 20.0, 0.0);

        let mut collection = SegmentCollection::new();
        // The bridge arrives last and fuses both ends into one chain.
        collection.add_lines(&[left, right, bridge]);

        assert_eq!(collection.len(), 1);
        assert_eq!(collection.segments()[0].len(), 3);
        assert!(holds_lines(&collection.segments()[0], &[left, right, bridge]));
    }

    #[test]
    fn test_add_lines_across_batches() {
        let mut collection = SegmentCollection::new();
        collection.add_lines(&[line(0.0, 0.0, 10.0, 0.0)]);
        assert_eq!(collection.len(), 1);

        // A later batch extends the chain stitched by the earlier one.
        collection.add_lines(&[line(10.0, 0.0, 10.0, 10.0)]);
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.segments()[0].len(), 2);
    }

    #[test]
    fn test_add_segment_never_joins() {
        let mut collection = SegmentCollection::new();
        collection.add_segment(&Segment::from_line(line(0.0, 0.0, 10.0, 0.0)));
        collection.add_segment(&Segment::from_line(line(10.0, 0.0, 20.0, 0.0)));
        // Adjacent, but add_segment stores entries verbatim.
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_tolerance_gates_joining() {
        let config = MatcherConfig {
            stitching: crate::config::StitchingConfig::new().with_connection_tolerance(0.5),
            ..Default::default()
        };
        let mut collection = SegmentCollection::with_config(config);
        // Endpoints 2 units apart: joined under the default tolerance,
        // separate under 0.5.
        collection.add_lines(&[line(0.0, 0.0, 10.0, 0.0), line(12.0, 0.0, 20.0, 0.0)]);
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut collection = SegmentCollection::new();
        collection.add_lines(&[line(0.0, 0.0, 10.0, 0.0)]);
        collection.clear();
        assert!(collection.is_empty());
    }
}
