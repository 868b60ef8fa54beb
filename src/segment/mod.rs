//! Polyline segments and incremental stitching.
//!
//! This module provides:
//! - [`Segment`]: ordered, non-branching chain of line features with
//!   directional joining and sub-range slicing
//! - [`SegmentCollection`]: greedy stitcher reducing batches of line
//!   features into disjoint chains

pub mod chain;
pub mod collection;

pub use chain::{Segment, SegmentEnd, SegmentJoint};
pub use collection::SegmentCollection;
