//! Sub-chain alignment search between segments.
//!
//! This module provides:
//! - [`similarity`]: pairwise line similarity score
//! - [`SimilarityMatrix`] and [`compare_segments`]: diagonal run search
//!   over two chains
//! - [`SegmentMatch`]: candidate alignment with estimated rotation,
//!   translation, mirror state, and confidence

pub mod scanner;
pub mod segment_match;
pub mod similarity;

pub use scanner::{compare_segments, SimilarityMatrix};
pub use segment_match::SegmentMatch;
pub use similarity::similarity;
