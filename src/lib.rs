//! # Naksha-Match: Floor-Plan Fragment Localization
//!
//! A matching library that finds where a known floor-plan fragment
//! ("blueprint") sits inside a larger occupancy map. Both images are
//! assumed to be reduced to straight line features by an external
//! detector; this crate chains those features into polylines and then
//! searches for sub-chains of one set that align, after some rotation
//! and translation, with sub-chains of the other.
//!
//! ## Features
//!
//! - **Incremental stitching**: line features are folded into ordered,
//!   non-branching chains as they arrive; a single new line can bridge
//!   two previously separate chains
//! - **Angle-invariant candidate search**: a similarity matrix over two
//!   chains is scanned along both diagonal families, so aligned runs are
//!   found at any relative rotation, walked forward or backward
//! - **Circular statistics**: line orientations are treated as
//!   π-periodic (a wall traced either way is the same wall), with offset
//!   estimation on the half-turn circle
//! - **Mirror detection**: every candidate is also scored against its
//!   mirrored interpretation, catching fragments seen from the far side
//! - **Blueprint registry**: named fragments with anchor points, located
//!   in a map with one call
//!
//! ## Quick Start
//!
//! ```rust
//! use naksha_match::{LineFeature, Point2D, SegmentCollection};
//!
//! // A map whose walls form a staircase of four connected lines.
//! let map_lines = [
//!     LineFeature::new(Point2D::new(26.0, 21.0), Point2D::new(26.0, 75.0)),
//!     LineFeature::new(Point2D::new(26.0, 75.0), Point2D::new(86.0, 75.0)),
//!     LineFeature::new(Point2D::new(86.0, 75.0), Point2D::new(86.0, 135.0)),
//!     LineFeature::new(Point2D::new(86.0, 135.0), Point2D::new(146.0, 135.0)),
//! ];
//! // A blueprint covering one corner of it.
//! let blueprint_lines = [
//!     LineFeature::new(Point2D::new(26.0, 21.0), Point2D::new(26.0, 75.0)),
//!     LineFeature::new(Point2D::new(26.0, 75.0), Point2D::new(86.0, 75.0)),
//! ];
//!
//! let mut map = SegmentCollection::new();
//! map.add_lines(&map_lines);
//! assert_eq!(map.len(), 1); // all four lines stitched into one chain
//!
//! let mut blueprint = SegmentCollection::new();
//! blueprint.add_lines(&blueprint_lines);
//!
//! // The corner fits the staircase in three places, one of them only as
//! // a mirror image.
//! let matches = map.match_segments(&blueprint);
//! assert_eq!(matches.len(), 3);
//! assert_eq!(matches.iter().filter(|m| m.flipped()).count(), 1);
//! ```
//!
//! ## Coordinate Frame
//!
//! Coordinates follow the source imagery convention: X grows to the
//! right, Y grows downward, angles are measured counter-clockwise from
//! the +X axis in the mathematical sense. All geometry is `f32`, in the
//! units of the line detector that produced the features.
//!
//! ## Architecture
//!
//! The library is organized into modules:
//!
//! - [`core`]: fundamental types (Point2D, angle utilities)
//! - [`features`]: line features and the endpoint adjacency test
//! - [`segment`]: polyline chains and the incremental stitcher
//! - [`matching`]: similarity matrix, diagonal scanner, offset estimator
//! - [`locate`]: blueprint registry and map-frame placements
//! - [`config`]: YAML-loadable tuning knobs for every stage
//! - [`error`]: the crate-level error type
//!
//! ## Data Flow
//!
//! ```text
//!   map line features        blueprint line features
//!          │                          │
//!          ▼                          ▼
//!   ┌──────────────┐          ┌──────────────┐
//!   │ Segment      │          │ Segment      │
//!   │ Collection   │          │ Collection   │
//!   │ (stitching)  │          │ (stitching)  │
//!   └──────┬───────┘          └──────┬───────┘
//!          │                         │
//!          └────────┬────────────────┘
//!                   ▼
//!          ┌─────────────────┐
//!          │ match_segments  │  similarity matrix per segment pair,
//!          │ (diagonal scan) │  runs on both diagonal families
//!          └────────┬────────┘
//!                   ▼
//!          ┌─────────────────┐
//!          │  SegmentMatch   │  rotation, translation, mirror flag,
//!          │ (offset checks) │  confidence; misfits rejected
//!          └────────┬────────┘
//!                   ▼
//!          ┌─────────────────┐
//!          │ BlueprintIndex  │  anchor positions in map frame
//!          │    ::locate     │
//!          └─────────────────┘
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: batch summaries and
//! accepted matches at `debug`, similarity matrices and rejected
//! candidates at `trace`. No logger is initialized by the library.

pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod locate;
pub mod matching;
pub mod segment;

pub use config::{
    ConfigError, MatcherConfig, ScanningConfig, SimilarityConfig, StitchingConfig,
    ValidationConfig,
};
pub use core::Point2D;
pub use error::MatchError;
pub use features::{line_joint, LineFeature, LineJoint};
pub use locate::{Blueprint, BlueprintIndex, Placement};
pub use matching::{compare_segments, similarity, SegmentMatch, SimilarityMatrix};
pub use segment::{Segment, SegmentCollection, SegmentEnd, SegmentJoint};
