//! Geometric line features and the endpoint adjacency test.
//!
//! This module provides:
//! - [`LineFeature`]: line segment defined by its endpoints, with derived
//!   angle, length, and reference point
//! - [`LineJoint`] and [`line_joint`]: which endpoints of two features
//!   coincide within tolerance

pub mod joint;
pub mod line;

pub use joint::{line_joint, LineJoint};
pub use line::LineFeature;
