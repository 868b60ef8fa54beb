//! Core geometry types and angle utilities.
//!
//! This module provides the fundamental types used throughout the crate:
//! - [`Point2D`]: 2D point / displacement vector in map units
//! - [`math`]: angle wrapping and circular difference helpers for
//!   undirected line orientations

pub mod math;
pub mod point;

pub use point::Point2D;
