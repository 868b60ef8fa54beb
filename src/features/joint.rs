//! Endpoint adjacency test for line features.

use super::LineFeature;

/// Which endpoints of two line features coincide.
///
/// Naming is `<first line end><second line end>`: `StartEnd` means the
/// first line's start point touches the second line's end point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineJoint {
    /// First line's start touches the second line's start.
    StartStart,
    /// First line's start touches the second line's end.
    StartEnd,
    /// First line's end touches the second line's start.
    EndStart,
    /// First line's end touches the second line's end.
    EndEnd,
}

/// Test whether two line features share an endpoint within `tolerance`.
///
/// The four endpoint pairs are checked in a fixed priority order
/// (start-start, start-end, end-start, end-end) and the first pair within
/// tolerance wins. The order matters for degenerate near-zero-length
/// features where several endpoints fall in range at once.
pub fn line_joint(line1: &LineFeature, line2: &LineFeature, tolerance: f32) -> Option<LineJoint> {
    if line1.start.distance(&line2.start) <= tolerance {
        Some(LineJoint::StartStart)
    } else if line1.start.distance(&line2.end) <= tolerance {
        Some(LineJoint::StartEnd)
    } else if line1.end.distance(&line2.start) <= tolerance {
        Some(LineJoint::EndStart)
    } else if line1.end.distance(&line2.end) <= tolerance {
        Some(LineJoint::EndEnd)
    } else {
        None
    }
}
