//! Angle utilities for undirected line orientations.
//!
//! Line features are undirected: a wall traced left to right describes
//! the same orientation as the reverse trace, so orientations repeat
//! every half turn. The helpers here work on an arbitrary period so the
//! same difference function serves both the full-circle comparisons used
//! by the similarity scorer and the half-turn statistics used by offset
//! estimation.

use std::f32::consts::PI;

/// Two times PI (full circle in radians).
pub const TWO_PI: f32 = 2.0 * PI;

/// Map an angle into `[0, π)`.
///
/// # Example
/// ```
/// use naksha_match::core::math::wrap_half_turn;
/// use std::f32::consts::{FRAC_PI_2, PI};
///
/// assert!((wrap_half_turn(-FRAC_PI_2) - FRAC_PI_2).abs() < 1e-6);
/// assert!(wrap_half_turn(PI).abs() < 1e-6);
/// assert!((wrap_half_turn(0.75 * PI) - 0.75 * PI).abs() < 1e-6);
/// ```
#[inline]
pub fn wrap_half_turn(angle: f32) -> f32 {
    let mut a = angle % PI;
    if a < 0.0 {
        a += PI;
    }
    a
}

/// Signed circular difference `a - b` reduced into `(-period/2, period/2]`.
///
/// A raw difference landing exactly on the boundary magnitude is always
/// returned as `+period/2`, never `-period/2`.
///
/// # Example
/// ```
/// use naksha_match::core::math::{circular_diff, TWO_PI};
/// use std::f32::consts::{FRAC_PI_2, PI};
///
/// // Shortest signed arc on the full circle
/// assert!((circular_diff(0.0, 1.5 * PI, TWO_PI) - FRAC_PI_2).abs() < 1e-6);
///
/// // Quarter-turn boundary on the half-turn circle collapses to +π/2
/// assert!((circular_diff(FRAC_PI_2, 0.0, PI) - FRAC_PI_2).abs() < 1e-6);
/// assert!((circular_diff(0.0, FRAC_PI_2, PI) - FRAC_PI_2).abs() < 1e-6);
/// ```
#[inline]
pub fn circular_diff(a: f32, b: f32, period: f32) -> f32 {
    let half = period * 0.5;
    let mut d = (a - b) % period;
    if d > half {
        d -= period;
    } else if d <= -half {
        d += period;
    }
    d
}

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * PI / 180.0
}

/// Convert radians to degrees.
#[inline]
pub fn rad_to_deg(rad: f32) -> f32 {
    rad * 180.0 / PI
}

/// Square of a value. Useful for avoiding `powi(2)`.
#[inline]
pub fn sq(x: f32) -> f32 {
    x * x
}
