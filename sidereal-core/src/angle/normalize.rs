//! Angle normalization for sidereal quantities.
//!
//! Every sidereal angle this crate reports (ERA, GAST, GMST) lives in [0, 2π).
//! [`wrap_0_2pi`] reduces an arbitrary finite angle into that range.
//!
//! # Algorithm Notes
//!
//! The reduction first applies `libm::fmod` (via [`crate::math::fmod`]) so that
//! the number of correction steps is bounded regardless of magnitude, then
//! adds or subtracts whole turns until the value is in range. The second loop
//! also catches the case where a tiny negative value plus 2π rounds to exactly
//! 2π, which would otherwise leak out of the half-open interval.
//!
//! ```
//! use sidereal_core::angle::wrap_0_2pi;
//! use std::f64::consts::PI;
//!
//! let a = wrap_0_2pi(-0.5);
//! assert!(a > 0.0 && a < 2.0 * PI);
//! assert_eq!(wrap_0_2pi(a), a);
//! ```

use crate::constants::TWOPI;
use crate::math::fmod;

/// Wraps an angle to [0, 2π) radians.
///
/// NaN and infinite inputs come back as NaN; the function always terminates.
#[inline]
pub fn wrap_0_2pi(x: f64) -> f64 {
    let mut w = fmod(x, TWOPI);
    while w < 0.0 {
        w += TWOPI;
    }
    while w >= TWOPI {
        w -= TWOPI;
    }
    w
}
