//! Equation of the origins.
//!
//! The equation of the origins (EO) is the arc on the CIP equator from the
//! CIO to the true equinox of date. It links the Earth rotation angle to
//! apparent sidereal time:
//!
//! ```text
//! GAST = ERA - EO
//! ```
//!
//! EO is dominated by accumulated precession in right ascension and is about
//! -0.2° today, changing by roughly 46″ per year.

use crate::matrix::RotationMatrix3;

/// `eors`: equation of the origins in radians from the NPB matrix and the
/// CIO locator `s`.
///
/// Finds the equinox direction in the CIO-based frame and takes the arc to it
/// (Wallace & Capitaine 2006, eq. 16). The result is not normalized.
pub fn eors(npb: &RotationMatrix3, s: f64) -> f64 {
    let m = npb.elements();

    let x = m[2][0];
    let ax = x / (1.0 + m[2][2]);
    let xs = 1.0 - ax * x;
    let ys = -ax * m[2][1];
    let zs = -x;

    let p = m[0][0] * xs + m[0][1] * ys + m[0][2] * zs;
    let q = m[1][0] * xs + m[1][1] * ys + m[1][2] * zs;

    if p != 0.0 || q != 0.0 {
        s - libm::atan2(q, p)
    } else {
        s
    }
}
