//! IAU 2006 precession in the Fukushima-Williams parameterization.
//!
//! Four angles orient the mean equator and equinox of date relative to the
//! GCRS, frame bias included:
//! - **γ̄ (gamb)**: GCRS right ascension of the intersection of the ecliptic of
//!   date and the GCRS equator
//! - **φ̄ (phib)**: obliquity of the ecliptic of date on the GCRS equator
//! - **ψ̄ (psib)**: precession angle along the ecliptic of date
//! - **εA (epsa)**: mean obliquity of date
//!
//! All four are fifth-degree polynomials in Julian centuries (TT) from
//! J2000.0, with coefficients in arcseconds.
//!
//! # References
//!
//! - Hilton, J.L., et al. (2006), Celest. Mech. Dyn. Astron. 94, 351-367
//! - Capitaine, N., Wallace, P.T., & Chapront, J. (2003), A&A 412, 567-586
//! - Wallace, P.T. & Capitaine, N. (2006), A&A 459, 981-985

use super::fw::fw2m;
use crate::constants::{ARCSEC_TO_RAD, DAYS_PER_JULIAN_CENTURY, J2000_JD};
use crate::math::horner;
use crate::matrix::RotationMatrix3;

#[allow(clippy::excessive_precision)]
const GAMB: [f64; 6] = [
    -0.052928,
    10.556378,
    0.4932044,
    -0.00031238,
    -0.000002788,
    0.0000000260,
];

#[allow(clippy::excessive_precision)]
const PHIB: [f64; 6] = [
    84381.412819,
    -46.811016,
    0.0511268,
    0.00053289,
    -0.000000440,
    -0.0000000176,
];

#[allow(clippy::excessive_precision)]
const PSIB: [f64; 6] = [
    -0.041775,
    5038.481484,
    1.5584175,
    -0.00018522,
    -0.000026452,
    -0.0000000148,
];

#[allow(clippy::excessive_precision)]
const EPSA: [f64; 6] = [
    84381.406,
    -46.836769,
    -0.0001831,
    0.00200340,
    -0.000000576,
    -0.0000000434,
];

/// Mean obliquity of the ecliptic, IAU 2006, in radians.
///
/// ```
/// use sidereal_core::precession::obl06;
///
/// let eps = obl06(0.0);
/// assert!((eps - 84381.406 / 206264.80624709636).abs() < 1e-15);
/// ```
pub fn obl06(t: f64) -> f64 {
    horner(t, &EPSA) * ARCSEC_TO_RAD
}

/// The four Fukushima-Williams angles at one epoch, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FukushimaWilliamsAngles {
    pub gamb: f64,
    pub phib: f64,
    pub psib: f64,
    pub epsa: f64,
}

impl FukushimaWilliamsAngles {
    /// `pfw06`: IAU 2006 angles at `t` Julian centuries (TT) from J2000.0.
    pub fn iau2006(t: f64) -> Self {
        Self {
            gamb: horner(t, &GAMB) * ARCSEC_TO_RAD,
            phib: horner(t, &PHIB) * ARCSEC_TO_RAD,
            psib: horner(t, &PSIB) * ARCSEC_TO_RAD,
            epsa: obl06(t),
        }
    }

    /// Same as [`iau2006`](Self::iau2006) for a two-part TT Julian Date.
    pub fn from_jd(jd1: f64, jd2: f64) -> Self {
        Self::iau2006(((jd1 - J2000_JD) + jd2) / DAYS_PER_JULIAN_CENTURY)
    }

    /// Bias-precession-nutation matrix, GCRS to true equator and equinox of
    /// date: nutation enters as `ψ̄ + Δψ` and `εA + Δε`.
    pub fn npb_matrix(&self, dpsi: f64, deps: f64) -> RotationMatrix3 {
        fw2m(self.gamb, self.phib, self.psib + dpsi, self.epsa + deps)
    }
}
