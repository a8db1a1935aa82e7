//! Greenwich mean sidereal time, IAU 2006.
//!
//! GMST is the Earth rotation angle plus a polynomial in TT centuries that
//! accounts for accumulated precession in right ascension:
//!
//! ```text
//! GMST = ERA + 0.014506″ + 4612.156534″ t + 1.3915817″ t² − 0.00000044″ t³
//!            − 0.000029956″ t⁴ − 0.0000000368″ t⁵
//! ```
//!
//! UT1 drives the rotation term and TT the polynomial, so both dates are
//! needed.

use super::era::era00;
use crate::constants::GMST06_POLYNOMIAL;
use crate::{JulianDate, TimeResult};
use sidereal_core::angle::wrap_0_2pi;
use sidereal_core::constants::ARCSEC_TO_RAD;
use sidereal_core::math::horner;

/// GMST minus ERA in radians for TT centuries `t`.
pub fn gmst_minus_era(t: f64) -> f64 {
    horner(t, &GMST06_POLYNOMIAL) * ARCSEC_TO_RAD
}

/// GMST in [0, 2π) from an already computed ERA.
pub fn gmst_from_era(era: f64, t: f64) -> f64 {
    wrap_0_2pi(era + gmst_minus_era(t))
}

/// `gmst06`: GMST from UT1 and TT Julian Dates.
pub fn gmst06(ut1: &JulianDate, tt: &JulianDate) -> TimeResult<f64> {
    let era = era00(ut1.jd1, ut1.jd2)?;
    Ok(gmst_from_era(era, tt.centuries()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use sidereal_core::constants::{MJD_ZERO_POINT, TWOPI};

    #[test]
    fn test_gmst_matches_sofa() {
        let jd = JulianDate::new(MJD_ZERO_POINT, 53736.0);
        let gmst = gmst06(&jd, &jd).unwrap();
        assert_abs_diff_eq!(gmst, 1.754174971870091203, epsilon = 1e-12);
    }

    #[test]
    fn test_gmst_j2000() {
        let jd = JulianDate::j2000();
        let gmst = gmst06(&jd, &jd).unwrap();
        let hours = gmst * 24.0 / TWOPI;
        assert!(hours > 18.0 && hours < 19.0, "GMST at J2000.0 should be ~18.7 h: {}", hours);
    }

    #[test]
    fn test_gmst_2016_reference() {
        let ut1 = JulianDate::new(2457637.5, 0.0);
        let tt = JulianDate::from_calendar(2016, 9, 6, 0, 1, 8.184);
        assert_abs_diff_eq!(gmst06(&ut1, &tt).unwrap(), 6.030412753668444, epsilon = 1e-12);
    }

    #[test]
    fn test_polynomial_constant_term() {
        assert_abs_diff_eq!(gmst_minus_era(0.0), 0.014506 * ARCSEC_TO_RAD, epsilon = 1e-20);
    }

    #[test]
    fn test_non_finite_ut1_is_rejected() {
        let bad = JulianDate::new(f64::NAN, 0.0);
        assert!(gmst06(&bad, &JulianDate::j2000()).is_err());
    }
}
