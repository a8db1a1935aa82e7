//! CIO locator `s` for the IAU 2006/2000A precession-nutation model.
//!
//! The locator positions the Celestial Intermediate Origin on the CIP equator.
//! It is evaluated as a polynomial plus five small Fourier series, one per
//! power of t, in eight fundamental arguments:
//!
//! ```text
//! s = (w0 + (w1 + (w2 + (w3 + (w4 + w5·t)·t)·t)·t)·t) - X·Y/2
//! ```
//!
//! where `w_k` is the order-k polynomial coefficient plus its series, in
//! arcseconds. The series coefficients form an immutable dataset carried by
//! [`CioLocatorSeries`]; [`CioLocatorSeries::iau2006`] builds the standard one.
//!
//! # References
//!
//! - Capitaine et al. (2003), A&A 400, 1145-1154
//! - IERS Conventions (2003), Chapter 5, Table 5.2c

use crate::constants::ARCSEC_TO_RAD;
use crate::errors::{AstroError, AstroResult, MathErrorKind};
use crate::nutation::IERS2003FundamentalArgs;

/// One periodic term: multipliers of (l, l', F, D, Ω, LVe, LE, pA) and the
/// sine and cosine amplitudes in arcseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocatorTerm {
    pub multipliers: [i8; 8],
    pub sin: f64,
    pub cos: f64,
}

impl LocatorTerm {
    pub const fn new(multipliers: [i8; 8], sin: f64, cos: f64) -> Self {
        Self {
            multipliers,
            sin,
            cos,
        }
    }

    #[inline]
    fn argument(&self, fa: &[f64; 8]) -> f64 {
        self.multipliers
            .iter()
            .zip(fa)
            .map(|(&n, &a)| n as f64 * a)
            .sum()
    }
}

/// Polynomial and series coefficients of the CIO locator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CioLocatorSeries {
    polynomial: [f64; 6],
    terms: [Vec<LocatorTerm>; 5],
}

impl Default for CioLocatorSeries {
    fn default() -> Self {
        Self::iau2006()
    }
}

impl CioLocatorSeries {
    /// Builds a series from polynomial coefficients (arcseconds, t⁰..t⁵) and
    /// the periodic terms for t⁰..t⁴.
    pub fn new(polynomial: [f64; 6], terms: [Vec<LocatorTerm>; 5]) -> Self {
        Self { polynomial, terms }
    }

    /// The IAU 2006/2000A series: 66 periodic terms.
    pub fn iau2006() -> Self {
        Self::new(
            POLYNOMIAL,
            [
                TERMS_T0.to_vec(),
                TERMS_T1.to_vec(),
                TERMS_T2.to_vec(),
                TERMS_T3.to_vec(),
                TERMS_T4.to_vec(),
            ],
        )
    }

    pub fn term_count(&self) -> usize {
        self.terms.iter().map(Vec::len).sum()
    }

    /// `s + X·Y/2` in radians, the part of the locator that depends only on time.
    pub fn series(&self, t: f64) -> f64 {
        let fa = locator_arguments(t);

        let mut w = self.polynomial;
        for (order, terms) in self.terms.iter().enumerate() {
            for term in terms.iter().rev() {
                let (sa, ca) = term.argument(&fa).sin_cos();
                w[order] += term.sin * sa + term.cos * ca;
            }
        }

        (w[0] + (w[1] + (w[2] + (w[3] + (w[4] + w[5] * t) * t) * t) * t) * t) * ARCSEC_TO_RAD
    }

    /// CIO locator `s` in radians given TT centuries and the CIP coordinates.
    pub fn s06(&self, t: f64, x: f64, y: f64) -> AstroResult<f64> {
        if !t.is_finite() || !x.is_finite() || !y.is_finite() {
            return Err(AstroError::math_error(
                "CIO locator",
                MathErrorKind::NotFinite,
                &format!("non-finite input: t={}, X={}, Y={}", t, x, y),
            ));
        }
        Ok(self.series(t) - x * y / 2.0)
    }
}

/// The CIO locator evaluated at a fixed epoch.
///
/// ```
/// use sidereal_core::cio::{CioLocator, CioLocatorSeries};
///
/// let series = CioLocatorSeries::iau2006();
/// let locator = CioLocator::new(&series, 0.06);
/// let s = locator.calculate(0.5791308486706011000e-3, 0.4020579816732961219e-4).unwrap();
/// assert!((s + 0.1220032213076463117e-7).abs() < 1e-17);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CioLocator<'a> {
    series: &'a CioLocatorSeries,
    tt_centuries: f64,
}

impl<'a> CioLocator<'a> {
    pub fn new(series: &'a CioLocatorSeries, tt_centuries: f64) -> Self {
        Self {
            series,
            tt_centuries,
        }
    }

    pub fn tt_centuries(&self) -> f64 {
        self.tt_centuries
    }

    pub fn calculate(&self, x: f64, y: f64) -> AstroResult<f64> {
        self.series.s06(self.tt_centuries, x, y)
    }
}

/// (l, l', F, D, Ω, LVe, LE, pA), all from IERS 2003.
fn locator_arguments(t: f64) -> [f64; 8] {
    [
        t.moon_mean_anomaly(),
        t.sun_mean_anomaly(),
        t.mean_argument_of_latitude(),
        t.mean_elongation(),
        t.moon_ascending_node_longitude(),
        t.venus_lng(),
        t.earth_lng(),
        t.precession(),
    ]
}

#[allow(clippy::excessive_precision)]
const POLYNOMIAL: [f64; 6] = [
    94.00e-6,
    3808.65e-6,
    -122.68e-6,
    -72574.11e-6,
    27.98e-6,
    15.62e-6,
];

#[allow(clippy::excessive_precision)]
const TERMS_T0: [LocatorTerm; 33] = [
    LocatorTerm::new([0, 0, 0, 0, 1, 0, 0, 0], -2640.73e-6, 0.39e-6),
    LocatorTerm::new([0, 0, 0, 0, 2, 0, 0, 0], -63.53e-6, 0.02e-6),
    LocatorTerm::new([0, 0, 2, -2, 3, 0, 0, 0], -11.75e-6, -0.01e-6),
    LocatorTerm::new([0, 0, 2, -2, 1, 0, 0, 0], -11.21e-6, -0.01e-6),
    LocatorTerm::new([0, 0, 2, -2, 2, 0, 0, 0], 4.57e-6, 0.00e-6),
    LocatorTerm::new([0, 0, 2, 0, 3, 0, 0, 0], -2.02e-6, 0.00e-6),
    LocatorTerm::new([0, 0, 2, 0, 1, 0, 0, 0], -1.98e-6, 0.00e-6),
    LocatorTerm::new([0, 0, 0, 0, 3, 0, 0, 0], 1.72e-6, 0.00e-6),
    LocatorTerm::new([0, 1, 0, 0, 1, 0, 0, 0], 1.41e-6, 0.01e-6),
    LocatorTerm::new([0, 1, 0, 0, -1, 0, 0, 0], 1.26e-6, 0.01e-6),
    LocatorTerm::new([1, 0, 0, 0, -1, 0, 0, 0], 0.63e-6, 0.00e-6),
    LocatorTerm::new([1, 0, 0, 0, 1, 0, 0, 0], 0.63e-6, 0.00e-6),
    LocatorTerm::new([0, 1, 2, -2, 3, 0, 0, 0], -0.46e-6, 0.00e-6),
    LocatorTerm::new([0, 1, 2, -2, 1, 0, 0, 0], -0.45e-6, 0.00e-6),
    LocatorTerm::new([0, 0, 4, -4, 4, 0, 0, 0], -0.36e-6, 0.00e-6),
    LocatorTerm::new([0, 0, 1, -1, 1, -8, 12, 0], 0.24e-6, 0.12e-6),
    LocatorTerm::new([0, 0, 2, 0, 0, 0, 0, 0], -0.32e-6, 0.00e-6),
    LocatorTerm::new([0, 0, 2, 0, 2, 0, 0, 0], -0.28e-6, 0.00e-6),
    LocatorTerm::new([1, 0, 2, 0, 3, 0, 0, 0], -0.27e-6, 0.00e-6),
    LocatorTerm::new([1, 0, 2, 0, 1, 0, 0, 0], -0.26e-6, 0.00e-6),
    LocatorTerm::new([0, 0, 2, -2, 0, 0, 0, 0], 0.21e-6, 0.00e-6),
    LocatorTerm::new([0, 1, -2, 2, -3, 0, 0, 0], -0.19e-6, 0.00e-6),
    LocatorTerm::new([0, 1, -2, 2, -1, 0, 0, 0], -0.18e-6, 0.00e-6),
    LocatorTerm::new([0, 0, 0, 0, 0, 8, -13, -1], 0.10e-6, -0.05e-6),
    LocatorTerm::new([0, 0, 0, 2, 0, 0, 0, 0], -0.15e-6, 0.00e-6),
    LocatorTerm::new([2, 0, -2, 0, -1, 0, 0, 0], 0.14e-6, 0.00e-6),
    LocatorTerm::new([0, 1, 2, -2, 2, 0, 0, 0], 0.14e-6, 0.00e-6),
    LocatorTerm::new([1, 0, 0, -2, 1, 0, 0, 0], -0.14e-6, 0.00e-6),
    LocatorTerm::new([1, 0, 0, -2, -1, 0, 0, 0], -0.14e-6, 0.00e-6),
    LocatorTerm::new([0, 0, 4, -2, 4, 0, 0, 0], -0.13e-6, 0.00e-6),
    LocatorTerm::new([0, 0, 2, -2, 4, 0, 0, 0], 0.11e-6, 0.00e-6),
    LocatorTerm::new([1, 0, -2, 0, -3, 0, 0, 0], -0.11e-6, 0.00e-6),
    LocatorTerm::new([1, 0, -2, 0, -1, 0, 0, 0], -0.11e-6, 0.00e-6),
];

#[allow(clippy::excessive_precision)]
const TERMS_T1: [LocatorTerm; 3] = [
    LocatorTerm::new([0, 0, 0, 0, 2, 0, 0, 0], -0.07e-6, 3.57e-6),
    LocatorTerm::new([0, 0, 0, 0, 1, 0, 0, 0], 1.73e-6, -0.03e-6),
    LocatorTerm::new([0, 0, 2, -2, 3, 0, 0, 0], 0.00e-6, 0.48e-6),
];

#[allow(clippy::excessive_precision)]
const TERMS_T2: [LocatorTerm; 25] = [
    LocatorTerm::new([0, 0, 0, 0, 1, 0, 0, 0], 743.52e-6, -0.17e-6),
    LocatorTerm::new([0, 0, 2, -2, 2, 0, 0, 0], 56.91e-6, 0.06e-6),
    LocatorTerm::new([0, 0, 2, 0, 2, 0, 0, 0], 9.84e-6, -0.01e-6),
    LocatorTerm::new([0, 0, 0, 0, 2, 0, 0, 0], -8.85e-6, 0.01e-6),
    LocatorTerm::new([0, 1, 0, 0, 0, 0, 0, 0], -6.38e-6, -0.05e-6),
    LocatorTerm::new([1, 0, 0, 0, 0, 0, 0, 0], -3.07e-6, 0.00e-6),
    LocatorTerm::new([0, 1, 2, -2, 2, 0, 0, 0], 2.23e-6, 0.00e-6),
    LocatorTerm::new([0, 0, 2, 0, 1, 0, 0, 0], 1.67e-6, 0.00e-6),
    LocatorTerm::new([1, 0, 2, 0, 2, 0, 0, 0], 1.30e-6, 0.00e-6),
    LocatorTerm::new([0, 1, -2, 2, -2, 0, 0, 0], 0.93e-6, 0.00e-6),
    LocatorTerm::new([1, 0, 0, -2, 0, 0, 0, 0], 0.68e-6, 0.00e-6),
    LocatorTerm::new([0, 0, 2, -2, 1, 0, 0, 0], -0.55e-6, 0.00e-6),
    LocatorTerm::new([1, 0, -2, 0, -2, 0, 0, 0], 0.53e-6, 0.00e-6),
    LocatorTerm::new([0, 0, 0, 2, 0, 0, 0, 0], -0.27e-6, 0.00e-6),
    LocatorTerm::new([1, 0, 0, 0, 1, 0, 0, 0], -0.27e-6, 0.00e-6),
    LocatorTerm::new([1, 0, -2, -2, -2, 0, 0, 0], -0.26e-6, 0.00e-6),
    LocatorTerm::new([1, 0, 0, 0, -1, 0, 0, 0], -0.25e-6, 0.00e-6),
    LocatorTerm::new([1, 0, 2, 0, 1, 0, 0, 0], 0.22e-6, 0.00e-6),
    LocatorTerm::new([2, 0, 0, -2, 0, 0, 0, 0], -0.21e-6, 0.00e-6),
    LocatorTerm::new([2, 0, -2, 0, -1, 0, 0, 0], 0.20e-6, 0.00e-6),
    LocatorTerm::new([0, 0, 2, 2, 2, 0, 0, 0], 0.17e-6, 0.00e-6),
    LocatorTerm::new([2, 0, 2, 0, 2, 0, 0, 0], 0.13e-6, 0.00e-6),
    LocatorTerm::new([2, 0, 0, 0, 0, 0, 0, 0], -0.13e-6, 0.00e-6),
    LocatorTerm::new([1, 0, 2, -2, 2, 0, 0, 0], -0.12e-6, 0.00e-6),
    LocatorTerm::new([0, 0, 2, 0, 0, 0, 0, 0], -0.11e-6, 0.00e-6),
];

#[allow(clippy::excessive_precision)]
const TERMS_T3: [LocatorTerm; 4] = [
    LocatorTerm::new([0, 0, 0, 0, 1, 0, 0, 0], 0.30e-6, -23.42e-6),
    LocatorTerm::new([0, 0, 2, -2, 2, 0, 0, 0], -0.03e-6, -1.46e-6),
    LocatorTerm::new([0, 0, 2, 0, 2, 0, 0, 0], -0.01e-6, -0.25e-6),
    LocatorTerm::new([0, 0, 0, 0, 2, 0, 0, 0], 0.00e-6, 0.23e-6),
];

#[allow(clippy::excessive_precision)]
const TERMS_T4: [LocatorTerm; 1] = [
    LocatorTerm::new([0, 0, 0, 0, 1, 0, 0, 0], -0.26e-6, -0.01e-6),
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    // SOFA iauS06 test case: 2400000.5 + 53736.0, i.e. t = 0.06.
    const T: f64 = 0.06;
    const X: f64 = 0.5791308486706011000e-3;
    const Y: f64 = 0.4020579816732961219e-4;

    #[test]
    fn s06_matches_sofa() {
        let series = CioLocatorSeries::iau2006();
        let s = series.s06(T, X, Y).unwrap();
        assert_abs_diff_eq!(s, -0.1220032213076463117e-7, epsilon = 1e-17);
    }

    #[test]
    fn standard_series_has_66_terms() {
        assert_eq!(CioLocatorSeries::iau2006().term_count(), 66);
        assert_eq!(CioLocatorSeries::default(), CioLocatorSeries::iau2006());
    }

    #[test]
    fn xy_term_is_subtracted() {
        let series = CioLocatorSeries::iau2006();
        let s0 = series.s06(T, 0.0, 0.0).unwrap();
        let s1 = series.s06(T, X, Y).unwrap();
        assert_abs_diff_eq!(s0 - s1, X * Y / 2.0, epsilon = 1e-22);
    }

    #[test]
    fn locator_at_j2000_is_small() {
        let series = CioLocatorSeries::iau2006();
        let s = CioLocator::new(&series, 0.0).calculate(0.0, 0.0).unwrap();
        assert!(s.abs() < 1e-7, "s at J2000.0 = {}", s);
    }

    #[test]
    fn locator_depends_on_time() {
        let series = CioLocatorSeries::iau2006();
        let past = CioLocator::new(&series, -1.0).calculate(0.0, 0.0).unwrap();
        let future = CioLocator::new(&series, 1.0).calculate(0.0, 0.0).unwrap();
        assert!((future - past).abs() > 1e-8);
    }

    #[test]
    fn polynomial_only_series() {
        let series = CioLocatorSeries::new(
            [1.0, 2.0, 0.0, 0.0, 0.0, 0.0],
            [Vec::new(), Vec::new(), Vec::new(), Vec::new(), Vec::new()],
        );
        assert_eq!(series.term_count(), 0);
        assert_abs_diff_eq!(series.series(0.5), 2.0 * ARCSEC_TO_RAD, epsilon = 1e-20);
    }

    #[test]
    fn non_finite_time_is_rejected() {
        let series = CioLocatorSeries::iau2006();
        let err = series.s06(f64::NAN, 0.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            AstroError::MathError {
                kind: MathErrorKind::NotFinite,
                ..
            }
        ));
    }
}
