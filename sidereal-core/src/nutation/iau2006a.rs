//! IAU 2006A nutation: the IAU 2000A series adjusted to IAU 2006 precession.
//!
//! The IAU 2000A luni-solar and planetary series are summed term by term,
//! smallest amplitude first, then scaled by the P03 factors that account for
//! the change in dynamical ellipticity and the secular J2 rate:
//!
//! ```text
//! Δψ_2006A = Δψ_2000A × (1 + 0.4697×10⁻⁶ + fJ2)
//! Δε_2006A = Δε_2000A × (1 + fJ2)
//!
//! fJ2 = -2.7774×10⁻⁶ × t
//! ```
//!
//! The series coefficients are not compiled in; they come from a shared
//! [`CoefficientTables`].
//!
//! Reference: IERS Conventions (2010), Chapter 5, Section 5.5.4

use std::sync::Arc;

use super::fundamental_args::{LunisolarArguments, PlanetaryArguments};
use super::tables::CoefficientTables;
use super::types::NutationResult;
use crate::constants::{DAYS_PER_JULIAN_CENTURY, DECIMICROARCSEC_TO_RAD, J2000_JD, TWOPI};
use crate::errors::{AstroError, AstroResult, MathErrorKind};
use crate::math::fmod;

/// Dynamical ellipticity correction to Δψ.
const P03_PSI_FACTOR: f64 = 0.4697e-6;

/// Secular J2 rate, per Julian century.
const P03_J2_RATE: f64 = -2.7774e-6;

/// IAU 2006A nutation calculator over a shared coefficient dataset.
///
/// ```
/// use sidereal_core::nutation::NutationIAU2006A;
/// use sidereal_core::test_helpers::fixture_tables;
/// use std::sync::Arc;
///
/// let nutation = NutationIAU2006A::new(Arc::new(fixture_tables()));
/// let result = nutation.compute(2400000.5, 53736.0).unwrap();
/// assert!((result.delta_psi + 0.9630912025820308797e-5).abs() < 1e-8);
/// assert!((result.delta_eps - 0.4063238496887249798e-4).abs() < 1e-8);
/// ```
#[derive(Debug, Clone)]
pub struct NutationIAU2006A {
    tables: Arc<CoefficientTables>,
}

impl NutationIAU2006A {
    pub fn new(tables: Arc<CoefficientTables>) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &Arc<CoefficientTables> {
        &self.tables
    }

    /// `nut06a` for a two-part TT Julian Date.
    ///
    /// # Errors
    ///
    /// `MathError` if the date is not finite.
    pub fn compute(&self, jd1: f64, jd2: f64) -> AstroResult<NutationResult> {
        if !jd1.is_finite() || !jd2.is_finite() {
            return Err(AstroError::math_error(
                "nutation",
                MathErrorKind::NotFinite,
                &format!("non-finite Julian Date: {} + {}", jd1, jd2),
            ));
        }
        let t = ((jd1 - J2000_JD) + jd2) / DAYS_PER_JULIAN_CENTURY;
        Ok(self.compute_centuries(t))
    }

    /// `nut06a` for TT Julian centuries since J2000.0.
    pub fn compute_centuries(&self, t: f64) -> NutationResult {
        let nutation = apply_p03_adjustment(self.compute_iau2000a(t), t);
        tracing::debug!(
            t,
            dpsi = nutation.delta_psi,
            deps = nutation.delta_eps,
            "nutation IAU 2006A"
        );
        nutation
    }

    /// Unadjusted IAU 2000A nutation: luni-solar plus planetary.
    pub fn compute_iau2000a(&self, t: f64) -> NutationResult {
        let lunisolar = self.compute_lunisolar(&LunisolarArguments::at(t), t);
        let planetary = self.compute_planetary(&PlanetaryArguments::at(t));
        planetary + lunisolar
    }

    /// Luni-solar series.
    ///
    /// ```text
    /// Δψ = Σ (A + A_t·t)·sin(arg) + A'·cos(arg)
    /// Δε = Σ (B + B_t·t)·cos(arg) + B'·sin(arg)
    /// ```
    pub fn compute_lunisolar(&self, args: &LunisolarArguments, t: f64) -> NutationResult {
        let mut dpsi = 0.0;
        let mut deps = 0.0;

        for term in self.tables.lunisolar().iter().rev() {
            let arg = fmod(term.argument(args), TWOPI);
            let (sarg, carg) = arg.sin_cos();

            dpsi += (term.psi_sin + term.psi_sin_t * t) * sarg + term.psi_cos * carg;
            deps += (term.eps_cos + term.eps_cos_t * t) * carg + term.eps_sin * sarg;
        }

        NutationResult {
            delta_psi: dpsi * DECIMICROARCSEC_TO_RAD,
            delta_eps: deps * DECIMICROARCSEC_TO_RAD,
        }
    }

    /// Planetary series.
    pub fn compute_planetary(&self, args: &PlanetaryArguments) -> NutationResult {
        let mut dpsi = 0.0;
        let mut deps = 0.0;

        for term in self.tables.planetary().iter().rev() {
            let arg = fmod(term.argument(args), TWOPI);
            let (sarg, carg) = arg.sin_cos();

            dpsi += term.psi_sin * sarg + term.psi_cos * carg;
            deps += term.eps_sin * sarg + term.eps_cos * carg;
        }

        NutationResult {
            delta_psi: dpsi * DECIMICROARCSEC_TO_RAD,
            delta_eps: deps * DECIMICROARCSEC_TO_RAD,
        }
    }
}

/// Scales IAU 2000A nutation for consistency with IAU 2006 precession.
pub fn apply_p03_adjustment(nutation: NutationResult, t: f64) -> NutationResult {
    let fj2 = P03_J2_RATE * t;
    let dp = nutation.delta_psi;
    let de = nutation.delta_eps;
    NutationResult {
        delta_psi: dp + dp * (P03_PSI_FACTOR + fj2),
        delta_eps: de + de * fj2,
    }
}
