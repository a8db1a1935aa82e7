//! The Greenwich sidereal-time pipeline.
//!
//! [`GreenwichCalculator`] holds the shared coefficient tables and runs every
//! stage for one [`Instant`]:
//!
//! 1. JD(TT) and Julian centuries `t`
//! 2. IAU 2006 Fukushima-Williams angles and IAU 2006A nutation at `t`
//! 3. NPB matrix from `fw2m(γ̄, φ̄, ψ̄ + Δψ, εA + Δε)`
//! 4. CIP X, Y, CIO locator `s` and equation of the origins
//! 5. ERA from JD(UT1), then GAST, GMST and EE
//!
//! Every intermediate is kept in [`GreenwichTimes`].

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDateTime;
use sidereal_core::cio::CioSolution;
use sidereal_core::{
    AngleResult, CoefficientTables, FukushimaWilliamsAngles, NutationIAU2006A, NutationResult,
    RotationMatrix3,
};

use crate::instant::{InputScale, Instant};
use crate::julian::JulianDate;
use crate::sidereal::{equation_of_equinoxes, era00, gast, gmst_from_era};
use crate::{TimeError, TimeResult};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Computes Greenwich sidereal times against one set of coefficient tables.
///
/// Cheap to clone; clones share the tables.
#[derive(Debug, Clone)]
pub struct GreenwichCalculator {
    tables: Arc<CoefficientTables>,
    nutation: NutationIAU2006A,
}

impl GreenwichCalculator {
    pub fn new(tables: Arc<CoefficientTables>) -> Self {
        let nutation = NutationIAU2006A::new(tables.clone());
        Self { tables, nutation }
    }

    pub fn tables(&self) -> &Arc<CoefficientTables> {
        &self.tables
    }

    /// Builds the instant for a timestamp in the given scale and computes it.
    pub fn compute_at(&self, scale: InputScale, timestamp: NaiveDateTime) -> TimeResult<GreenwichTimes> {
        let instant = Instant::new(scale, timestamp)?;
        self.compute(&instant)
    }

    pub fn compute(&self, instant: &Instant) -> TimeResult<GreenwichTimes> {
        let jd_tt = instant.jd_tt();
        let jd_ut1 = instant.jd_ut1();
        let t = jd_tt.centuries();
        if !t.is_finite() {
            return Err(TimeError::CalculationError(format!(
                "TT centuries not finite for {}",
                jd_tt
            )));
        }
        tracing::debug!(jd_tt = jd_tt.to_f64(), jd_ut1 = jd_ut1.to_f64(), t, "Julian dates");

        let precession = FukushimaWilliamsAngles::from_jd(jd_tt.jd1, jd_tt.jd2);
        let nutation = self.nutation.compute(jd_tt.jd1, jd_tt.jd2)?;
        let npb = precession.npb_matrix(nutation.delta_psi, nutation.delta_eps);
        let cio = CioSolution::calculate(&npb, t, self.tables.cio_locator())?;

        let era = era00(jd_ut1.jd1, jd_ut1.jd2)?;
        let gast_rad = gast(era, cio.equation_of_origins);
        let gmst_rad = gmst_from_era(era, t);
        let ee_rad = equation_of_equinoxes(gast_rad, gmst_rad);

        tracing::debug!(era, eo = cio.equation_of_origins, gast = gast_rad, gmst = gmst_rad, ee = ee_rad, "sidereal angles");

        Ok(GreenwichTimes {
            instant: *instant,
            tdb: instant.tdb()?,
            jd_tt,
            jd_ut1,
            centuries: t,
            precession,
            nutation,
            npb,
            cio,
            era: AngleResult::normalized(era),
            eo: AngleResult::unnormalized(cio.equation_of_origins),
            gast: AngleResult::normalized(gast_rad),
            gmst: AngleResult::normalized(gmst_rad),
            ee: AngleResult::unnormalized(ee_rad),
        })
    }
}

/// All outputs and intermediates of one pipeline run. Angles in radians.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreenwichTimes {
    pub instant: Instant,
    pub tdb: NaiveDateTime,
    pub jd_tt: JulianDate,
    pub jd_ut1: JulianDate,
    /// TT Julian centuries since J2000.0.
    pub centuries: f64,
    pub precession: FukushimaWilliamsAngles,
    pub nutation: NutationResult,
    pub npb: RotationMatrix3,
    pub cio: CioSolution,
    pub era: AngleResult,
    pub eo: AngleResult,
    pub gast: AngleResult,
    pub gmst: AngleResult,
    pub ee: AngleResult,
}

impl GreenwichTimes {
    fn write_angle(f: &mut fmt::Formatter<'_>, label: &str, angle: &AngleResult) -> fmt::Result {
        writeln!(f, "{:>4} = {} rad", label, angle.radians())?;
        writeln!(f, "     = {} °", angle.degrees())?;
        writeln!(f, "     = {}", angle.hms())
    }

    fn write_intermediates(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fw = &self.precession;
        writeln!(f, "JD(TT)  = {:.9}", self.jd_tt.to_f64())?;
        writeln!(f, "JD(UT1) = {:.9}", self.jd_ut1.to_f64())?;
        writeln!(f, "JC      = {}", self.centuries)?;
        writeln!(f, "ΔT      = {} s ({})", self.instant.delta_t, self.instant.delta_t_era)?;
        writeln!(f, "γ̄       = {} rad", fw.gamb)?;
        writeln!(f, "φ̄       = {} rad", fw.phib)?;
        writeln!(f, "ψ̄       = {} rad", fw.psib)?;
        writeln!(f, "εA      = {} rad", fw.epsa)?;
        writeln!(f, "Δψ      = {} rad", self.nutation.delta_psi)?;
        writeln!(f, "Δε      = {} rad", self.nutation.delta_eps)?;
        writeln!(f, "NPB     =")?;
        for row in self.npb.elements() {
            writeln!(f, "  [{:+.16e}, {:+.16e}, {:+.16e}]", row[0], row[1], row[2])?;
        }
        writeln!(f, "x       = {} rad", self.cio.cip.x)?;
        writeln!(f, "y       = {} rad", self.cio.cip.y)?;
        writeln!(f, "s       = {} rad", self.cio.s)
    }
}

/// Text report. The alternate form (`{:#}`) adds every intermediate quantity.
impl fmt::Display for GreenwichTimes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(utc) = self.instant.utc {
            writeln!(f, " UTC = {}", utc.format(TIMESTAMP_FORMAT))?;
        }
        writeln!(f, "  TT = {}", self.instant.tt.format(TIMESTAMP_FORMAT))?;
        writeln!(f, " UT1 = {}", self.instant.ut1.format(TIMESTAMP_FORMAT))?;
        writeln!(f, " TDB = {}", self.tdb.format(TIMESTAMP_FORMAT))?;
        if f.alternate() {
            self.write_intermediates(f)?;
        }
        writeln!(f, " ERA = {} rad", self.era.radians())?;
        writeln!(f, "  EO = {} rad", self.eo.radians())?;
        Self::write_angle(f, "GAST", &self.gast)?;
        Self::write_angle(f, "GMST", &self.gmst)?;
        Self::write_angle(f, "EE", &self.ee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sidereal_core::test_helpers::fixture_tables;

    fn calculator() -> GreenwichCalculator {
        GreenwichCalculator::new(Arc::new(fixture_tables()))
    }

    #[test]
    fn test_report_lists_scales_and_angles() {
        let instant = Instant::from_utc_calendar(2016, 9, 6, 0, 0, 0.0).unwrap();
        let times = calculator().compute(&instant).unwrap();
        let text = times.to_string();

        assert!(text.starts_with(" UTC = 2016-09-06 00:00:00.000\n  TT = 2016-09-06 00:01:08.184\n"));
        assert!(text.contains(" UT1 = 2016-09-06 00:00:00.000\n"));
        assert!(text.contains("GAST = 6.03039079736"));
        assert!(text.contains("     = 23 h 02 m 03.826 s\n"));
        assert!(text.contains("     = 23 h 02 m 04.128 s\n"));
        assert!(text.contains("     = - 0 h 00 m 00.302 s\n"));
        assert!(!text.contains("NPB"));
    }

    #[test]
    fn test_verbose_report_adds_intermediates() {
        let instant = Instant::from_tt_calendar(2016, 9, 6, 0, 1, 8.184).unwrap();
        let times = calculator().compute(&instant).unwrap();
        let text = format!("{:#}", times);

        assert!(!text.contains("UTC"));
        assert!(text.contains("JD(TT)  = 2457637.500789167"));
        assert!(text.contains("ΔT      = 68.184 s (leap-second table)"));
        assert!(text.contains("NPB     =\n  ["));
    }

    #[test]
    fn test_compute_at_matches_compute() {
        let calc = calculator();
        let instant = Instant::from_utc_calendar(2000, 1, 1, 12, 0, 0.0).unwrap();
        let a = calc.compute(&instant).unwrap();
        let b = calc.compute_at(InputScale::Utc, instant.utc.unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_clones_share_tables() {
        let calc = calculator();
        let copy = calc.clone();
        assert!(Arc::ptr_eq(calc.tables(), copy.tables()));
    }
}
