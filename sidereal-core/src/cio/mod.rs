//! CIO-based quantities derived from the bias-precession-nutation matrix.
//!
//! # Components
//!
//! - [`CipCoordinates`] / [`bpn2xy`]: X, Y of the Celestial Intermediate Pole
//! - [`CioLocatorSeries`] / [`CioLocator`]: the CIO locator `s` (IAU 2006 `s06`)
//! - [`eors`]: the equation of the origins
//! - [`CioSolution`]: all of the above for one epoch
//!
//! ```
//! use sidereal_core::cio::{CioLocatorSeries, CioSolution};
//! use sidereal_core::matrix::RotationMatrix3;
//!
//! let series = CioLocatorSeries::iau2006();
//! let solution = CioSolution::calculate(&RotationMatrix3::identity(), 0.0, &series).unwrap();
//! assert_eq!(solution.cip.x, 0.0);
//! assert_eq!(solution.equation_of_origins, solution.s);
//! ```

pub mod coordinates;
pub mod locator;
pub mod origins;

pub use coordinates::{bpn2xy, CipCoordinates};
pub use locator::{CioLocator, CioLocatorSeries, LocatorTerm};
pub use origins::eors;

use crate::errors::AstroResult;
use crate::matrix::RotationMatrix3;

/// CIP coordinates, CIO locator and equation of the origins for one epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CioSolution {
    pub cip: CipCoordinates,
    /// CIO locator s (radians)
    pub s: f64,
    /// Equation of the origins (radians)
    pub equation_of_origins: f64,
}

impl CioSolution {
    /// Computes X, Y, s and EO from an NPB matrix and TT centuries since J2000.0.
    pub fn calculate(
        npb: &RotationMatrix3,
        tt_centuries: f64,
        series: &CioLocatorSeries,
    ) -> AstroResult<Self> {
        let cip = CipCoordinates::from_npb_matrix(npb)?;
        let s = CioLocator::new(series, tt_centuries).calculate(cip.x, cip.y)?;
        let equation_of_origins = eors(npb, s);

        tracing::debug!(
            x = cip.x,
            y = cip.y,
            s,
            eo = equation_of_origins,
            "CIO quantities"
        );

        Ok(Self {
            cip,
            s,
            equation_of_origins,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::precession::{fw2m, FukushimaWilliamsAngles};

    #[test]
    fn identity_matrix_gives_zero_pole() {
        let series = CioLocatorSeries::iau2006();
        let solution = CioSolution::calculate(&RotationMatrix3::identity(), 0.0, &series).unwrap();
        assert_eq!(solution.cip.x, 0.0);
        assert_eq!(solution.cip.y, 0.0);
        assert!(solution.s.abs() < 1e-7);
    }

    #[test]
    fn solution_agrees_with_parts() {
        let t = 0.16680358081222907;
        let fw = FukushimaWilliamsAngles::iau2006(t);
        let npb = fw2m(fw.gamb, fw.phib, fw.psib, fw.epsa);
        let series = CioLocatorSeries::iau2006();

        let solution = CioSolution::calculate(&npb, t, &series).unwrap();
        let (x, y) = bpn2xy(&npb).unwrap();
        let s = series.s06(t, x, y).unwrap();

        assert_eq!(solution.cip, CipCoordinates::new(x, y));
        assert_eq!(solution.s, s);
        assert_eq!(solution.equation_of_origins, eors(&npb, s));
    }
}
