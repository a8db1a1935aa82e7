//! Greenwich apparent sidereal time and the equation of the equinoxes.
//!
//! In the CIO-based formulation GAST is the Earth rotation angle measured
//! from the true equinox instead of the CIO:
//!
//! ```text
//! GAST = ERA − EO
//! EE   = GAST − GMST
//! ```

use sidereal_core::angle::wrap_0_2pi;

/// GAST in [0, 2π) from ERA and the equation of the origins.
pub fn gast(era: f64, eo: f64) -> f64 {
    wrap_0_2pi(era - eo)
}

/// Equation of the equinoxes, GAST − GMST.
///
/// Not normalized: the result is a small signed angle.
pub fn equation_of_equinoxes(gast: f64, gmst: f64) -> f64 {
    gast - gmst
}

#[cfg(test)]
mod tests {
    use super::*;
    use sidereal_core::constants::TWOPI;

    #[test]
    fn test_gast_wraps() {
        assert!((gast(0.001, 0.002) - (TWOPI - 0.001)).abs() < 1e-15);
        assert_eq!(gast(1.0, -0.5), 1.5);
    }

    #[test]
    fn test_ee_is_plain_difference() {
        assert_eq!(equation_of_equinoxes(1.0, 1.25), -0.25);
        // Across the 0/2π seam the difference is not folded back.
        let ee = equation_of_equinoxes(1e-6, TWOPI - 1e-6);
        assert!(ee < -6.0);
    }
}
