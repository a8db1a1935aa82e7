//! Numerical building blocks for IAU 2006/2000A Earth orientation.
//!
//! `sidereal-core` supplies everything between a TT epoch and the CIO-based
//! quantities needed for sidereal time: fundamental arguments, the IAU 2006A
//! nutation series, the IAU 2006 Fukushima-Williams precession angles, the
//! bias-precession-nutation matrix, CIP coordinates, the CIO locator and the
//! equation of the origins. It has no notion of civil time; that lives in
//! `sidereal-time`.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | Normalization to [0, 2π), [`AngleResult`], h m s formatting |
//! | [`matrix`] | [`RotationMatrix3`] with out-of-place elemental rotations |
//! | [`nutation`] | Fundamental arguments, coefficient tables, IAU 2006A nutation |
//! | [`precession`] | IAU 2006 Fukushima-Williams angles, mean obliquity, `fw2m` |
//! | [`cio`] | CIP X/Y, CIO locator `s06`, equation of the origins |
//! | [`constants`] | Epochs and unit conversions |
//! | [`errors`] | [`AstroError`] and [`AstroResult`] |
//!
//! # Pipeline
//!
//! ```
//! use std::sync::Arc;
//! use sidereal_core::cio::CioSolution;
//! use sidereal_core::nutation::NutationIAU2006A;
//! use sidereal_core::precession::FukushimaWilliamsAngles;
//! use sidereal_core::test_helpers::fixture_tables;
//!
//! let tables = Arc::new(fixture_tables());
//! let t = 0.1668; // TT centuries since J2000.0
//!
//! let fw = FukushimaWilliamsAngles::iau2006(t);
//! let nut = NutationIAU2006A::new(tables.clone()).compute_centuries(t);
//! let npb = fw.npb_matrix(nut.delta_psi, nut.delta_eps);
//! let cio = CioSolution::calculate(&npb, t, tables.cio_locator())?;
//! assert!(cio.equation_of_origins < 0.0);
//! # Ok::<(), sidereal_core::AstroError>(())
//! ```
//!
//! # Design Notes
//!
//! - **Two-part Julian Dates**: functions taking `(jd1, jd2)` keep the split to
//!   preserve precision; centuries are formed as `((jd1 - J2000) + jd2) / 36525`.
//! - **Shared tables**: the nutation and CIO locator series are loaded once into
//!   a [`CoefficientTables`] and shared through `Arc`; nothing here mutates them.
//! - **Radians internally**: [`AngleResult`] adds degree and h m s views.

pub mod angle;
pub mod cio;
pub mod constants;
pub mod errors;
pub mod math;
pub mod matrix;
pub mod nutation;
pub mod precession;

pub use angle::{wrap_0_2pi, AngleResult};
pub use cio::{CioLocatorSeries, CioSolution};
pub use errors::{AstroError, AstroResult, MathErrorKind};
pub use matrix::RotationMatrix3;
pub use nutation::{CoefficientTables, NutationIAU2006A, NutationResult};
pub use precession::FukushimaWilliamsAngles;

pub mod test_helpers;
