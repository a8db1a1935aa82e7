//! IAU 2006A nutation over externally supplied coefficient tables.
//!
//! Nutation is the short-period oscillation of the Earth's axis about its
//! mean precessing position, driven by lunar, solar and planetary torques on
//! the equatorial bulge. Its dominant term, with an 18.6-year period, moves the
//! pole by about 17″ in longitude and 9″ in obliquity.
//!
//! # Layout
//!
//! - [`fundamental_args`]: Delaunay arguments and planetary longitudes
//! - [`terms`]: one row of each series
//! - [`parse`]: text-table reader
//! - [`tables`]: [`CoefficientTables`], the shared immutable dataset
//! - [`iau2006a`]: [`NutationIAU2006A`], the series sum plus P03 adjustment
//!
//! # Example
//!
//! ```
//! use sidereal_core::nutation::NutationIAU2006A;
//! use sidereal_core::test_helpers::fixture_tables;
//! use std::sync::Arc;
//!
//! let nutation = NutationIAU2006A::new(Arc::new(fixture_tables()));
//! let result = nutation.compute(2451545.0, 0.0).unwrap();
//! println!("Δψ = {:.3e} rad, Δε = {:.3e} rad", result.delta_psi, result.delta_eps);
//! ```

pub mod fundamental_args;
pub mod iau2006a;
pub mod parse;
pub mod tables;
pub mod terms;
pub mod types;

pub use fundamental_args::{
    IERS2003FundamentalArgs, LunisolarArguments, MHB2000FundamentalArgs, PlanetaryArguments,
};
pub use iau2006a::NutationIAU2006A;
pub use tables::CoefficientTables;
pub use terms::{LunisolarTerm, PlanetaryTerm};
pub use types::NutationResult;
