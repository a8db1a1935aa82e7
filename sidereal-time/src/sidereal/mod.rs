//! Sidereal angles at Greenwich.
//!
//! - [`era00`]: Earth rotation angle from UT1
//! - [`gmst06`] / [`gmst_from_era`]: mean sidereal time, IAU 2006
//! - [`gast`]: apparent sidereal time from ERA and the equation of the origins
//! - [`equation_of_equinoxes`]: GAST − GMST

pub mod era;
pub mod gast;
pub mod gmst;

pub use era::era00;
pub use gast::{equation_of_equinoxes, gast};
pub use gmst::{gmst06, gmst_from_era, gmst_minus_era};
