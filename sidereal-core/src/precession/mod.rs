//! IAU 2006 precession and the Fukushima-Williams rotation.
//!
//! [`FukushimaWilliamsAngles::iau2006`] evaluates the four precession-bias
//! angles (`pfw06`), [`obl06`] the mean obliquity, and [`fw2m`] turns the
//! angles, with nutation added to ψ̄ and εA, into the bias-precession-nutation
//! matrix.
//!
//! ```
//! use sidereal_core::precession::FukushimaWilliamsAngles;
//!
//! let fw = FukushimaWilliamsAngles::iau2006(0.1668);
//! let npb = fw.npb_matrix(-2.39e-5, -4.04e-5);
//! assert!(npb.is_rotation_matrix(1e-14));
//! ```

pub mod fw;
pub mod iau2006;

pub use fw::fw2m;
pub use iau2006::{obl06, FukushimaWilliamsAngles};
