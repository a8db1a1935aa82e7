//! CIP coordinates X, Y from the bias-precession-nutation matrix.
//!
//! X and Y are the GCRS components of the Celestial Intermediate Pole unit
//! vector, read straight off the third row of the NPB matrix. Present-day
//! values are of order 10⁻³ rad and grow by about 0.01 rad per century, so a
//! few thousand years from J2000.0 they pass 0.2 rad. Only components that
//! cannot belong to a unit vector are rejected.

use crate::errors::{AstroError, AstroResult, MathErrorKind};
use crate::matrix::RotationMatrix3;

const MAX_CIP_COMPONENT: f64 = 1.0;

/// Position of the Celestial Intermediate Pole in the GCRS, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CipCoordinates {
    pub x: f64,
    pub y: f64,
}

impl CipCoordinates {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Extracts X = M[2][0] and Y = M[2][1].
    ///
    /// # Errors
    ///
    /// `MathError` if either component is non-finite or exceeds 1 in magnitude.
    pub fn from_npb_matrix(npb: &RotationMatrix3) -> AstroResult<Self> {
        let x = npb.get(2, 0);
        let y = npb.get(2, 1);

        if !x.is_finite() || !y.is_finite() {
            return Err(AstroError::math_error(
                "CIP coordinate extraction",
                MathErrorKind::NotFinite,
                &format!("non-finite CIP coordinates: X={}, Y={}", x, y),
            ));
        }
        if x.abs() > MAX_CIP_COMPONENT || y.abs() > MAX_CIP_COMPONENT {
            return Err(AstroError::math_error(
                "CIP coordinate extraction",
                MathErrorKind::OutOfRange,
                &format!(
                    "CIP coordinates out of reasonable range: X={:.6}, Y={:.6}",
                    x, y
                ),
            ));
        }

        Ok(Self { x, y })
    }
}

/// `bpn2xy`: the CIP X, Y of an NPB matrix as a plain pair.
pub fn bpn2xy(npb: &RotationMatrix3) -> AstroResult<(f64, f64)> {
    let cip = CipCoordinates::from_npb_matrix(npb)?;
    Ok((cip.x, cip.y))
}
