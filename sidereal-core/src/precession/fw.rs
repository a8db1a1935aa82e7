use crate::matrix::RotationMatrix3;

/// Forms a rotation matrix from Fukushima-Williams angles.
///
/// ```text
/// M = Rx(-ε) · Rz(-ψ) · Rx(φ) · Rz(γ)
/// ```
///
/// applied to the identity in that order. Each step builds a fresh matrix
/// from the previous one.
///
/// With the IAU 2006 angles (plus nutation in ψ and ε) this is the
/// bias-precession-nutation matrix.
pub fn fw2m(gamb: f64, phib: f64, psi: f64, eps: f64) -> RotationMatrix3 {
    RotationMatrix3::identity()
        .rotated_z(gamb)
        .rotated_x(phib)
        .rotated_z(-psi)
        .rotated_x(-eps)
}
