//! 3x3 rotation matrices for precession-nutation frame rotations.
//!
//! The bias-precession-nutation matrix is assembled from four elemental
//! rotations about the X and Z axes. Every elemental rotation here is
//! *out of place*: it consumes the current matrix by value and returns a new
//! one, so a step can never read a row that the same step has already
//! overwritten.
//!
//! ```
//! use sidereal_core::RotationMatrix3;
//!
//! let m = RotationMatrix3::identity()
//!     .rotated_z(0.1)
//!     .rotated_x(0.05);
//! assert!(m.is_rotation_matrix(1e-14));
//! ```
//!
//! # Rotation Conventions
//!
//! Rotations follow the SOFA/ERFA "frame" convention: a positive angle rotates
//! the coordinate frame anticlockwise as seen looking from the positive axis
//! toward the origin.
//!
//! `rotated_x(phi)` returns `Rx(phi) * self`:
//!
//! ```text
//! Rx(phi) = | 1     0         0      |
//!           | 0   cos(phi)  sin(phi) |
//!           | 0  -sin(phi)  cos(phi) |
//! ```
//!
//! and `rotated_z(psi)` likewise returns `Rz(psi) * self`.

/// A 3x3 rotation matrix, row-major. All angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMatrix3 {
    elements: [[f64; 3]; 3],
}

fn dot(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

impl RotationMatrix3 {
    pub fn identity() -> Self {
        Self {
            elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Creates a matrix from row-major elements without validating it.
    pub fn from_array(elements: [[f64; 3]; 3]) -> Self {
        Self { elements }
    }

    /// Element at 0-based `row`, `col`. Panics if either index is 3 or more.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    pub fn elements(&self) -> &[[f64; 3]; 3] {
        &self.elements
    }

    /// Returns `Rx(phi) * self` as a new matrix.
    #[must_use]
    pub fn rotated_x(self, phi: f64) -> Self {
        let (s, c) = libm::sincos(phi);
        let [r0, r1, r2] = self.elements;

        Self::from_array([
            r0,
            [
                c * r1[0] + s * r2[0],
                c * r1[1] + s * r2[1],
                c * r1[2] + s * r2[2],
            ],
            [
                -s * r1[0] + c * r2[0],
                -s * r1[1] + c * r2[1],
                -s * r1[2] + c * r2[2],
            ],
        ])
    }

    /// Returns `Rz(psi) * self` as a new matrix.
    #[must_use]
    pub fn rotated_z(self, psi: f64) -> Self {
        let (s, c) = libm::sincos(psi);
        let [r0, r1, r2] = self.elements;

        Self::from_array([
            [
                c * r0[0] + s * r1[0],
                c * r0[1] + s * r1[1],
                c * r0[2] + s * r1[2],
            ],
            [
                -s * r0[0] + c * r1[0],
                -s * r0[1] + c * r1[1],
                -s * r0[2] + c * r1[2],
            ],
            r2,
        ])
    }

    /// True when the rows are orthonormal and `(r0 × r1) · r2 ≈ +1`, each
    /// within `tolerance`. Non-finite elements always fail.
    ///
    /// ```
    /// use sidereal_core::RotationMatrix3;
    ///
    /// let scaled = RotationMatrix3::from_array([
    ///     [2.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 1.0],
    /// ]);
    /// assert!(!scaled.is_rotation_matrix(1e-14));
    /// ```
    pub fn is_rotation_matrix(&self, tolerance: f64) -> bool {
        let [r0, r1, r2] = &self.elements;
        let cross = [
            r0[1] * r1[2] - r0[2] * r1[1],
            r0[2] * r1[0] - r0[0] * r1[2],
            r0[0] * r1[1] - r0[1] * r1[0],
        ];
        let deviations = [
            dot(&cross, r2) - 1.0,
            dot(r0, r0) - 1.0,
            dot(r1, r1) - 1.0,
            dot(r2, r2) - 1.0,
            dot(r0, r1),
            dot(r0, r2),
            dot(r1, r2),
        ];
        deviations.iter().all(|d| d.abs() <= tolerance)
    }
}
