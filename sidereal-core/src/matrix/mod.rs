//! 3×3 rotation matrices for frame rotations.

mod rotation_matrix;

pub use rotation_matrix::RotationMatrix3;
