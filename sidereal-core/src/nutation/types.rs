/// Nutation in longitude and obliquity, in radians.
///
/// - `delta_psi` (Δψ): along the ecliptic, positive eastward
/// - `delta_eps` (Δε): perpendicular to it, positive when obliquity grows
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NutationResult {
    pub delta_psi: f64,
    pub delta_eps: f64,
}

impl std::ops::Add for NutationResult {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            delta_psi: self.delta_psi + other.delta_psi,
            delta_eps: self.delta_eps + other.delta_eps,
        }
    }
}
