use super::format::HmsFmt;
use super::normalize::wrap_0_2pi;
use crate::constants::RAD_TO_DEG;
use std::fmt;

/// A computed sidereal angle with degree and sexagesimal views.
///
/// Values built with [`normalized`](Self::normalized) are guaranteed to lie in
/// [0, 2π). The equation of the equinoxes is a small signed difference and is
/// kept as-is through [`unnormalized`](Self::unnormalized).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AngleResult {
    radians: f64,
}

impl AngleResult {
    pub fn normalized(radians: f64) -> Self {
        Self {
            radians: wrap_0_2pi(radians),
        }
    }

    pub fn unnormalized(radians: f64) -> Self {
        Self { radians }
    }

    pub fn radians(&self) -> f64 {
        self.radians
    }

    pub fn degrees(&self) -> f64 {
        self.radians * RAD_TO_DEG
    }

    /// Sexagesimal representation with millisecond seconds, e.g. `23 h 02 m 03.826 s`.
    pub fn hms(&self) -> String {
        HmsFmt::default().format_degrees(self.degrees())
    }
}

impl fmt::Display for AngleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rad", self.radians)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{PI, TWOPI};

    #[test]
    fn normalized_wraps_into_range() {
        let a = AngleResult::normalized(-PI / 2.0);
        assert!((a.radians() - 1.5 * PI).abs() < 1e-15);
        assert!((a.degrees() - 270.0).abs() < 1e-12);
        assert_eq!(a.hms(), "18 h 00 m 00.000 s");
    }

    #[test]
    fn unnormalized_keeps_sign() {
        let ee = AngleResult::unnormalized(-2.0e-5);
        assert_eq!(ee.radians(), -2.0e-5);
        assert!(ee.degrees() < 0.0);
        assert!(ee.hms().starts_with('-'));
    }

    #[test]
    fn normalized_full_turn_is_zero() {
        assert_eq!(AngleResult::normalized(TWOPI).radians(), 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let a = AngleResult::normalized(6.030390797363266);
        let json = serde_json::to_string(&a).unwrap();
        let back: AngleResult = serde_json::from_str(&json).unwrap();
        assert_eq!(a, back);
    }
}
