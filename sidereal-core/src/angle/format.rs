//! Sexagesimal formatting of sidereal angles.
//!
//! Sidereal time is conventionally quoted in hours, minutes and seconds of time
//! (1ʰ = 15°). [`HmsFmt`] produces the fixed layout used by the command-line
//! report, for example `23 h 02 m 03.826 s`.
//!
//! The decomposition truncates toward zero, so a negative angle such as a small
//! equation of the equinoxes keeps zero hours and minutes and carries its sign
//! on the seconds:
//!
//! ```
//! use sidereal_core::angle::HmsFmt;
//!
//! let fmt = HmsFmt::default();
//! assert_eq!(fmt.format_degrees(345.5159), "23 h 02 m 03.816 s");
//! assert_eq!(fmt.format_degrees(-0.00125), "- 0 h 00 m 00.300 s");
//! ```

use crate::constants::DEGREES_PER_HOUR;

/// Formatter for hours-minutes-seconds notation.
///
/// # Fields
///
/// * `frac_digits` - Number of decimal places for the seconds component.
#[derive(Debug, Clone, Copy)]
pub struct HmsFmt {
    pub frac_digits: u8,
}

impl Default for HmsFmt {
    fn default() -> Self {
        Self { frac_digits: 3 }
    }
}

impl HmsFmt {
    /// Splits an angle in degrees into (sign, hours, minutes, seconds).
    ///
    /// Hours and minutes are truncated toward zero. A negative remainder in
    /// seconds is made positive and reported through the sign flag.
    pub fn split_degrees(deg: f64) -> (bool, i64, i64, f64) {
        let h = libm::trunc(deg / DEGREES_PER_HOUR);
        let minutes = (deg - h * DEGREES_PER_HOUR) * 4.0;
        let m = libm::trunc(minutes);
        let mut s = (minutes - m) * 60.0;
        let negative = s < 0.0;
        if negative {
            s = -s;
        }
        (negative, h as i64, m as i64, s)
    }

    /// Formats an angle given in degrees as `{sign}{h:2} h {m:02} m {s} s`.
    pub fn format_degrees(&self, deg: f64) -> String {
        let (negative, h, m, s) = Self::split_degrees(deg);
        let sign = if negative { "-" } else { "" };
        let digits = self.frac_digits as usize;
        let width = if digits == 0 { 2 } else { digits + 3 };
        format!(
            "{sign}{h:2} h {m:02} m {s:0width$.digits$} s",
            width = width,
            digits = digits
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_hours() {
        let fmt = HmsFmt::default();
        assert_eq!(fmt.format_degrees(180.0), "12 h 00 m 00.000 s");
        assert_eq!(fmt.format_degrees(0.0), " 0 h 00 m 00.000 s");
    }

    #[test]
    fn formats_hours_minutes_seconds() {
        let fmt = HmsFmt::default();
        // 1h 30m 15s = 22.5625 degrees
        assert_eq!(fmt.format_degrees(22.5625), " 1 h 30 m 15.000 s");
    }

    #[test]
    fn negative_small_angle_carries_sign() {
        let fmt = HmsFmt::default();
        let (negative, h, m, s) = HmsFmt::split_degrees(-0.00125);
        assert!(negative);
        assert_eq!(h, 0);
        assert_eq!(m, 0);
        assert!((s - 0.3).abs() < 1e-9);
        assert_eq!(fmt.format_degrees(-0.00125), "- 0 h 00 m 00.300 s");
    }

    #[test]
    fn custom_precision() {
        let fmt = HmsFmt { frac_digits: 1 };
        assert_eq!(fmt.format_degrees(22.5625), " 1 h 30 m 15.0 s");
        let fmt0 = HmsFmt { frac_digits: 0 };
        assert_eq!(fmt0.format_degrees(22.5625), " 1 h 30 m 15 s");
    }
}
