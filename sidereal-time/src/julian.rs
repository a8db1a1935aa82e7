use crate::constants::{CALENDAR_EPOCH_JD, DAYS_PER_JULIAN_CENTURY, J2000_JD, NANOSECONDS_PER_SECOND_F64};
use chrono::{Datelike, NaiveDateTime, Timelike};
use std::fmt;

/// A two-part Julian Date: `jd1` is the Julian Date of the preceding
/// midnight, `jd2` the fraction of the day.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate {
    pub jd1: f64,
    pub jd2: f64,
}

impl JulianDate {
    pub fn new(jd1: f64, jd2: f64) -> Self {
        Self { jd1, jd2 }
    }

    pub fn j2000() -> Self {
        Self::new(J2000_JD, 0.0)
    }

    pub fn to_f64(&self) -> f64 {
        self.jd1 + self.jd2
    }

    /// Julian centuries since J2000.0, keeping the large part separate.
    pub fn centuries(&self) -> f64 {
        ((self.jd1 - J2000_JD) + self.jd2) / DAYS_PER_JULIAN_CENTURY
    }

    /// Proleptic Gregorian calendar to Julian Date.
    ///
    /// January and February count as months 13 and 14 of the previous year:
    ///
    /// ```text
    /// jd1 = ⌊365.25 y⌋ + ⌊y/400⌋ − ⌊y/100⌋ + ⌊30.59 (m − 2)⌋ + d + 1721088.5
    /// jd2 = (s/3600 + min/60 + h) / 24
    /// ```
    ///
    /// Floors (not truncation) keep the formula valid for years before 1 CE.
    /// Fields are not range-checked here; see
    /// [`Instant::from_calendar`](crate::Instant::from_calendar).
    pub fn from_calendar(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        let (y, m) = if month < 3 {
            (year as i64 - 1, month as i64 + 12)
        } else {
            (year as i64, month as i64)
        };

        let days = (1461 * y).div_euclid(4) + y.div_euclid(400) - y.div_euclid(100)
            + libm::floor(30.59 * (m - 2) as f64) as i64
            + day as i64;
        let jd1 = days as f64 + CALENDAR_EPOCH_JD;

        let jd2 = (second / 3600.0 + minute as f64 / 60.0 + hour as f64) / 24.0;

        Self::new(jd1, jd2)
    }

    /// Julian Date of a chrono timestamp, seconds including the sub-second part.
    pub fn from_datetime(dt: &NaiveDateTime) -> Self {
        let second = dt.second() as f64 + dt.nanosecond() as f64 / NANOSECONDS_PER_SECOND_F64;
        Self::from_calendar(dt.year(), dt.month(), dt.day(), dt.hour(), dt.minute(), second)
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.9}", self.to_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_j2000_epoch() {
        let jd = JulianDate::from_calendar(2000, 1, 1, 12, 0, 0.0);
        assert_eq!(jd.jd1, 2451544.5);
        assert_eq!(jd.jd2, 0.5);
        assert_eq!(jd.to_f64(), JulianDate::j2000().to_f64());
        assert_eq!(jd.centuries(), 0.0);
    }

    #[test]
    fn test_known_dates() {
        assert_eq!(JulianDate::from_calendar(2016, 9, 6, 0, 0, 0.0).jd1, 2457637.5);
        assert_eq!(JulianDate::from_calendar(1858, 11, 17, 0, 0, 0.0).jd1, 2400000.5);
        assert_eq!(JulianDate::from_calendar(1970, 1, 1, 0, 0, 0.0).jd1, 2440587.5);
        // Gregorian reform: the day after 1582-10-04 (Julian) is 1582-10-15.
        assert_eq!(JulianDate::from_calendar(1582, 10, 15, 0, 0, 0.0).jd1, 2299160.5);
    }

    #[test]
    fn test_january_counts_as_previous_year() {
        let dec31 = JulianDate::from_calendar(2015, 12, 31, 0, 0, 0.0);
        let jan1 = JulianDate::from_calendar(2016, 1, 1, 0, 0, 0.0);
        let feb29 = JulianDate::from_calendar(2016, 2, 29, 0, 0, 0.0);
        let mar1 = JulianDate::from_calendar(2016, 3, 1, 0, 0, 0.0);
        assert_eq!(jan1.jd1 - dec31.jd1, 1.0);
        assert_eq!(mar1.jd1 - feb29.jd1, 1.0);
    }

    #[test]
    fn test_years_before_common_era() {
        // 0000-03-01 and 0000-01-01 in the proleptic Gregorian calendar.
        assert_eq!(JulianDate::from_calendar(0, 3, 1, 0, 0, 0.0).jd1, 1721119.5);
        assert_eq!(JulianDate::from_calendar(0, 1, 1, 0, 0, 0.0).jd1, 1721059.5);
        assert_eq!(JulianDate::from_calendar(-4713, 11, 24, 12, 0, 0.0).to_f64(), 0.0);
    }

    #[test]
    fn test_day_fraction() {
        let jd = JulianDate::from_calendar(2016, 9, 6, 0, 1, 8.184);
        assert!((jd.jd2 - (8.184 / 3600.0 + 1.0 / 60.0) / 24.0).abs() < 1e-17);
        assert!((jd.to_f64() - 2457637.500789167).abs() < 1e-8);
    }

    #[test]
    fn test_from_datetime_keeps_subseconds() {
        let dt = NaiveDate::from_ymd_opt(2016, 9, 6)
            .unwrap()
            .and_hms_nano_opt(0, 1, 8, 184_000_000)
            .unwrap();
        let jd = JulianDate::from_datetime(&dt);
        assert_eq!(jd, JulianDate::from_calendar(2016, 9, 6, 0, 1, 8.184));
    }

    #[test]
    fn test_display() {
        assert_eq!(JulianDate::j2000().to_string(), "JD 2451545.000000000");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let test_cases = [
            JulianDate::new(J2000_JD, 0.0),
            JulianDate::new(2457637.5, 0.000789166666666),
            JulianDate::new(J2000_JD, 0.999999999),
        ];

        for original in test_cases {
            let json = serde_json::to_string(&original).unwrap();
            let deserialized: JulianDate = serde_json::from_str(&json).unwrap();
            assert_eq!(original, deserialized, "JulianDate changed in serde round-trip");
        }
    }
}
