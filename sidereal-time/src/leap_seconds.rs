//! TAI − UTC since the introduction of integer leap seconds.
//!
//! Each entry is the offset in force from the first day of the given month.
//! Leap seconds are inserted at the end of June or December, so the effective
//! months are always January or July.
//!
//! | From       | TAI − UTC (s) |
//! |------------|---------------|
//! | 1972-01-01 | 10            |
//! | 1972-07-01 | 11            |
//! | ...        | ...           |
//! | 2017-01-01 | 37            |
//!
//! The table is considered authoritative up to [`TABLE_VALID_UNTIL`]. Later
//! instants reuse the last offset, and callers are expected to say so.

use crate::constants::FIRST_LEAP_SECOND_YEAR;

/// (year, month, TAI − UTC in seconds) in effect from the start of that month.
pub const TAI_UTC_OFFSETS: [(i32, u32, f64); 28] = [
    (1972, 1, 10.0),
    (1972, 7, 11.0),
    (1973, 1, 12.0),
    (1974, 1, 13.0),
    (1975, 1, 14.0),
    (1976, 1, 15.0),
    (1977, 1, 16.0),
    (1978, 1, 17.0),
    (1979, 1, 18.0),
    (1980, 1, 19.0),
    (1981, 7, 20.0),
    (1982, 7, 21.0),
    (1983, 7, 22.0),
    (1985, 7, 23.0),
    (1988, 1, 24.0),
    (1990, 1, 25.0),
    (1991, 1, 26.0),
    (1992, 7, 27.0),
    (1993, 7, 28.0),
    (1994, 7, 29.0),
    (1996, 1, 30.0),
    (1997, 7, 31.0),
    (1999, 1, 32.0),
    (2006, 1, 33.0),
    (2009, 1, 34.0),
    (2012, 7, 35.0),
    (2015, 7, 36.0),
    (2017, 1, 37.0),
];

/// First month (year, month) for which the table is no longer known to be complete.
pub const TABLE_VALID_UNTIL: (i32, u32) = (2019, 1);

#[inline]
pub(crate) fn month_index(year: i32, month: u32) -> i64 {
    12 * year as i64 + month as i64 - 1
}

/// TAI − UTC in seconds for the given month, or `None` before 1972.
///
/// Months after the last entry return the last offset; use
/// [`is_extrapolated`] to tell the two apart.
pub fn tai_minus_utc(year: i32, month: u32) -> Option<f64> {
    if year < FIRST_LEAP_SECOND_YEAR {
        return None;
    }

    let m = month_index(year, month);
    let i = match TAI_UTC_OFFSETS
        .binary_search_by(|&(entry_year, entry_month, _)| month_index(entry_year, entry_month).cmp(&m))
    {
        Ok(idx) => idx,
        Err(0) => return None,
        Err(idx) => idx - 1,
    };

    Some(TAI_UTC_OFFSETS[i].2)
}

/// True when (year, month) is past [`TABLE_VALID_UNTIL`].
pub fn is_extrapolated(year: i32, month: u32) -> bool {
    month_index(year, month) >= month_index(TABLE_VALID_UNTIL.0, TABLE_VALID_UNTIL.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_before_1972_has_no_offset() {
        assert_eq!(tai_minus_utc(1971, 12), None);
        assert_eq!(tai_minus_utc(1600, 6), None);
    }

    #[test]
    fn test_steps_take_effect_on_the_month() {
        assert_eq!(tai_minus_utc(1972, 1), Some(10.0));
        assert_eq!(tai_minus_utc(1972, 6), Some(10.0));
        assert_eq!(tai_minus_utc(1972, 7), Some(11.0));
        assert_eq!(tai_minus_utc(1985, 6), Some(22.0));
        assert_eq!(tai_minus_utc(1985, 7), Some(23.0));
        assert_eq!(tai_minus_utc(2016, 9), Some(36.0));
        assert_eq!(tai_minus_utc(2016, 12), Some(36.0));
        assert_eq!(tai_minus_utc(2017, 1), Some(37.0));
    }

    #[test]
    fn test_last_offset_is_reused() {
        assert_eq!(tai_minus_utc(2026, 10), Some(37.0));
        assert!(!is_extrapolated(2018, 12));
        assert!(is_extrapolated(2019, 1));
        assert!(is_extrapolated(2026, 10));
    }

    #[test]
    fn test_table_is_sorted_and_increasing() {
        for pair in TAI_UTC_OFFSETS.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(month_index(a.0, a.1) < month_index(b.0, b.1));
            assert_eq!(b.2 - a.2, 1.0);
            assert!(b.1 == 1 || b.1 == 7);
        }
    }
}
