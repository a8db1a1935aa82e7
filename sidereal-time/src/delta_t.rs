//! ΔT = TT − UT1 as a function of calendar month.
//!
//! ΔT is modelled piecewise. Historical eras use the Espenak & Meeus
//! polynomials in the decimal year `y = year + (month − 0.5) / 12`; from 1972
//! until the leap-second table stops being authoritative ΔT is taken as
//! `32.184 + (TAI − UTC)`, i.e. |UT1 − UTC| is neglected; later dates use
//! extrapolations.
//!
//! | Era | Range | Form |
//! |-----|-------|------|
//! | [`BeforeMinus500`](DeltaTEra::BeforeMinus500) | year < −500 | −20 + 32u², u = (y − 1820)/100 |
//! | [`Minus500To500`](DeltaTEra::Minus500To500) | −500 ≤ year < 500 | degree 6 in y/100 |
//! | [`From500To1600`](DeltaTEra::From500To1600) … [`From1941To1961`](DeltaTEra::From1941To1961) | by year | polynomials |
//! | [`From1961To1972`](DeltaTEra::From1961To1972) | 1961 ≤ year < 1972 | cubic in y − 1975 |
//! | [`LeapSecondTable`](DeltaTEra::LeapSecondTable) | 1972-01 ≤ month < 2019-01 | 32.184 + TAI − UTC |
//! | [`From2019To2050`](DeltaTEra::From2019To2050) | 2019-01 ≤ month, year < 2050 | quadratic in y − 2000 |
//! | [`From2050To2150`](DeltaTEra::From2050To2150) | 2050 ≤ year ≤ 2150 | parabola with linear blend |
//! | [`After2150`](DeltaTEra::After2150) | year > 2150 | −20 + 32u² |
//!
//! Branches are reproduced as published and are not forced to be continuous
//! at the boundaries.

use crate::constants::{FIRST_LEAP_SECOND_YEAR, TT_MINUS_TAI};
use crate::leap_seconds::{self, month_index, TABLE_VALID_UNTIL};
use sidereal_core::math::horner;
use std::fmt;

const MINUS_500_TO_500: [f64; 7] = [
    10583.6,
    -1014.41,
    33.78311,
    -5.952053,
    -0.1798452,
    0.022174192,
    0.0090316521,
];
const FROM_500_TO_1600: [f64; 7] = [
    1574.2,
    -556.01,
    71.23472,
    0.319781,
    -0.8503463,
    -0.005050998,
    0.0083572073,
];
const FROM_1600_TO_1700: [f64; 4] = [120.0, -0.9808, -0.01532, 1.0 / 7129.0];
const FROM_1700_TO_1800: [f64; 5] = [8.83, 0.1603, -0.0059285, 0.00013336, -1.0 / 1174000.0];
const FROM_1800_TO_1860: [f64; 8] = [
    13.72,
    -0.332447,
    0.0068612,
    0.0041116,
    -0.00037436,
    0.0000121272,
    -0.0000001699,
    0.000000000875,
];
const FROM_1860_TO_1900: [f64; 6] = [
    7.62,
    0.5737,
    -0.251754,
    0.01680668,
    -0.0004473624,
    1.0 / 233174.0,
];
const FROM_1900_TO_1920: [f64; 5] = [-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197];
const FROM_1920_TO_1941: [f64; 4] = [21.20, 0.84493, -0.076100, 0.0020936];
const FROM_1941_TO_1961: [f64; 4] = [29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0];
const FROM_1961_TO_1972: [f64; 4] = [45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0];
const FROM_2019_TO_2050: [f64; 3] = [62.92, 0.32217, 0.005589];

/// One branch of the piecewise ΔT model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeltaTEra {
    BeforeMinus500,
    Minus500To500,
    From500To1600,
    From1600To1700,
    From1700To1800,
    From1800To1860,
    From1860To1900,
    From1900To1920,
    From1920To1941,
    From1941To1961,
    From1961To1972,
    LeapSecondTable,
    From2019To2050,
    From2050To2150,
    After2150,
}

impl DeltaTEra {
    pub const ALL: [DeltaTEra; 15] = [
        DeltaTEra::BeforeMinus500,
        DeltaTEra::Minus500To500,
        DeltaTEra::From500To1600,
        DeltaTEra::From1600To1700,
        DeltaTEra::From1700To1800,
        DeltaTEra::From1800To1860,
        DeltaTEra::From1860To1900,
        DeltaTEra::From1900To1920,
        DeltaTEra::From1920To1941,
        DeltaTEra::From1941To1961,
        DeltaTEra::From1961To1972,
        DeltaTEra::LeapSecondTable,
        DeltaTEra::From2019To2050,
        DeltaTEra::From2050To2150,
        DeltaTEra::After2150,
    ];

    /// Selects the branch for a calendar month.
    pub fn for_date(year: i32, month: u32) -> Self {
        let leap_end = month_index(TABLE_VALID_UNTIL.0, TABLE_VALID_UNTIL.1);
        match year {
            y if y < -500 => DeltaTEra::BeforeMinus500,
            y if y < 500 => DeltaTEra::Minus500To500,
            y if y < 1600 => DeltaTEra::From500To1600,
            y if y < 1700 => DeltaTEra::From1600To1700,
            y if y < 1800 => DeltaTEra::From1700To1800,
            y if y < 1860 => DeltaTEra::From1800To1860,
            y if y < 1900 => DeltaTEra::From1860To1900,
            y if y < 1920 => DeltaTEra::From1900To1920,
            y if y < 1941 => DeltaTEra::From1920To1941,
            y if y < 1961 => DeltaTEra::From1941To1961,
            y if y < FIRST_LEAP_SECOND_YEAR => DeltaTEra::From1961To1972,
            _ if month_index(year, month) < leap_end => DeltaTEra::LeapSecondTable,
            y if y < 2050 => DeltaTEra::From2019To2050,
            y if y <= 2150 => DeltaTEra::From2050To2150,
            _ => DeltaTEra::After2150,
        }
    }

    /// Whether (year, month) lies inside this branch's range.
    pub fn contains(self, year: i32, month: u32) -> bool {
        let m = month_index(year, month);
        let leap_start = month_index(FIRST_LEAP_SECOND_YEAR, 1);
        let leap_end = month_index(TABLE_VALID_UNTIL.0, TABLE_VALID_UNTIL.1);
        match self {
            DeltaTEra::BeforeMinus500 => year < -500,
            DeltaTEra::Minus500To500 => (-500..500).contains(&year),
            DeltaTEra::From500To1600 => (500..1600).contains(&year),
            DeltaTEra::From1600To1700 => (1600..1700).contains(&year),
            DeltaTEra::From1700To1800 => (1700..1800).contains(&year),
            DeltaTEra::From1800To1860 => (1800..1860).contains(&year),
            DeltaTEra::From1860To1900 => (1860..1900).contains(&year),
            DeltaTEra::From1900To1920 => (1900..1920).contains(&year),
            DeltaTEra::From1920To1941 => (1920..1941).contains(&year),
            DeltaTEra::From1941To1961 => (1941..1961).contains(&year),
            DeltaTEra::From1961To1972 => (1961..FIRST_LEAP_SECOND_YEAR).contains(&year),
            DeltaTEra::LeapSecondTable => (leap_start..leap_end).contains(&m),
            DeltaTEra::From2019To2050 => m >= leap_end && year < 2050,
            DeltaTEra::From2050To2150 => (2050..=2150).contains(&year),
            DeltaTEra::After2150 => year > 2150,
        }
    }

    /// ΔT in seconds from this branch's formula.
    ///
    /// The result is only meaningful for dates this branch [`contains`](Self::contains).
    pub fn evaluate(self, year: i32, month: u32) -> f64 {
        let y = year as f64 + (month as f64 - 0.5) / 12.0;
        match self {
            DeltaTEra::BeforeMinus500 | DeltaTEra::After2150 => {
                let u = (y - 1820.0) / 100.0;
                -20.0 + 32.0 * u * u
            }
            DeltaTEra::Minus500To500 => horner(y / 100.0, &MINUS_500_TO_500),
            DeltaTEra::From500To1600 => horner((y - 1000.0) / 100.0, &FROM_500_TO_1600),
            DeltaTEra::From1600To1700 => horner(y - 1600.0, &FROM_1600_TO_1700),
            DeltaTEra::From1700To1800 => horner(y - 1700.0, &FROM_1700_TO_1800),
            DeltaTEra::From1800To1860 => horner(y - 1800.0, &FROM_1800_TO_1860),
            DeltaTEra::From1860To1900 => horner(y - 1860.0, &FROM_1860_TO_1900),
            DeltaTEra::From1900To1920 => horner(y - 1900.0, &FROM_1900_TO_1920),
            DeltaTEra::From1920To1941 => horner(y - 1920.0, &FROM_1920_TO_1941),
            DeltaTEra::From1941To1961 => horner(y - 1950.0, &FROM_1941_TO_1961),
            DeltaTEra::From1961To1972 => horner(y - 1975.0, &FROM_1961_TO_1972),
            DeltaTEra::LeapSecondTable => leap_seconds::tai_minus_utc(year, month)
                .map_or(f64::NAN, |offset| TT_MINUS_TAI + offset),
            DeltaTEra::From2019To2050 => horner(y - 2000.0, &FROM_2019_TO_2050),
            DeltaTEra::From2050To2150 => {
                let u = (y - 1820.0) / 100.0;
                -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y)
            }
        }
    }
}

impl fmt::Display for DeltaTEra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DeltaTEra::BeforeMinus500 => "before -500",
            DeltaTEra::Minus500To500 => "-500 to 500",
            DeltaTEra::From500To1600 => "500 to 1600",
            DeltaTEra::From1600To1700 => "1600 to 1700",
            DeltaTEra::From1700To1800 => "1700 to 1800",
            DeltaTEra::From1800To1860 => "1800 to 1860",
            DeltaTEra::From1860To1900 => "1860 to 1900",
            DeltaTEra::From1900To1920 => "1900 to 1920",
            DeltaTEra::From1920To1941 => "1920 to 1941",
            DeltaTEra::From1941To1961 => "1941 to 1961",
            DeltaTEra::From1961To1972 => "1961 to 1972",
            DeltaTEra::LeapSecondTable => "leap-second table",
            DeltaTEra::From2019To2050 => "2019 to 2050",
            DeltaTEra::From2050To2150 => "2050 to 2150",
            DeltaTEra::After2150 => "after 2150",
        };
        f.write_str(label)
    }
}

/// ΔT = TT − UT1 in seconds for the given calendar month.
pub fn delta_t(year: i32, month: u32) -> f64 {
    let era = DeltaTEra::for_date(year, month);
    let dt = era.evaluate(year, month);
    if era != DeltaTEra::LeapSecondTable && year >= FIRST_LEAP_SECOND_YEAR {
        tracing::debug!(year, month, %era, delta_t = dt, "ΔT past the leap-second table, using polynomial");
    } else {
        tracing::debug!(year, month, %era, delta_t = dt, "ΔT");
    }
    dt
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn test_leap_second_era() {
        assert_eq!(DeltaTEra::for_date(2016, 9), DeltaTEra::LeapSecondTable);
        assert_abs_diff_eq!(delta_t(2016, 9), 68.184, epsilon = 1e-12);
        assert_abs_diff_eq!(delta_t(1972, 1), 42.184, epsilon = 1e-12);
        assert_abs_diff_eq!(delta_t(2018, 12), 69.184, epsilon = 1e-12);
        assert_abs_diff_eq!(delta_t(1990, 6), 57.184, epsilon = 1e-12);
    }

    #[test]
    fn test_boundaries_switch_branch() {
        assert_eq!(DeltaTEra::for_date(1971, 12), DeltaTEra::From1961To1972);
        assert_eq!(DeltaTEra::for_date(1972, 1), DeltaTEra::LeapSecondTable);
        assert_eq!(DeltaTEra::for_date(2019, 1), DeltaTEra::From2019To2050);
        assert_eq!(DeltaTEra::for_date(2150, 12), DeltaTEra::From2050To2150);
        assert_eq!(DeltaTEra::for_date(2151, 1), DeltaTEra::After2150);
        assert_eq!(DeltaTEra::for_date(-501, 12), DeltaTEra::BeforeMinus500);
        assert_eq!(DeltaTEra::for_date(-500, 1), DeltaTEra::Minus500To500);
    }

    #[test]
    fn test_published_values() {
        // Espenak & Meeus: ΔT(1900.0) ≈ −2.8 s, ΔT(1950) ≈ 29 s, ΔT(1000) ≈ 1574 s.
        assert_abs_diff_eq!(delta_t(1900, 1), -2.79 + 1.494119 / 24.0, epsilon = 0.01);
        assert_abs_diff_eq!(delta_t(1950, 1), 29.07, epsilon = 0.1);
        assert_abs_diff_eq!(delta_t(1000, 1), 1574.2, epsilon = 3.0);
        let t = 20.0 + 0.5 / 12.0;
        assert_abs_diff_eq!(delta_t(2020, 1), 62.92 + 0.32217 * t + 0.005589 * t * t, epsilon = 1e-9);
    }

    #[test]
    fn test_far_eras_share_the_parabola() {
        let u = (-1000.0 + 5.5 / 12.0 - 1820.0) / 100.0;
        assert_abs_diff_eq!(delta_t(-1000, 6), -20.0 + 32.0 * u * u, epsilon = 1e-9);
        let u = (3000.0 + 0.5 / 12.0 - 1820.0) / 100.0;
        assert_abs_diff_eq!(delta_t(3000, 1), -20.0 + 32.0 * u * u, epsilon = 1e-9);
    }

    #[test]
    fn test_1961_to_1972_uses_cubic() {
        let t = 1965.0 + 5.5 / 12.0 - 1975.0;
        let expected = 45.45 + 1.067 * t - t * t / 260.0 - t * t * t / 718.0;
        assert_abs_diff_eq!(delta_t(1965, 6), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_every_month_of_every_year_has_one_branch() {
        for year in -2000..=3000 {
            for month in 1..=12 {
                let hits = DeltaTEra::ALL
                    .iter()
                    .filter(|era| era.contains(year, month))
                    .count();
                assert_eq!(hits, 1, "{}-{:02} is in {} branches", year, month, hits);
                assert!(DeltaTEra::for_date(year, month).contains(year, month));
            }
        }
    }

    proptest! {
        #[test]
        fn branch_selection_is_exclusive(year in -100_000i32..100_000, month in 1u32..=12) {
            let era = DeltaTEra::for_date(year, month);
            prop_assert!(era.contains(year, month));
            for other in DeltaTEra::ALL.iter().filter(|&&e| e != era) {
                prop_assert!(!other.contains(year, month));
            }
            prop_assert!(delta_t(year, month).is_finite());
        }
    }
}
