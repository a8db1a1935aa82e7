pub use sidereal_core::constants::{DAYS_PER_JULIAN_CENTURY, J2000_JD, NANOSECONDS_PER_SECOND_F64};

/// TT − TAI in seconds.
pub const TT_MINUS_TAI: f64 = 32.184;

/// First year of integer-second UTC.
pub const FIRST_LEAP_SECOND_YEAR: i32 = 1972;

/// Julian Date of the calendar epoch used by the day-count formula
/// (March 1 of year 0 is day 32 past it).
pub const CALENDAR_EPOCH_JD: f64 = 1_721_088.5;

/// TDB − TT: amplitude of the annual term (s).
pub const TDB_ANNUAL_AMPLITUDE: f64 = 0.001657;

/// TDB − TT: amplitude of the semiannual term (s).
pub const TDB_SEMIANNUAL_AMPLITUDE: f64 = 0.000014;

/// Earth's mean anomaly at J2000.0 (rad) and its daily rate (rad/day).
pub const EARTH_MEAN_ANOMALY_J2000: f64 = 6.24;
pub const EARTH_MEAN_ANOMALY_RATE: f64 = 0.017202;

/// Earth rotation angle at J2000.0 UT1 (turns).
pub const ERA_AT_J2000: f64 = 0.7790572732640;

/// Fractional turns per UT1 day beyond one full rotation.
pub const ERA_RATE: f64 = 0.00273781191135448;

/// GMST minus ERA (IAU 2006), arcseconds, coefficients of TT centuries⁰..⁵.
pub const GMST06_POLYNOMIAL: [f64; 6] = [
    0.014506,
    4612.156534,
    1.3915817,
    -0.00000044,
    -0.000029956,
    -0.0000000368,
];
