//! A single instant expressed in the time scales the pipeline needs.
//!
//! An [`Instant`] is built from a civil timestamp in UTC or TT and carries TT,
//! UT1 and the ΔT that links them. Timestamps are `chrono::NaiveDateTime`
//! values with nanosecond resolution; ΔT is rounded to the nanosecond once, so
//! `UT1 + ΔT` recovers TT exactly.
//!
//! # UTC input
//!
//! ```text
//! 1972 onward:   TT = UTC + (TAI − UTC) + 32.184 s
//! before 1972:   TT = UTC + ΔT(UTC)
//! then:          UT1 = TT − ΔT(TT)
//! ```
//!
//! Past the end of the leap-second table the last TAI − UTC is reused and a
//! warning is logged.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};

use crate::constants::{
    EARTH_MEAN_ANOMALY_J2000, EARTH_MEAN_ANOMALY_RATE, J2000_JD, NANOSECONDS_PER_SECOND_F64,
    TDB_ANNUAL_AMPLITUDE, TDB_SEMIANNUAL_AMPLITUDE, TT_MINUS_TAI,
};
use crate::delta_t::{delta_t, DeltaTEra};
use crate::julian::JulianDate;
use crate::leap_seconds;
use crate::{TimeError, TimeResult};

/// Time scale of a civil input timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum InputScale {
    #[default]
    Utc,
    Tt,
}

impl fmt::Display for InputScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputScale::Utc => f.write_str("UTC"),
            InputScale::Tt => f.write_str("TT"),
        }
    }
}

impl FromStr for InputScale {
    type Err = TimeError;

    fn from_str(s: &str) -> TimeResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utc" => Ok(InputScale::Utc),
            "tt" => Ok(InputScale::Tt),
            other => Err(TimeError::ParseError(format!(
                "Unknown time scale '{}'. Expected UTC or TT",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instant {
    pub scale: InputScale,
    /// Present only when the input was UTC.
    pub utc: Option<NaiveDateTime>,
    pub tt: NaiveDateTime,
    pub ut1: NaiveDateTime,
    /// TT − UT1 in seconds.
    pub delta_t: f64,
    pub delta_t_era: DeltaTEra,
}

impl Instant {
    pub fn new(scale: InputScale, timestamp: NaiveDateTime) -> TimeResult<Self> {
        match scale {
            InputScale::Utc => Self::from_utc(timestamp),
            InputScale::Tt => Self::from_tt(timestamp),
        }
    }

    /// UT1 = TT − ΔT(TT).
    pub fn from_tt(tt: NaiveDateTime) -> TimeResult<Self> {
        Self::with_tt(InputScale::Tt, None, tt)
    }

    pub fn from_utc(utc: NaiveDateTime) -> TimeResult<Self> {
        let (year, month) = (utc.year(), utc.month());
        let tt_minus_utc = match leap_seconds::tai_minus_utc(year, month) {
            Some(offset) => {
                if leap_seconds::is_extrapolated(year, month) {
                    tracing::warn!(
                        %utc,
                        tai_minus_utc = offset,
                        "instant is past the leap-second table, reusing the last TAI-UTC"
                    );
                }
                offset + TT_MINUS_TAI
            }
            None => delta_t(year, month),
        };
        let tt = shift(utc, tt_minus_utc)?;
        Self::with_tt(InputScale::Utc, Some(utc), tt)
    }

    /// Validates calendar fields and builds the instant.
    ///
    /// # Errors
    ///
    /// `InvalidDate` for a month outside 1–12, a day not in the month, hour
    /// outside 0–23, minute outside 0–59 or second outside [0, 60).
    pub fn from_calendar(
        scale: InputScale,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> TimeResult<Self> {
        let timestamp = civil_timestamp(year, month, day, hour, minute, second)?;
        Self::new(scale, timestamp)
    }

    pub fn from_utc_calendar(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> TimeResult<Self> {
        Self::from_calendar(InputScale::Utc, year, month, day, hour, minute, second)
    }

    pub fn from_tt_calendar(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> TimeResult<Self> {
        Self::from_calendar(InputScale::Tt, year, month, day, hour, minute, second)
    }

    fn with_tt(scale: InputScale, utc: Option<NaiveDateTime>, tt: NaiveDateTime) -> TimeResult<Self> {
        let (year, month) = (tt.year(), tt.month());
        let era = DeltaTEra::for_date(year, month);
        let dt = delta_t(year, month);
        let ut1 = tt2ut1(tt, dt)?;

        tracing::debug!(%tt, %ut1, delta_t = dt, %era, "time scales");

        Ok(Self {
            scale,
            utc,
            tt,
            ut1,
            delta_t: dt,
            delta_t_era: era,
        })
    }

    pub fn jd_tt(&self) -> JulianDate {
        JulianDate::from_datetime(&self.tt)
    }

    pub fn jd_ut1(&self) -> JulianDate {
        JulianDate::from_datetime(&self.ut1)
    }

    /// TT Julian centuries since J2000.0.
    pub fn centuries(&self) -> f64 {
        self.jd_tt().centuries()
    }

    /// TDB − TT in seconds, two-term approximation.
    pub fn tdb_minus_tt(&self) -> f64 {
        let g = EARTH_MEAN_ANOMALY_J2000 + EARTH_MEAN_ANOMALY_RATE * (self.jd_tt().to_f64() - J2000_JD);
        TDB_ANNUAL_AMPLITUDE * libm::sin(g) + TDB_SEMIANNUAL_AMPLITUDE * libm::sin(2.0 * g)
    }

    pub fn tdb(&self) -> TimeResult<NaiveDateTime> {
        shift(self.tt, self.tdb_minus_tt())
    }
}

/// Converts seconds to a `TimeDelta`, rounded to the nanosecond.
pub fn seconds_to_delta(seconds: f64) -> TimeResult<TimeDelta> {
    let nanos = libm::round(seconds * NANOSECONDS_PER_SECOND_F64);
    if !nanos.is_finite() || nanos.abs() >= i64::MAX as f64 {
        return Err(TimeError::CalculationError(format!(
            "Time offset of {} s cannot be represented",
            seconds
        )));
    }
    Ok(TimeDelta::nanoseconds(nanos as i64))
}

/// UT1 from TT: subtracts ΔT seconds, same calendar.
pub fn tt2ut1(tt: NaiveDateTime, delta_t: f64) -> TimeResult<NaiveDateTime> {
    let offset = seconds_to_delta(delta_t)?;
    tt.checked_sub_signed(offset).ok_or_else(|| {
        TimeError::CalculationError(format!("UT1 out of range: {} - {} s", tt, delta_t))
    })
}

fn shift(timestamp: NaiveDateTime, seconds: f64) -> TimeResult<NaiveDateTime> {
    let offset = seconds_to_delta(seconds)?;
    timestamp.checked_add_signed(offset).ok_or_else(|| {
        TimeError::CalculationError(format!("Timestamp out of range: {} + {} s", timestamp, seconds))
    })
}

/// Builds a validated `NaiveDateTime` from calendar fields.
pub fn civil_timestamp(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> TimeResult<NaiveDateTime> {
    if !(1..=12).contains(&month) {
        return Err(TimeError::InvalidDate(format!(
            "month {} out of range 1-12",
            month
        )));
    }
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        TimeError::InvalidDate(format!(
            "{:04}-{:02}-{:02}: day out of range for month",
            year, month, day
        ))
    })?;
    if hour > 23 {
        return Err(TimeError::InvalidDate(format!("hour {} out of range 0-23", hour)));
    }
    if minute > 59 {
        return Err(TimeError::InvalidDate(format!("minute {} out of range 0-59", minute)));
    }
    if !(0.0..60.0).contains(&second) {
        return Err(TimeError::InvalidDate(format!("second {} out of range 0-59", second)));
    }

    let start = date
        .and_hms_opt(hour, minute, 0)
        .ok_or_else(|| TimeError::InvalidDate(format!("{:02}:{:02} is not a valid time", hour, minute)))?;
    shift(start, second)
}
