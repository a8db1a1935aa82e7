//! Greenwich sidereal time from a civil timestamp.
//!
//! This crate turns a calendar instant given in UTC or TT into the Earth
//! rotation angle, the equation of the origins, Greenwich apparent and mean
//! sidereal time and the equation of the equinoxes, following the IAU
//! 2006/2000A model. The numerical series live in `sidereal-core`; this crate
//! owns everything to do with time scales.
//!
//! ```text
//! civil instant ─► TT, ΔT, UT1 ─► JD(TT), JC ─► precession + nutation ─► NPB
//!                                    │                                   │
//!                                    └──► JD(UT1) ─► ERA        s, EO ◄──┘
//!                                                    │           │
//!                                                    └─► GAST, GMST, EE
//! ```
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use sidereal_core::test_helpers::fixture_tables;
//! use sidereal_time::{GreenwichCalculator, Instant};
//!
//! let calculator = GreenwichCalculator::new(Arc::new(fixture_tables()));
//! let instant = Instant::from_utc_calendar(2016, 9, 6, 0, 0, 0.0)?;
//! let times = calculator.compute(&instant)?;
//!
//! assert!((times.era.radians() - 6.026682706532952).abs() < 1e-12);
//! assert_eq!(times.gast.radians() - times.gmst.radians(), times.ee.radians());
//! # Ok::<(), sidereal_time::TimeError>(())
//! ```

pub mod config;
pub mod constants;
pub mod delta_t;
pub mod instant;
pub mod julian;
pub mod leap_seconds;
pub mod parsing;
pub mod pipeline;
pub mod sidereal;

pub use config::TableConfig;
pub use delta_t::{delta_t, DeltaTEra};
pub use instant::{tt2ut1, InputScale, Instant};
pub use julian::JulianDate;
pub use pipeline::{GreenwichCalculator, GreenwichTimes};

use sidereal_core::AstroError;
use thiserror::Error;

pub type TimeResult<T> = Result<T, TimeError>;

#[derive(Error, Debug)]
pub enum TimeError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),

    #[error(transparent)]
    Core(#[from] AstroError),
}

impl TimeError {
    /// True for failures caused by table data that a corrected file could fix.
    pub fn is_recoverable(&self) -> bool {
        match self {
            TimeError::Core(err) => err.is_recoverable(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_pass_through_unchanged() {
        let core = AstroError::missing_table("lunisolar");
        let shown = core.to_string();
        let err: TimeError = core.into();
        assert_eq!(err.to_string(), shown);
        assert!(!err.is_recoverable());
    }

    #[test]
    fn data_errors_stay_recoverable() {
        let err: TimeError = AstroError::data_error("nutation table", "read", "gone").into();
        assert!(err.is_recoverable());
        assert!(!TimeError::ParseError("x".into()).is_recoverable());
    }
}
