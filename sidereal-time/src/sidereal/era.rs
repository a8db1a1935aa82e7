//! Earth rotation angle (IAU 2000).
//!
//! ```text
//! ERA = 2π (Tu_frac + 0.7790572732640 + 0.00273781191135448 Tu)
//! ```
//!
//! where `Tu = JD(UT1) − 2451545.0`. The whole-day part of `Tu` contributes
//! exact turns, so only the fractional days of both date parts are kept in
//! the first term.

use crate::constants::{ERA_AT_J2000, ERA_RATE, J2000_JD};
use crate::{TimeError, TimeResult};
use sidereal_core::angle::wrap_0_2pi;
use sidereal_core::constants::TWOPI;
use sidereal_core::math::fmod;

/// Days from J2000.0 beyond which the rotation term loses all precision.
const MAX_DAYS_FROM_J2000: f64 = 1e12;

/// Earth rotation angle in [0, 2π) for a two-part UT1 Julian Date.
pub fn era00(ut1_jd1: f64, ut1_jd2: f64) -> TimeResult<f64> {
    let (d1, d2) = if ut1_jd1 < ut1_jd2 {
        (ut1_jd1, ut1_jd2)
    } else {
        (ut1_jd2, ut1_jd1)
    };

    let t = d1 + (d2 - J2000_JD);

    if !t.is_finite() || t.abs() > MAX_DAYS_FROM_J2000 {
        return Err(TimeError::CalculationError(format!(
            "Time value out of valid range: {} days from J2000",
            t
        )));
    }

    let f = fmod(d1, 1.0) + fmod(d2, 1.0);
    let theta = TWOPI * (f + ERA_AT_J2000 + ERA_RATE * t);

    Ok(wrap_0_2pi(theta))
}
