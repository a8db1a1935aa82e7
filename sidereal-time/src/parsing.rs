use crate::instant::civil_timestamp;
use crate::{TimeError, TimeResult};
use chrono::NaiveDateTime;

/// Calendar fields read from a compact timestamp, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub microsecond: u32,
}

impl ParsedDateTime {
    pub fn seconds(&self) -> f64 {
        self.second as f64 + self.microsecond as f64 * 1e-6
    }

    /// Validates the fields.
    ///
    /// # Errors
    ///
    /// `InvalidDate` for an impossible calendar date or time of day.
    pub fn to_datetime(&self) -> TimeResult<NaiveDateTime> {
        civil_timestamp(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.seconds(),
        )
    }
}

fn digits(s: &str, range: std::ops::Range<usize>) -> u32 {
    s.as_bytes()[range]
        .iter()
        .fold(0, |acc, &b| acc * 10 + (b - b'0') as u32)
}

/// Parses `YYYYMMDD`, `YYYYMMDDHHMMSS` or `YYYYMMDDHHMMSSffffff`.
///
/// Only the shape is checked here; see [`parse_timestamp`] for validation.
pub fn parse_compact(s: &str) -> TimeResult<ParsedDateTime> {
    let s = s.trim();

    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::ParseError(format!(
            "Invalid timestamp '{}': only digits are allowed",
            s
        )));
    }
    if !matches!(s.len(), 8 | 14 | 20) {
        return Err(TimeError::ParseError(format!(
            "Invalid timestamp '{}': expected YYYYMMDD, YYYYMMDDHHMMSS or YYYYMMDDHHMMSSffffff ({} digits given)",
            s,
            s.len()
        )));
    }

    let time = |range: std::ops::Range<usize>| if s.len() >= range.end { digits(s, range) } else { 0 };

    Ok(ParsedDateTime {
        year: digits(s, 0..4) as i32,
        month: digits(s, 4..6),
        day: digits(s, 6..8),
        hour: time(8..10),
        minute: time(10..12),
        second: time(12..14),
        microsecond: time(14..20),
    })
}

/// Parses and validates a compact timestamp.
///
/// ```
/// use sidereal_time::parsing::parse_timestamp;
///
/// let t = parse_timestamp("20160906000000").unwrap();
/// assert_eq!(t.to_string(), "2016-09-06 00:00:00");
/// assert!(parse_timestamp("20150229").is_err());
/// ```
pub fn parse_timestamp(s: &str) -> TimeResult<NaiveDateTime> {
    parse_compact(s)?.to_datetime()
}

/// Current system time as a UTC timestamp.
pub fn now_utc() -> NaiveDateTime {
    chrono::Utc::now().naive_utc()
}
