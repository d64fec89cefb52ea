//! Strict date/time codec for the dataset's `YYYY-MM-DD[ HH:MM]` fields.
//!
//! Everything downstream works on `i64` seconds since 1970-01-01T00:00 UTC;
//! no timezone or locale handling anywhere. The literal `N/A` is a sentinel
//! for "absent" (cancelled flight times) and is reported as `Ok(None)`,
//! distinct from a parse failure.

use chrono::{DateTime, NaiveDate};
use thiserror::Error;

/// Fixed "today" used to bound future-date validation.
pub const REFERENCE_DATE: &str = "2025-09-30";
/// `REFERENCE_DATE` at 00:00 UTC.
pub const REFERENCE_EPOCH: i64 = 1_759_190_400;
/// Year component of `REFERENCE_DATE`.
pub const REFERENCE_YEAR: u16 = 2025;

pub const SECONDS_PER_DAY: i64 = 86_400;
pub const SECONDS_PER_WEEK: i64 = 604_800;

// 1970-01-01 is a Thursday; shifting by three days puts the quotient
// boundaries of `week_index` on Mondays at 00:00 UTC.
const MONDAY_ALIGNMENT: i64 = 259_200;

const ABSENT: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimeError {
    /// Separator or digit in the wrong position, or wrong length.
    #[error("malformed date/time string")]
    BadFormat,
    /// Well-shaped string naming a non-existent calendar date or time.
    #[error("calendar field out of range")]
    OutOfRange,
}

fn field(bytes: &[u8]) -> Result<u32, TimeError> {
    let mut value = 0u32;
    for &b in bytes {
        if !b.is_ascii_digit() {
            return Err(TimeError::BadFormat);
        }
        value = value * 10 + u32::from(b - b'0');
    }
    Ok(value)
}

fn ymd_to_date(y: u32, m: u32, d: u32) -> Result<NaiveDate, TimeError> {
    NaiveDate::from_ymd_opt(y as i32, m, d).ok_or(TimeError::OutOfRange)
}

/// Parse `YYYY-MM-DD` into epoch seconds at midnight UTC.
///
/// `Ok(None)` for the `N/A` sentinel.
pub fn parse_date(s: &str) -> Result<Option<i64>, TimeError> {
    if s == ABSENT {
        return Ok(None);
    }
    let b = s.as_bytes();
    if b.len() != 10 || b[4] != b'-' || b[7] != b'-' {
        return Err(TimeError::BadFormat);
    }
    let y = field(&b[0..4])?;
    let m = field(&b[5..7])?;
    let d = field(&b[8..10])?;
    let date = ymd_to_date(y, m, d)?;
    let midnight = date.and_hms_opt(0, 0, 0).ok_or(TimeError::OutOfRange)?;
    Ok(Some(midnight.and_utc().timestamp()))
}

/// Parse `YYYY-MM-DD HH:MM` into epoch seconds.
///
/// `Ok(None)` for the `N/A` sentinel.
pub fn parse_datetime(s: &str) -> Result<Option<i64>, TimeError> {
    if s == ABSENT {
        return Ok(None);
    }
    let b = s.as_bytes();
    if b.len() != 16 || b[4] != b'-' || b[7] != b'-' || b[10] != b' ' || b[13] != b':' {
        return Err(TimeError::BadFormat);
    }
    let y = field(&b[0..4])?;
    let m = field(&b[5..7])?;
    let d = field(&b[8..10])?;
    let hour = field(&b[11..13])?;
    let minute = field(&b[14..16])?;
    let date = ymd_to_date(y, m, d)?;
    let moment = date
        .and_hms_opt(hour, minute, 0)
        .ok_or(TimeError::OutOfRange)?;
    Ok(Some(moment.and_utc().timestamp()))
}

/// Truncate a timestamp to its UTC day boundary.
pub fn day_floor(t: i64) -> i64 {
    t - t.rem_euclid(SECONDS_PER_DAY)
}

/// Index of the Monday-aligned UTC week containing `t`.
pub fn week_index(t: i64) -> i64 {
    (t + MONDAY_ALIGNMENT).div_euclid(SECONDS_PER_WEEK)
}

/// Format epoch seconds as `YYYY-MM-DD`.
pub fn format_date(t: i64) -> String {
    match DateTime::from_timestamp(t, 0) {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => ABSENT.to_string(),
    }
}

/// Format epoch seconds as `YYYY-MM-DD HH:MM`.
pub fn format_datetime(t: i64) -> String {
    match DateTime::from_timestamp(t, 0) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => ABSENT.to_string(),
    }
}
