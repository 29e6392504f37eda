//! Civil (wall-clock) dates at a fixed UTC offset, on top of `chrono`.
//!
//! The calendar works in one local time zone with a constant offset; a
//! day's "local noon" is `12:00` at that offset regardless of daylight
//! saving.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar};

/// Largest accepted |UTC offset| in hours.
pub const MAX_UTC_OFFSET_HOURS: f64 = 14.0;

/// Check that a UTC offset is finite and within ±14 h.
pub fn validate_offset(utc_offset_hours: f64) -> Result<(), TimeError> {
    if utc_offset_hours.is_finite() && utc_offset_hours.abs() <= MAX_UTC_OFFSET_HOURS {
        Ok(())
    } else {
        Err(TimeError::InvalidOffset(utc_offset_hours))
    }
}

/// Julian Date (UT) of a local wall-clock instant.
pub fn local_datetime_to_jd(local: NaiveDateTime, utc_offset_hours: f64) -> f64 {
    let seconds = local.num_seconds_from_midnight() as f64
        + f64::from(local.nanosecond()) / 1e9;
    let day_frac = local.day() as f64 + seconds / SECONDS_PER_DAY;
    calendar_to_jd(local.year(), local.month(), day_frac) - utc_offset_hours / 24.0
}

/// Julian Date (UT) of `hour` o'clock local time on `date`.
pub fn local_hour_to_jd(date: NaiveDate, hour: f64, utc_offset_hours: f64) -> f64 {
    calendar_to_jd(date.year(), date.month(), date.day() as f64 + hour / 24.0)
        - utc_offset_hours / 24.0
}

/// Local wall-clock instant of a Julian Date (UT), rounded to the second.
pub fn jd_to_local_datetime(jd: f64, utc_offset_hours: f64) -> Result<NaiveDateTime, TimeError> {
    if !jd.is_finite() {
        return Err(TimeError::InvalidDate(jd));
    }
    let (year, month, day_frac) = jd_to_calendar(jd + utc_offset_hours / 24.0);
    let day = day_frac.floor();
    let date = NaiveDate::from_ymd_opt(year, month, day as u32).ok_or(TimeError::InvalidDate(jd))?;

    // Rounding may carry into the next day; chrono handles the rollover.
    let seconds = ((day_frac - day) * SECONDS_PER_DAY).round() as i64;
    date.and_hms_opt(0, 0, 0)
        .and_then(|midnight| midnight.checked_add_signed(Duration::seconds(seconds)))
        .ok_or(TimeError::InvalidDate(jd))
}

/// Local civil date of a Julian Date (UT).
pub fn jd_to_local_date(jd: f64, utc_offset_hours: f64) -> Result<NaiveDate, TimeError> {
    jd_to_local_datetime(jd, utc_offset_hours).map(|dt| dt.date())
}
