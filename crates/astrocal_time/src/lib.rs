//! Time conversions for the astrocal calendar.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions
//! - ΔT and the UT → TT step used before ephemeris evaluation
//! - Civil dates at a fixed UTC offset (`chrono` types)

pub mod civil;
pub mod delta_t;
pub mod error;
pub mod julian;

pub use civil::{
    MAX_UTC_OFFSET_HOURS, jd_to_local_date, jd_to_local_datetime, local_datetime_to_jd,
    local_hour_to_jd, validate_offset,
};
pub use delta_t::{delta_t_seconds, ut_to_tt};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar,
    jd_to_centuries, jd_to_decimal_year,
};
