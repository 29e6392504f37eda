//! The scanned calendar year.

use chrono::{Datelike, NaiveDate};

use astrocal_time::{jd_to_local_date, local_hour_to_jd, validate_offset};

use crate::error::SearchError;

/// Default local hour for day-aligned samples (the "local noon" proxy).
pub const DEFAULT_SAMPLE_HOUR: f64 = 12.0;

/// One civil year at a fixed UTC offset.
///
/// Continuous scans cover `[Jan 1 00:00, next Jan 1 00:00)` local time.
/// Day-aligned scans take one sample per civil day at `sample_hour`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearSpan {
    year: i32,
    utc_offset_hours: f64,
    sample_hour: f64,
    first_day: NaiveDate,
    next_year_first_day: NaiveDate,
}

impl YearSpan {
    /// Span for `year` at `utc_offset_hours`, sampling days at local noon.
    pub fn new(year: i32, utc_offset_hours: f64) -> Result<Self, SearchError> {
        validate_offset(utc_offset_hours)?;
        let first_day = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or(SearchError::InvalidConfig("year not representable"))?;
        let next_year_first_day = NaiveDate::from_ymd_opt(year + 1, 1, 1)
            .ok_or(SearchError::InvalidConfig("year not representable"))?;
        Ok(Self {
            year,
            utc_offset_hours,
            sample_hour: DEFAULT_SAMPLE_HOUR,
            first_day,
            next_year_first_day,
        })
    }

    /// Span for `year` in UTC.
    pub fn utc(year: i32) -> Result<Self, SearchError> {
        Self::new(year, 0.0)
    }

    /// Change the local hour used for day-aligned samples.
    pub fn with_sample_hour(mut self, hour: f64) -> Result<Self, SearchError> {
        if !(0.0..24.0).contains(&hour) {
            return Err(SearchError::InvalidConfig("sample_hour must be in [0, 24)"));
        }
        self.sample_hour = hour;
        Ok(self)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn utc_offset_hours(&self) -> f64 {
        self.utc_offset_hours
    }

    pub fn sample_hour(&self) -> f64 {
        self.sample_hour
    }

    /// Jan 1 of the year.
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Dec 31 of the year.
    pub fn last_day(&self) -> NaiveDate {
        self.next_year_first_day.pred_opt().unwrap_or(self.first_day)
    }

    /// Number of days in the year.
    pub fn day_count(&self) -> u32 {
        self.last_day().ordinal()
    }

    /// JD (UT) of local midnight starting Jan 1.
    pub fn start_jd(&self) -> f64 {
        local_hour_to_jd(self.first_day, 0.0, self.utc_offset_hours)
    }

    /// JD (UT) of local midnight starting Jan 1 of the following year.
    pub fn end_jd(&self) -> f64 {
        local_hour_to_jd(self.next_year_first_day, 0.0, self.utc_offset_hours)
    }

    /// Every civil day of the year, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.next_year_first_day;
        self.first_day.iter_days().take_while(move |d| *d < end)
    }

    /// JD (UT) of the day-aligned sample on `date`.
    pub fn day_sample_jd(&self, date: NaiveDate) -> f64 {
        local_hour_to_jd(date, self.sample_hour, self.utc_offset_hours)
    }

    /// Local civil date of an instant.
    pub fn date_of(&self, jd_utc: f64) -> Result<NaiveDate, SearchError> {
        Ok(jd_to_local_date(jd_utc, self.utc_offset_hours)?)
    }

    /// Whether `date` lies in this year.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_day && date < self.next_year_first_day
    }
}
