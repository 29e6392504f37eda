//! Types for retrograde interval search.

use chrono::NaiveDate;

/// Days over which a body's apparent longitude decreases.
///
/// `start` is the first sampled day whose day-over-day motion is
/// negative; `end` is the first sampled day whose motion is non-negative
/// again, or Dec 31 when `truncated`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RetrogradeInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Sample instant on `start`, Julian Date (UT).
    pub start_jd_utc: f64,
    /// Sample instant on `end`, Julian Date (UT).
    pub end_jd_utc: f64,
    /// Still retrograde at the last sample of the year.
    pub truncated: bool,
}

impl RetrogradeInterval {
    /// Whole days from `start` to `end`.
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Whether the body is retrograde on `date`: `[start, end)`, or
    /// `[start, end]` when truncated.
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.start && (date < self.end || (self.truncated && date == self.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval() -> RetrogradeInterval {
        RetrogradeInterval {
            start: NaiveDate::from_ymd_opt(2026, 2, 26).unwrap(),
            end: NaiveDate::from_ymd_opt(2026, 3, 20).unwrap(),
            start_jd_utc: 0.0,
            end_jd_utc: 22.0,
            truncated: false,
        }
    }

    #[test]
    fn duration() {
        assert_eq!(interval().duration_days(), 22);
    }

    #[test]
    fn covers_is_half_open() {
        let iv = interval();
        assert!(iv.covers(iv.start));
        assert!(!iv.covers(iv.end));
    }

    #[test]
    fn truncated_interval_covers_last_day() {
        let iv = RetrogradeInterval {
            truncated: true,
            ..interval()
        };
        assert!(iv.covers(iv.end));
        assert!(!iv.covers(iv.end.succ_opt().unwrap()));
    }
}
