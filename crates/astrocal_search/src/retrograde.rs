//! Retrograde interval detection from day-over-day longitude motion.
//!
//! One sample per civil day at the span's sampling hour. The signed
//! motion between consecutive samples is wrapped into (-180, 180] so a
//! pass through 0/360 reads as a small forward step. Two states:
//! prograde and retrograde. The first negative delta opens an interval on
//! that day, the first non-negative delta after it closes the interval on
//! that day. An interval still open after Dec 31 is closed on Dec 31 and
//! flagged `truncated`; nothing is extrapolated past the span.

use crate::error::SearchError;
use crate::retrograde_types::RetrogradeInterval;
use crate::search_util::wrap_delta_deg;
use crate::source::{LongitudeSource, sample};
use crate::span::YearSpan;

/// Find every retrograde interval of `source` within the year.
///
/// Intervals are ordered by start date and never overlap.
pub fn find_retrograde_intervals<S>(
    source: &S,
    span: &YearSpan,
) -> Result<Vec<RetrogradeInterval>, SearchError>
where
    S: LongitudeSource + ?Sized,
{
    let mut intervals = Vec::new();
    let mut days = span.days();
    let Some(first) = days.next() else {
        return Ok(intervals);
    };

    let mut lon_prev = sample(source, span.day_sample_jd(first))?;
    let mut open: Option<(chrono::NaiveDate, f64)> = None;

    for day in days {
        let jd = span.day_sample_jd(day);
        let lon = sample(source, jd)?;
        let delta = wrap_delta_deg(lon_prev, lon);
        lon_prev = lon;

        match open {
            None if delta < 0.0 => open = Some((day, jd)),
            Some((start, start_jd_utc)) if delta >= 0.0 => {
                intervals.push(RetrogradeInterval {
                    start,
                    end: day,
                    start_jd_utc,
                    end_jd_utc: jd,
                    truncated: false,
                });
                open = None;
            }
            _ => {}
        }
    }

    if let Some((start, start_jd_utc)) = open {
        let end = span.last_day();
        intervals.push(RetrogradeInterval {
            start,
            end,
            start_jd_utc,
            end_jd_utc: span.day_sample_jd(end),
            truncated: true,
        });
    }

    Ok(intervals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn span() -> YearSpan {
        YearSpan::utc(2026).unwrap()
    }

    fn day(ordinal0: u32) -> NaiveDate {
        span().first_day() + chrono::Days::new(u64::from(ordinal0))
    }

    #[test]
    fn steady_forward_motion_has_no_intervals() {
        let start = span().start_jd();
        let src = move |jd: f64| -> Result<f64, SearchError> { Ok(0.9856 * (jd - start)) };
        assert!(find_retrograde_intervals(&src, &span()).unwrap().is_empty());
    }

    #[test]
    fn forward_through_zero_is_prograde() {
        let start = span().start_jd();
        let src = move |jd: f64| -> Result<f64, SearchError> { Ok(355.0 + 1.0 * (jd - start)) };
        assert!(find_retrograde_intervals(&src, &span()).unwrap().is_empty());
    }

    #[test]
    fn open_at_year_end_is_truncated() {
        let t0 = span().day_sample_jd(span().first_day());
        // Reverses after day 300 and never turns back.
        let src = move |jd: f64| -> Result<f64, SearchError> {
            let x = jd - t0;
            Ok(if x <= 300.0 { x } else { 300.0 - (x - 300.0) })
        };
        let out = find_retrograde_intervals(&src, &span()).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].start, day(301));
        assert_eq!(out[0].end, span().last_day());
        assert!(out[0].truncated);
    }

    #[test]
    fn retrograde_from_first_day_opens_on_second() {
        let t0 = span().day_sample_jd(span().first_day());
        let src = move |jd: f64| -> Result<f64, SearchError> {
            let x = jd - t0;
            Ok(if x <= 10.0 { 100.0 - x } else { 90.0 + x })
        };
        let out = find_retrograde_intervals(&src, &span()).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].start, day(1));
        assert_eq!(out[0].end, day(11));
    }

    #[test]
    fn source_error_propagates() {
        let src = |_jd: f64| -> Result<f64, SearchError> { Err(SearchError::InvalidConfig("down")) };
        assert!(find_retrograde_intervals(&src, &span()).is_err());
    }
}
