//! Day-aligned sign lookup (the daily "Moon in ..." cell label).

use chrono::NaiveDate;

use crate::error::SearchError;
use crate::sign::{ZodiacSign, sign_from_longitude};
use crate::source::{LongitudeSource, sample};
use crate::span::YearSpan;

/// Sign of a body at the sampling hour of one civil day.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DailySign {
    pub date: NaiveDate,
    pub sign: ZodiacSign,
    pub longitude_deg: f64,
}

/// Sign of `source` at `span`'s sampling hour on `date`.
///
/// `date` need not lie inside the span; only its offset and sampling hour
/// are used.
pub fn sign_on_day<S>(source: &S, span: &YearSpan, date: NaiveDate) -> Result<DailySign, SearchError>
where
    S: LongitudeSource + ?Sized,
{
    let longitude_deg = sample(source, span.day_sample_jd(date))?;
    Ok(DailySign {
        date,
        sign: sign_from_longitude(longitude_deg),
        longitude_deg,
    })
}

/// [`sign_on_day`] for every day of the year, in date order.
pub fn daily_signs<S>(source: &S, span: &YearSpan) -> Result<Vec<DailySign>, SearchError>
where
    S: LongitudeSource + ?Sized,
{
    span.days().map(|d| sign_on_day(source, span, d)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_entry_per_day() {
        let span = YearSpan::new(2026, 1.0).unwrap();
        let src = |_jd: f64| -> Result<f64, SearchError> { Ok(95.0) };
        let days = daily_signs(&src, &span).unwrap();
        assert_eq!(days.len(), 365);
        assert!(days.iter().all(|d| d.sign == ZodiacSign::Cancer));
        assert_eq!(days[0].date, span.first_day());
        assert_eq!(days[364].date, span.last_day());
    }

    #[test]
    fn samples_at_sample_hour() {
        let span = YearSpan::utc(2026).unwrap().with_sample_hour(6.0).unwrap();
        let start = span.start_jd();
        // 0 deg at 00:00, 30 deg at 12:00 on Jan 1.
        let src = move |jd: f64| -> Result<f64, SearchError> { Ok(60.0 * (jd - start)) };
        let day = sign_on_day(&src, &span, span.first_day()).unwrap();
        assert_eq!(day.sign, ZodiacSign::Aries);
        assert!((day.longitude_deg - 15.0).abs() < 1e-6);
    }
}
