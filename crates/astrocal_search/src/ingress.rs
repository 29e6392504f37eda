//! Sign-change (ingress) detection.
//!
//! Samples a longitude source at a fixed cadence across the year and
//! reports every sample whose zodiac index differs from the previous
//! one. The previous index is taken as held over `[t_prev, t_curr)` and
//! the new one as starting somewhere inside that bracket.
//!
//! With refinement enabled, the bracket is narrowed by a fixed number of
//! bisections: a midpoint still in the old sign moves the lower bound,
//! anything else moves the upper bound, and the final upper bound is the
//! reported "first moment in the new sign". This assumes a single
//! crossing inside the bracket. A reversal back across the line within one
//! coarse step is not detected and the bisection returns whichever
//! crossing it converges on.
//!
//! Coarse samples never pass the last in-year sample time. Changes whose
//! instant falls on the following year's Jan 1 are dropped.
//!
//! Retrograde loops across a sign line produce several events close
//! together; they are reported as found, never merged.

use crate::error::SearchError;
use crate::ingress_types::{IngressConfig, SignChangeEvent};
use crate::sign::{ZodiacSign, sign_index};
use crate::source::{LongitudeSource, sample};
use crate::span::YearSpan;

/// Lazy, single-pass sequence of sign changes over a [`YearSpan`].
///
/// Yields events in time order. After the first error the iterator is
/// exhausted. Create a new one to rescan.
pub struct SignChanges<'a, S: LongitudeSource + ?Sized> {
    source: &'a S,
    span: YearSpan,
    config: IngressConfig,
    end_jd: f64,
    /// Last sample time and its index; `None` until the first sample.
    prev: Option<(f64, u8)>,
    done: bool,
}

/// Create a lazy sign-change scan. Configuration is validated up front.
pub fn sign_changes<'a, S>(
    source: &'a S,
    span: &YearSpan,
    config: &IngressConfig,
) -> Result<SignChanges<'a, S>, SearchError>
where
    S: LongitudeSource + ?Sized,
{
    config.validate().map_err(SearchError::InvalidConfig)?;
    Ok(SignChanges {
        source,
        span: *span,
        config: *config,
        end_jd: span.end_jd(),
        prev: None,
        done: false,
    })
}

/// Collect all sign changes of `source` over the year.
pub fn find_sign_changes<S>(
    source: &S,
    span: &YearSpan,
    config: &IngressConfig,
) -> Result<Vec<SignChangeEvent>, SearchError>
where
    S: LongitudeSource + ?Sized,
{
    sign_changes(source, span, config)?.collect()
}

impl<S: LongitudeSource + ?Sized> SignChanges<'_, S> {
    fn advance(&mut self) -> Result<Option<SignChangeEvent>, SearchError> {
        let (mut t_prev, mut idx_prev) = match self.prev {
            Some(state) => state,
            None => {
                let t0 = self.span.start_jd() + self.config.first_sample_hour / 24.0;
                let state = (t0, sign_index(sample(self.source, t0)?));
                self.prev = Some(state);
                state
            }
        };

        while t_prev < self.end_jd {
            let mut t_curr = t_prev + self.config.step_days;
            if t_curr >= self.end_jd {
                // Coarse samples stay inside the year; a refined scan closes
                // the last bracket at the span end.
                if self.config.refine_iterations.is_none() {
                    self.prev = Some((self.end_jd, idx_prev));
                    break;
                }
                t_curr = self.end_jd;
            }
            let lon_curr = sample(self.source, t_curr)?;
            let idx_curr = sign_index(lon_curr);
            self.prev = Some((t_curr, idx_curr));

            if idx_curr != idx_prev {
                let (jd_utc, longitude_deg) = match self.config.refine_iterations {
                    Some(n) => self.refine(t_prev, t_curr, lon_curr, idx_prev, n)?,
                    None => (t_curr, lon_curr),
                };
                let date = self.span.date_of(jd_utc)?;
                if self.span.contains(date) {
                    return Ok(Some(SignChangeEvent {
                        jd_utc,
                        date,
                        from: ZodiacSign::from_index(idx_prev),
                        to: ZodiacSign::from_index(idx_curr),
                        longitude_deg,
                    }));
                }
            }

            t_prev = t_curr;
            idx_prev = idx_curr;
        }

        Ok(None)
    }

    /// Narrow `[lo, hi)` around the change; returns the upper bound and its longitude.
    fn refine(
        &self,
        mut lo: f64,
        mut hi: f64,
        mut lon_hi: f64,
        idx_before: u8,
        iterations: u32,
    ) -> Result<(f64, f64), SearchError> {
        for _ in 0..iterations {
            let mid = lo + 0.5 * (hi - lo);
            let lon_mid = sample(self.source, mid)?;
            if sign_index(lon_mid) == idx_before {
                lo = mid;
            } else {
                hi = mid;
                lon_hi = lon_mid;
            }
        }
        Ok((hi, lon_hi))
    }
}

impl<S: LongitudeSource + ?Sized> Iterator for SignChanges<'_, S> {
    type Item = Result<SignChangeEvent, SearchError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.advance() {
            Ok(Some(event)) => Some(Ok(event)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn span() -> YearSpan {
        YearSpan::utc(2026).unwrap()
    }

    #[test]
    fn constant_longitude_has_no_events() {
        let src = |_jd: f64| -> Result<f64, SearchError> { Ok(15.0) };
        let events = find_sign_changes(&src, &span(), &IngressConfig::refined()).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn invalid_config_rejected_before_sampling() {
        let calls = Cell::new(0u32);
        let src = |_jd: f64| -> Result<f64, SearchError> {
            calls.set(calls.get() + 1);
            Ok(0.0)
        };
        let mut config = IngressConfig::daily();
        config.step_days = -1.0;
        assert!(matches!(
            find_sign_changes(&src, &span(), &config),
            Err(SearchError::InvalidConfig(_))
        ));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn source_error_stops_iteration() {
        let start = span().start_jd();
        let src = move |jd: f64| -> Result<f64, SearchError> {
            if jd - start > 100.0 {
                Err(SearchError::InvalidConfig("source failed"))
            } else {
                Ok((jd - start) * 1.0)
            }
        };
        let mut it = sign_changes(&src, &span(), &IngressConfig::daily()).unwrap();
        let results: Vec<_> = it.by_ref().collect();
        assert!(results.last().unwrap().is_err());
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 3);
        assert!(it.next().is_none());
    }

    #[test]
    fn backward_crossing_reports_previous_sign() {
        let start = span().start_jd();
        // 35 deg falling 1 deg/day crosses into Aries after 5 days.
        let src = move |jd: f64| -> Result<f64, SearchError> { Ok(35.0 - (jd - start)) };
        let events = find_sign_changes(&src, &span(), &IngressConfig::refined()).unwrap();
        let first = events[0];
        assert_eq!(first.from, ZodiacSign::Taurus);
        assert_eq!(first.to, ZodiacSign::Aries);
        assert!((first.jd_utc - start - 5.0).abs() < 1e-3);
    }

    #[test]
    fn refinement_lands_just_after_boundary() {
        let start = span().start_jd();
        let src = move |jd: f64| -> Result<f64, SearchError> { Ok(10.0 + 2.0 * (jd - start)) };
        let events = find_sign_changes(&src, &span(), &IngressConfig::refined()).unwrap();
        let first = events[0];
        assert_eq!(first.to, ZodiacSign::Taurus);
        assert!(first.longitude_deg >= 30.0 && first.longitude_deg < 30.001);
        assert!((first.jd_utc - start - 10.0).abs() < 1e-4);
    }

    #[test]
    fn daily_samples_at_first_sample_hour() {
        let span = YearSpan::new(2026, 1.0).unwrap();
        let start = span.start_jd();
        // Crosses 30 deg at 06:00 local on Jan 3; first noon sample after is Jan 3.
        let src = move |jd: f64| -> Result<f64, SearchError> { Ok(30.0 + (jd - start - 2.25)) };
        let events = find_sign_changes(&src, &span, &IngressConfig::daily()).unwrap();
        assert_eq!(events[0].date.to_string(), "2026-01-03");
        assert!((events[0].jd_utc - span.day_sample_jd(events[0].date)).abs() < 1e-9);
    }

    #[test]
    fn change_at_span_end_is_not_reported() {
        let span = span();
        let end = span.end_jd();
        let src = move |jd: f64| -> Result<f64, SearchError> {
            Ok(if jd < end { 29.0 } else { 30.0 })
        };
        assert!(find_sign_changes(&src, &span, &IngressConfig::refined()).unwrap().is_empty());
        assert!(find_sign_changes(&src, &span, &IngressConfig::daily()).unwrap().is_empty());
    }

    #[test]
    fn change_after_last_noon_only_found_when_refined() {
        let span = span();
        let start = span.start_jd();
        // Crosses 390 deg (Taurus) at 19:12 UTC on Dec 31.
        let src = move |jd: f64| -> Result<f64, SearchError> { Ok(jd - start + 25.2) };

        let daily = find_sign_changes(&src, &span, &IngressConfig::daily()).unwrap();
        assert!(daily.iter().all(|e| span.contains(e.date)));
        assert_ne!(daily.last().unwrap().date, span.last_day());

        let refined = find_sign_changes(&src, &span, &IngressConfig::refined()).unwrap();
        let last = refined.last().unwrap();
        assert_eq!(last.date, span.last_day());
        assert_eq!(last.to, ZodiacSign::Taurus);
        assert!((last.jd_utc - start - 364.8).abs() < 1e-4);
    }

    #[test]
    fn iterator_is_lazy() {
        let calls = Cell::new(0u32);
        let start = span().start_jd();
        let src = |jd: f64| -> Result<f64, SearchError> {
            calls.set(calls.get() + 1);
            Ok(13.0 * (jd - start))
        };
        let mut it = sign_changes(&src, &span(), &IngressConfig::daily()).unwrap();
        assert_eq!(calls.get(), 0);
        it.next().unwrap().unwrap();
        // 13 deg/day reaches 30 deg on the third sample.
        assert_eq!(calls.get(), 3);
    }
}
