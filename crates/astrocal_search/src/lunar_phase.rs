//! New and Full Moon search.
//!
//! f(t) = normalize(lon_moon(t) - lon_sun(t) - target), wrapped to
//! [-180, +180) so a zero crossing is the target elongation. Coarse scan
//! at `step_days` over the year, bisection on each genuine crossing. The
//! ±180 wrap jump is rejected the same way as for any separation search.

use crate::error::SearchError;
use crate::lunar_phase_types::{LunarPhase, LunarPhaseEvent, PhaseConfig};
use crate::search_util::{bisect_zero, is_genuine_crossing, normalize_to_pm180};
use crate::sign::sign_from_longitude;
use crate::source::{LongitudeSource, sample};
use crate::span::YearSpan;

const PHASES: [LunarPhase; 2] = [LunarPhase::New, LunarPhase::Full];

fn phase_offset<M, S>(moon: &M, sun: &S, jd_utc: f64, target_deg: f64) -> Result<f64, SearchError>
where
    M: LongitudeSource + ?Sized,
    S: LongitudeSource + ?Sized,
{
    let elongation = sample(moon, jd_utc)? - sample(sun, jd_utc)?;
    Ok(normalize_to_pm180(elongation - target_deg))
}

/// Find all New and Full Moons in `[span.start_jd(), span.end_jd())`.
///
/// `moon` and `sun` supply geocentric longitudes in the same frame.
/// Events are returned in time order.
pub fn find_lunar_phases<M, S>(
    moon: &M,
    sun: &S,
    span: &YearSpan,
    config: &PhaseConfig,
) -> Result<Vec<LunarPhaseEvent>, SearchError>
where
    M: LongitudeSource + ?Sized,
    S: LongitudeSource + ?Sized,
{
    config.validate().map_err(SearchError::InvalidConfig)?;

    let start = span.start_jd();
    let end = span.end_jd();
    let mut events = Vec::new();

    let mut t_prev = start;
    let mut f_prev = [0.0; 2];
    for (k, phase) in PHASES.iter().enumerate() {
        f_prev[k] = phase_offset(moon, sun, t_prev, phase.elongation_deg())?;
    }

    while t_prev < end {
        let t_curr = (t_prev + config.step_days).min(end);

        for (k, phase) in PHASES.iter().enumerate() {
            let target = phase.elongation_deg();
            let f_curr = phase_offset(moon, sun, t_curr, target)?;

            let root = if f_curr == 0.0 && f_prev[k] < 0.0 {
                Some(t_curr)
            } else if is_genuine_crossing(f_prev[k], f_curr) {
                let mut f_at = |t: f64| phase_offset(moon, sun, t, target);
                Some(bisect_zero(
                    t_prev,
                    f_prev[k],
                    t_curr,
                    config.max_iterations,
                    config.convergence_days,
                    &mut f_at,
                )?)
            } else {
                None
            };

            if let Some(jd_utc) = root.filter(|jd| *jd < end) {
                events.push(LunarPhaseEvent {
                    phase: *phase,
                    jd_utc,
                    date: span.date_of(jd_utc)?,
                    moon_sign: sign_from_longitude(sample(moon, jd_utc)?),
                });
            }
            f_prev[k] = f_curr;
        }

        t_prev = t_curr;
    }

    events.sort_by(|a, b| a.jd_utc.total_cmp(&b.jd_utc));
    Ok(events)
}
