//! Angle helpers and the bisection solver shared by the searches.

use crate::error::SearchError;

/// Signed shortest angular motion from `from_deg` to `to_deg`.
///
/// A raw difference beyond ±180 deg is taken to have crossed 0/360, so
/// 359 → 1 is +2, not -358.
pub fn wrap_delta_deg(from_deg: f64, to_deg: f64) -> f64 {
    let mut delta = to_deg - from_deg;
    if delta < -180.0 {
        delta += 360.0;
    }
    if delta > 180.0 {
        delta -= 360.0;
    }
    delta
}

/// Normalize an angle to [-180, +180).
pub(crate) fn normalize_to_pm180(deg: f64) -> f64 {
    (deg + 180.0).rem_euclid(360.0) - 180.0
}

/// A sign change of a ±180-wrapped function is a real zero crossing only
/// when both values are small; a jump from ~+180 to ~-180 is the wrap.
pub(crate) fn is_genuine_crossing(f_a: f64, f_b: f64) -> bool {
    f_a * f_b < 0.0 && (f_a - f_b).abs() < 270.0
}

/// Bisect to find the zero crossing of a scalar function between t_a and t_b.
///
/// Requires `f(t_a)` and `f(t_b)` of opposite sign. Returns the midpoint
/// of the final bracket.
pub(crate) fn bisect_zero<F>(
    mut t_a: f64,
    mut f_a: f64,
    mut t_b: f64,
    max_iter: u32,
    convergence_days: f64,
    f_at: &mut F,
) -> Result<f64, SearchError>
where
    F: FnMut(f64) -> Result<f64, SearchError>,
{
    for _ in 0..max_iter {
        let t_mid = 0.5 * (t_a + t_b);
        let f_mid = f_at(t_mid)?;

        if f_a * f_mid <= 0.0 {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }

        if (t_b - t_a).abs() < convergence_days {
            break;
        }
    }

    Ok(0.5 * (t_a + t_b))
}
