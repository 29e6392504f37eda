//! Julian Date ↔ Gregorian calendar conversions.
//!
//! Algorithms from Meeus, *Astronomical Algorithms* (2nd ed.), chapter 7.
//! Dates are proleptic Gregorian from 1582-Oct-15 onwards and Julian before.

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// First Julian Day Number of the Gregorian calendar (1582-Oct-15).
const GREGORIAN_START_JDN: f64 = 2_299_161.0;

/// Convert a calendar date (with fractional day) to a Julian Date.
///
/// `day_frac` is the day of month plus the fraction of the day elapsed,
/// e.g. `20.5` for noon on the 20th.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (mut y, mut m) = (year as f64, month as f64);
    if month <= 2 {
        y -= 1.0;
        m += 12.0;
    }

    let julian = (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac
        - 1524.5;
    if julian < GREGORIAN_START_JDN - 0.5 {
        return julian;
    }

    let a = (y / 100.0).floor();
    julian + 2.0 - a + (a / 4.0).floor()
}

/// Convert a Julian Date to `(year, month, day_frac)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let shifted = jd + 0.5;
    let z = shifted.floor();
    let f = shifted - z;

    let a = if z < GREGORIAN_START_JDN {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day_frac)
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Decimal year for a Julian Date (`2000.0` at J2000.0).
pub fn jd_to_decimal_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / 365.25
}
