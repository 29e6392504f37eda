//! ΔT = TT − UT1 and the UT → TT step.
//!
//! Piecewise polynomials of Espenak & Meeus (NASA Five Millennium Canon,
//! 2006). Outside 1800–2150 the long-term parabola is used. Accuracy is a
//! few seconds over the modern era, far below the calendar's needs.

use crate::julian::{SECONDS_PER_DAY, jd_to_decimal_year};

/// ΔT in seconds for a decimal year.
pub fn delta_t_seconds(year: f64) -> f64 {
    let long_term = |y: f64| {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    };

    match year {
        y if y < 1800.0 => long_term(y),
        y if y < 1860.0 => {
            let t = y - 1800.0;
            13.72 - 0.332447 * t + 0.0068612 * t.powi(2) + 0.0041116 * t.powi(3)
                - 0.00037436 * t.powi(4)
                + 0.0000121272 * t.powi(5)
                - 0.0000001699 * t.powi(6)
                + 0.000000000875 * t.powi(7)
        }
        y if y < 1900.0 => {
            let t = y - 1860.0;
            7.62 + 0.5737 * t - 0.251754 * t.powi(2) + 0.01680668 * t.powi(3)
                - 0.0004473624 * t.powi(4)
                + t.powi(5) / 233_174.0
        }
        y if y < 1920.0 => {
            let t = y - 1900.0;
            -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
                - 0.000197 * t.powi(4)
        }
        y if y < 1941.0 => {
            let t = y - 1920.0;
            21.20 + 0.84493 * t - 0.076100 * t.powi(2) + 0.0020936 * t.powi(3)
        }
        y if y < 1961.0 => {
            let t = y - 1950.0;
            29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
        }
        y if y < 1986.0 => {
            let t = y - 1975.0;
            45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
        }
        y if y < 2005.0 => {
            let t = y - 2000.0;
            63.86 + 0.3345 * t - 0.060374 * t.powi(2)
                + 0.0017275 * t.powi(3)
                + 0.000651814 * t.powi(4)
                + 0.00002373599 * t.powi(5)
        }
        y if y < 2050.0 => {
            let t = y - 2000.0;
            62.92 + 0.32217 * t + 0.005589 * t.powi(2)
        }
        y if y < 2150.0 => long_term(y) - 0.5628 * (2150.0 - y),
        y => long_term(y),
    }
}

/// Convert a Julian Date in UT to a Julian Date in TT.
pub fn ut_to_tt(jd_ut: f64) -> f64 {
    jd_ut + delta_t_seconds(jd_to_decimal_year(jd_ut)) / SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_t_2000() {
        let dt = delta_t_seconds(2000.0);
        assert!((dt - 63.86).abs() < 0.5, "got {dt}");
    }

    #[test]
    fn delta_t_2026_near_70s() {
        let dt = delta_t_seconds(2026.0);
        assert!(dt > 65.0 && dt < 80.0, "got {dt}");
    }

    #[test]
    fn delta_t_1900() {
        let dt = delta_t_seconds(1900.0);
        assert!((dt + 2.8).abs() < 1.0, "got {dt}");
    }

    #[test]
    fn branches_join_at_2050() {
        let below = delta_t_seconds(2049.999);
        let above = delta_t_seconds(2050.0);
        assert!((below - above).abs() < 2.0, "{below} vs {above}");
    }

    #[test]
    fn tt_is_ahead_of_ut() {
        let jd = 2_461_041.5;
        let tt = ut_to_tt(jd);
        assert!(tt > jd);
        assert!((tt - jd) * SECONDS_PER_DAY < 100.0);
    }
}
