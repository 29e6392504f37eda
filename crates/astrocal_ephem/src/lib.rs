//! Analytic geocentric ecliptic longitudes for the calendar.
//!
//! This crate provides:
//! - Planet positions from JPL mean Keplerian elements (1800–2050)
//! - A truncated lunar longitude series
//! - Precession, nutation and aberration to reach apparent longitude of date
//!
//! Epochs are Julian Dates in TT; [`Ephemeris::longitude_at_ut`] applies
//! ΔT for callers working in civil time.

pub mod body;
pub mod elements;
pub mod error;
pub mod frames;
pub mod moon;

use astrocal_time::{jd_to_centuries, ut_to_tt};

pub use body::{ALL_BODIES, Body};
pub use elements::{VALID_FROM_JD, VALID_TO_JD};
pub use error::EphemError;
pub use frames::{EclipticFrame, SphericalCoords, cartesian_to_spherical};

/// Longitude provider for the tracked bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ephemeris {
    frame: EclipticFrame,
}

impl Ephemeris {
    pub fn new(frame: EclipticFrame) -> Self {
        Self { frame }
    }

    pub fn frame(&self) -> EclipticFrame {
        self.frame
    }

    /// Geocentric ecliptic longitude of `body` in degrees [0, 360) at `jd_tt`.
    pub fn ecliptic_longitude_deg(&self, body: Body, jd_tt: f64) -> Result<f64, EphemError> {
        if !(VALID_FROM_JD..=VALID_TO_JD).contains(&jd_tt) {
            return Err(EphemError::EpochOutOfRange(jd_tt));
        }
        let t = jd_to_centuries(jd_tt);

        // Moon series is of date; everything else starts in J2000.
        let (lon_j2000, lon_of_date) = match body {
            Body::Moon => {
                let of_date = moon::moon_longitude_of_date_deg(t);
                (of_date - frames::precession_in_longitude_deg(t), of_date)
            }
            Body::Sun => {
                let earth = elements::earth_position(t);
                let sph = cartesian_to_spherical(&[-earth[0], -earth[1], -earth[2]]);
                let of_date = sph.lon_deg
                    + frames::precession_in_longitude_deg(t)
                    + frames::solar_aberration_deg(sph.distance_au);
                (sph.lon_deg, of_date)
            }
            planet => {
                let sph = cartesian_to_spherical(&geocentric_planet(planet, t));
                (sph.lon_deg, sph.lon_deg + frames::precession_in_longitude_deg(t))
            }
        };

        let lon = match self.frame {
            EclipticFrame::J2000 => lon_j2000,
            EclipticFrame::OfDate => lon_of_date + frames::nutation_in_longitude_deg(t),
        };
        Ok(lon.rem_euclid(360.0))
    }

    /// Same as [`Self::ecliptic_longitude_deg`] for a Julian Date in UT.
    pub fn longitude_at_ut(&self, body: Body, jd_ut: f64) -> Result<f64, EphemError> {
        self.ecliptic_longitude_deg(body, ut_to_tt(jd_ut))
    }
}

/// Geocentric ecliptic J2000 vector of a planet in AU.
fn geocentric_planet(body: Body, t: f64) -> [f64; 3] {
    let earth = elements::earth_position(t);
    let helio = elements::heliocentric_position(body, t).unwrap_or([0.0; 3]);
    [helio[0] - earth[0], helio[1] - earth[1], helio[2] - earth[2]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use astrocal_time::J2000_JD;

    #[test]
    fn sun_at_j2000() {
        // Apparent solar longitude at J2000.0 is 280.37 deg.
        let eph = Ephemeris::default();
        let lon = eph.ecliptic_longitude_deg(Body::Sun, J2000_JD).unwrap();
        assert!((lon - 280.37).abs() < 0.05, "got {lon}");
    }

    #[test]
    fn frames_differ_by_precession() {
        let jd = J2000_JD + 26.0 * 365.25;
        let of_date = Ephemeris::new(EclipticFrame::OfDate);
        let j2000 = Ephemeris::new(EclipticFrame::J2000);
        let a = of_date.ecliptic_longitude_deg(Body::Mars, jd).unwrap();
        let b = j2000.ecliptic_longitude_deg(Body::Mars, jd).unwrap();
        let diff = (a - b).rem_euclid(360.0);
        assert!((diff - 0.363).abs() < 0.01, "got {diff}");
    }

    #[test]
    fn epoch_out_of_range() {
        let eph = Ephemeris::default();
        assert_eq!(
            eph.ecliptic_longitude_deg(Body::Venus, 2_300_000.0),
            Err(EphemError::EpochOutOfRange(2_300_000.0))
        );
    }

    #[test]
    fn every_body_in_range() {
        let eph = Ephemeris::default();
        for &body in Body::all() {
            let lon = eph.ecliptic_longitude_deg(body, 2_461_100.0).unwrap();
            assert!((0.0..360.0).contains(&lon), "{body}: {lon}");
        }
    }

    #[test]
    fn ut_is_behind_tt() {
        let eph = Ephemeris::default();
        let jd = 2_461_100.0;
        let tt = eph.ecliptic_longitude_deg(Body::Moon, jd).unwrap();
        let ut = eph.longitude_at_ut(Body::Moon, jd).unwrap();
        // ~75 s of lunar motion is ~0.01 deg.
        let diff = (ut - tt).rem_euclid(360.0);
        assert!(diff > 0.005 && diff < 0.02, "got {diff}");
    }
}
