//! Longitude providers consumed by the detectors.

use astrocal_ephem::{Body, Ephemeris};

use crate::error::SearchError;

/// Ecliptic longitude of one body as a function of time.
///
/// `jd_utc` is a Julian Date in UT. Values outside [0, 360) are wrapped by
/// the caller; non-finite values abort the scan.
pub trait LongitudeSource {
    fn longitude_deg(&self, jd_utc: f64) -> Result<f64, SearchError>;
}

impl<F> LongitudeSource for F
where
    F: Fn(f64) -> Result<f64, SearchError>,
{
    fn longitude_deg(&self, jd_utc: f64) -> Result<f64, SearchError> {
        self(jd_utc)
    }
}

/// A body's longitude from the analytic ephemeris.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyLongitude {
    pub ephemeris: Ephemeris,
    pub body: Body,
}

impl BodyLongitude {
    pub fn new(ephemeris: Ephemeris, body: Body) -> Self {
        Self { ephemeris, body }
    }
}

impl LongitudeSource for BodyLongitude {
    fn longitude_deg(&self, jd_utc: f64) -> Result<f64, SearchError> {
        Ok(self.ephemeris.longitude_at_ut(self.body, jd_utc)?)
    }
}

/// Sample a source, rejecting non-finite values and wrapping into [0, 360).
pub(crate) fn sample<S>(source: &S, jd_utc: f64) -> Result<f64, SearchError>
where
    S: LongitudeSource + ?Sized,
{
    let value = source.longitude_deg(jd_utc)?;
    if !value.is_finite() {
        return Err(SearchError::InvalidLongitude { jd_utc, value });
    }
    Ok(value.rem_euclid(360.0))
}
