//! Error types for the search engine.

use std::error::Error;
use std::fmt::{Display, Formatter};

use astrocal_ephem::EphemError;
use astrocal_time::TimeError;

/// Errors from sign-change, retrograde and phase searches.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Search parameters rejected before sampling.
    InvalidConfig(&'static str),
    /// The longitude source returned a non-finite value.
    InvalidLongitude { jd_utc: f64, value: f64 },
    /// Error from the ephemeris.
    Ephemeris(EphemError),
    /// Error from time conversion.
    Time(TimeError),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::InvalidLongitude { jd_utc, value } => {
                write!(f, "longitude {value} at JD {jd_utc} is not finite")
            }
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Ephemeris(e) => Some(e),
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EphemError> for SearchError {
    fn from(e: EphemError) -> Self {
        Self::Ephemeris(e)
    }
}

impl From<TimeError> for SearchError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
