//! Error types for civil-date conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar/Julian Date conversion.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// The Julian Date does not map to a representable civil date.
    InvalidDate(f64),
    /// UTC offset outside [-14 h, +14 h].
    InvalidOffset(f64),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(jd) => write!(f, "JD {jd} has no civil date"),
            Self::InvalidOffset(h) => write!(f, "UTC offset {h} h out of range"),
        }
    }
}

impl Error for TimeError {}
