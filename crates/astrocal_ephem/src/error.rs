//! Error types for ephemeris evaluation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from analytic ephemeris evaluation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemError {
    /// Requested epoch lies outside the validity window of the orbital elements.
    EpochOutOfRange(f64),
    /// Body name not recognised.
    UnknownBody(String),
}

impl Display for EphemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EpochOutOfRange(jd) => {
                write!(f, "JD {jd} outside ephemeris validity (1800-2050)")
            }
            Self::UnknownBody(name) => write!(f, "unknown body: {name}"),
        }
    }
}

impl Error for EphemError {}
