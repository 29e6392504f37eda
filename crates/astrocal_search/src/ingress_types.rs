//! Types for sign-change (ingress) search.

use chrono::NaiveDate;

use crate::sign::ZodiacSign;

/// Upper bound on bisection depth.
pub const MAX_REFINE_ITERATIONS: u32 = 64;

/// A body entering a new zodiac sign.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SignChangeEvent {
    /// First instant found in the new sign, Julian Date (UT).
    pub jd_utc: f64,
    /// Local civil date of `jd_utc`.
    pub date: NaiveDate,
    /// Sign held up to the previous sample.
    pub from: ZodiacSign,
    /// Sign entered.
    pub to: ZodiacSign,
    /// Longitude at `jd_utc` in degrees [0, 360).
    pub longitude_deg: f64,
}

/// Configuration for sign-change search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IngressConfig {
    /// Coarse scan step size in days.
    pub step_days: f64,
    /// Local hour of the first sample on Jan 1, in [0, 24).
    pub first_sample_hour: f64,
    /// Bisection iterations per detected change; `None` reports the coarse sample.
    pub refine_iterations: Option<u32>,
}

impl IngressConfig {
    /// One sample per day at local noon, no refinement.
    pub fn daily() -> Self {
        Self {
            step_days: 1.0,
            first_sample_hour: 12.0,
            refine_iterations: None,
        }
    }

    /// 6-hour steps from local midnight, refined by 24 bisections.
    pub fn refined() -> Self {
        Self {
            step_days: 0.25,
            first_sample_hour: 0.0,
            refine_iterations: Some(24),
        }
    }

    /// Validate the configuration.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.step_days.is_finite() || self.step_days <= 0.0 {
            return Err("step_days must be positive");
        }
        if !(0.0..24.0).contains(&self.first_sample_hour) {
            return Err("first_sample_hour must be in [0, 24)");
        }
        match self.refine_iterations {
            Some(0) => Err("refine_iterations must be > 0"),
            Some(n) if n > MAX_REFINE_ITERATIONS => Err("refine_iterations must be <= 64"),
            _ => Ok(()),
        }
    }
}

impl Default for IngressConfig {
    fn default() -> Self {
        Self::refined()
    }
}
