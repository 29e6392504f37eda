//! Types for New/Full Moon search.

use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

use crate::sign::ZodiacSign;

/// Principal lunar phase marked on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LunarPhase {
    /// Moon–Sun elongation 0 deg.
    New,
    /// Moon–Sun elongation 180 deg.
    Full,
}

impl LunarPhase {
    /// Target elongation in degrees.
    pub const fn elongation_deg(self) -> f64 {
        match self {
            Self::New => 0.0,
            Self::Full => 180.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::New => "New Moon",
            Self::Full => "Full Moon",
        }
    }
}

impl Display for LunarPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A New or Full Moon.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LunarPhaseEvent {
    pub phase: LunarPhase,
    /// Instant of exact phase, Julian Date (UT).
    pub jd_utc: f64,
    /// Local civil date of `jd_utc`.
    pub date: NaiveDate,
    /// Sign occupied by the Moon at `jd_utc`.
    pub moon_sign: ZodiacSign,
}

/// Configuration for lunar phase search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseConfig {
    /// Coarse scan step size in days.
    pub step_days: f64,
    /// Maximum bisection iterations (default 50).
    pub max_iterations: u32,
    /// Convergence threshold in days (default 1e-6, ~0.09 s).
    pub convergence_days: f64,
}

impl PhaseConfig {
    /// Validate the configuration.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.step_days.is_finite() || self.step_days <= 0.0 {
            return Err("step_days must be positive");
        }
        // Elongation advances ~12.2 deg/day; beyond ~10 days a step can skip a phase.
        if self.step_days > 10.0 {
            return Err("step_days must be <= 10");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if !self.convergence_days.is_finite() || self.convergence_days <= 0.0 {
            return Err("convergence_days must be positive");
        }
        Ok(())
    }
}

impl Default for PhaseConfig {
    fn default() -> Self {
        Self {
            step_days: 1.0,
            max_iterations: 50,
            convergence_days: 1e-6,
        }
    }
}
