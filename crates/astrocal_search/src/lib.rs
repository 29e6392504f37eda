//! Transition search over one calendar year.
//!
//! This crate provides:
//! - Zodiac sign-change (ingress) detection, coarse or bisection-refined
//! - Retrograde interval detection from day-over-day motion
//! - New/Full Moon search on Moon–Sun elongation
//! - Equinoxes and solstices from Sun ingresses
//! - Day-aligned sign lookup for daily calendar cells
//!
//! Every search consumes a [`LongitudeSource`]: any
//! `Fn(f64) -> Result<f64, SearchError>` of a UT Julian Date, or a
//! [`BodyLongitude`] backed by the analytic ephemeris.

pub mod daily;
pub mod error;
pub mod ingress;
pub mod ingress_types;
pub mod lunar_phase;
pub mod lunar_phase_types;
pub mod retrograde;
pub mod retrograde_types;
pub mod season;
pub(crate) mod search_util;
pub mod sign;
pub mod source;
pub mod span;

pub use daily::{DailySign, daily_signs, sign_on_day};
pub use error::SearchError;
pub use ingress::{SignChanges, find_sign_changes, sign_changes};
pub use ingress_types::{IngressConfig, MAX_REFINE_ITERATIONS, SignChangeEvent};
pub use lunar_phase::find_lunar_phases;
pub use lunar_phase_types::{LunarPhase, LunarPhaseEvent, PhaseConfig};
pub use retrograde::find_retrograde_intervals;
pub use retrograde_types::RetrogradeInterval;
pub use search_util::wrap_delta_deg;
pub use season::{SeasonKind, SeasonTurn, find_season_turns};
pub use sign::{ALL_SIGNS, ZodiacSign, sign_from_longitude, sign_index};
pub use source::{BodyLongitude, LongitudeSource};
pub use span::{DEFAULT_SAMPLE_HOUR, YearSpan};
