//! Calendar configuration.
//!
//! Stored as TOML. Every field has a default, so an empty file yields the
//! 2026 edition: Oslo standard time (UTC+1), local-noon day samples,
//! ingresses of the Sun and planets, Mercury retrograde markers and the
//! eclipse, meteor and holiday tables printed on that edition.

use std::path::Path;

use astrocal_ephem::{Body, EclipticFrame, VALID_FROM_JD, VALID_TO_JD};
use astrocal_search::{IngressConfig, YearSpan};
use astrocal_time::ut_to_tt;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Year whose tables ship as the default configuration.
pub const DEFAULT_YEAR: i32 = 2026;

/// Solar or lunar eclipse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EclipseKind {
    Solar,
    Lunar,
}

impl EclipseKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Solar => "Solar eclipse",
            Self::Lunar => "Lunar eclipse",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eclipse {
    pub kind: EclipseKind,
    pub date: NaiveDate,
}

/// Meteor shower peak window, printed on every date from `first` to `last`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeteorShower {
    pub name: String,
    pub first: NaiveDate,
    pub last: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub name: String,
    pub date: NaiveDate,
}

/// Sign-change scan settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IngressSettings {
    /// Coarse step in hours.
    pub step_hours: f64,
    /// Bisection iterations per change; 0 reports the coarse sample.
    pub refine_iterations: u32,
    /// Bodies scanned, in cell order.
    pub bodies: Vec<Body>,
}

impl Default for IngressSettings {
    fn default() -> Self {
        Self {
            step_hours: 6.0,
            refine_iterations: 24,
            // The Moon's sign is printed daily instead.
            bodies: Body::all()
                .iter()
                .copied()
                .filter(|b| *b != Body::Moon)
                .collect(),
        }
    }
}

/// Full calendar configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {
    pub year: i32,
    /// Fixed civil offset from UTC in hours.
    pub utc_offset_hours: f64,
    /// Local hour of the daily Moon-in and retrograde samples.
    pub sample_hour: f64,
    pub frame: EclipticFrame,
    pub ingress: IngressSettings,
    pub retrograde_bodies: Vec<Body>,
    pub eclipses: Vec<Eclipse>,
    pub meteor_showers: Vec<MeteorShower>,
    pub holidays: Vec<Holiday>,
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn meteor(name: &str, first: (u32, u32), last: (u32, u32)) -> MeteorShower {
    MeteorShower {
        name: name.to_string(),
        first: ymd(DEFAULT_YEAR, first.0, first.1),
        last: ymd(DEFAULT_YEAR, last.0, last.1),
    }
}

fn holiday(name: &str, month: u32, day: u32) -> Holiday {
    Holiday {
        name: name.to_string(),
        date: ymd(DEFAULT_YEAR, month, day),
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR,
            utc_offset_hours: 1.0,
            sample_hour: 12.0,
            frame: EclipticFrame::OfDate,
            ingress: IngressSettings::default(),
            retrograde_bodies: vec![Body::Mercury],
            eclipses: vec![
                Eclipse {
                    kind: EclipseKind::Solar,
                    date: ymd(DEFAULT_YEAR, 8, 12),
                },
                Eclipse {
                    kind: EclipseKind::Lunar,
                    date: ymd(DEFAULT_YEAR, 8, 28),
                },
            ],
            meteor_showers: vec![
                meteor("Quadrantids", (1, 2), (1, 3)),
                meteor("Lyrids", (4, 21), (4, 22)),
                meteor("Delta Aquarids", (7, 28), (7, 29)),
                meteor("Perseids", (8, 12), (8, 13)),
                meteor("Orionids", (10, 21), (10, 22)),
                meteor("Taurids", (11, 4), (11, 5)),
                meteor("Leonids", (11, 17), (11, 18)),
                meteor("Geminids", (12, 13), (12, 14)),
                meteor("Ursids", (12, 21), (12, 22)),
            ],
            holidays: vec![
                holiday("Easter Sunday", 4, 5),
                holiday("Halloween", 10, 31),
                holiday("Christmas Day", 12, 25),
            ],
        }
    }
}

impl CalendarConfig {
    /// Defaults for `year`. The dated tables only apply to [`DEFAULT_YEAR`]
    /// and are left empty for any other year.
    pub fn for_year(year: i32) -> Self {
        let mut config = Self {
            year,
            ..Self::default()
        };
        if year != DEFAULT_YEAR {
            config.eclipses.clear();
            config.meteor_showers.clear();
            config.holidays.clear();
        }
        config
    }

    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self, CalendarError> {
        let content = std::fs::read_to_string(path).map_err(|source| CalendarError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, CalendarError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// The scanned year with this configuration's offset and sample hour.
    pub fn span(&self) -> Result<YearSpan, CalendarError> {
        let span = YearSpan::new(self.year, self.utc_offset_hours)?
            .with_sample_hour(self.sample_hour)?;
        Ok(span)
    }

    /// Detector settings for the ingress scan.
    pub fn ingress_config(&self) -> IngressConfig {
        let refine = self.ingress.refine_iterations;
        IngressConfig {
            step_days: self.ingress.step_hours / 24.0,
            // Unrefined scans sample at the daily hour, like the Moon-in row.
            first_sample_hour: if refine == 0 { self.sample_hour } else { 0.0 },
            refine_iterations: (refine > 0).then_some(refine),
        }
    }

    /// Check the configuration for consistency.
    pub fn validate(&self) -> Result<(), CalendarError> {
        let span = self.span()?;

        if ut_to_tt(span.start_jd()) < VALID_FROM_JD || ut_to_tt(span.end_jd()) > VALID_TO_JD {
            return Err(invalid(format!(
                "year {} is outside the ephemeris range",
                self.year
            )));
        }

        if !self.ingress.step_hours.is_finite() || self.ingress.step_hours <= 0.0 {
            return Err(invalid("ingress.step_hours must be positive".into()));
        }
        if self.ingress.step_hours > 24.0 * 10.0 {
            return Err(invalid("ingress.step_hours must be at most 240".into()));
        }
        if self.ingress.bodies.contains(&Body::Moon) {
            // The Moon's sign is already printed every day.
            return Err(invalid("ingress.bodies must not include Moon".into()));
        }
        if let Some(body) = self.retrograde_bodies.iter().find(|b| !b.can_retrograde()) {
            return Err(invalid(format!("{body} has no retrograde motion")));
        }

        for e in &self.eclipses {
            check_in_year(&span, e.date, e.kind.label())?;
        }
        for m in &self.meteor_showers {
            check_in_year(&span, m.first, &m.name)?;
            check_in_year(&span, m.last, &m.name)?;
            if m.last < m.first {
                return Err(invalid(format!("{}: window ends before it starts", m.name)));
            }
        }
        for h in &self.holidays {
            check_in_year(&span, h.date, &h.name)?;
        }
        Ok(())
    }
}

fn invalid(msg: String) -> CalendarError {
    CalendarError::InvalidConfig(msg)
}

fn check_in_year(span: &YearSpan, date: NaiveDate, what: &str) -> Result<(), CalendarError> {
    if span.contains(date) {
        Ok(())
    } else {
        Err(invalid(format!("{what}: {date} is outside {}", span.year())))
    }
}
