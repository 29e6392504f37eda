//! Labels printed inside a calendar day cell.

use std::fmt::{Display, Formatter};

use astrocal_ephem::Body;
use astrocal_search::{LunarPhase, SeasonKind, ZodiacSign};
use serde::Serialize;

use crate::config::EclipseKind;

/// One line of a day cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum DayEvent {
    /// Moon's sign at the daily sampling hour.
    MoonIn(ZodiacSign),
    Phase(LunarPhase),
    /// `sign` is the Moon's for a lunar eclipse and the Sun's for a solar one.
    Eclipse { kind: EclipseKind, sign: ZodiacSign },
    Season(SeasonKind),
    /// Meteor shower name; printed with "peak window".
    MeteorWindow(String),
    Ingress { body: Body, sign: ZodiacSign },
    RetrogradeStart(Body),
    RetrogradeEnd(Body),
    /// Still retrograde on the last day of the year.
    RetrogradeContinues(Body),
    Holiday(String),
}

impl Display for DayEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MoonIn(sign) => write!(f, "Moon in {sign}"),
            Self::Phase(phase) => write!(f, "{phase}"),
            Self::Eclipse { kind, .. } => f.write_str(kind.label()),
            Self::Season(kind) => f.write_str(kind.northern_name()),
            Self::MeteorWindow(name) => write!(f, "{name} peak window"),
            Self::Ingress { body, sign } => write!(f, "{body} → {sign} {}", sign.glyph()),
            Self::RetrogradeStart(body) => write!(f, "{body} R starts"),
            Self::RetrogradeEnd(body) => write!(f, "{body} R ends"),
            Self::RetrogradeContinues(body) => write!(f, "{body} R (continues)"),
            Self::Holiday(name) => f.write_str(name),
        }
    }
}
