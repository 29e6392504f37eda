//! Equinoxes and solstices as Sun ingresses into the cardinal signs.

use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

use crate::error::SearchError;
use crate::ingress::sign_changes;
use crate::ingress_types::IngressConfig;
use crate::sign::ZodiacSign;
use crate::source::LongitudeSource;
use crate::span::YearSpan;

/// One of the four turning points of the tropical year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeasonKind {
    MarchEquinox,
    JuneSolstice,
    SeptemberEquinox,
    DecemberSolstice,
}

impl SeasonKind {
    /// Sign the Sun enters at this turning point.
    pub const fn sign(self) -> ZodiacSign {
        match self {
            Self::MarchEquinox => ZodiacSign::Aries,
            Self::JuneSolstice => ZodiacSign::Cancer,
            Self::SeptemberEquinox => ZodiacSign::Libra,
            Self::DecemberSolstice => ZodiacSign::Capricorn,
        }
    }

    pub const fn from_sign(sign: ZodiacSign) -> Option<Self> {
        match sign {
            ZodiacSign::Aries => Some(Self::MarchEquinox),
            ZodiacSign::Cancer => Some(Self::JuneSolstice),
            ZodiacSign::Libra => Some(Self::SeptemberEquinox),
            ZodiacSign::Capricorn => Some(Self::DecemberSolstice),
            _ => None,
        }
    }

    /// Hemisphere-neutral name, e.g. "March equinox".
    pub const fn name(self) -> &'static str {
        match self {
            Self::MarchEquinox => "March equinox",
            Self::JuneSolstice => "June solstice",
            Self::SeptemberEquinox => "September equinox",
            Self::DecemberSolstice => "December solstice",
        }
    }

    /// Northern-hemisphere name, e.g. "Spring Equinox".
    pub const fn northern_name(self) -> &'static str {
        match self {
            Self::MarchEquinox => "Spring Equinox",
            Self::JuneSolstice => "Summer Solstice",
            Self::SeptemberEquinox => "Autumn Equinox",
            Self::DecemberSolstice => "Winter Solstice",
        }
    }
}

impl Display for SeasonKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An equinox or solstice.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SeasonTurn {
    pub kind: SeasonKind,
    /// Sun ingress instant, Julian Date (UT).
    pub jd_utc: f64,
    /// Local civil date of `jd_utc`.
    pub date: NaiveDate,
}

/// Find the equinoxes and solstices in the year from a Sun longitude source.
///
/// Uses the refined ingress search; only forward entries into a cardinal
/// sign count.
pub fn find_season_turns<S>(sun: &S, span: &YearSpan) -> Result<Vec<SeasonTurn>, SearchError>
where
    S: LongitudeSource + ?Sized,
{
    let mut turns = Vec::with_capacity(4);
    for event in sign_changes(sun, span, &IngressConfig::refined())? {
        let event = event?;
        let Some(kind) = SeasonKind::from_sign(event.to) else {
            continue;
        };
        if ZodiacSign::from_index(event.to.index() + 11) != event.from {
            continue;
        }
        turns.push(SeasonTurn {
            kind,
            jd_utc: event.jd_utc,
            date: event.date,
        });
    }
    Ok(turns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_round_trip_through_signs() {
        for kind in [
            SeasonKind::MarchEquinox,
            SeasonKind::JuneSolstice,
            SeasonKind::SeptemberEquinox,
            SeasonKind::DecemberSolstice,
        ] {
            assert_eq!(SeasonKind::from_sign(kind.sign()), Some(kind));
        }
        assert_eq!(SeasonKind::from_sign(ZodiacSign::Leo), None);
    }

    #[test]
    fn uniform_sun_gives_four_turns() {
        let span = YearSpan::utc(2026).unwrap();
        let start = span.start_jd();
        let sun = move |jd: f64| -> Result<f64, SearchError> {
            Ok(280.0 + 360.0 / 365.2422 * (jd - start))
        };
        let turns = find_season_turns(&sun, &span).unwrap();
        let kinds: Vec<_> = turns.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [
                SeasonKind::MarchEquinox,
                SeasonKind::JuneSolstice,
                SeasonKind::SeptemberEquinox,
                SeasonKind::DecemberSolstice,
            ]
        );
    }

    #[test]
    fn names() {
        assert_eq!(SeasonKind::JuneSolstice.to_string(), "June solstice");
        assert_eq!(SeasonKind::SeptemberEquinox.northern_name(), "Autumn Equinox");
    }
}
