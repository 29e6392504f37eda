//! Lists and tables printed on the year's reference page.

use astrocal_search::{LunarPhase, LunarPhaseEvent, SignChangeEvent, ZodiacSign};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Folk name of the Full Moon in `month` (1-12).
pub const fn traditional_moon_name(month: u32) -> Option<&'static str> {
    Some(match month {
        1 => "Wolf Moon",
        2 => "Snow Moon",
        3 => "Worm Moon",
        4 => "Pink Moon",
        5 => "Flower Moon",
        6 => "Strawberry Moon",
        7 => "Buck Moon",
        8 => "Sturgeon Moon",
        9 => "Harvest Moon",
        10 => "Hunter’s Moon",
        11 => "Beaver Moon",
        12 => "Cold Moon",
        _ => return None,
    })
}

/// Name of the Full Moon on `date` among the year's `full_moon_dates`.
///
/// The second Full Moon of a calendar month is a "Blue Moon"; any other
/// takes its month's traditional name.
pub fn full_moon_name(date: NaiveDate, full_moon_dates: &[NaiveDate]) -> &'static str {
    let earlier_same_month = full_moon_dates
        .iter()
        .any(|d| *d < date && d.year() == date.year() && d.month() == date.month());
    if earlier_same_month {
        "Blue Moon"
    } else {
        traditional_moon_name(date.month()).unwrap_or("Full Moon")
    }
}

/// Three keywords per sign, joined by " · ".
pub const fn sign_keywords(sign: ZodiacSign) -> &'static str {
    match sign {
        ZodiacSign::Aries => "initiative · courage · spark",
        ZodiacSign::Taurus => "stability · senses · patience",
        ZodiacSign::Gemini => "curiosity · dialogue · agility",
        ZodiacSign::Cancer => "nurture · home · intuition",
        ZodiacSign::Leo => "creativity · heart · play",
        ZodiacSign::Virgo => "craft · service · clarity",
        ZodiacSign::Libra => "balance · beauty · harmony",
        ZodiacSign::Scorpio => "depth · devotion · transformation",
        ZodiacSign::Sagittarius => "vision · freedom · truth",
        ZodiacSign::Capricorn => "structure · ambition · endurance",
        ZodiacSign::Aquarius => "innovation · community · future",
        ZodiacSign::Pisces => "empathy · dreams · flow",
    }
}

/// Ornament printed before a month's title.
pub const fn month_symbol(month: u32) -> Option<char> {
    Some(match month {
        1 => '✶',
        2 => '♥',
        3 => '❀',
        4 => '✿',
        5 => '❧',
        6 => '✢',
        7 => '✺',
        8 => '✸',
        9 => '❦',
        10 => '❁',
        11 => '✦',
        12 => '✳',
        _ => return None,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedFullMoon {
    pub date: NaiveDate,
    pub jd_utc: f64,
    pub sign: ZodiacSign,
    pub name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZodiacEntry {
    pub sign: ZodiacSign,
    pub glyph: char,
    pub keywords: &'static str,
}

/// Contents of the reference page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferencePage {
    pub full_moons: Vec<NamedFullMoon>,
    pub sun_entries: Vec<SignChangeEvent>,
    pub zodiac: Vec<ZodiacEntry>,
}

impl ReferencePage {
    pub fn build(phases: &[LunarPhaseEvent], sun_entries: Vec<SignChangeEvent>) -> Self {
        let full: Vec<&LunarPhaseEvent> =
            phases.iter().filter(|p| p.phase == LunarPhase::Full).collect();
        let dates: Vec<NaiveDate> = full.iter().map(|p| p.date).collect();
        let full_moons = full
            .iter()
            .map(|p| NamedFullMoon {
                date: p.date,
                jd_utc: p.jd_utc,
                sign: p.moon_sign,
                name: full_moon_name(p.date, &dates),
            })
            .collect();
        let zodiac = ZodiacSign::all()
            .iter()
            .map(|&sign| ZodiacEntry {
                sign,
                glyph: sign.glyph(),
                keywords: sign_keywords(sign),
            })
            .collect();
        Self {
            full_moons,
            sun_entries,
            zodiac,
        }
    }
}

impl NamedFullMoon {
    /// Line as printed, e.g. "Aug 28: Full Moon in Pisces ♓ · Sturgeon Moon".
    pub fn line(&self) -> String {
        format!(
            "{}: Full Moon in {} {} · {}",
            self.date.format("%b %d"),
            self.sign,
            self.sign.glyph(),
            self.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, month, day).unwrap()
    }

    fn full(d: NaiveDate, sign: ZodiacSign) -> LunarPhaseEvent {
        LunarPhaseEvent {
            phase: LunarPhase::Full,
            jd_utc: 0.0,
            date: d,
            moon_sign: sign,
        }
    }

    #[test]
    fn second_full_moon_in_month_is_blue() {
        let dates = [date(4, 2), date(5, 1), date(5, 31), date(6, 29)];
        assert_eq!(full_moon_name(date(5, 1), &dates), "Flower Moon");
        assert_eq!(full_moon_name(date(5, 31), &dates), "Blue Moon");
        assert_eq!(full_moon_name(date(6, 29), &dates), "Strawberry Moon");
    }

    #[test]
    fn month_tables_cover_every_month() {
        for month in 1..=12 {
            assert!(traditional_moon_name(month).is_some());
            assert!(month_symbol(month).is_some());
        }
        assert!(traditional_moon_name(13).is_none());
        assert_eq!(month_symbol(0), None);
    }

    #[test]
    fn page_names_moons_and_lists_signs() {
        let phases = [
            full(date(5, 1), ZodiacSign::Scorpio),
            LunarPhaseEvent {
                phase: LunarPhase::New,
                jd_utc: 0.0,
                date: date(5, 16),
                moon_sign: ZodiacSign::Taurus,
            },
            full(date(5, 31), ZodiacSign::Sagittarius),
        ];
        let page = ReferencePage::build(&phases, Vec::new());
        assert_eq!(page.full_moons.len(), 2);
        assert_eq!(
            page.full_moons[1].line(),
            "May 31: Full Moon in Sagittarius ♐ · Blue Moon"
        );
        assert_eq!(page.zodiac.len(), 12);
        assert_eq!(page.zodiac[0].keywords, "initiative · courage · spark");
        assert_eq!(page.zodiac[11].glyph, '♓');
    }
}
