//! End-to-end checks of the default 2026 edition.

use std::io::Write;
use std::sync::OnceLock;

use astrocal_calendar::{
    CalendarConfig, CalendarError, DayEvent, EclipseKind, YearCalendar, build_year,
};
use astrocal_ephem::Body;
use astrocal_search::{LunarPhase, SeasonKind, ZodiacSign};
use chrono::{Datelike, NaiveDate, Weekday};

fn calendar() -> &'static YearCalendar {
    static CAL: OnceLock<YearCalendar> = OnceLock::new();
    CAL.get_or_init(|| build_year(&CalendarConfig::default()).unwrap())
}

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, month, day).unwrap()
}

#[test]
fn every_day_starts_with_moon_sign() {
    let cal = calendar();
    assert_eq!(cal.days.len(), 365);
    for (day, events) in &cal.days {
        assert!(
            matches!(events.first(), Some(DayEvent::MoonIn(_))),
            "{day}: {events:?}"
        );
        let moon_lines = events.iter().filter(|e| matches!(e, DayEvent::MoonIn(_))).count();
        assert_eq!(moon_lines, 1);
    }
}

#[test]
fn lunar_eclipse_day_lists_full_moon_first() {
    let events = calendar().events_on(date(8, 28));
    let labels: Vec<String> = events.iter().map(ToString::to_string).collect();
    let full = labels.iter().position(|l| l == "Full Moon").unwrap();
    let eclipse = labels.iter().position(|l| l == "Lunar eclipse").unwrap();
    assert!(full < eclipse, "{labels:?}");

    let sign = events.iter().find_map(|e| match e {
        DayEvent::Eclipse { kind: EclipseKind::Lunar, sign } => Some(*sign),
        _ => None,
    });
    assert_eq!(sign, Some(ZodiacSign::Pisces));
}

#[test]
fn solar_eclipse_day() {
    let labels: Vec<String> = calendar()
        .events_on(date(8, 12))
        .iter()
        .map(ToString::to_string)
        .collect();
    assert!(labels.contains(&"New Moon".to_string()), "{labels:?}");
    assert!(labels.contains(&"Solar eclipse".to_string()));
    assert!(labels.contains(&"Perseids peak window".to_string()));
}

#[test]
fn meteor_window_on_both_dates() {
    let cal = calendar();
    for day in [date(12, 13), date(12, 14)] {
        assert!(
            cal.events_on(day)
                .contains(&DayEvent::MeteorWindow("Geminids".into()))
        );
    }
    assert!(
        !cal.events_on(date(12, 15))
            .contains(&DayEvent::MeteorWindow("Geminids".into()))
    );
}

#[test]
fn equinox_precedes_sun_ingress() {
    let events = calendar().events_on(date(3, 20));
    let season = events
        .iter()
        .position(|e| *e == DayEvent::Season(SeasonKind::MarchEquinox))
        .unwrap();
    let ingress = events
        .iter()
        .position(|e| {
            *e == DayEvent::Ingress {
                body: Body::Sun,
                sign: ZodiacSign::Aries,
            }
        })
        .unwrap();
    assert!(season < ingress);
    assert_eq!(events[season].to_string(), "Spring Equinox");
    assert_eq!(events[ingress].to_string(), "Sun → Aries ♈");
}

#[test]
fn four_season_turns_on_almanac_dates() {
    let turns: Vec<_> = calendar().season_turns.iter().map(|t| t.date).collect();
    assert_eq!(turns, [date(3, 20), date(6, 21), date(9, 23), date(12, 21)]);
}

#[test]
fn phase_and_ingress_counts() {
    let cal = calendar();
    assert_eq!(cal.full_moons().count(), 13);
    assert_eq!(cal.new_moons().count(), 12);
    assert_eq!(cal.ingresses_of(Body::Sun).count(), 12);
    assert!(cal.ingresses_of(Body::Moon).next().is_none());
    assert!(
        cal.lunar_phases
            .iter()
            .all(|p| matches!(p.phase, LunarPhase::New | LunarPhase::Full))
    );
}

#[test]
fn mercury_retrograde_markers() {
    let cal = calendar();
    let merc: Vec<_> = cal.retrogrades.iter().filter(|r| r.body == Body::Mercury).collect();
    assert_eq!(merc.len(), 3);
    for r in merc {
        assert!(
            cal.events_on(r.interval.start)
                .contains(&DayEvent::RetrogradeStart(Body::Mercury))
        );
        assert!(
            cal.events_on(r.interval.end)
                .contains(&DayEvent::RetrogradeEnd(Body::Mercury))
        );
    }
}

#[test]
fn second_may_full_moon_is_blue() {
    let page = &calendar().reference;
    assert_eq!(page.full_moons.len(), 13);
    let may: Vec<_> = page.full_moons.iter().filter(|m| m.date.month() == 5).collect();
    assert_eq!(may.len(), 2);
    assert_eq!(may[0].date, date(5, 1));
    assert_eq!(may[0].name, "Flower Moon");
    assert_eq!(may[1].date, date(5, 31));
    assert_eq!(may[1].name, "Blue Moon");
    assert_eq!(page.full_moons.iter().filter(|m| m.name == "Blue Moon").count(), 1);
    assert_eq!(page.sun_entries.len(), 12);
    assert_eq!(page.zodiac.len(), 12);
}

#[test]
fn retrograde_open_at_year_end_continues() {
    let config = CalendarConfig {
        retrograde_bodies: vec![Body::Uranus],
        ..CalendarConfig::default()
    };
    let cal = build_year(&config).unwrap();
    let dec31 = date(12, 31);
    let events = cal.events_on(dec31);
    assert!(events.contains(&DayEvent::RetrogradeContinues(Body::Uranus)));
    assert!(!events.contains(&DayEvent::RetrogradeEnd(Body::Uranus)));
    assert!(events.iter().any(|e| e.to_string() == "Uranus R (continues)"));
    assert_eq!(cal.retrograde_on(dec31).collect::<Vec<_>>(), [Body::Uranus]);
    assert!(cal.retrograde_on(date(7, 1)).next().is_none());
}

#[test]
fn mercury_retrograde_lookup() {
    let cal = calendar();
    let first = cal.retrogrades[0].interval;
    assert_eq!(cal.retrograde_on(first.start).collect::<Vec<_>>(), [Body::Mercury]);
    assert!(cal.retrograde_on(first.end).next().is_none());
    assert!(first.duration_days() > 15 && first.duration_days() < 30);
}

#[test]
fn holidays_are_last_in_cell() {
    let events = calendar().events_on(date(12, 25));
    assert_eq!(events.last(), Some(&DayEvent::Holiday("Christmas Day".into())));
}

#[test]
fn month_sheets_cover_the_year() {
    let cal = calendar();
    assert_eq!(cal.months.len(), 12);
    let mut total = 0;
    for sheet in &cal.months {
        for week in &sheet.weeks {
            assert_eq!(week[0].date.weekday(), Weekday::Mon);
        }
        for cell in sheet.days() {
            assert_eq!(cell.events.as_slice(), cal.events_on(cell.date));
            total += 1;
        }
    }
    assert_eq!(total, 365);
    assert_eq!(cal.month(8).unwrap().name, "August");
}

#[test]
fn serializes_to_json() {
    let value = serde_json::to_value(calendar()).unwrap();
    assert_eq!(value["year"], 2026);
    assert_eq!(value["days"]["2026-08-28"][0]["kind"], "moon_in");
    assert_eq!(value["ingresses"][0]["body"], "Sun");
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "utc_offset_hours = 0.0\nretrograde_bodies = []").unwrap();
    let config = CalendarConfig::load(file.path()).unwrap();
    assert_eq!(config.utc_offset_hours, 0.0);
    assert!(config.retrograde_bodies.is_empty());
    assert_eq!(config.year, 2026);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CalendarConfig::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, CalendarError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn invalid_config_fails_before_searching() {
    let config = CalendarConfig {
        sample_hour: 30.0,
        ..CalendarConfig::default()
    };
    assert!(build_year(&config).is_err());
}
