//! Assemble a year of day cells from the search results.

use std::collections::BTreeMap;

use astrocal_ephem::{Body, Ephemeris};
use astrocal_search::{
    BodyLongitude, LunarPhase, LunarPhaseEvent, PhaseConfig, RetrogradeInterval, SeasonTurn,
    SignChangeEvent, YearSpan, ZodiacSign, daily_signs, find_lunar_phases,
    find_retrograde_intervals, find_season_turns, find_sign_changes, sign_on_day,
};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{CalendarConfig, EclipseKind};
use crate::error::CalendarError;
use crate::events::DayEvent;
use crate::month::MonthSheet;
use crate::reference::ReferencePage;

/// A sign change tagged with its body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyIngress {
    pub body: Body,
    #[serde(flatten)]
    pub event: SignChangeEvent,
}

/// A retrograde interval tagged with its body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyRetrograde {
    pub body: Body,
    #[serde(flatten)]
    pub interval: RetrogradeInterval,
}

/// Everything a printed year needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearCalendar {
    pub year: i32,
    pub utc_offset_hours: f64,
    /// Cell lines per in-year date, in print order.
    pub days: BTreeMap<NaiveDate, Vec<DayEvent>>,
    pub months: Vec<MonthSheet>,
    pub lunar_phases: Vec<LunarPhaseEvent>,
    pub season_turns: Vec<SeasonTurn>,
    pub ingresses: Vec<BodyIngress>,
    pub retrogrades: Vec<BodyRetrograde>,
    pub reference: ReferencePage,
}

impl YearCalendar {
    /// Lines printed on `date`; empty outside the year.
    pub fn events_on(&self, date: NaiveDate) -> &[DayEvent] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Sheet for month 1-12.
    pub fn month(&self, month: u32) -> Option<&MonthSheet> {
        self.months.iter().find(|m| m.month == month)
    }

    pub fn full_moons(&self) -> impl Iterator<Item = &LunarPhaseEvent> {
        self.lunar_phases.iter().filter(|e| e.phase == LunarPhase::Full)
    }

    pub fn new_moons(&self) -> impl Iterator<Item = &LunarPhaseEvent> {
        self.lunar_phases.iter().filter(|e| e.phase == LunarPhase::New)
    }

    /// Bodies retrograde on `date`, in configuration order.
    pub fn retrograde_on(&self, date: NaiveDate) -> impl Iterator<Item = Body> + '_ {
        self.retrogrades
            .iter()
            .filter(move |r| r.interval.covers(date))
            .map(|r| r.body)
    }

    /// Sign changes of one body, in time order.
    pub fn ingresses_of(&self, body: Body) -> impl Iterator<Item = &SignChangeEvent> {
        self.ingresses.iter().filter(move |i| i.body == body).map(|i| &i.event)
    }
}

struct DayBook {
    span: YearSpan,
    days: BTreeMap<NaiveDate, Vec<DayEvent>>,
}

impl DayBook {
    fn new(span: YearSpan) -> Self {
        Self {
            span,
            days: BTreeMap::new(),
        }
    }

    /// Append a line; dates outside the year are dropped.
    fn push(&mut self, date: NaiveDate, event: DayEvent) {
        if self.span.contains(date) {
            self.days.entry(date).or_default().push(event);
        }
    }
}

/// Compute the full calendar for `config`.
///
/// Lines within a day keep this order: Moon sign, lunar phase, eclipse,
/// season turn, meteor windows, ingresses (in `ingress.bodies` order),
/// retrograde markers, holidays. A retrograde interval still open on
/// Dec 31 ends with a "continues" marker instead of "ends".
#[tracing::instrument(skip(config), fields(year = config.year))]
pub fn build_year(config: &CalendarConfig) -> Result<YearCalendar, CalendarError> {
    config.validate()?;
    let span = config.span()?;
    let ephemeris = Ephemeris::new(config.frame);
    let moon = BodyLongitude::new(ephemeris, Body::Moon);
    let sun = BodyLongitude::new(ephemeris, Body::Sun);
    let mut book = DayBook::new(span);

    for day in daily_signs(&moon, &span)? {
        book.push(day.date, DayEvent::MoonIn(day.sign));
    }

    let lunar_phases = find_lunar_phases(&moon, &sun, &span, &PhaseConfig::default())?;
    debug!(count = lunar_phases.len(), "lunar phases");
    for phase in &lunar_phases {
        book.push(phase.date, DayEvent::Phase(phase.phase));
    }

    for eclipse in &config.eclipses {
        let sign = eclipse_sign(&span, eclipse.kind, eclipse.date, &moon, &sun)?;
        book.push(
            eclipse.date,
            DayEvent::Eclipse {
                kind: eclipse.kind,
                sign,
            },
        );
    }

    let season_turns = find_season_turns(&sun, &span)?;
    for turn in &season_turns {
        book.push(turn.date, DayEvent::Season(turn.kind));
    }

    for shower in &config.meteor_showers {
        for date in shower.first.iter_days().take_while(|d| *d <= shower.last) {
            book.push(date, DayEvent::MeteorWindow(shower.name.clone()));
        }
    }

    let ingress_config = config.ingress_config();
    let mut ingresses = Vec::new();
    for &body in &config.ingress.bodies {
        let _guard = tracing::debug_span!("ingress_scan", body = %body).entered();
        let events = find_sign_changes(&BodyLongitude::new(ephemeris, body), &span, &ingress_config)?;
        debug!(count = events.len(), "sign changes");
        for event in events {
            book.push(
                event.date,
                DayEvent::Ingress {
                    body,
                    sign: event.to,
                },
            );
            ingresses.push(BodyIngress { body, event });
        }
    }

    let mut retrogrades = Vec::new();
    for &body in &config.retrograde_bodies {
        let intervals = find_retrograde_intervals(&BodyLongitude::new(ephemeris, body), &span)?;
        debug!(body = %body, count = intervals.len(), "retrograde intervals");
        for interval in intervals {
            book.push(interval.start, DayEvent::RetrogradeStart(body));
            let end = if interval.truncated {
                DayEvent::RetrogradeContinues(body)
            } else {
                DayEvent::RetrogradeEnd(body)
            };
            book.push(interval.end, end);
            retrogrades.push(BodyRetrograde { body, interval });
        }
    }

    for holiday in &config.holidays {
        book.push(holiday.date, DayEvent::Holiday(holiday.name.clone()));
    }

    let sun_entries = ingresses
        .iter()
        .filter(|i| i.body == Body::Sun)
        .map(|i| i.event)
        .collect();
    let reference = ReferencePage::build(&lunar_phases, sun_entries);

    let months = (1..=12)
        .filter_map(|m| MonthSheet::build(config.year, m, &book.days))
        .collect();

    info!(
        days = book.days.len(),
        ingresses = ingresses.len(),
        phases = lunar_phases.len(),
        "calendar built"
    );

    Ok(YearCalendar {
        year: config.year,
        utc_offset_hours: config.utc_offset_hours,
        days: book.days,
        months,
        lunar_phases,
        season_turns,
        ingresses,
        retrogrades,
        reference,
    })
}

fn eclipse_sign(
    span: &YearSpan,
    kind: EclipseKind,
    date: NaiveDate,
    moon: &BodyLongitude,
    sun: &BodyLongitude,
) -> Result<ZodiacSign, CalendarError> {
    let body = match kind {
        EclipseKind::Lunar => moon,
        EclipseKind::Solar => sun,
    };
    Ok(sign_on_day(body, span, date)?.sign)
}
