//! Monday-first month grids.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, Month, NaiveDate};
use serde::Serialize;

use crate::events::DayEvent;
use crate::reference::month_symbol;

/// Background tint of a month card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    /// Meteorological season of a month (1-12): Dec–Feb is winter.
    pub const fn for_month(month: u32) -> Self {
        match month {
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            9..=11 => Self::Autumn,
            _ => Self::Winter,
        }
    }

    /// Card tint as #rrggbb.
    pub const fn tint_hex(self) -> &'static str {
        match self {
            Self::Winter => "#bfd9ff",
            Self::Spring => "#ffd9f2",
            Self::Summer => "#ffedb3",
            Self::Autumn => "#734d73",
        }
    }

    /// Whether text on this tint should be light.
    pub const fn dark_tint(self) -> bool {
        matches!(self, Self::Autumn)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    /// False for leading and trailing days of neighbouring months.
    pub in_month: bool,
    /// Empty when `in_month` is false.
    pub events: Vec<DayEvent>,
}

/// One month laid out as full Monday–Sunday weeks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthSheet {
    pub year: i32,
    pub month: u32,
    pub name: &'static str,
    /// Ornament printed before the title.
    pub symbol: Option<char>,
    pub season: Season,
    pub weeks: Vec<[DayCell; 7]>,
}

impl MonthSheet {
    /// Lay out `month` of `year`, filling in-month cells from `events`.
    ///
    /// Returns `None` for a month outside 1-12.
    pub fn build(
        year: i32,
        month: u32,
        events: &BTreeMap<NaiveDate, Vec<DayEvent>>,
    ) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let name = Month::try_from(u8::try_from(month).ok()?).ok()?.name();
        let grid_start = first - Days::new(u64::from(first.weekday().num_days_from_monday()));

        let mut weeks = Vec::with_capacity(6);
        let mut week_start = grid_start;
        while week_start.year() < year || (week_start.year() == year && week_start.month() <= month)
        {
            let week: [DayCell; 7] = std::array::from_fn(|i| {
                let date = week_start + Days::new(i as u64);
                let in_month = date.month() == month && date.year() == year;
                DayCell {
                    date,
                    in_month,
                    events: if in_month {
                        events.get(&date).cloned().unwrap_or_default()
                    } else {
                        Vec::new()
                    },
                }
            });
            weeks.push(week);
            week_start = week_start + Days::new(7);
        }

        Some(Self {
            year,
            month,
            name,
            symbol: month_symbol(month),
            season: Season::for_month(month),
            weeks,
        })
    }

    /// Heading such as "✸ August 2026".
    pub fn title(&self) -> String {
        match self.symbol {
            Some(symbol) => format!("{symbol} {} {}", self.name, self.year),
            None => format!("{} {}", self.name, self.year),
        }
    }

    /// In-month cells in date order.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten().filter(|c| c.in_month)
    }
}
