//! Data model of a printable 12-month astrological calendar.
//!
//! [`build_year`] runs the searches configured by a [`CalendarConfig`]
//! and returns a [`YearCalendar`]: per-day cell lines, Monday-first
//! [`MonthSheet`]s and the lists printed on the reference pages.
//! Drawing is left to the consumer.

pub mod builder;
pub mod config;
pub mod error;
pub mod events;
pub mod month;
pub mod reference;

pub use builder::{BodyIngress, BodyRetrograde, YearCalendar, build_year};
pub use config::{
    CalendarConfig, DEFAULT_YEAR, Eclipse, EclipseKind, Holiday, IngressSettings, MeteorShower,
};
pub use error::CalendarError;
pub use events::DayEvent;
pub use month::{DayCell, MonthSheet, Season};
pub use reference::{
    NamedFullMoon, ReferencePage, ZodiacEntry, full_moon_name, month_symbol, sign_keywords,
    traditional_moon_name,
};
