use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use astrocal_calendar::{CalendarConfig, MonthSheet, YearCalendar, build_year};
use astrocal_ephem::{Body, Ephemeris};
use astrocal_search::{
    BodyLongitude, IngressConfig, PhaseConfig, find_lunar_phases, find_retrograde_intervals,
    find_sign_changes, sign_on_day,
};
use astrocal_time::jd_to_local_datetime;
use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "astrocal", about = "Astrological calendar CLI")]
struct Cli {
    /// Fixed UTC offset in hours (default from config, +1)
    #[arg(long, global = true, allow_hyphen_values = true)]
    utc_offset: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the day cells of the whole year or one month
    Calendar {
        /// TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        year: Option<i32>,
        /// Month 1-12
        #[arg(long)]
        month: Option<u32>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List sign changes of a body
    Ingresses {
        /// Body name (Sun, Moon, Mercury, ..., Pluto)
        #[arg(long)]
        body: Body,
        #[arg(long)]
        year: Option<i32>,
        /// One sample per day at local noon instead of refined search
        #[arg(long)]
        daily: bool,
    },
    /// List retrograde intervals of a body
    Retrograde {
        #[arg(long)]
        body: Body,
        #[arg(long)]
        year: Option<i32>,
    },
    /// Print the reference page: named Full Moons, Sun entries, zodiac keywords
    Reference {
        /// TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        year: Option<i32>,
    },
    /// List New and Full Moons
    Phases {
        #[arg(long)]
        year: Option<i32>,
    },
    /// Moon sign at local noon of a date
    MoonSign {
        /// Civil date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn config_for(
    path: Option<&PathBuf>,
    year: Option<i32>,
    utc_offset: Option<f64>,
) -> Result<CalendarConfig> {
    let mut config = match (path, year) {
        (Some(path), _) => CalendarConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        (None, Some(year)) => CalendarConfig::for_year(year),
        (None, None) => CalendarConfig::default(),
    };
    if path.is_some() {
        if let Some(year) = year {
            if year != config.year {
                bail!("--year {year} conflicts with year {} in config", config.year);
            }
        }
    }
    if let Some(offset) = utc_offset {
        config.utc_offset_hours = offset;
    }
    config.validate()?;
    Ok(config)
}

fn local_time(jd_utc: f64, utc_offset: f64) -> Result<String> {
    Ok(jd_to_local_datetime(jd_utc, utc_offset)?
        .format("%Y-%m-%d %H:%M")
        .to_string())
}

fn month_text(sheet: &MonthSheet) -> String {
    let mut out = format!("{}\n", sheet.title());
    for cell in sheet.days() {
        let lines: Vec<String> = cell.events.iter().map(ToString::to_string).collect();
        out.push_str(&format!(
            "{}  {}\n",
            cell.date.format("%a %d"),
            lines.join(" · ")
        ));
    }
    out
}

fn reference_text(cal: &YearCalendar) -> String {
    let page = &cal.reference;
    let mut out = format!("Full Moons {}\n", cal.year);
    for moon in &page.full_moons {
        out.push_str(&moon.line());
        out.push('\n');
    }
    out.push_str("\nZodiac\n");
    for entry in &page.zodiac {
        out.push_str(&format!("{} {}: {}\n", entry.glyph, entry.sign, entry.keywords));
    }
    out.push_str("\nSun entries\n");
    for entry in &page.sun_entries {
        out.push_str(&format!(
            "{}: Sun → {} {}\n",
            entry.date.format("%b %d"),
            entry.to,
            entry.to.glyph()
        ));
    }
    out
}

fn print_calendar(cal: &YearCalendar, month: Option<u32>, json: bool) -> Result<()> {
    match (month, json) {
        (Some(m), json) => {
            let Some(sheet) = cal.month(m) else {
                bail!("month must be 1-12, got {m}");
            };
            if json {
                println!("{}", serde_json::to_string_pretty(sheet)?);
            } else {
                print!("{}", month_text(sheet));
            }
        }
        (None, true) => println!("{}", serde_json::to_string_pretty(cal)?),
        (None, false) => {
            for sheet in &cal.months {
                println!("{}", month_text(sheet));
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Calendar {
            config,
            year,
            month,
            json,
        } => {
            let config = config_for(config.as_ref(), year, cli.utc_offset)?;
            tracing::debug!(
                year = config.year,
                utc_offset = config.utc_offset_hours,
                "building calendar"
            );
            let cal = build_year(&config)?;
            print_calendar(&cal, month, json)?;
        }

        Commands::Reference { config, year } => {
            let config = config_for(config.as_ref(), year, cli.utc_offset)?;
            let cal = build_year(&config)?;
            print!("{}", reference_text(&cal));
        }

        Commands::Ingresses { body, year, daily } => {
            let config = config_for(None, year, cli.utc_offset)?;
            let span = config.span()?;
            let search = if daily {
                IngressConfig::daily()
            } else {
                IngressConfig::refined()
            };
            let source = BodyLongitude::new(Ephemeris::new(config.frame), body);
            for event in find_sign_changes(&source, &span, &search)? {
                println!(
                    "{}  {body} → {} {} ({:.4} deg)",
                    local_time(event.jd_utc, config.utc_offset_hours)?,
                    event.to,
                    event.to.glyph(),
                    event.longitude_deg
                );
            }
        }

        Commands::Retrograde { body, year } => {
            if !body.can_retrograde() {
                bail!("{body} is never retrograde");
            }
            let config = config_for(None, year, cli.utc_offset)?;
            let span = config.span()?;
            let source = BodyLongitude::new(Ephemeris::new(config.frame), body);
            for iv in find_retrograde_intervals(&source, &span)? {
                let end = if iv.truncated {
                    format!("{} (still retrograde)", iv.end)
                } else {
                    iv.end.to_string()
                };
                println!("{body} R  {} → {end}  ({} days)", iv.start, iv.duration_days());
            }
        }

        Commands::Phases { year } => {
            let config = config_for(None, year, cli.utc_offset)?;
            let span = config.span()?;
            let eph = Ephemeris::new(config.frame);
            let moon = BodyLongitude::new(eph, Body::Moon);
            let sun = BodyLongitude::new(eph, Body::Sun);
            for event in find_lunar_phases(&moon, &sun, &span, &PhaseConfig::default())? {
                println!(
                    "{}  {} in {}",
                    local_time(event.jd_utc, config.utc_offset_hours)?,
                    event.phase,
                    event.moon_sign
                );
            }
        }

        Commands::MoonSign { date } => {
            let config = config_for(None, Some(date.year()), cli.utc_offset)?;
            let span = config.span()?;
            let moon = BodyLongitude::new(Ephemeris::new(config.frame), Body::Moon);
            let day = sign_on_day(&moon, &span, date)?;
            println!(
                "{date}  Moon in {} {} ({:.2} deg)",
                day.sign,
                day.sign.glyph(),
                day.longitude_deg
            );
        }
    }

    Ok(())
}
