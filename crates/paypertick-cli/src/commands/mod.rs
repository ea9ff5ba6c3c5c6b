pub mod config;
pub mod status;
pub mod watch;

use chrono::{Local, NaiveDateTime};
use paypertick_core::earnings::parse_hhmm;
use paypertick_core::Event;

/// Local wall-clock time, or today at `at` (`HH:MM`) when given.
pub fn resolve_now(at: Option<&str>) -> Result<NaiveDateTime, Box<dyn std::error::Error>> {
    let now = Local::now().naive_local();
    match at {
        Some(raw) => {
            let time = parse_hhmm(raw).map_err(|e| format!("invalid --at '{raw}': {e}"))?;
            Ok(now.date().and_time(time))
        }
        None => Ok(now),
    }
}

/// Print an event as pretty JSON or as human-readable text.
pub fn print_event(event: &Event, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(event)?);
        return Ok(());
    }
    match event {
        Event::EarningsSnapshot {
            status_text,
            message,
            ..
        } => {
            println!("{status_text}");
            println!("{message}");
        }
        Event::NotConfigured {
            status_text,
            reason,
            ..
        } => {
            println!("{status_text}");
            println!("({reason})");
        }
        Event::PhaseChanged { from, to, at } => {
            println!("[{}] {} -> {}", at.format("%H:%M"), from.label(), to.label());
        }
    }
    Ok(())
}
