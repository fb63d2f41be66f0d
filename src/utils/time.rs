//! Time utilities: parsing alarm times, formatting minutes since midnight.

use crate::errors::{AppError, AppResult};
use crate::models::alarm::MINUTES_PER_DAY;
use regex::Regex;
use std::sync::OnceLock;

fn time_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // 7:30, 07:30, 0730, 7.30, 7am, 7:30 pm
        Regex::new(r"^(?i)\s*(\d{1,2})(?:[:.h]?(\d{2}))?\s*(am|pm)?\s*$").unwrap()
    })
}

/// Parse a user supplied alarm time into minutes since midnight.
pub fn parse_alarm_time(input: &str) -> AppResult<u16> {
    let err = || AppError::InvalidTime(input.to_string());
    let caps = time_regex().captures(input).ok_or_else(err)?;

    let mut hour: u16 = caps[1].parse().map_err(|_| err())?;
    let minute: u16 = match caps.get(2) {
        Some(m) => m.as_str().parse().map_err(|_| err())?,
        None => 0,
    };

    // a bare "7" is ambiguous with a minute count, require a suffix or HH:MM
    if caps.get(2).is_none() && caps.get(3).is_none() {
        return Err(err());
    }

    if let Some(suffix) = caps.get(3) {
        if !(1..=12).contains(&hour) {
            return Err(err());
        }
        let pm = suffix.as_str().eq_ignore_ascii_case("pm");
        hour = match (hour, pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, true) => h + 12,
            (h, false) => h,
        };
    }

    if hour > 23 || minute > 59 {
        return Err(err());
    }

    Ok(hour * 60 + minute)
}

/// Minutes since midnight → `HH:MM`.
pub fn format_minutes_to_time(minutes: u16) -> String {
    let m = minutes % MINUTES_PER_DAY;
    format!("{:02}:{:02}", m / 60, m % 60)
}
