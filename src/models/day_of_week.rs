use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Sunday,    // 0
    Monday,    // 1
    Tuesday,   // 2
    Wednesday, // 3
    Thursday,  // 4
    Friday,    // 5
    Saturday,  // 6
}

impl DayOfWeek {
    /// Sunday-first, the order used for storage and display.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    pub const WEEKDAYS: [DayOfWeek; 5] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
    ];

    pub const WEEKEND: [DayOfWeek; 2] = [DayOfWeek::Saturday, DayOfWeek::Sunday];

    /// Convert enum → stored tag
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Convert stored tag → enum.
    /// `7` is accepted as Sunday so ISO-style week numbering loads too.
    pub fn from_index(i: i64) -> Option<Self> {
        match i {
            0 | 7 => Some(DayOfWeek::Sunday),
            1 => Some(DayOfWeek::Monday),
            2 => Some(DayOfWeek::Tuesday),
            3 => Some(DayOfWeek::Wednesday),
            4 => Some(DayOfWeek::Thursday),
            5 => Some(DayOfWeek::Friday),
            6 => Some(DayOfWeek::Saturday),
            _ => None,
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            DayOfWeek::Sunday => "Sun",
            DayOfWeek::Monday => "Mon",
            DayOfWeek::Tuesday => "Tue",
            DayOfWeek::Wednesday => "Wed",
            DayOfWeek::Thursday => "Thu",
            DayOfWeek::Friday => "Fri",
            DayOfWeek::Saturday => "Sat",
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            DayOfWeek::Sunday => "Sunday",
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
        }
    }

    /// Helper: convert input from CLI ("mon", "Monday", "MO", "1")
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        if let Ok(n) = s.parse::<i64>() {
            return Self::from_index(n);
        }
        if s.len() < 2 {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|d| d.full_name().to_lowercase().starts_with(&s))
    }

    pub fn from_chrono(wd: chrono::Weekday) -> Self {
        // chrono counts from Sunday with num_days_from_sunday()
        Self::ALL[wd.num_days_from_sunday() as usize]
    }

    pub fn to_chrono(self) -> chrono::Weekday {
        match self {
            DayOfWeek::Sunday => chrono::Weekday::Sun,
            DayOfWeek::Monday => chrono::Weekday::Mon,
            DayOfWeek::Tuesday => chrono::Weekday::Tue,
            DayOfWeek::Wednesday => chrono::Weekday::Wed,
            DayOfWeek::Thursday => chrono::Weekday::Thu,
            DayOfWeek::Friday => chrono::Weekday::Fri,
            DayOfWeek::Saturday => chrono::Weekday::Sat,
        }
    }
}

/// Sort and deduplicate a list of days (Sunday first).
pub fn normalize_days(days: &[DayOfWeek]) -> Vec<DayOfWeek> {
    let mut out = days.to_vec();
    out.sort();
    out.dedup();
    out
}

/// Parse a `--repeat` value.
///
/// Accepts a comma separated list of days (`mon,wed,fri`) or one of the
/// shortcuts `daily`, `weekdays`, `weekends`, `once` / `none`.
pub fn parse_repeat_days(input: &str) -> AppResult<Vec<DayOfWeek>> {
    let trimmed = input.trim().to_lowercase();

    match trimmed.as_str() {
        "" | "once" | "none" => return Ok(Vec::new()),
        "daily" | "everyday" | "every day" => return Ok(DayOfWeek::ALL.to_vec()),
        "weekdays" => return Ok(DayOfWeek::WEEKDAYS.to_vec()),
        "weekends" | "weekend" => return Ok(normalize_days(&DayOfWeek::WEEKEND)),
        _ => {}
    }

    let mut days = Vec::new();
    for part in trimmed.split(',').filter(|p| !p.trim().is_empty()) {
        let d = DayOfWeek::parse(part).ok_or_else(|| AppError::InvalidDay(part.trim().into()))?;
        days.push(d);
    }

    Ok(normalize_days(&days))
}
