//! Next-trigger computation: plain local date/time arithmetic.

use crate::models::{Alarm, DayOfWeek};
use chrono::{Datelike, Days, NaiveDateTime, NaiveTime};

/// Next wall-clock instant (local, seconds = 0) at which `alarm` fires.
///
/// The candidate is today at HH:MM; when that is not strictly in the future it
/// moves to tomorrow. Repeating alarms keep advancing until the weekday is one
/// of their repeat days.
pub fn next_trigger(alarm: &Alarm, now: NaiveDateTime) -> NaiveDateTime {
    // hour/minute come from a validated 0..1440 value
    let at = NaiveTime::from_hms_opt(alarm.hour(), alarm.minute(), 0).unwrap_or(NaiveTime::MIN);

    let mut candidate = now.date().and_time(at);
    if candidate <= now {
        candidate = candidate + Days::new(1);
    }

    if alarm.is_one_shot() {
        return candidate;
    }

    for _ in 0..7 {
        if alarm.repeats_on(DayOfWeek::from_chrono(candidate.weekday())) {
            return candidate;
        }
        candidate = candidate + Days::new(1);
    }

    candidate
}

/// The alarm that fires first among the enabled ones, with its trigger time.
pub fn next_enabled<'a>(
    alarms: &'a [Alarm],
    now: NaiveDateTime,
) -> Option<(&'a Alarm, NaiveDateTime)> {
    alarms
        .iter()
        .filter(|a| a.is_enabled)
        .map(|a| (a, next_trigger(a, now)))
        .min_by_key(|(_, at)| *at)
}
