//! Formatting utilities used for CLI outputs.

use crate::models::DayOfWeek;
use chrono::Duration;

pub fn format_day_of_week(day: DayOfWeek) -> &'static str {
    day.short_name()
}

/// Human summary of a repeat set.
///
/// - empty            → "Once"
/// - all seven        → "Every day"
/// - Mon..Fri exactly → "Weekdays"
/// - Sat + Sun        → "Weekends"
/// - otherwise        → "Mon, Wed, Fri" (Sunday first)
pub fn format_repeat_days(days: &[DayOfWeek]) -> String {
    let days = crate::models::day_of_week::normalize_days(days);

    if days.is_empty() {
        return "Once".into();
    }
    if days.len() == 7 {
        return "Every day".into();
    }
    if days.len() == 5 && DayOfWeek::WEEKDAYS.iter().all(|d| days.contains(d)) {
        return "Weekdays".into();
    }
    if days.len() == 2 && DayOfWeek::WEEKEND.iter().all(|d| days.contains(d)) {
        return "Weekends".into();
    }

    days.iter()
        .map(|d| format_day_of_week(*d))
        .collect::<Vec<_>>()
        .join(", ")
}

/// "in 3h 05m", "in 12m", "in 2d 01h 00m"
pub fn format_countdown(d: Duration) -> String {
    let total = d.num_minutes().max(0);
    let days = total / (24 * 60);
    let hours = (total / 60) % 24;
    let minutes = total % 60;

    if days > 0 {
        format!("in {}d {:02}h {:02}m", days, hours, minutes)
    } else if hours > 0 {
        format!("in {}h {:02}m", hours, minutes)
    } else if minutes > 0 {
        format!("in {}m", minutes)
    } else {
        "in less than a minute".into()
    }
}

pub fn yes_no(b: bool) -> &'static str {
    if b { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use DayOfWeek::*;

    #[test]
    fn repeat_summaries() {
        assert_eq!(format_repeat_days(&[]), "Once");
        assert_eq!(format_repeat_days(&DayOfWeek::ALL), "Every day");
        assert_eq!(format_repeat_days(&DayOfWeek::WEEKDAYS), "Weekdays");
        assert_eq!(format_repeat_days(&[Saturday, Sunday]), "Weekends");
        assert_eq!(format_repeat_days(&[Friday, Monday, Wednesday]), "Mon, Wed, Fri");
    }

    #[test]
    fn weekdays_plus_saturday_is_listed() {
        let mut days = DayOfWeek::WEEKDAYS.to_vec();
        days.push(Saturday);
        assert_eq!(format_repeat_days(&days), "Mon, Tue, Wed, Thu, Fri, Sat");
    }

    #[test]
    fn countdowns() {
        assert_eq!(format_countdown(Duration::minutes(185)), "in 3h 05m");
        assert_eq!(format_countdown(Duration::minutes(12)), "in 12m");
        assert_eq!(format_countdown(Duration::minutes(24 * 60 + 60)), "in 1d 01h 00m");
        assert_eq!(format_countdown(Duration::seconds(30)), "in less than a minute");
    }
}
