use super::day_of_week::{DayOfWeek, normalize_days};
use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Minutes in one day; `time_in_minutes` always lives in `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Tone used when an alarm has no sound or names one we don't know.
pub const DEFAULT_SOUND: &str = "morning!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alarm {
    pub id: String,
    pub time_in_minutes: u16,        // minutes since local midnight
    pub label: String,               // may be empty
    pub is_enabled: bool,            // disabled alarms are kept but never scheduled
    pub repeat_days: Vec<DayOfWeek>, // empty → fires once
    pub sound_uri: String,           // catalog name or file path
    pub vibrate: bool,
}

impl Alarm {
    /// New enabled one-shot alarm with a fresh UUID.
    pub fn new(time_in_minutes: u16, label: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            time_in_minutes: time_in_minutes % MINUTES_PER_DAY,
            label: label.into(),
            is_enabled: true,
            repeat_days: Vec::new(),
            sound_uri: DEFAULT_SOUND.to_string(),
            vibrate: true,
        }
    }

    pub fn hour(&self) -> u32 {
        u32::from(self.time_in_minutes / 60)
    }

    pub fn minute(&self) -> u32 {
        u32::from(self.time_in_minutes % 60)
    }

    pub fn is_one_shot(&self) -> bool {
        self.repeat_days.is_empty()
    }

    pub fn repeats_on(&self, day: DayOfWeek) -> bool {
        self.repeat_days.contains(&day)
    }

    /// Label shown in notifications.
    pub fn display_label(&self) -> &str {
        if self.label.trim().is_empty() {
            "Alarm"
        } else {
            &self.label
        }
    }

    /// Short id used in tables (first UUID block).
    pub fn short_id(&self) -> &str {
        self.id.split('-').next().unwrap_or(&self.id)
    }

    /// Check the invariants the store relies on and normalize the repeat set.
    pub fn validated(mut self) -> AppResult<Self> {
        if self.time_in_minutes >= MINUTES_PER_DAY {
            return Err(AppError::TimeOutOfRange(i64::from(self.time_in_minutes)));
        }
        if self.id.trim().is_empty() {
            return Err(AppError::Store("alarm id must not be empty".into()));
        }
        self.repeat_days = normalize_days(&self.repeat_days);
        Ok(self)
    }
}

/// Fold any minute count into a single day.
pub fn normalize_minutes(minutes: i64) -> u16 {
    minutes.rem_euclid(i64::from(MINUTES_PER_DAY)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_alarm_defaults() {
        let a = Alarm::new(7 * 60 + 30, "Gym");
        assert!(a.is_enabled);
        assert!(a.is_one_shot());
        assert!(a.vibrate);
        assert_eq!(a.sound_uri, DEFAULT_SOUND);
        assert_eq!((a.hour(), a.minute()), (7, 30));
        assert_eq!(a.id.len(), 36);
    }

    #[test]
    fn normalize_wraps_into_one_day() {
        assert_eq!(normalize_minutes(0), 0);
        assert_eq!(normalize_minutes(1439), 1439);
        assert_eq!(normalize_minutes(1440), 0);
        assert_eq!(normalize_minutes(-5), 1435);
        assert_eq!(normalize_minutes(1440 * 3 + 61), 61);
    }

    #[test]
    fn validated_rejects_out_of_range() {
        let mut a = Alarm::new(0, "");
        a.time_in_minutes = 1440;
        assert!(matches!(a.validated(), Err(AppError::TimeOutOfRange(1440))));
    }

    #[test]
    fn validated_dedups_repeat_days() {
        let mut a = Alarm::new(60, "");
        a.repeat_days = vec![DayOfWeek::Friday, DayOfWeek::Monday, DayOfWeek::Friday];
        let a = a.validated().unwrap();
        assert_eq!(a.repeat_days, vec![DayOfWeek::Monday, DayOfWeek::Friday]);
    }

    #[test]
    fn empty_label_shows_generic_name() {
        assert_eq!(Alarm::new(0, "  ").display_label(), "Alarm");
        assert_eq!(Alarm::new(0, "Work").display_label(), "Work");
    }
}
