use crate::errors::AppResult;
use crate::models::{Alarm, DayOfWeek};
use crate::store::alarms::AlarmStore;
use crate::store::prefs::Preferences;

/// Field changes requested by `add` / `edit`. `None` keeps the current value.
#[derive(Debug, Default, Clone)]
pub struct AlarmChanges {
    pub time_in_minutes: Option<u16>,
    pub label: Option<String>,
    pub repeat_days: Option<Vec<DayOfWeek>>,
    pub sound_uri: Option<String>,
    pub vibrate: Option<bool>,
    pub enabled: Option<bool>,
}

impl AlarmChanges {
    pub fn is_empty(&self) -> bool {
        self.time_in_minutes.is_none()
            && self.label.is_none()
            && self.repeat_days.is_none()
            && self.sound_uri.is_none()
            && self.vibrate.is_none()
            && self.enabled.is_none()
    }

    fn apply_to(self, alarm: &mut Alarm) {
        if let Some(t) = self.time_in_minutes {
            alarm.time_in_minutes = t;
        }
        if let Some(l) = self.label {
            alarm.label = l;
        }
        if let Some(days) = self.repeat_days {
            alarm.repeat_days = days;
        }
        if let Some(s) = self.sound_uri {
            alarm.sound_uri = s;
        }
        if let Some(v) = self.vibrate {
            alarm.vibrate = v;
        }
        if let Some(e) = self.enabled {
            alarm.is_enabled = e;
        }
    }
}

/// High-level business logic behind the alarm commands.
pub struct AlarmLogic;

impl AlarmLogic {
    /// Create a new alarm starting from `base` (defaults) and applying `changes`.
    pub fn add<P: Preferences>(
        store: &AlarmStore<P>,
        base: Alarm,
        changes: AlarmChanges,
    ) -> AppResult<Alarm> {
        let mut alarm = base;
        changes.apply_to(&mut alarm);
        let alarm = alarm.validated()?;

        store.save_alarm(alarm.clone())?;
        tracing::info!(id = %alarm.id, time = alarm.time_in_minutes, "alarm created");
        Ok(alarm)
    }

    /// Apply `changes` to an existing alarm (id or unique prefix).
    pub fn edit<P: Preferences>(
        store: &AlarmStore<P>,
        id: &str,
        changes: AlarmChanges,
    ) -> AppResult<Alarm> {
        let mut alarm = store.resolve_id(id)?;
        changes.apply_to(&mut alarm);
        let alarm = alarm.validated()?;

        store.save_alarm(alarm.clone())?;
        tracing::info!(id = %alarm.id, "alarm updated");
        Ok(alarm)
    }

    pub fn delete<P: Preferences>(store: &AlarmStore<P>, id: &str) -> AppResult<Alarm> {
        let alarm = store.resolve_id(id)?;
        store.delete_alarm(&alarm.id)?;
        tracing::info!(id = %alarm.id, "alarm deleted");
        Ok(alarm)
    }

    pub fn set_enabled<P: Preferences>(
        store: &AlarmStore<P>,
        id: &str,
        enabled: bool,
    ) -> AppResult<Alarm> {
        let mut alarm = store.resolve_id(id)?;
        store.update_alarm_status(&alarm.id, enabled)?;
        alarm.is_enabled = enabled;
        tracing::info!(id = %alarm.id, enabled, "alarm status changed");
        Ok(alarm)
    }

    /// All alarms ordered by time of day, then label.
    pub fn sorted<P: Preferences>(store: &AlarmStore<P>) -> AppResult<Vec<Alarm>> {
        let mut alarms = store.get_alarms()?;
        alarms.sort_by(|a, b| {
            a.time_in_minutes
                .cmp(&b.time_in_minutes)
                .then_with(|| a.label.cmp(&b.label))
        });
        Ok(alarms)
    }
}
