//! On-disk shape of an alarm inside the `alarms` blob.

use crate::errors::{AppError, AppResult};
use crate::models::{Alarm, DayOfWeek};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlarmEntity {
    pub id: String,
    pub time_in_minutes: i64,
    pub label: String,
    pub is_enabled: bool,
    pub repeat_days: Vec<i64>,
    pub sound_uri: String,
    pub vibrate: bool,
}

impl From<&Alarm> for AlarmEntity {
    fn from(a: &Alarm) -> Self {
        Self {
            id: a.id.clone(),
            time_in_minutes: i64::from(a.time_in_minutes),
            label: a.label.clone(),
            is_enabled: a.is_enabled,
            repeat_days: a.repeat_days.iter().map(|d| i64::from(d.index())).collect(),
            sound_uri: a.sound_uri.clone(),
            vibrate: a.vibrate,
        }
    }
}

impl TryFrom<AlarmEntity> for Alarm {
    type Error = AppError;

    fn try_from(e: AlarmEntity) -> AppResult<Self> {
        if !(0..i64::from(crate::models::alarm::MINUTES_PER_DAY)).contains(&e.time_in_minutes) {
            return Err(AppError::TimeOutOfRange(e.time_in_minutes));
        }

        let repeat_days = e
            .repeat_days
            .iter()
            .map(|&i| DayOfWeek::from_index(i).ok_or_else(|| AppError::InvalidDay(i.to_string())))
            .collect::<AppResult<Vec<_>>>()?;

        Alarm {
            id: e.id,
            time_in_minutes: e.time_in_minutes as u16,
            label: e.label,
            is_enabled: e.is_enabled,
            repeat_days,
            sound_uri: e.sound_uri,
            vibrate: e.vibrate,
        }
        .validated()
    }
}
