//! Alarm data source: the whole collection lives in ONE JSON array stored
//! under the `alarms` preference key. Every operation is a linear scan by id.

use super::entity::AlarmEntity;
use super::prefs::Preferences;
use crate::errors::{AppError, AppResult};
use crate::models::Alarm;
use serde_json::Value;

pub const KEY_ALARMS: &str = "alarms";

pub struct AlarmStore<P: Preferences> {
    prefs: P,
}

impl<P: Preferences> AlarmStore<P> {
    pub fn new(prefs: P) -> Self {
        Self { prefs }
    }

    pub fn prefs(&self) -> &P {
        &self.prefs
    }

    /// All alarms, in insertion order.
    pub fn get_alarms(&self) -> AppResult<Vec<Alarm>> {
        let Some(blob) = self.prefs.get_string(KEY_ALARMS)? else {
            return Ok(Vec::new());
        };
        Ok(decode_alarms(&blob))
    }

    pub fn get_alarm_by_id(&self, id: &str) -> AppResult<Option<Alarm>> {
        Ok(self.get_alarms()?.into_iter().find(|a| a.id == id))
    }

    /// Insert or replace (in place) by id.
    pub fn save_alarm(&self, alarm: Alarm) -> AppResult<()> {
        let alarm = alarm.validated()?;

        self.modify(|alarms| {
            match alarms.iter().position(|a| a.id == alarm.id) {
                Some(idx) => alarms[idx] = alarm.clone(),
                None => alarms.push(alarm.clone()),
            }
            true
        })
    }

    /// Removes every entry with this id. Missing ids are ignored.
    pub fn delete_alarm(&self, id: &str) -> AppResult<()> {
        self.modify(|alarms| {
            let before = alarms.len();
            alarms.retain(|a| a.id != id);

            if alarms.len() == before {
                tracing::debug!(id, "delete: no alarm with this id");
                return false;
            }
            true
        })
    }

    /// Flip `is_enabled` in place. Missing ids are ignored.
    pub fn update_alarm_status(&self, id: &str, enabled: bool) -> AppResult<()> {
        self.modify(|alarms| match alarms.iter_mut().find(|a| a.id == id) {
            Some(a) => {
                a.is_enabled = enabled;
                true
            }
            None => {
                tracing::debug!(id, "update status: no alarm with this id");
                false
            }
        })
    }

    /// Resolve a full id or a unique prefix of one.
    pub fn resolve_id(&self, id_or_prefix: &str) -> AppResult<Alarm> {
        let alarms = self.get_alarms()?;

        if let Some(a) = alarms.iter().find(|a| a.id == id_or_prefix) {
            return Ok(a.clone());
        }

        let mut matches = alarms
            .into_iter()
            .filter(|a| !id_or_prefix.is_empty() && a.id.starts_with(id_or_prefix));

        match (matches.next(), matches.next()) {
            (Some(a), None) => Ok(a),
            (Some(_), Some(_)) => Err(AppError::AmbiguousId(id_or_prefix.to_string())),
            _ => Err(AppError::AlarmNotFound(id_or_prefix.to_string())),
        }
    }

    /// Read, change and write back the whole list while holding the store
    /// lock. `f` returns `false` when it changed nothing.
    fn modify(&self, mut f: impl FnMut(&mut Vec<Alarm>) -> bool) -> AppResult<()> {
        self.prefs.update_string(KEY_ALARMS, &mut |blob| {
            let mut alarms = blob.map(decode_alarms).unwrap_or_default();
            if !f(&mut alarms) {
                return Ok(None);
            }

            let entities: Vec<AlarmEntity> = alarms.iter().map(AlarmEntity::from).collect();
            tracing::debug!(count = alarms.len(), "alarms saved");
            Ok(Some(serde_json::to_string(&entities)?))
        })
    }
}

/// Decode the stored blob, keeping every entry that is valid.
fn decode_alarms(blob: &str) -> Vec<Alarm> {
    let items: Vec<Value> = match serde_json::from_str(blob) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(error = %e, "stored alarms are not a JSON array, ignoring them");
            return Vec::new();
        }
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| {
            let decoded = serde_json::from_value::<AlarmEntity>(item)
                .map_err(AppError::from)
                .and_then(Alarm::try_from);

            match decoded {
                Ok(a) => Some(a),
                Err(e) => {
                    tracing::warn!(index = i, error = %e, "skipping invalid stored alarm");
                    None
                }
            }
        })
        .collect()
}
