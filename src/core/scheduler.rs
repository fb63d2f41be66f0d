//! Alarm scheduling.
//!
//! [`AlarmScheduler`] is the seam between the alarm logic and whatever
//! facility fires a callback at a wall-clock instant. [`TimerScheduler`] is the
//! desktop implementation: one tokio task per alarm that sends an
//! [`AlarmFired`] event when its time comes.

use super::trigger::next_trigger;
use crate::models::Alarm;
use chrono::{Local, LocalResult, NaiveDateTime, TimeZone};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Longest single sleep; the wall clock is re-read after each one so that a
/// suspended machine or a clock change does not delay the alarm.
const MAX_SLEEP: Duration = Duration::from_secs(30);

pub trait AlarmScheduler: Send + Sync {
    fn schedule_alarm(&self, alarm: &Alarm);
    fn cancel_alarm(&self, alarm_id: &str);
    fn cancel_all_alarms(&self);
    fn is_alarm_scheduled(&self, alarm_id: &str) -> bool;
}

/// Enabled → (re)register, disabled → make sure nothing is registered.
pub fn schedule_alarm_use_case(scheduler: &dyn AlarmScheduler, alarm: &Alarm) {
    if alarm.is_enabled {
        scheduler.cancel_alarm(&alarm.id);
        scheduler.schedule_alarm(alarm);
    } else {
        scheduler.cancel_alarm(&alarm.id);
    }
}

#[derive(Debug, Clone)]
pub struct AlarmFired {
    pub alarm: Alarm,
    pub at: NaiveDateTime,
}

enum Wait {
    #[cfg(test)]
    Fixed(Duration),
    WallClock(NaiveDateTime),
}

pub struct TimerScheduler {
    tasks: Mutex<HashMap<String, JoinHandle<()>>>,
    tx: mpsc::UnboundedSender<AlarmFired>,
}

impl TimerScheduler {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<AlarmFired>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                tasks: Mutex::new(HashMap::new()),
                tx,
            },
            rx,
        )
    }

    /// Register `alarm` to fire after a fixed delay, reported as firing at `at`.
    #[cfg(test)]
    pub fn schedule_after(&self, alarm: &Alarm, at: NaiveDateTime, delay: Duration) {
        self.spawn(alarm, at, Wait::Fixed(delay));
    }

    /// Number of live registrations.
    #[cfg(test)]
    pub fn scheduled_count(&self) -> usize {
        self.with_tasks(|tasks| tasks.values().filter(|h| !h.is_finished()).count())
    }

    fn spawn(&self, alarm: &Alarm, at: NaiveDateTime, wait: Wait) {
        let tx = self.tx.clone();
        let alarm = alarm.clone();
        let id = alarm.id.clone();

        let handle = tokio::spawn(async move {
            match wait {
                #[cfg(test)]
                Wait::Fixed(d) => tokio::time::sleep(d).await,
                Wait::WallClock(target) => loop {
                    let remaining = delay_until(target);
                    if remaining.is_zero() {
                        break;
                    }
                    tokio::time::sleep(remaining.min(MAX_SLEEP)).await;
                },
            }

            tracing::debug!(id = %alarm.id, %at, "timer elapsed");
            if tx.send(AlarmFired { alarm, at }).is_err() {
                tracing::warn!("alarm fired but nobody is listening");
            }
        });

        if let Some(old) = self.with_tasks(|tasks| tasks.insert(id, handle)) {
            old.abort();
        }
    }

    fn with_tasks<T>(&self, f: impl FnOnce(&mut HashMap<String, JoinHandle<()>>) -> T) -> T {
        // a poisoned map only means another thread panicked mid-insert; the
        // handles themselves are still valid
        let mut guard = self.tasks.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut guard)
    }
}

impl AlarmScheduler for TimerScheduler {
    fn schedule_alarm(&self, alarm: &Alarm) {
        let at = next_trigger(alarm, Local::now().naive_local());
        tracing::info!(
            id = %alarm.id,
            label = %alarm.label,
            %at,
            "scheduling alarm"
        );
        self.spawn(alarm, at, Wait::WallClock(at));
    }

    fn cancel_alarm(&self, alarm_id: &str) {
        if let Some(h) = self.with_tasks(|tasks| tasks.remove(alarm_id)) {
            tracing::info!(id = alarm_id, "cancelling alarm");
            h.abort();
        }
    }

    fn cancel_all_alarms(&self) {
        let handles: Vec<_> = self.with_tasks(|tasks| tasks.drain().collect());
        tracing::info!(count = handles.len(), "cancelling all alarms");
        for (_, h) in handles {
            h.abort();
        }
    }

    fn is_alarm_scheduled(&self, alarm_id: &str) -> bool {
        self.with_tasks(|tasks| tasks.get(alarm_id).is_some_and(|h| !h.is_finished()))
    }
}

impl Drop for TimerScheduler {
    fn drop(&mut self) {
        self.cancel_all_alarms();
    }
}

/// Real time left until a local wall-clock instant (zero if already past).
pub fn delay_until(at: NaiveDateTime) -> Duration {
    let now = Local::now();

    let target = match Local.from_local_datetime(&at) {
        LocalResult::Single(t) => t,
        LocalResult::Ambiguous(earliest, _) => {
            tracing::warn!(%at, "ambiguous local time, picking earliest");
            earliest
        }
        LocalResult::None => {
            tracing::warn!(%at, "local time does not exist, using naive difference");
            return (at - now.naive_local()).to_std().unwrap_or_default();
        }
    };

    (target - now).to_std().unwrap_or_default()
}
