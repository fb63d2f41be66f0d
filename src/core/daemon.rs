//! The `run` loop: keeps the timer scheduler in sync with the store and
//! rings alarms when they fire.

use super::ringer::{RingOutcome, Ringer};
use super::scheduler::{
    AlarmFired, AlarmScheduler, TimerScheduler, schedule_alarm_use_case,
};
use crate::errors::AppResult;
use crate::models::Alarm;
use crate::store::alarms::AlarmStore;
use crate::store::prefs::Preferences;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub scheduled: usize,
    pub cancelled: usize,
}

/// What happened during one `run`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Alarms that rang.
    pub rung: usize,
    /// Rings stopped from the keyboard.
    pub stopped: usize,
}

pub struct Daemon<P: Preferences> {
    store: AlarmStore<P>,
    scheduler: TimerScheduler,
    fired: UnboundedReceiver<AlarmFired>,
    ringer: Arc<Ringer>,
    resync: Duration,
    snapshot: HashMap<String, Alarm>,
    current_ring: Option<JoinHandle<RingOutcome>>,
}

impl<P: Preferences> Daemon<P> {
    pub fn new(store: AlarmStore<P>, ringer: Ringer, resync: Duration) -> Self {
        let (scheduler, fired) = TimerScheduler::new();
        Self {
            store,
            scheduler,
            fired,
            ringer: Arc::new(ringer),
            resync: resync.max(Duration::from_secs(1)),
            snapshot: HashMap::new(),
            current_ring: None,
        }
    }

    pub fn scheduler(&self) -> &TimerScheduler {
        &self.scheduler
    }

    pub fn store(&self) -> &AlarmStore<P> {
        &self.store
    }

    /// Bring the scheduler in line with the store: new or changed alarms are
    /// (re)scheduled or cancelled, vanished ones are cancelled.
    pub fn sync(&mut self) -> AppResult<SyncReport> {
        let alarms = self.store.get_alarms()?;
        let mut report = SyncReport::default();

        let mut current = HashMap::with_capacity(alarms.len());
        for alarm in alarms {
            let changed = self.snapshot.get(&alarm.id) != Some(&alarm);
            let lost = alarm.is_enabled && !self.scheduler.is_alarm_scheduled(&alarm.id);

            if changed || lost {
                schedule_alarm_use_case(&self.scheduler, &alarm);
                if alarm.is_enabled {
                    report.scheduled += 1;
                } else {
                    report.cancelled += 1;
                }
            }
            current.insert(alarm.id.clone(), alarm);
        }

        for id in self.snapshot.keys() {
            if !current.contains_key(id) {
                self.scheduler.cancel_alarm(id);
                report.cancelled += 1;
            }
        }

        self.snapshot = current;
        if report != SyncReport::default() {
            tracing::info!(
                scheduled = report.scheduled,
                cancelled = report.cancelled,
                "alarms synchronized"
            );
        }
        Ok(report)
    }

    /// Ring a fired alarm, then disarm it (one-shot) or schedule its next occurrence.
    /// Returns whether it rang.
    pub fn handle_fired(&mut self, event: AlarmFired) -> AppResult<bool> {
        // the store is the source of truth, the fired copy may be stale
        let Some(alarm) = self.store.get_alarm_by_id(&event.alarm.id)? else {
            tracing::warn!(id = %event.alarm.id, "fired alarm no longer exists");
            self.snapshot.remove(&event.alarm.id);
            return Ok(false);
        };
        if !alarm.is_enabled {
            tracing::info!(id = %alarm.id, "fired alarm was disabled meanwhile");
            return Ok(false);
        }
        if alarm.time_in_minutes != event.alarm.time_in_minutes
            || alarm.repeat_days != event.alarm.repeat_days
        {
            // edited after it was scheduled: the timer was for the old time
            tracing::info!(id = %alarm.id, "fired alarm was rescheduled meanwhile");
            schedule_alarm_use_case(&self.scheduler, &alarm);
            self.snapshot.insert(alarm.id.clone(), alarm);
            return Ok(false);
        }

        self.start_ring(alarm.clone());

        if alarm.is_one_shot() {
            self.scheduler.cancel_alarm(&alarm.id);
            self.store.update_alarm_status(&alarm.id, false)?;
            let mut disarmed = alarm;
            disarmed.is_enabled = false;
            self.snapshot.insert(disarmed.id.clone(), disarmed);
        } else {
            schedule_alarm_use_case(&self.scheduler, &alarm);
            self.snapshot.insert(alarm.id.clone(), alarm);
        }
        Ok(true)
    }

    fn start_ring(&mut self, alarm: Alarm) {
        self.stop_ring();
        let ringer = Arc::clone(&self.ringer);
        self.current_ring = Some(tokio::spawn(async move {
            ringer.ring(&alarm, std::future::pending()).await
        }));
    }

    /// Stop the ringing alarm, if any. Returns whether one was ringing.
    pub fn stop_ring(&mut self) -> bool {
        match self.current_ring.take() {
            Some(h) if !h.is_finished() => {
                tracing::info!("stopping ringing alarm");
                h.abort();
                true
            }
            _ => false,
        }
    }

    pub fn is_ringing(&self) -> bool {
        self.current_ring.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Main loop. Enter on `input` stops the ringing alarm; `shutdown`
    /// completing cancels every timer and returns.
    pub async fn run<R, F>(
        mut self,
        mut input: Option<Lines<R>>,
        shutdown: F,
    ) -> AppResult<RunSummary>
    where
        R: AsyncBufRead + Unpin,
        F: Future<Output = ()>,
    {
        let report = self.sync()?;
        tracing::info!(scheduled = report.scheduled, "daemon started");
        let mut summary = RunSummary::default();

        let mut resync = tokio::time::interval(self.resync);
        resync.tick().await;
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                Some(event) = self.fired.recv() => {
                    match self.handle_fired(event) {
                        Ok(true) => summary.rung += 1,
                        Ok(false) => {}
                        Err(e) => tracing::error!(error = %e, "failed to handle fired alarm"),
                    }
                }
                _ = resync.tick() => {
                    if let Err(e) = self.sync() {
                        tracing::error!(error = %e, "resync failed, keeping current schedule");
                    }
                }
                line = next_line(&mut input) => {
                    match line {
                        Some(_) => {
                            if self.stop_ring() {
                                summary.stopped += 1;
                            }
                        }
                        None => input = None,
                    }
                }
                _ = &mut shutdown => {
                    tracing::info!("shutdown requested");
                    break;
                }
            }
        }

        self.stop_ring();
        self.scheduler.cancel_all_alarms();
        Ok(summary)
    }
}

/// Next line of input; pending forever once input is gone.
async fn next_line<R: AsyncBufRead + Unpin>(input: &mut Option<Lines<R>>) -> Option<String> {
    match input {
        Some(lines) => lines.next_line().await.ok().flatten(),
        None => std::future::pending().await,
    }
}
