use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::alarms::{AlarmChanges, AlarmLogic};
use crate::errors::AppResult;
use crate::models::Alarm;
use crate::models::day_of_week::parse_repeat_days;
use crate::store;
use crate::ui::messages::{success, warning};
use crate::utils::path::existing_file;
use crate::utils::{format_minutes_to_time, format_repeat_days};
use crate::utils::time::parse_alarm_time;

/// Warn (without failing) about a sound the ringer will not find.
pub(crate) fn check_sound(cfg: &Config, sound: &str) {
    if !cfg.sounds.contains_key(sound) && existing_file(sound).is_none() {
        warning(format!(
            "Unknown sound '{}', the default tone will be used (see `wakeup sounds`)",
            sound
        ));
    }
}

/// Create a new alarm.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        time,
        label,
        repeat,
        sound,
        no_vibrate,
        disabled,
    } = cmd
    {
        //
        // 1. Time (default from config)
        //
        let minutes = match time {
            Some(t) => parse_alarm_time(t)?,
            None => cfg.default_minutes()?,
        };

        //
        // 2. Repeat days (default: once)
        //
        let repeat_days = repeat.as_deref().map(parse_repeat_days).transpose()?;

        //
        // 3. Sound
        //
        let sound_uri = sound.clone().unwrap_or_else(|| cfg.default_sound.clone());
        check_sound(cfg, &sound_uri);

        let changes = AlarmChanges {
            time_in_minutes: Some(minutes),
            label: label.clone(),
            repeat_days,
            sound_uri: Some(sound_uri),
            vibrate: Some(cfg.vibrate && !*no_vibrate),
            enabled: Some(!*disabled),
        };

        //
        // 4. Save
        //
        let store = store::open(cfg);
        let alarm = AlarmLogic::add(&store, Alarm::new(minutes, ""), changes)?;

        success(format!(
            "Alarm {} set for {} ({}){}",
            alarm.short_id(),
            format_minutes_to_time(alarm.time_in_minutes),
            format_repeat_days(&alarm.repeat_days),
            if alarm.is_enabled { "" } else { " [disabled]" }
        ));
        println!("id: {}", alarm.id);
    }

    Ok(())
}
