use crate::cli::commands::add::check_sound;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::alarms::{AlarmChanges, AlarmLogic};
use crate::errors::AppResult;
use crate::models::day_of_week::parse_repeat_days;
use crate::store;
use crate::ui::messages::{info, success};
use crate::utils::time::parse_alarm_time;
use crate::utils::{format_minutes_to_time, format_repeat_days};

/// Change fields of an existing alarm.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        time,
        label,
        repeat,
        sound,
        vibrate,
        no_vibrate,
    } = cmd
    {
        if let Some(s) = sound {
            check_sound(cfg, s);
        }

        let changes = AlarmChanges {
            time_in_minutes: time.as_deref().map(parse_alarm_time).transpose()?,
            label: label.clone(),
            repeat_days: repeat.as_deref().map(parse_repeat_days).transpose()?,
            sound_uri: sound.clone(),
            vibrate: match (*vibrate, *no_vibrate) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
            enabled: None,
        };

        if changes.is_empty() {
            info("Nothing to change (use --time, --label, --repeat, --sound, --vibrate/--no-vibrate)");
            return Ok(());
        }

        let store = store::open(cfg);
        let alarm = AlarmLogic::edit(&store, id, changes)?;

        success(format!(
            "Alarm {} updated: {} ({})",
            alarm.short_id(),
            format_minutes_to_time(alarm.time_in_minutes),
            format_repeat_days(&alarm.repeat_days)
        ));
    }

    Ok(())
}
