use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::trigger::next_trigger;
use crate::errors::AppResult;
use crate::models::Alarm;
use crate::store;
use crate::ui::messages::header;
use crate::utils::formatting::{format_countdown, yes_no};
use crate::utils::{format_minutes_to_time, format_repeat_days};
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let store = store::open(cfg);
        let alarm = store.resolve_id(id)?;
        print_details(&alarm);
    }
    Ok(())
}

pub fn print_details(alarm: &Alarm) {
    header(format!("Alarm {}", alarm.short_id()));
    println!("id       : {}", alarm.id);
    println!("time     : {}", format_minutes_to_time(alarm.time_in_minutes));
    println!("label    : {}", alarm.label);
    println!("repeat   : {}", format_repeat_days(&alarm.repeat_days));
    println!("sound    : {}", alarm.sound_uri);
    println!("vibrate  : {}", yes_no(alarm.vibrate));
    println!("enabled  : {}", yes_no(alarm.is_enabled));

    if alarm.is_enabled {
        let now = Local::now().naive_local();
        let at = next_trigger(alarm, now);
        println!(
            "next     : {} ({})",
            at.format("%a %Y-%m-%d %H:%M"),
            format_countdown(at - now)
        );
    }
}
