use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::alarms::AlarmLogic;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::success;
use crate::utils::format_minutes_to_time;

/// `enable` / `disable`
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (id, enabled) = match cmd {
        Commands::Enable { id } => (id, true),
        Commands::Disable { id } => (id, false),
        _ => return Ok(()),
    };

    let store = store::open(cfg);
    let alarm = AlarmLogic::set_enabled(&store, id, enabled)?;

    success(format!(
        "Alarm {} at {} {}",
        alarm.short_id(),
        format_minutes_to_time(alarm.time_in_minutes),
        if enabled { "enabled" } else { "disabled" }
    ));
    Ok(())
}
