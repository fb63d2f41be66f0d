use crate::config::Config;
use crate::core::trigger::next_enabled;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::info;
use crate::utils::formatting::format_countdown;
use chrono::Local;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = store::open(cfg);
    let alarms = store.get_alarms()?;
    let now = Local::now().naive_local();

    match next_enabled(&alarms, now) {
        Some((alarm, at)) => {
            println!(
                "⏰ {} \"{}\" {} ({})",
                at.format("%a %H:%M"),
                alarm.display_label(),
                format_countdown(at - now),
                alarm.short_id()
            );
        }
        None => info("No enabled alarms."),
    }
    Ok(())
}
