use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::alarms::AlarmLogic;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::{info, success, warning};
use crate::utils::format_minutes_to_time;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, force } = cmd {
        let store = store::open(cfg);

        // resolve first so the prompt names the right alarm
        let alarm = store.resolve_id(id)?;

        if !*force {
            let prompt = format!(
                "Delete alarm {} at {} \"{}\"?",
                alarm.short_id(),
                format_minutes_to_time(alarm.time_in_minutes),
                alarm.display_label()
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let deleted = AlarmLogic::delete(&store, &alarm.id)?;
        success(format!("Deleted alarm {}", deleted.short_id()));
    }

    Ok(())
}
