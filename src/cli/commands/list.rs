use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::alarms::AlarmLogic;
use crate::errors::AppResult;
use crate::models::Alarm;
use crate::store;
use crate::store::entity::AlarmEntity;
use crate::utils::colors::{colorize_state, colorize_time, dim_if};
use crate::utils::formatting::yes_no;
use crate::utils::table::Table;
use crate::utils::{format_minutes_to_time, format_repeat_days};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { enabled, json } = cmd {
        let store = store::open(cfg);

        // JSON mirrors the store: insertion order
        if *json {
            let entities: Vec<AlarmEntity> = store
                .get_alarms()?
                .iter()
                .filter(|a| !*enabled || a.is_enabled)
                .map(AlarmEntity::from)
                .collect();
            println!("{}", serde_json::to_string_pretty(&entities)?);
            return Ok(());
        }

        let alarms: Vec<Alarm> = AlarmLogic::sorted(&store)?
            .into_iter()
            .filter(|a| !*enabled || a.is_enabled)
            .collect();

        if alarms.is_empty() {
            println!("No alarms. Create one with `wakeup add 07:30`.");
            return Ok(());
        }

        print!("{}", render_table(&alarms));
    }
    Ok(())
}

fn render_table(alarms: &[Alarm]) -> String {
    let mut table = Table::new(&["ID", "TIME", "LABEL", "REPEAT", "SOUND", "VIBRATE", "STATE"]);

    for a in alarms {
        let off = !a.is_enabled;
        table.add_row(vec![
            dim_if(a.short_id(), off),
            colorize_time(&format_minutes_to_time(a.time_in_minutes), a.is_enabled),
            dim_if(&a.label, off),
            dim_if(&format_repeat_days(&a.repeat_days), off),
            dim_if(&a.sound_uri, off),
            dim_if(yes_no(a.vibrate), off),
            colorize_state(a.is_enabled),
        ]);
    }

    table.render()
}
