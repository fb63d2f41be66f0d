use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::alarms::AlarmStore;
use crate::store::prefs::FilePreferences;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty alarm store
pub fn handle(cli: &Cli) -> AppResult<()> {
    let store_path = Config::init_all(cli.store.clone(), cli.test)?;

    println!("⚙️  Initializing wakeup…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Alarm store : {}", store_path.display());

    let store = AlarmStore::new(FilePreferences::new(&store_path));
    let count = store.get_alarms()?.len();
    tracing::info!(store = %store_path.display(), count, "store initialized");

    println!("🎉 wakeup initialization completed! ({} alarm(s) stored)", count);
    Ok(())
}
