use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if !(*print_config || *check || *migrate || *edit_config) {
            info(format!("Configuration file: {}", path.display()));
            info("Use --print, --check, --migrate or --edit");
            return Ok(());
        }

        if *print_config {
            ConfigLogic::print(cfg)?;
        }
        if *check {
            ConfigLogic::check(&path)?;
        }
        if *migrate {
            ConfigLogic::migrate(&path)?;
        }
        if *edit_config {
            ConfigLogic::edit(&path, editor)?;
        }
    }

    Ok(())
}
