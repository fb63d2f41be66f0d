//! wakeup library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Enable { .. } | Commands::Disable { .. } => {
            cli::commands::toggle::handle(&cli.command, cfg)
        }
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::Next => cli::commands::next::handle(cfg),
        Commands::Sounds => cli::commands::sounds::handle(cfg),
        Commands::Ring { .. } => cli::commands::ring::handle(&cli.command, cfg),
        Commands::Run => cli::commands::run::handle(cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1. parse CLI
    let cli = Cli::parse();

    // 2. load config once
    let mut cfg = Config::load()?;

    // 3. logging, now that the configured level is known
    logging::init_logging(&cfg.log_level, cli.verbose);

    // 4. command line override of the alarm store
    if let Some(custom) = &cli.store {
        cfg.store = custom.clone();
    }
    tracing::debug!(store = %cfg.store_path().display(), "using alarm store");

    // 5. hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
