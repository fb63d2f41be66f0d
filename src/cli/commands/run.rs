use crate::config::Config;
use crate::core::daemon::Daemon;
use crate::core::ringer::Ringer;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::{info, success};
use std::io::IsTerminal;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

pub(crate) fn runtime() -> AppResult<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?)
}

/// Run the alarm daemon in the foreground until Ctrl-C.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = store::open(cfg);
    let daemon = Daemon::new(
        store,
        Ringer::from_config(cfg),
        Duration::from_secs(cfg.resync_secs),
    );

    info(format!(
        "wakeup is running (store: {}). Press Enter to stop a ringing alarm, Ctrl-C to quit.",
        cfg.store_path().display()
    ));

    let rt = runtime()?;
    let summary = rt.block_on(async {
        let input = std::io::stdin()
            .is_terminal()
            .then(|| BufReader::new(tokio::io::stdin()).lines());

        let shutdown = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!(error = %e, "cannot listen for Ctrl-C");
                std::future::pending::<()>().await;
            }
        };

        daemon.run(input, shutdown).await
    })?;

    info(format!(
        "{} alarm(s) rang, {} stopped from the keyboard.",
        summary.rung, summary.stopped
    ));
    success("All alarms cancelled, bye.");
    Ok(())
}
