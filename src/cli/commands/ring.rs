use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ringer::{RingOutcome, Ringer};
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::info;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Ring an alarm now, in the foreground.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Ring { id } = cmd {
        let store = store::open(cfg);
        let alarm = store.resolve_id(id)?;
        let ringer = Ringer::from_config(cfg);

        let rt = super::run::runtime()?;
        let outcome = rt.block_on(async {
            let stop = async {
                let mut lines = BufReader::new(tokio::io::stdin()).lines();
                tokio::select! {
                    line = lines.next_line() => {
                        // EOF on stdin (non interactive use) must not stop the ring at once
                        if !matches!(line, Ok(Some(_))) {
                            std::future::pending::<()>().await;
                        }
                    }
                    _ = tokio::signal::ctrl_c() => {}
                }
            };
            ringer.ring(&alarm, stop).await
        });

        match outcome {
            RingOutcome::Stopped => info("Alarm stopped."),
            RingOutcome::TimedOut => info(format!(
                "Alarm stopped after {} seconds.",
                cfg.ring_timeout_secs
            )),
        }
    }
    Ok(())
}
