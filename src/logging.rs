//! Logging system initialization
//!
//! Diagnostics go through `tracing` and are written to stderr, so stdout
//! only carries command output.

use tracing_subscriber::EnvFilter;

/// Filter directive for the given verbosity.
///
/// `RUST_LOG` wins when set; otherwise `-v` / `-vv` raise the configured level.
pub fn filter_directive(config_level: &str, verbose: u8) -> String {
    match verbose {
        0 => config_level.to_string(),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    }
}

/// Initialize logging once, at startup, after the configuration is loaded.
pub fn init_logging(config_level: &str, verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(config_level, verbose)));

    // a second init (tests calling run() twice) is harmless
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_level(true)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_overrides_config_level() {
        assert_eq!(filter_directive("warn", 0), "warn");
        assert_eq!(filter_directive("warn", 1), "info");
        assert_eq!(filter_directive("error", 3), "debug");
    }
}
