use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for wakeup
#[derive(Parser)]
#[command(
    name = "wakeup",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small alarm clock: manage alarms from the command line and let `wakeup run` ring them",
    long_about = None
)]
pub struct Cli {
    /// Override the alarm store file (useful for tests or a second alarm set)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// More log output (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the alarm store
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Create a new alarm
    Add {
        /// Alarm time (HH:MM, 7:30, 0730, 7am, 7:30pm). Defaults to `default_time` from config
        time: Option<String>,

        #[arg(long, short, help = "Text shown when the alarm rings")]
        label: Option<String>,

        /// Repeat days.
        ///
        /// Either a comma separated list (mon,wed,fri) or one of:
        /// daily, weekdays, weekends, once
        #[arg(long, short, value_name = "DAYS")]
        repeat: Option<String>,

        #[arg(long, short, help = "Ringtone name (see `wakeup sounds`) or audio file path")]
        sound: Option<String>,

        #[arg(long = "no-vibrate", help = "Do not vibrate when ringing")]
        no_vibrate: bool,

        #[arg(long, help = "Create the alarm disabled")]
        disabled: bool,
    },

    /// Change an existing alarm
    Edit {
        /// Alarm id (or a unique prefix of it)
        id: String,

        #[arg(long, short, help = "New alarm time")]
        time: Option<String>,

        #[arg(long, short, help = "New label")]
        label: Option<String>,

        #[arg(long, short, value_name = "DAYS", help = "New repeat days")]
        repeat: Option<String>,

        #[arg(long, short, help = "New ringtone")]
        sound: Option<String>,

        #[arg(long, conflicts_with = "no_vibrate")]
        vibrate: bool,

        #[arg(long = "no-vibrate")]
        no_vibrate: bool,
    },

    /// Delete an alarm
    Del {
        /// Alarm id (or a unique prefix of it)
        id: String,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Enable an alarm
    Enable {
        /// Alarm id (or a unique prefix of it)
        id: String,
    },

    /// Disable an alarm (it is kept but never rings)
    Disable {
        /// Alarm id (or a unique prefix of it)
        id: String,
    },

    /// List alarms ordered by time
    List {
        #[arg(long, help = "Only enabled alarms")]
        enabled: bool,

        #[arg(long, help = "Print the stored alarms as JSON, in storage order")]
        json: bool,
    },

    /// Show every field of one alarm
    Show {
        /// Alarm id (or a unique prefix of it)
        id: String,
    },

    /// Show the next alarm that will ring
    Next,

    /// List the available ringtones
    Sounds,

    /// Ring an alarm right now (Enter stops it)
    Ring {
        /// Alarm id (or a unique prefix of it)
        id: String,
    },

    /// Run in the foreground and ring alarms when they are due
    Run,
}
