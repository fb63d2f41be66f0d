/// ANSI color helper utilities for terminal output.
use ansi_term::Colour;

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";

/// "on" in green, "off" in grey.
pub fn colorize_state(enabled: bool) -> String {
    if enabled {
        Colour::Green.paint("on").to_string()
    } else {
        format!("{GREY}off{RESET}")
    }
}

/// Dim a whole cell when the alarm is disabled.
pub fn dim_if(value: &str, disabled: bool) -> String {
    if disabled {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn colorize_time(value: &str, enabled: bool) -> String {
    if enabled {
        Colour::Cyan.bold().paint(value).to_string()
    } else {
        dim_if(value, true)
    }
}

/// Banner color used when an alarm rings.
pub fn ringing(value: &str) -> String {
    Colour::Yellow.bold().blink().paint(value).to_string()
}
