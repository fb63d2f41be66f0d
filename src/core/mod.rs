pub mod alarms;
pub mod config;
pub mod daemon;
pub mod ringer;
pub mod scheduler;
pub mod trigger;
