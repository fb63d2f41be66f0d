pub mod colors;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::format_repeat_days;
pub use time::format_minutes_to_time;
