pub mod alarm;
pub mod day_of_week;

pub use alarm::Alarm;
pub use day_of_week::DayOfWeek;
