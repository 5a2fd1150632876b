pub mod show_schedule;

pub use show_schedule::{is_upcoming, ScheduledShow, ShowSchedule};
