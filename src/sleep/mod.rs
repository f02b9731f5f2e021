pub mod duration;
pub mod report;
pub mod wake_time;

pub use duration::{
    AdvisoryCategory, SleepDuration, classify, compute_duration, resolve_wake_instant,
};
pub use report::{SleepReport, SleepSession};
pub use wake_time::{Meridiem, WallClockTime};
