use super::duration::{
    AdvisoryCategory, SleepDuration, classify, compute_duration, resolve_wake_instant,
};
use super::wake_time::WallClockTime;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

/// Everything a view needs to render one moment of the calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SleepReport {
    pub now: NaiveDateTime,
    pub wake_time: WallClockTime,
    pub wake_at: NaiveDateTime,
    pub duration: SleepDuration,
    pub category: AdvisoryCategory,
    pub message: &'static str,
}

impl SleepReport {
    /// Run resolve, duration and classify for one pair of inputs.
    pub fn compute(now: NaiveDateTime, wake_time: WallClockTime) -> Self {
        let wake_at = resolve_wake_instant(now, wake_time);
        let duration = compute_duration(now, wake_at);
        let category = classify(duration.hours);
        Self {
            now,
            wake_time,
            wake_at,
            duration,
            category,
            message: category.message(),
        }
    }
}

impl fmt::Display for SleepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current time:  {}", self.now.format("%-I:%M %p"))?;
        writeln!(f, "Wake-up time:  {}", self.wake_time)?;
        writeln!(f, "You'll get {} of sleep", self.duration)?;
        write!(f, "{}", self.message)
    }
}

/// Current inputs of a calculator view.
///
/// The view owns this and mutates it from its event loop; reports are derived
/// on demand and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SleepSession {
    now: NaiveDateTime,
    wake: WallClockTime,
}

impl SleepSession {
    pub fn new(now: NaiveDateTime, wake: WallClockTime) -> Self {
        Self { now, wake }
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    pub fn wake(&self) -> WallClockTime {
        self.wake
    }

    /// Replace the reference instant with a fresh clock sample.
    pub fn tick(&mut self, now: NaiveDateTime) {
        log::debug!("Clock sample {}", now);
        self.now = now;
    }

    pub fn set_wake(&mut self, wake: WallClockTime) {
        log::debug!("Wake time changed {} -> {}", self.wake, wake);
        self.wake = wake;
    }

    pub fn report(&self) -> SleepReport {
        SleepReport::compute(self.now, self.wake)
    }
}
