use thiserror::Error;

/// Errors raised at the wake-time input boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SleepError {
    #[error("Invalid time format '{0}', expected HH:MM or h:mm AM/PM")]
    InvalidFormat(String),

    #[error("Hour {hour} is out of range ({range})")]
    HourOutOfRange { hour: u32, range: &'static str },

    #[error("Minute {0} is out of range (0-59)")]
    MinuteOutOfRange(u32),

    #[error("Minute {minute} is not a multiple of {step}")]
    OffStep { minute: u32, step: u32 },

    #[error("Minute step {0} must be a non-zero divisor of 60")]
    InvalidStep(u32),
}
