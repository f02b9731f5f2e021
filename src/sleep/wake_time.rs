use crate::error::SleepError;
use chrono::{NaiveTime, Timelike};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// AM/PM designator for 12-hour input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meridiem {
    Am,
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meridiem::Am => write!(f, "AM"),
            Meridiem::Pm => write!(f, "PM"),
        }
    }
}

/// A time of day with no date attached, minute precision.
///
/// Only constructible through validating constructors, so every value that
/// reaches the duration engine is already in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WallClockTime {
    time: NaiveTime,
}

impl WallClockTime {
    /// Build from a 24-hour clock reading.
    pub fn new(hour: u32, minute: u32) -> Result<Self, SleepError> {
        if hour > 23 {
            return Err(SleepError::HourOutOfRange {
                hour,
                range: "0-23",
            });
        }
        if minute > 59 {
            return Err(SleepError::MinuteOutOfRange(minute));
        }
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or(SleepError::MinuteOutOfRange(minute))?;
        Ok(Self { time })
    }

    /// Build from a 12-hour clock reading (12 AM is midnight, 12 PM is noon).
    pub fn from_12h(hour: u32, minute: u32, meridiem: Meridiem) -> Result<Self, SleepError> {
        if !(1..=12).contains(&hour) {
            return Err(SleepError::HourOutOfRange {
                hour,
                range: "1-12",
            });
        }
        let hour24 = match (meridiem, hour) {
            (Meridiem::Am, 12) => 0,
            (Meridiem::Am, h) => h,
            (Meridiem::Pm, 12) => 12,
            (Meridiem::Pm, h) => h + 12,
        };
        Self::new(hour24, minute)
    }

    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    pub fn as_naive_time(&self) -> NaiveTime {
        self.time
    }

    /// Hour in 1-12 plus designator.
    pub fn to_12h(&self) -> (u32, Meridiem) {
        let meridiem = if self.hour() < 12 {
            Meridiem::Am
        } else {
            Meridiem::Pm
        };
        let hour = match self.hour() % 12 {
            0 => 12,
            h => h,
        };
        (hour, meridiem)
    }

    pub fn is_on_step(&self, step: u32) -> bool {
        step != 0 && self.minute() % step == 0
    }

    /// Reject minutes that the picker would never offer.
    pub fn ensure_on_step(self, step: u32) -> Result<Self, SleepError> {
        validate_step(step)?;
        if !self.is_on_step(step) {
            return Err(SleepError::OffStep {
                minute: self.minute(),
                step,
            });
        }
        Ok(self)
    }

    /// Every selectable wake time for a minute step, from 12:00 AM onwards.
    pub fn choices(step: u32) -> Result<Vec<Self>, SleepError> {
        validate_step(step)?;
        let mut out = Vec::with_capacity((24 * 60 / step) as usize);
        for hour in 0..24 {
            for minute in (0..60).step_by(step as usize) {
                out.push(Self::new(hour, minute)?);
            }
        }
        Ok(out)
    }
}

fn validate_step(step: u32) -> Result<(), SleepError> {
    if step == 0 || 60 % step != 0 {
        return Err(SleepError::InvalidStep(step));
    }
    Ok(())
}

// `u32::from_str` tolerates a leading '+'
fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

impl Default for WallClockTime {
    fn default() -> Self {
        Self {
            time: NaiveTime::default() + chrono::TimeDelta::hours(8),
        }
    }
}

impl fmt::Display for WallClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hour, meridiem) = self.to_12h();
        f.pad(&format!("{}:{:02} {}", hour, self.minute(), meridiem))
    }
}

impl Serialize for WallClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.time.format("%H:%M"))
    }
}

impl FromStr for WallClockTime {
    type Err = SleepError;

    /// Accepts `HH:MM`, `h:mm AM`, `h:mmpm`, `h am` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SleepError::InvalidFormat(s.to_string());
        let lowered = s.trim().to_ascii_lowercase();

        let (clock, meridiem) = if let Some(rest) = lowered.strip_suffix("am") {
            (rest.trim_end(), Some(Meridiem::Am))
        } else if let Some(rest) = lowered.strip_suffix("pm") {
            (rest.trim_end(), Some(Meridiem::Pm))
        } else {
            (lowered.as_str(), None)
        };

        let (hour_str, minute_str) = match clock.split_once(':') {
            Some((h, m)) => (h, Some(m)),
            None => (clock, None),
        };

        // A bare number is ambiguous without a designator
        if meridiem.is_none() && minute_str.is_none() {
            return Err(invalid());
        }
        if hour_str.is_empty() || hour_str.len() > 2 || !is_digits(hour_str) {
            return Err(invalid());
        }
        let hour: u32 = hour_str.parse().map_err(|_| invalid())?;

        let minute: u32 = match minute_str {
            Some(m) if m.len() == 2 && is_digits(m) => m.parse().map_err(|_| invalid())?,
            Some(_) => return Err(invalid()),
            None => 0,
        };

        match meridiem {
            Some(meridiem) => Self::from_12h(hour, minute, meridiem),
            None => Self::new(hour, minute),
        }
    }
}
