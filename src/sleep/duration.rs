use super::wake_time::WallClockTime;
use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;
use std::fmt;

/// Whole hours and leftover minutes between falling asleep and waking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SleepDuration {
    pub hours: u32,
    pub minutes: u32,
}

impl SleepDuration {
    pub fn from_total_minutes(total: u32) -> Self {
        Self {
            hours: total / 60,
            minutes: total % 60,
        }
    }

    pub fn total_minutes(&self) -> u32 {
        self.hours * 60 + self.minutes
    }
}

impl fmt::Display for SleepDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.minutes > 0 {
            write!(f, "{} hours and {} minutes", self.hours, self.minutes)
        } else {
            write!(f, "{} hours", self.hours)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvisoryCategory {
    Insufficient,
    Marginal,
    Healthy,
}

impl AdvisoryCategory {
    /// User-visible advice for this bucket.
    pub fn message(&self) -> &'static str {
        match self {
            AdvisoryCategory::Insufficient => "Fix your damn schedule!",
            AdvisoryCategory::Marginal => "Try sleeping earlier.",
            AdvisoryCategory::Healthy => "Healthy sleep!",
        }
    }
}

impl fmt::Display for AdvisoryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Anchor `wake` to the first occurrence strictly after `reference`.
///
/// The same-day candidate is used unless it is at or before `reference`, in
/// which case it moves to the next day. Equal instants roll over so the
/// result is never a zero-length night.
pub fn resolve_wake_instant(reference: NaiveDateTime, wake: WallClockTime) -> NaiveDateTime {
    let candidate = reference.date().and_time(wake.as_naive_time());
    if candidate <= reference {
        candidate + TimeDelta::days(1)
    } else {
        candidate
    }
}

/// Elapsed time floored to whole minutes. Sub-minute precision is dropped.
///
/// # Panics
///
/// If `resolved` is not strictly after `reference`. Callers get `resolved`
/// from [`resolve_wake_instant`], which guarantees the ordering.
pub fn compute_duration(reference: NaiveDateTime, resolved: NaiveDateTime) -> SleepDuration {
    assert!(
        resolved > reference,
        "wake instant {} must follow reference {}",
        resolved,
        reference
    );
    let minutes = resolved.signed_duration_since(reference).num_minutes();
    let total = u32::try_from(minutes).unwrap_or(u32::MAX);
    SleepDuration::from_total_minutes(total)
}

pub fn classify(hours: u32) -> AdvisoryCategory {
    match hours {
        0..=3 => AdvisoryCategory::Insufficient,
        4..=5 => AdvisoryCategory::Marginal,
        _ => AdvisoryCategory::Healthy,
    }
}
