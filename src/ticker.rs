//! Periodic re-sampling of the reference instant.
//!
//! A [`Ticker`] owns a background tokio task that reads a [`Clock`] once
//! immediately and then once per period, pushing each sample down a channel.
//! The consumer's event loop is the only place that mutates view state, so no
//! locking is involved. Dropping the ticker aborts the task.

use chrono::{Local, NaiveDateTime, SubsecRound};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

/// Source of "now" on the host's local wall clock.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> NaiveDateTime;
}

/// Host local time truncated to whole seconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local().trunc_subsecs(0)
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Must be called from within a tokio runtime.
    pub fn spawn<C: Clock>(period: Duration, clock: C) -> (Self, UnboundedReceiver<NaiveDateTime>) {
        let (tx, rx) = mpsc::unbounded_channel();

        let handle = tokio::spawn(async move {
            let mut interval = time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(clock.now()).is_err() {
                    log::debug!("Ticker receiver dropped, stopping");
                    break;
                }
            }
        });

        (Self { handle }, rx)
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
