use super::calc::{parse_wake, select_wake};
use crate::config::Config;
use crate::sleep::{SleepSession, WallClockTime};
use crate::ticker::{Clock, SystemClock, Ticker};
use anyhow::{Context, Result};
use std::future::Future;
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// Live calculator: refreshes on every clock sample and accepts new wake
/// times from stdin until Ctrl-C.
pub fn watch(config: &Config, wake: Option<String>, interval_secs: Option<u64>) -> Result<()> {
    let wake = select_wake(config, wake.as_deref())?;
    let period = match interval_secs {
        Some(0) => anyhow::bail!("Refresh interval must be greater than 0"),
        Some(secs) => Duration::from_secs(secs),
        None => config.refresh.interval(),
    };

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(async {
        let input = BufReader::new(tokio::io::stdin());
        let mut out = std::io::stdout();
        run_loop(
            SystemClock,
            wake,
            period,
            config.wake.minute_step,
            input,
            &mut out,
            shutdown_signal(),
        )
        .await
    });

    // stdin reads park a blocking thread that would hold up a normal drop
    runtime.shutdown_background();
    result
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Could not listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Event loop behind `watch`.
///
/// Clock samples and wake-time lines are handled one at a time on this task,
/// so the session is never touched concurrently. Returns when `shutdown`
/// resolves or the ticker stops.
pub async fn run_loop<C, R, W, S>(
    clock: C,
    wake: WallClockTime,
    period: Duration,
    step: u32,
    input: R,
    out: &mut W,
    shutdown: S,
) -> Result<()>
where
    C: Clock,
    R: AsyncBufRead + Unpin,
    W: Write,
    S: Future<Output = ()>,
{
    let (ticker, mut samples) = Ticker::spawn(period, clock);
    let first = samples.recv().await.context("Clock stopped before first sample")?;
    let mut session = SleepSession::new(first, wake);

    writeln!(
        out,
        "Type a new wake time (e.g. 7:30 AM) and press Enter. Ctrl-C to quit.\n"
    )?;
    print_report(out, &session)?;

    let mut lines = input.lines();
    let mut input_open = true;
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            sample = samples.recv() => match sample {
                Some(now) => {
                    session.tick(now);
                    print_report(out, &session)?;
                }
                None => break,
            },
            line = lines.next_line(), if input_open => match line.context("Failed to read input")? {
                Some(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    match parse_wake(trimmed, step) {
                        Ok(wake) => {
                            session.set_wake(wake);
                            print_report(out, &session)?;
                        }
                        Err(e) => writeln!(out, "✗ {} (keeping {})", e, session.wake())?,
                    }
                }
                None => {
                    log::debug!("Input closed, continuing on clock samples only");
                    input_open = false;
                }
            },
            _ = &mut shutdown => {
                log::debug!("Shutdown requested");
                break;
            }
        }
    }

    // Release the timer before the view goes away
    drop(ticker);
    Ok(())
}

fn print_report<W: Write>(out: &mut W, session: &SleepSession) -> Result<()> {
    writeln!(out, "{}", session.report())?;
    writeln!(out, "{}", "-".repeat(40))?;
    out.flush()?;
    Ok(())
}
