use crate::OutputFormat;
use crate::config::Config;
use crate::sleep::{SleepReport, SleepSession, WallClockTime};
use crate::ticker::{Clock, FixedClock, SystemClock};
use anyhow::{Context, Result};
use chrono::NaiveDateTime;

/// Pick the wake time from the command line, else the configured default.
///
/// Either way the minute must be one the picker offers.
pub fn select_wake(config: &Config, wake: Option<&str>) -> Result<WallClockTime> {
    match wake {
        Some(raw) => parse_wake(raw, config.wake.minute_step),
        None => config.wake.default_wake(),
    }
}

pub fn parse_wake(raw: &str, step: u32) -> Result<WallClockTime> {
    let wake: WallClockTime = raw.parse()?;
    Ok(wake.ensure_on_step(step)?)
}

/// Parse a `--now` override in local wall-clock time.
pub fn parse_now(raw: &str) -> Result<NaiveDateTime> {
    let formats = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];

    for format in &formats {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw.trim(), format) {
            return Ok(parsed);
        }
    }

    anyhow::bail!("Invalid time '{}', expected YYYY-MM-DDTHH:MM[:SS]", raw)
}

/// System clock, or a frozen one when `--now` is given.
pub fn clock_for(now: Option<&str>) -> Result<Box<dyn Clock>> {
    match now {
        Some(raw) => Ok(Box::new(FixedClock(parse_now(raw)?))),
        None => Ok(Box::new(SystemClock)),
    }
}

pub fn render(report: &SleepReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("Failed to serialize report")
        }
    }
}

/// One-shot sleep calculation.
pub fn calc(
    config: &Config,
    wake: Option<String>,
    now: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let wake = select_wake(config, wake.as_deref())?;
    let clock = clock_for(now.as_deref())?;

    let report = SleepSession::new(clock.now(), wake).report();
    log::info!(
        "Resolved wake {} -> {} ({:?})",
        wake,
        report.wake_at,
        report.category
    );

    println!("{}", render(&report, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_now_formats() {
        let expected = NaiveDateTime::parse_from_str("2026-01-08 23:30:00", "%Y-%m-%d %H:%M:%S")
            .unwrap();
        assert_eq!(parse_now("2026-01-08T23:30:00").unwrap(), expected);
        assert_eq!(parse_now("2026-01-08T23:30").unwrap(), expected);
        assert_eq!(parse_now("2026-01-08 23:30").unwrap(), expected);
        assert!(parse_now("23:30").is_err());
    }

    #[test]
    fn test_clock_for_now_override_is_frozen() {
        let clock = clock_for(Some("2026-01-08T23:30")).unwrap();
        let expected = parse_now("2026-01-08T23:30").unwrap();
        assert_eq!(clock.now(), expected);
        assert_eq!(clock.now(), expected);

        assert!(clock_for(Some("tonight")).is_err());
        assert!(clock_for(None).is_ok());
    }

    #[test]
    fn test_select_wake_falls_back_to_config() {
        let config = Config::default();
        assert_eq!(
            select_wake(&config, None).unwrap(),
            WallClockTime::default()
        );
    }

    #[test]
    fn test_select_wake_rejects_off_step_minutes() {
        let config = Config::default();
        let err = select_wake(&config, Some("7:32 AM")).unwrap_err();
        assert!(err.to_string().contains("not a multiple of 5"));
    }
}
