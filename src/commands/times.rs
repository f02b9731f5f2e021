use crate::OutputFormat;
use crate::config::Config;
use crate::sleep::WallClockTime;
use anyhow::{Context, Result};

/// List the wake times a picker offers, one row per hour.
pub fn times(config: &Config, step: Option<u32>, format: OutputFormat) -> Result<()> {
    let step = step.unwrap_or(config.wake.minute_step);
    let choices = WallClockTime::choices(step)?;

    match format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&choices).context("Failed to serialize times")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for row in choices.chunks((60 / step) as usize) {
                let cells: Vec<String> = row.iter().map(|t| format!("{:>8}", t)).collect();
                println!("{}", cells.join(" "));
            }
        }
    }

    Ok(())
}
