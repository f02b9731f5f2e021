use crate::sleep::WallClockTime;
use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub wake: WakeConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WakeConfig {
    /// Wake time used when none is given on the command line
    #[serde(default = "default_wake_time")]
    pub default: String,
    /// Granularity of the selectable minutes
    #[serde(default = "default_minute_step")]
    pub minute_step: u32,
}

fn default_wake_time() -> String {
    "08:00".to_string()
}

fn default_minute_step() -> u32 {
    5
}

impl Default for WakeConfig {
    fn default() -> Self {
        Self {
            default: default_wake_time(),
            minute_step: default_minute_step(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RefreshConfig {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

fn default_interval_secs() -> u64 {
    60
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

impl WakeConfig {
    /// Validate wake configuration
    pub fn validate(&self) -> Result<()> {
        let step = self.minute_step;
        if step == 0 || 60 % step != 0 {
            anyhow::bail!("Minute step {} must be a non-zero divisor of 60", step);
        }

        self.default_wake()?;
        Ok(())
    }

    /// Parse the configured default, checked against the minute step.
    pub fn default_wake(&self) -> Result<WallClockTime> {
        let wake: WallClockTime = self
            .default
            .parse()
            .with_context(|| format!("Invalid default wake time '{}'", self.default))?;
        wake.ensure_on_step(self.minute_step)
            .context("Default wake time is not selectable")
    }
}

impl RefreshConfig {
    /// Validate refresh configuration
    pub fn validate(&self) -> Result<()> {
        if self.interval_secs == 0 {
            anyhow::bail!("Refresh interval must be greater than 0");
        }

        if self.interval_secs > 60 {
            log::warn!(
                "Refresh interval {}s is longer than a minute; the display may lag the clock",
                self.interval_secs
            );
        }

        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Config {
    /// Validate all configuration
    pub fn validate(&self) -> Result<()> {
        self.wake.validate()?;
        self.refresh.validate()?;
        Ok(())
    }
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let loader = ConfigBuilder::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .build()
        .context("Failed to build config loader")?;

    loader
        .try_deserialize()
        .context("Failed to parse config file")
}

/// Load and validate config, falling back to defaults when no file exists.
pub fn load(path_override: Option<&Path>) -> Result<Config> {
    let config_path = crate::platform::config_path(path_override)?;

    if !config_path.exists() {
        log::warn!("No config at {}, using defaults", config_path.display());
        return Ok(Config::default());
    }

    log::debug!("Loading config from {}", config_path.display());
    let config = load_from_path(&config_path)?;
    config.validate()?;
    Ok(config)
}

pub fn save_to_path<P: AsRef<Path>>(config: &Config, path: P) -> Result<()> {
    let toml_string = toml::to_string_pretty(config).context("Failed to serialize config")?;

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }
    std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

    Ok(())
}
