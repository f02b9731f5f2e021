pub mod commands;
pub mod config;
pub mod error;
pub mod platform;
pub mod sleep;
pub mod ticker;

use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, ValueEnum, Debug, Default, Serialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
