use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use sleep_owl::OutputFormat;
use sleep_owl::commands;
use sleep_owl::config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "owl")]
#[command(about = "How much sleep will you get if you fall asleep right now?")]
#[command(version)]
struct Cli {
    #[arg(long, global = true, help = "Config file path")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate sleep until the wake time
    Calc {
        #[arg(long, help = "Wake time (e.g. 07:30, 7:30 AM, 11pm)")]
        wake: Option<String>,
        #[arg(long, help = "Pretend it is this local time (e.g. 2026-01-08T23:30)")]
        now: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Keep the calculation live, refreshing every interval
    Watch {
        #[arg(long, help = "Initial wake time")]
        wake: Option<String>,
        #[arg(long, help = "Seconds between clock samples")]
        interval_secs: Option<u64>,
    },
    /// List selectable wake times
    Times {
        #[arg(long, help = "Minute step (defaults to config wake.minute_step)")]
        step: Option<u32>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Inspect or create configuration
    Config(ConfigArgs),
}

#[derive(Args)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Get {
        key: String,
    },
    Init {
        #[arg(long, help = "Overwrite an existing config file")]
        force: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();
    // Loaded per command so `config init` works even when the file is broken
    let load = || config::load(config_path);

    match &cli.command {
        Commands::Calc { wake, now, format } => {
            commands::calc::calc(&load()?, wake.clone(), now.clone(), *format)?;
        }
        Commands::Watch {
            wake,
            interval_secs,
        } => {
            commands::watch::watch(&load()?, wake.clone(), *interval_secs)?;
        }
        Commands::Times { step, format } => {
            commands::times::times(&load()?, *step, *format)?;
        }
        Commands::Config(args) => match &args.action {
            ConfigAction::List => commands::config::list(&load()?)?,
            ConfigAction::Get { key } => commands::config::get(key, &load()?)?,
            ConfigAction::Init { force } => commands::config::init(config_path, *force)?,
        },
    }

    Ok(())
}
