use anyhow::Context;
use clap::Parser;
use mytodo::config::{Config, ThemeMode};
use mytodo::logging::init_tracing;
use std::path::PathBuf;

/// Terminal to-do list. Items live in memory and vanish on exit.
#[derive(Debug, Parser)]
#[command(name = "mytodo", version, about)]
struct Cli {
    /// Settings file (default: <config dir>/mytodo/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Initial colour theme, overriding the settings file
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,

    /// Log file, overriding the settings file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Items to start with
    #[arg(value_name = "ITEMS")]
    items: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let mut config =
        loaded.with_context(|| format!("loading settings from {}", config_path.display()))?;
    if let Some(theme) = cli.theme {
        config.ui.theme = theme;
    }
    if let Some(log_file) = cli.log_file {
        config.logging.file = Some(log_file);
    }

    let log_path = config.log_path();
    init_tracing(&config.logging.level, &log_path)
        .with_context(|| format!("opening log file {}", log_path.display()))?;
    tracing::info!(config = %config_path.display(), theme = config.ui.theme.label(), "Starting");

    mytodo::ui::run(&config, cli.items).context("terminal UI failed")?;
    Ok(())
}
