//! Reelpick CLI - Command-line interface
//!
//! Runs the web UI or performs one search, pick and export from the shell.

mod commands;

use clap::Parser;
use reelpick_core::ReelpickConfig;
use reelpick_core::tracing_setup::{CliLogLevel, init_tracing};

#[derive(Parser)]
#[command(name = "reelpick")]
#[command(about = "Look up films, pick some, export them")]
#[command(version)]
struct Cli {
    /// Console log level (RUST_LOG overrides it)
    #[arg(long, global = true, value_enum, default_value_t = CliLogLevel::Info)]
    log_level: CliLogLevel,

    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ReelpickConfig::from_env()?;

    init_tracing(
        cli.log_level.as_tracing_level(),
        Some(config.export.logs_dir.as_path()),
    )
    .map_err(|e| anyhow::anyhow!("Tracing setup failed: {e}"))?;

    commands::handle_command(cli.command, config).await
}
