//! CLI entry point for the Share-Online client.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

mod app_config;
mod cli;
mod commands;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(command = ?cli.command, "CLI arguments parsed");

    let file_config = app_config::load_config(cli.config.as_deref())?;
    let client = commands::build_client(&cli, &file_config)?;

    match &cli.command {
        Command::Account => commands::run_account_command(&client).await,
        Command::Check { links } => commands::run_check_command(&client, links).await,
        Command::Download(args) => {
            let output_dir = args
                .output_dir
                .clone()
                .or_else(|| file_config.output_dir.clone())
                .unwrap_or_else(|| PathBuf::from("."));
            commands::run_download_command(&client, &args.link, &output_dir)
                .await
                .map(|_| ())
        }
    }
}
