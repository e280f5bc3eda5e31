//! CLI command handlers.

mod account;
mod check;
mod download;

use anyhow::{Context, Result, bail};
use shareonline_core::{ClientConfig, ShareOnlineClient};
use tracing::debug;

use crate::app_config::FileConfig;
use crate::cli::Cli;

pub use account::run_account_command;
pub use check::run_check_command;
pub use download::run_download_command;

/// Builds the hosting client from CLI flags, environment and file config.
///
/// Flags and environment variables (resolved by clap) take precedence over the file.
pub fn build_client(cli: &Cli, file_config: &FileConfig) -> Result<ShareOnlineClient> {
    let username = cli
        .username
        .clone()
        .or_else(|| file_config.username.clone());
    let password = cli
        .password
        .clone()
        .or_else(|| file_config.password.clone());
    let (Some(username), Some(password)) = (username, password) else {
        bail!(
            "Missing credentials.\n  Suggestion: pass --username/--password, set SHAREONLINE_USERNAME/SHAREONLINE_PASSWORD, or add them to the config file."
        );
    };

    let config = client_config(file_config);
    debug!(base_url = %config.api_base_url, %username, "building hosting client");
    ShareOnlineClient::with_config(username, password, config)
        .context("Failed to create hosting client")
}

fn client_config(file_config: &FileConfig) -> ClientConfig {
    let defaults = ClientConfig::default();
    let base = match file_config.api_base_url.as_deref() {
        Some(base_url) => defaults.with_base_url(base_url),
        None => defaults,
    };
    let connect = file_config
        .connect_timeout_secs
        .unwrap_or(base.connect_timeout_secs);
    let read = file_config
        .read_timeout_secs
        .unwrap_or(base.read_timeout_secs);
    base.with_timeouts(connect, read)
}
