//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Check and download Share-Online links with a premium account.
///
/// Credentials are taken from flags, then `SHAREONLINE_USERNAME` /
/// `SHAREONLINE_PASSWORD`, then the config file.
#[derive(Parser, Debug)]
#[command(name = "shareonline")]
#[command(author, version, about)]
pub struct Cli {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a config file (defaults to $XDG_CONFIG_HOME/shareonline/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Account user name
    #[arg(long, env = "SHAREONLINE_USERNAME", global = true)]
    pub username: Option<String>,

    /// Account password
    #[arg(long, env = "SHAREONLINE_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show premium status, expiry and remaining traffic
    Account,

    /// Check whether links are online
    Check {
        /// Links or file ids to check
        #[arg(required = true)]
        links: Vec<String>,
    },

    /// Download a link into a directory
    Download(DownloadArgs),
}

/// Arguments for the `download` subcommand.
#[derive(Args, Debug, Clone)]
pub struct DownloadArgs {
    /// Link or file id to download
    pub link: String,

    /// Directory to save the file to (defaults to config `output_dir`, then `.`)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}
