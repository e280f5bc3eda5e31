//! Account command handler: show premium status and remaining traffic.

use anyhow::{Context, Result};
use shareonline_core::ShareOnlineClient;

use super::check::format_bytes;

pub async fn run_account_command(client: &ShareOnlineClient) -> Result<()> {
    let info = client
        .auth()
        .await
        .context("Failed to fetch account details")?;

    println!("Premium:      {}", if info.premium { "yes" } else { "no" });
    println!("Valid until:  {} (unix time)", info.valid_until);
    match info.remaining_traffic() {
        Some(left) => println!("Traffic left: {}", format_bytes(left)),
        None => println!("Traffic left: unknown"),
    }
    Ok(())
}
