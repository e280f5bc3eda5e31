//! Check command handler: print the status of one or more links.

use anyhow::{Context, Result};
use shareonline_core::{LinkStatus, ShareOnlineClient};
use tracing::warn;

pub async fn run_check_command(client: &ShareOnlineClient, links: &[String]) -> Result<()> {
    let statuses = client
        .check_links(links)
        .await
        .context("Failed to check links")?;

    if statuses.len() < links.len() {
        warn!(
            requested = links.len(),
            recognized = statuses.len(),
            "some links were not recognized by the link checker"
        );
    }
    for status in &statuses {
        println!("{}", render_status_row(status));
    }
    Ok(())
}

fn render_status_row(status: &LinkStatus) -> String {
    if !status.online {
        return "offline".to_string();
    }
    format!(
        "online  {}  {}  {}  md5={}",
        status.file_id.as_deref().unwrap_or("-"),
        status.name.as_deref().unwrap_or("-"),
        status.size.map_or_else(|| "-".to_string(), format_bytes),
        status.md5.as_deref().unwrap_or("-"),
    )
}

/// Formats a byte count with a binary unit suffix.
pub(crate) fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
    let mut unit = 0;
    let mut whole = bytes;
    let mut remainder = 0;
    while whole >= 1024 && unit < UNITS.len() - 1 {
        remainder = whole % 1024;
        whole /= 1024;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{whole}.{:02} {}", remainder * 100 / 1024, UNITS[unit])
    }
}
