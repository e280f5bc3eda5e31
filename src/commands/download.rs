//! Download command handler: stream a link into the output directory.

use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use shareonline_core::ShareOnlineClient;
use tokio::fs::File;
use tracing::{debug, info, warn};

use super::check::format_bytes;

/// Downloads `link` into `output_dir`, named after the remote file.
///
/// The body is written to a `.part` file first and renamed once the stream
/// completes; the partial file is removed on failure.
pub async fn run_download_command(
    client: &ShareOnlineClient,
    link: &str,
    output_dir: &Path,
) -> Result<PathBuf> {
    tokio::fs::create_dir_all(output_dir)
        .await
        .with_context(|| format!("Failed to create output directory '{}'", output_dir.display()))?;

    let partial_path = output_dir.join(format!("{}.part", sanitize_filename(link)));
    let mut file = File::create(&partial_path)
        .await
        .with_context(|| format!("Failed to create '{}'", partial_path.display()))?;

    let result = client.download(link, &mut file).await;
    drop(file);

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(error) => {
            remove_partial_file(&partial_path).await;
            return Err(error).with_context(|| format!("Failed to download '{link}'"));
        }
    };

    let remote_name = outcome.status.name.as_deref().unwrap_or(link);
    let final_path = resolve_unique_path(output_dir, remote_name);
    if let Err(error) = tokio::fs::rename(&partial_path, &final_path).await {
        remove_partial_file(&partial_path).await;
        return Err(error)
            .with_context(|| format!("Failed to move download to '{}'", final_path.display()));
    }

    info!(
        path = %final_path.display(),
        bytes = outcome.bytes_written,
        "download saved"
    );
    println!(
        "Saved {} ({})",
        final_path.display(),
        format_bytes(outcome.bytes_written)
    );
    Ok(final_path)
}

async fn remove_partial_file(path: &Path) {
    debug!(path = %path.display(), "cleaning up partial file after error");
    if let Err(error) = tokio::fs::remove_file(path).await
        && error.kind() != std::io::ErrorKind::NotFound
    {
        warn!(path = %path.display(), error = %error, "failed to remove partial file");
    }
}

/// Replaces characters that are unsafe in file names.
fn sanitize_filename(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.is_empty() {
        return "_".to_string();
    }

    if is_safe_filename_segment(&sanitized) {
        sanitized
    } else {
        sanitized
            .chars()
            .map(|c| if c == '.' { '_' } else { c })
            .collect()
    }
}

fn is_safe_filename_segment(name: &str) -> bool {
    !Path::new(name).components().any(|component| {
        matches!(
            component,
            Component::CurDir | Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    })
}

/// Resolves a unique file path, adding a numeric suffix if the file exists.
fn resolve_unique_path(dir: &Path, filename: &str) -> PathBuf {
    let filename = {
        let sanitized = sanitize_filename(filename);
        if sanitized.trim_matches('_').is_empty() {
            "download.bin".to_string()
        } else {
            sanitized
        }
    };
    let base_path = dir.join(&filename);
    if !base_path.exists() {
        return base_path;
    }

    let (stem, ext) = match filename.rfind('.') {
        Some(pos) if pos > 0 => (&filename[..pos], &filename[pos..]),
        _ => (filename.as_str(), ""),
    };
    (1..)
        .map(|i| dir.join(format!("{stem}_{i}{ext}")))
        .find(|candidate| !candidate.exists())
        .unwrap_or(base_path)
}
