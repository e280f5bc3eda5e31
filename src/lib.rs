//! Share-Online Client Library
//!
//! This library talks to the Share-Online file hosting API: it logs in with
//! account credentials, checks whether hosted links are still online, and
//! resolves premium download URLs that are streamed into a caller-supplied sink.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`api`] - The hosting client, its text protocol parsers and error types
//! - [`config`] - Endpoint and timeout configuration for the client
//!
//! # Example
//!
//! ```no_run
//! use shareonline_core::ShareOnlineClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ShareOnlineClient::new("user", "secret")?;
//! let mut sink = Vec::new();
//! let outcome = client.download("https://www.share-online.biz/dl/ABC123", &mut sink).await?;
//! println!("downloaded {} bytes", outcome.bytes_written);
//! # Ok(())
//! # }
//! ```

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod config;
mod user_agent;

// Re-export commonly used types
pub use api::{
    AuthInfo, Credentials, DownloadOutcome, LinkStatus, MAX_TRAFFIC_BYTES, PREMIUM_GROUPS,
    ProtocolError, ShareOnlineClient, ShareOnlineError, TRAFFIC_UNKNOWN,
};
pub use config::ClientConfig;
