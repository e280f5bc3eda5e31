//! Share-Online API client.
//!
//! The upstream API answers with three different ad hoc text formats rather
//! than JSON, so each endpoint has a pure parser in [`protocol`] and a thin
//! async wrapper on [`ShareOnlineClient`] that performs the single request.
//!
//! # Operations
//!
//! - [`ShareOnlineClient::auth`] - account status (premium flag, traffic, session token)
//! - [`ShareOnlineClient::check_link`] / [`ShareOnlineClient::check_links`] - link status and metadata
//! - [`ShareOnlineClient::resolve_download_url`] - signed download URL for a file id
//! - [`ShareOnlineClient::download`] - the full auth, check, resolve and stream sequence
//!
//! # Example
//!
//! ```no_run
//! use shareonline_core::api::ShareOnlineClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ShareOnlineClient::new("user", "secret")?;
//! let info = client.auth().await?;
//! println!("premium: {}, traffic left: {}", info.premium, info.traffic_left);
//! # Ok(())
//! # }
//! ```

mod account;
mod client;
mod download;
mod error;
mod http_client;
mod linkcheck;
pub mod protocol;

pub use account::{AuthInfo, MAX_TRAFFIC_BYTES, PREMIUM_GROUPS, TRAFFIC_UNKNOWN};
pub use client::{Credentials, ShareOnlineClient};
pub use download::DownloadOutcome;
pub use error::{ProtocolError, ShareOnlineError};
pub use linkcheck::LinkStatus;
