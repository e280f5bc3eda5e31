//! HTTP client construction policy.
//!
//! Centralizes timeout, user-agent, compression and proxy defaults for all
//! requests made by the hosting client.

use std::time::Duration;

use reqwest::{Client, ClientBuilder, Proxy};
use tracing::debug;

use crate::config::ClientConfig;
use crate::user_agent;

use super::error::ShareOnlineError;

/// Builds the reqwest client used for API calls and file streams.
///
/// The read timeout bounds each individual read, so a file stream may run for
/// as long as data keeps arriving. API calls add their own total deadline in
/// `ShareOnlineClient::get_text`.
///
/// Proxies from `HTTPS_PROXY` / `HTTP_PROXY` / `ALL_PROXY` are honored; when
/// none is set, reqwest's own system proxy detection applies.
///
/// # Errors
///
/// Returns [`ShareOnlineError::ClientBuild`] when reqwest rejects the configuration.
pub(crate) fn build_http_client(config: &ClientConfig) -> Result<Client, ShareOnlineError> {
    debug!(
        connect_timeout_secs = config.connect_timeout_secs,
        read_timeout_secs = config.read_timeout_secs,
        "building HTTP client"
    );
    apply_env_proxy(base_client_builder(config))
        .build()
        .map_err(|source| ShareOnlineError::ClientBuild { source })
}

fn base_client_builder(config: &ClientConfig) -> ClientBuilder {
    Client::builder()
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .read_timeout(Duration::from_secs(config.read_timeout_secs))
        .gzip(true)
        .user_agent(user_agent::default_user_agent())
}

fn apply_env_proxy(mut builder: ClientBuilder) -> ClientBuilder {
    if let Some(proxy) = env_proxy_for_scheme("https")
        && let Ok(resolved) = Proxy::https(&proxy)
    {
        builder = builder.proxy(resolved);
    }
    if let Some(proxy) = env_proxy_for_scheme("http")
        && let Ok(resolved) = Proxy::http(&proxy)
    {
        builder = builder.proxy(resolved);
    }
    builder
}

fn env_proxy_for_scheme(scheme: &str) -> Option<String> {
    match scheme {
        "https" => find_first_proxy_var(&["HTTPS_PROXY", "https_proxy", "ALL_PROXY", "all_proxy"]),
        "http" => find_first_proxy_var(&["HTTP_PROXY", "http_proxy", "ALL_PROXY", "all_proxy"]),
        _ => None,
    }
}

fn find_first_proxy_var(names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| {
        std::env::var(name)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    })
}
