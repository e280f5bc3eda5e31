//! The hosting client and its request plumbing.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use crate::config::ClientConfig;

use super::error::ShareOnlineError;
use super::http_client::build_http_client;

/// Account credentials, fixed for the lifetime of a client.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Creates a credential pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Account user name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Account password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Client for the Share-Online API.
///
/// Holds the credentials and a reusable HTTP client. Every operation is a
/// short sequence of awaited requests with no shared mutable state, so a
/// client can be cloned and used from several tasks at once.
///
/// # Example
///
/// ```no_run
/// use shareonline_core::{ClientConfig, ShareOnlineClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ClientConfig::default().with_timeouts(10, 600);
/// let client = ShareOnlineClient::with_config("user", "secret", config)?;
/// let statuses = client.check_links(&["ABC123", "DEF456"]).await?;
/// for status in statuses {
///     println!("{:?} online={}", status.name, status.online);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ShareOnlineClient {
    client: Client,
    config: ClientConfig,
    credentials: Credentials,
}

impl ShareOnlineClient {
    /// Creates a client against the public API with default timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ShareOnlineError::ClientBuild`] if HTTP client construction fails.
    #[instrument(skip_all)]
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ShareOnlineError> {
        Self::with_config(username, password, ClientConfig::default())
    }

    /// Creates a client with a custom API base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ShareOnlineError::ClientBuild`] if HTTP client construction fails.
    #[instrument(skip_all, fields(base_url))]
    pub fn with_base_url(
        username: impl Into<String>,
        password: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, ShareOnlineError> {
        Self::with_config(
            username,
            password,
            ClientConfig::default().with_base_url(base_url),
        )
    }

    /// Creates a client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ShareOnlineError::ClientBuild`] if HTTP client construction fails.
    pub fn with_config(
        username: impl Into<String>,
        password: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self, ShareOnlineError> {
        let client = build_http_client(&config)?;
        Ok(Self {
            client,
            config,
            credentials: Credentials::new(username, password),
        })
    }

    /// The credentials this client logs in with.
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// The configuration this client was built from.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Builds an API endpoint URL with URL-encoded query parameters.
    pub(crate) fn endpoint_url(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Url, ShareOnlineError> {
        let endpoint = self.config.endpoint(path);
        Url::parse_with_params(&endpoint, params)
            .map_err(|_| ShareOnlineError::invalid_url(&endpoint))
    }

    /// Sends a GET request and rejects non-2xx responses.
    ///
    /// `cookie` becomes the `Cookie` header. `deadline` caps the whole request
    /// on top of the client's idle read timeout; file streams pass `None`.
    #[instrument(level = "debug", skip_all, fields(url = %url.path()))]
    pub(crate) async fn send_get(
        &self,
        url: Url,
        cookie: Option<&str>,
        deadline: Option<Duration>,
    ) -> Result<reqwest::Response, ShareOnlineError> {
        let url_text = url.to_string();
        let mut request = self.client.get(url);
        if let Some(cookie) = cookie {
            request = request.header(reqwest::header::COOKIE, cookie);
        }
        if let Some(deadline) = deadline {
            request = request.timeout(deadline);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ShareOnlineError::network(&url_text, e))?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "request returned error status");
            return Err(ShareOnlineError::http_status(&url_text, status.as_u16()));
        }
        Ok(response)
    }

    /// Sends an API GET request and returns the body as text.
    ///
    /// API responses are small, so the read timeout also bounds the whole call.
    pub(crate) async fn get_text(&self, url: Url) -> Result<String, ShareOnlineError> {
        let url_text = url.to_string();
        let deadline = Duration::from_secs(self.config.read_timeout_secs);
        let response = self.send_get(url, None, Some(deadline)).await?;
        response
            .text()
            .await
            .map_err(|e| ShareOnlineError::network(&url_text, e))
    }
}

impl std::fmt::Debug for ShareOnlineClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShareOnlineClient")
            .field("config", &self.config)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_password() {
        let credentials = Credentials::new("bob", "hunter2");
        let rendered = format!("{credentials:?}");
        assert!(rendered.contains("bob"));
        assert!(!rendered.contains("hunter2"), "Password leaked: {rendered}");
    }

    #[test]
    fn test_client_debug_redacts_password() {
        let client = ShareOnlineClient::new("bob", "hunter2").unwrap();
        let rendered = format!("{client:?}");
        assert!(rendered.contains("api.share-online.biz"));
        assert!(!rendered.contains("hunter2"), "Password leaked: {rendered}");
    }

    #[test]
    fn test_endpoint_url_encodes_parameters() {
        let client =
            ShareOnlineClient::with_base_url("bob", "p&ss word", "http://127.0.0.1:9").unwrap();
        let url = client
            .endpoint_url(
                "cgi-bin",
                &[("username", "bob"), ("password", "p&ss word")],
            )
            .unwrap();
        assert_eq!(url.path(), "/cgi-bin");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("username".to_string(), "bob".to_string()),
                ("password".to_string(), "p&ss word".to_string()),
            ]
        );
    }

    #[test]
    fn test_endpoint_url_rejects_invalid_base() {
        let client = ShareOnlineClient::with_base_url("bob", "pw", "not a url").unwrap();
        let err = client.endpoint_url("cgi-bin", &[]).unwrap_err();
        assert!(matches!(err, ShareOnlineError::InvalidUrl { .. }));
    }
}
