//! Client configuration: API endpoint and HTTP timeouts.

/// Default Share-Online API base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://api.share-online.biz";

/// Default HTTP connect timeout (30 seconds).
pub const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Default HTTP read timeout (5 minutes without data).
pub const READ_TIMEOUT_SECS: u64 = 300;

/// Settings used to build a [`ShareOnlineClient`](crate::ShareOnlineClient).
///
/// The read timeout is an idle limit: it fires when no data arrives for that
/// long. File streams have no total deadline; the small API calls use the
/// read timeout as their total deadline as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL the `cgi-bin`, `linkcheck.php` and `account.php` paths are joined to.
    pub api_base_url: String,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Idle read timeout in seconds.
    pub read_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            connect_timeout_secs: CONNECT_TIMEOUT_SECS,
            read_timeout_secs: READ_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Returns a copy of this config pointing at a different API host.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base_url = base_url.into();
        self
    }

    /// Returns a copy of this config with explicit timeouts.
    #[must_use]
    pub fn with_timeouts(mut self, connect_timeout_secs: u64, read_timeout_secs: u64) -> Self {
        self.connect_timeout_secs = connect_timeout_secs;
        self.read_timeout_secs = read_timeout_secs;
        self
    }

    /// Joins an endpoint path onto the base URL, tolerating a trailing slash.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.api_base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_targets_public_api() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "https://api.share-online.biz");
        assert_eq!(config.connect_timeout_secs, 30);
        assert_eq!(config.read_timeout_secs, 300);
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.endpoint("cgi-bin"), "http://127.0.0.1:8080/cgi-bin");

        let config = ClientConfig::default().with_base_url("http://127.0.0.1:8080");
        assert_eq!(
            config.endpoint("linkcheck.php"),
            "http://127.0.0.1:8080/linkcheck.php"
        );
    }

    #[test]
    fn test_with_timeouts_overrides_both_values() {
        let config = ClientConfig::default().with_timeouts(5, 60);
        assert_eq!(config.connect_timeout_secs, 5);
        assert_eq!(config.read_timeout_secs, 60);
    }
}
