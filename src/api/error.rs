//! Error types for the hosting client.
//!
//! [`ShareOnlineError`] separates account-level refusals (login failed, not
//! premium, link offline, quota exhausted) from transport failures, and
//! [`ProtocolError`] marks responses whose text format could not be parsed.

use thiserror::Error;

/// A response body did not match the expected upstream text format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// A non-empty line did not contain the expected separator.
    #[error("malformed response line: '{line}'")]
    MalformedLine {
        /// The offending line.
        line: String,
    },

    /// A field required to build the result was absent.
    #[error("response is missing field '{field}'")]
    MissingField {
        /// Name of the missing field.
        field: String,
    },

    /// A field that should be numeric could not be parsed.
    #[error("field '{field}' is not a number: '{value}'")]
    InvalidNumber {
        /// Name of the field.
        field: String,
        /// The raw value received.
        value: String,
    },
}

impl ProtocolError {
    /// Creates a malformed-line error.
    pub fn malformed_line(line: impl Into<String>) -> Self {
        Self::MalformedLine { line: line.into() }
    }

    /// Creates a missing-field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Creates an invalid-number error.
    pub fn invalid_number(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Errors returned by [`ShareOnlineClient`](super::ShareOnlineClient) operations.
#[derive(Debug, Error)]
pub enum ShareOnlineError {
    /// The account endpoint did not hand out a session token.
    #[error("authentication failed: {message}")]
    Authentication {
        /// Upstream or client-side reason.
        message: String,
    },

    /// The account is valid but not in a premium group.
    #[error("account is not premium")]
    NotPremium,

    /// The account is premium but no session token was returned.
    #[error("account returned no session token")]
    MissingToken,

    /// The link is deleted, not found or was not recognized by the link checker.
    #[error("link is offline: {link}")]
    LinkOffline {
        /// The link that was checked.
        link: String,
    },

    /// The file is larger than the remaining traffic quota.
    #[error("insufficient traffic: file needs {required} bytes, {available} bytes left")]
    InsufficientTraffic {
        /// File size in bytes.
        required: u64,
        /// Remaining traffic in bytes (`-1` when unknown).
        available: i64,
    },

    /// The HTTP client could not be constructed from the configuration.
    #[error("failed to build HTTP client: {source}")]
    ClientBuild {
        /// The underlying builder error.
        #[source]
        source: reqwest::Error,
    },

    /// Network-level error (DNS resolution, connection refused, TLS errors, etc.)
    #[error("network error requesting {url}: {source}")]
    Network {
        /// The URL that failed, without query string.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// Request timed out before completion.
    #[error("timeout requesting {url}")]
    Timeout {
        /// The URL that timed out, without query string.
        url: String,
    },

    /// HTTP error response (4xx, 5xx).
    #[error("HTTP {status} requesting {url}")]
    HttpStatus {
        /// The URL that returned an error status, without query string.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// An endpoint or signed download URL could not be parsed.
    #[error("invalid URL: {url}")]
    InvalidUrl {
        /// The invalid URL string.
        url: String,
    },

    /// The response body did not follow the expected text format.
    #[error("unexpected response format: {0}")]
    Protocol(#[from] ProtocolError),

    /// Writing to the caller-supplied sink failed.
    #[error("IO error writing download stream: {source}")]
    Io {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl ShareOnlineError {
    /// Creates an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Creates a link-offline error.
    pub fn link_offline(link: impl Into<String>) -> Self {
        Self::LinkOffline { link: link.into() }
    }

    /// Creates an insufficient-traffic error.
    #[must_use]
    pub fn insufficient_traffic(required: u64, available: i64) -> Self {
        Self::InsufficientTraffic {
            required,
            available,
        }
    }

    /// Creates a network error from a reqwest error, classifying timeouts.
    ///
    /// The URL recorded inside the reqwest error is dropped because it still
    /// carries the credential query string.
    #[must_use]
    pub fn network(url: &str, source: reqwest::Error) -> Self {
        let url = redact_query(url);
        if source.is_timeout() {
            Self::Timeout { url }
        } else {
            Self::Network {
                url,
                source: source.without_url(),
            }
        }
    }

    /// Creates an HTTP status error.
    #[must_use]
    pub fn http_status(url: &str, status: u16) -> Self {
        Self::HttpStatus {
            url: redact_query(url),
            status,
        }
    }

    /// Creates an invalid URL error.
    #[must_use]
    pub fn invalid_url(url: &str) -> Self {
        Self::InvalidUrl {
            url: redact_query(url),
        }
    }

    /// Creates a sink IO error.
    #[must_use]
    pub fn io(source: std::io::Error) -> Self {
        Self::Io { source }
    }

    /// Returns true for failures of the transport or of the response format,
    /// as opposed to refusals decided from a well-formed response.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::ClientBuild { .. }
                | Self::Network { .. }
                | Self::Timeout { .. }
                | Self::HttpStatus { .. }
                | Self::InvalidUrl { .. }
                | Self::Protocol(_)
                | Self::Io { .. }
        )
    }
}

/// Drops the query string so credentials never end up in error messages or logs.
pub(crate) fn redact_query(url: &str) -> String {
    url.split_once('?')
        .map_or_else(|| url.to_string(), |(base, _)| base.to_string())
}
