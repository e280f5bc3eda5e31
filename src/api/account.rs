//! Account details: login check, premium status and remaining traffic.

use std::collections::HashMap;

use tracing::{debug, info, instrument};

use super::client::ShareOnlineClient;
use super::error::{ProtocolError, ShareOnlineError};
use super::protocol::{parse_equals_pairs, parse_number};

/// Account groups entitled to premium downloads.
pub const PREMIUM_GROUPS: [&str; 5] = ["PrePaid", "Premium", "Penalty-Premium", "VIP", "VIP-Special"];

/// Daily premium traffic allowance (100 GiB).
pub const MAX_TRAFFIC_BYTES: u64 = 100 * 1024 * 1024 * 1024;

/// Sentinel stored in [`AuthInfo::traffic_left`] when no quota applies or it is used up.
pub const TRAFFIC_UNKNOWN: i64 = -1;

/// Account status returned by [`ShareOnlineClient::auth`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthInfo {
    /// Whether the account group is one of [`PREMIUM_GROUPS`].
    pub premium: bool,
    /// Expiry of the account as Unix epoch seconds.
    pub valid_until: i64,
    /// Bytes of traffic left today, or [`TRAFFIC_UNKNOWN`].
    pub traffic_left: i64,
    /// Session token (`a` field), sent as the `a` cookie on file requests.
    pub token: Option<String>,
}

impl AuthInfo {
    /// Returns the remaining traffic, or `None` when it is the `-1` sentinel.
    #[must_use]
    pub fn remaining_traffic(&self) -> Option<u64> {
        u64::try_from(self.traffic_left).ok()
    }

    /// Returns the session token when it is present and non-empty.
    #[must_use]
    pub fn session_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|token| !token.is_empty())
    }
}

impl ShareOnlineClient {
    /// Logs in with the stored credentials and returns the account status.
    ///
    /// Every call performs one request; the result is not cached.
    ///
    /// # Errors
    ///
    /// - [`ShareOnlineError::Authentication`] when no session token is returned
    /// - [`ShareOnlineError::Protocol`] when the body is not `KEY=VALUE` text or
    ///   lacks `expire_date` / `traffic_1d`
    /// - transport errors for network failures and non-2xx responses
    #[instrument(skip(self), fields(username = %self.credentials().username()))]
    pub async fn auth(&self) -> Result<AuthInfo, ShareOnlineError> {
        let credentials = self.credentials();
        let url = self.endpoint_url(
            "cgi-bin",
            &[
                ("q", "userdetails"),
                ("aux", "traffic"),
                ("username", credentials.username()),
                ("password", credentials.password()),
            ],
        )?;

        debug!("requesting account details");
        let body = self.get_text(url).await?;
        let info = parse_account_details(&body)?;

        info!(
            premium = info.premium,
            valid_until = info.valid_until,
            traffic_left = info.traffic_left,
            "account details received"
        );
        Ok(info)
    }
}

/// Turns an account-details body into [`AuthInfo`].
///
/// The session token is checked first: a body without a non-empty `a` field
/// is a failed login regardless of its other fields.
///
/// # Errors
///
/// See [`ShareOnlineClient::auth`].
pub(crate) fn parse_account_details(body: &str) -> Result<AuthInfo, ShareOnlineError> {
    let fields = parse_equals_pairs(body)?;

    let token = match fields.get("a") {
        Some(token) if !token.is_empty() => token.clone(),
        _ => return Err(ShareOnlineError::authentication("Login failed")),
    };

    let premium = fields
        .get("group")
        .is_some_and(|group| PREMIUM_GROUPS.contains(&group.as_str()));
    let valid_until: i64 = parse_number("expire_date", required(&fields, "expire_date")?)?;
    let traffic_1d = required(&fields, "traffic_1d")?;
    let used_today = traffic_1d.split(';').next().unwrap_or_default();
    let traffic: i64 = parse_number("traffic_1d", used_today)?;

    Ok(AuthInfo {
        premium,
        valid_until,
        traffic_left: traffic_left(traffic, premium),
        token: Some(token),
    })
}

fn required<'a>(fields: &'a HashMap<String, String>, field: &str) -> Result<&'a str, ProtocolError> {
    fields
        .get(field)
        .map(String::as_str)
        .ok_or_else(|| ProtocolError::missing_field(field))
}

/// Remaining premium traffic for `used` bytes consumed today.
///
/// A negative `used` value is taken as reported and adds to the allowance.
fn traffic_left(used: i64, premium: bool) -> i64 {
    let max = i64::try_from(MAX_TRAFFIC_BYTES).unwrap_or(i64::MAX);
    if premium && used < max {
        max.saturating_sub(used)
    } else {
        TRAFFIC_UNKNOWN
    }
}
