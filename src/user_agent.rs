//! Shared User-Agent string for API and file stream requests.

/// Project URL for User-Agent identification.
const PROJECT_UA_URL: &str = "https://github.com/fierce/shareonline";

/// Default User-Agent for every request issued by the client.
#[must_use]
pub(crate) fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("shareonline/{version} (hosting-client; +{PROJECT_UA_URL})")
}
