//! Link status checks.

use tracing::{debug, info, instrument};

use super::client::ShareOnlineClient;
use super::error::ShareOnlineError;
use super::protocol::{parse_number, semicolon_records};

/// Status and metadata of a hosted file.
///
/// From the link checker this is either fully populated (online) or carries
/// only `online = false`. [`ShareOnlineClient::resolve_download_url`] fills
/// whichever fields its response names, including `url`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkStatus {
    /// Upstream file id.
    pub file_id: Option<String>,
    /// Signed download URL, only set after download resolution.
    pub url: Option<String>,
    /// Whether the file can be downloaded.
    pub online: bool,
    /// File name.
    pub name: Option<String>,
    /// File size in bytes.
    pub size: Option<u64>,
    /// Hex MD5 reported by the host.
    pub md5: Option<String>,
}

impl LinkStatus {
    /// A link the host reports as deleted or not found.
    #[must_use]
    pub fn offline() -> Self {
        Self::default()
    }
}

impl ShareOnlineClient {
    /// Checks a single link.
    ///
    /// Returns the first status the link checker recognized. A link whose line
    /// was not recognized at all is reported as offline.
    ///
    /// # Errors
    ///
    /// Returns transport errors for network failures and non-2xx responses.
    #[instrument(skip(self))]
    pub async fn check_link(&self, link: &str) -> Result<LinkStatus, ShareOnlineError> {
        let status = self
            .check_links(&[link])
            .await?
            .into_iter()
            .next()
            .unwrap_or_else(LinkStatus::offline);
        Ok(status)
    }

    /// Checks several links in one request.
    ///
    /// Links are sent comma-joined. The result holds one entry per recognized
    /// response line in response order, so it may be shorter than `links`.
    ///
    /// # Errors
    ///
    /// Returns transport errors for network failures and non-2xx responses.
    #[instrument(skip(self, links), fields(count = links.len()))]
    pub async fn check_links<S: AsRef<str>>(
        &self,
        links: &[S],
    ) -> Result<Vec<LinkStatus>, ShareOnlineError> {
        let joined = links
            .iter()
            .map(|link| link.as_ref())
            .collect::<Vec<&str>>()
            .join(",");
        let url = self.endpoint_url("linkcheck.php", &[("md5", "1"), ("links", &joined)])?;

        debug!("requesting link status");
        let body = self.get_text(url).await?;
        let statuses = parse_link_check(&body);

        info!(
            requested = links.len(),
            recognized = statuses.len(),
            online = statuses.iter().filter(|s| s.online).count(),
            "link check complete"
        );
        Ok(statuses)
    }
}

/// Parses a link-check body into statuses, one per recognized line.
///
/// Lines with a status other than `OK`, `DELETED` or `NOTFOUND` contribute
/// nothing. `OK` lines that are too short or carry a non-numeric size are
/// dropped the same way, so an online status is always complete.
pub(crate) fn parse_link_check(body: &str) -> Vec<LinkStatus> {
    semicolon_records(body)
        .filter_map(|fields| match fields.get(1).copied() {
            Some("OK") => online_status(&fields),
            Some("DELETED" | "NOTFOUND") => Some(LinkStatus::offline()),
            other => {
                debug!(status = ?other, "ignoring unrecognized link check line");
                None
            }
        })
        .collect()
}

fn online_status(fields: &[&str]) -> Option<LinkStatus> {
    let [file_id, _, name, size, md5, ..] = fields else {
        debug!(fields = fields.len(), "dropping truncated OK line");
        return None;
    };
    let size = match parse_number::<u64>("size", size) {
        Ok(size) => size,
        Err(e) => {
            debug!(error = %e, "dropping OK line with invalid size");
            return None;
        }
    };
    Some(LinkStatus {
        file_id: Some((*file_id).to_string()),
        url: None,
        online: true,
        name: Some((*name).to_string()),
        size: Some(size),
        md5: Some((*md5).to_string()),
    })
}
