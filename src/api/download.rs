//! Download URL resolution and streaming.

use futures_util::StreamExt;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::client::ShareOnlineClient;
use super::error::{ProtocolError, ShareOnlineError, redact_query};
use super::linkcheck::LinkStatus;
use super::protocol::{parse_colon_pairs, parse_number};

/// Result of a completed [`ShareOnlineClient::download`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOutcome {
    /// Link metadata merged with the resolved download URL.
    pub status: LinkStatus,
    /// Number of bytes written to the sink.
    pub bytes_written: u64,
}

impl ShareOnlineClient {
    /// Asks the account endpoint for a signed download URL for `file_id`.
    ///
    /// The returned status carries whichever of `ID`, `URL`, `STATUS`, `SIZE`
    /// and `MD5` the response contained; completeness is not enforced here.
    ///
    /// # Errors
    ///
    /// - [`ShareOnlineError::Protocol`] when `SIZE` is not numeric
    /// - transport errors for network failures and non-2xx responses
    #[instrument(skip(self))]
    pub async fn resolve_download_url(&self, file_id: &str) -> Result<LinkStatus, ShareOnlineError> {
        let credentials = self.credentials();
        let url = self.endpoint_url(
            "account.php",
            &[
                ("act", "download"),
                ("lid", file_id),
                ("username", credentials.username()),
                ("password", credentials.password()),
            ],
        )?;

        debug!("requesting download URL");
        let body = self.get_text(url).await?;
        let status = parse_download_response(&body)?;
        debug!(
            online = status.online,
            has_url = status.url.is_some(),
            "download URL response parsed"
        );
        Ok(status)
    }

    /// Downloads the file behind `link` into `sink`.
    ///
    /// Runs the whole sequence, stopping at the first failed step:
    ///
    /// 1. [`auth`](Self::auth) must report a premium account
    /// 2. with a session token
    /// 3. [`check_link`](Self::check_link) must report the link online
    /// 4. the file must fit into the remaining traffic
    /// 5. [`resolve_download_url`](Self::resolve_download_url) must return a URL
    /// 6. the file is fetched with the `a=<token>` cookie and streamed into `sink`
    ///
    /// The sink is flushed but not shut down. The reported MD5 is not verified.
    ///
    /// # Errors
    ///
    /// - [`ShareOnlineError::NotPremium`], [`ShareOnlineError::MissingToken`],
    ///   [`ShareOnlineError::LinkOffline`], [`ShareOnlineError::InsufficientTraffic`]
    ///   for refused downloads
    /// - [`ShareOnlineError::Io`] when writing to the sink fails
    /// - any error of the individual steps
    #[instrument(skip(self, sink))]
    pub async fn download<W>(
        &self,
        link: &str,
        sink: &mut W,
    ) -> Result<DownloadOutcome, ShareOnlineError>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let auth = self.auth().await?;
        if !auth.premium {
            return Err(ShareOnlineError::NotPremium);
        }
        let token = auth
            .session_token()
            .ok_or(ShareOnlineError::MissingToken)?
            .to_string();

        let link_status = self.check_link(link).await?;
        if !link_status.online {
            return Err(ShareOnlineError::link_offline(link));
        }
        let size = link_status.size.unwrap_or_default();
        ensure_traffic(size, auth.traffic_left)?;

        let file_id = link_status
            .file_id
            .as_deref()
            .ok_or_else(|| ProtocolError::missing_field("fileId"))?;
        let resolved = self.resolve_download_url(file_id).await?;
        let download_url = resolved
            .url
            .clone()
            .ok_or_else(|| ProtocolError::missing_field("URL"))?;

        let parsed =
            Url::parse(&download_url).map_err(|_| ShareOnlineError::invalid_url(&download_url))?;
        let cookie = format!("a={token}");
        let response = self.send_get(parsed, Some(&cookie), None).await?;
        let bytes_written = stream_to_sink(response, sink, &download_url).await?;

        if bytes_written != size {
            warn!(
                expected = size,
                actual = bytes_written,
                "downloaded size differs from link check size"
            );
        }
        info!(
            file_id,
            bytes = bytes_written,
            url = %redact_query(&download_url),
            "download complete"
        );

        Ok(DownloadOutcome {
            status: LinkStatus {
                url: Some(download_url),
                ..link_status
            },
            bytes_written,
        })
    }
}

/// Rejects files larger than the remaining traffic.
///
/// `traffic_left` is compared as-is, so the `-1` sentinel rejects every file.
/// For premium accounts the sentinel only appears once the daily quota is used
/// up, which is exactly when the download should be refused.
fn ensure_traffic(size: u64, traffic_left: i64) -> Result<(), ShareOnlineError> {
    let fits = u64::try_from(traffic_left).is_ok_and(|left| size <= left);
    if fits {
        Ok(())
    } else {
        Err(ShareOnlineError::insufficient_traffic(size, traffic_left))
    }
}

/// Parses a `KEY: VALUE` download-resolution body.
///
/// # Errors
///
/// Returns [`ProtocolError::InvalidNumber`] when `SIZE` is not numeric.
pub(crate) fn parse_download_response(body: &str) -> Result<LinkStatus, ProtocolError> {
    let mut status = LinkStatus::default();
    for (key, value) in parse_colon_pairs(body) {
        match key.as_str() {
            "ID" => status.file_id = Some(value),
            "URL" => status.url = Some(value),
            "STATUS" => status.online = value == "online",
            "SIZE" => status.size = Some(parse_number("SIZE", &value)?),
            "MD5" => status.md5 = Some(value),
            _ => debug!(key = %key, "ignoring unknown download response key"),
        }
    }
    Ok(status)
}

/// Streams a response body into the sink, returning bytes written.
async fn stream_to_sink<W>(
    response: reqwest::Response,
    sink: &mut W,
    url: &str,
) -> Result<u64, ShareOnlineError>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    let mut stream = response.bytes_stream();
    let mut bytes_written: u64 = 0;

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.map_err(|e| ShareOnlineError::network(url, e))?;
        sink.write_all(&chunk).await.map_err(ShareOnlineError::io)?;
        bytes_written += chunk.len() as u64;
    }

    sink.flush().await.map_err(ShareOnlineError::io)?;
    Ok(bytes_written)
}
