//! Outbound IPv4 discovery
//!
//! Every API call must carry the caller's public IP (`ClientIp`), and the
//! address has to be whitelisted in the Namecheap account.

use reqwest::Client;
use tokio_util::sync::CancellationToken;

use crate::error::{NamecheapError, Result};
use crate::providers::common::{HttpTimeouts, create_http_client};
use crate::utils::log_sanitizer::truncate_for_log;

/// Echo service answering with the caller's IPv4 address as plain text.
pub const DEFAULT_IP_LOOKUP_URL: &str = "https://ipv4.icanhazip.com";

/// Looks up the public IPv4 address of this host via [`DEFAULT_IP_LOOKUP_URL`].
pub async fn lookup_client_ip(cancel: &CancellationToken) -> Result<String> {
    let client = create_http_client(&HttpTimeouts::default())?;
    lookup_client_ip_from(&client, DEFAULT_IP_LOOKUP_URL, cancel).await
}

/// Looks up the public IP address through any echo service at `url`.
///
/// The service must answer `200` with the address as body; surrounding
/// whitespace is trimmed.
pub async fn lookup_client_ip_from(
    client: &Client,
    url: &str,
    cancel: &CancellationToken,
) -> Result<String> {
    log::debug!("[namecheap] GET {url}");

    let fetch = async {
        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| NamecheapError::NetworkError {
                detail: format!("failed to fetch external IP: {e}"),
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(NamecheapError::HttpStatus {
                status: status.as_u16(),
                detail: "did not get OK status when looking up external IP".to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| NamecheapError::NetworkError {
                detail: format!("failed to read external IP response: {e}"),
            })
    };

    let body = tokio::select! {
        biased;
        () = cancel.cancelled() => return Err(NamecheapError::Cancelled),
        body = fetch => body?,
    };

    let ip = body.trim();
    if ip.is_empty() {
        return Err(NamecheapError::ParseError {
            detail: format!("empty external IP response: {}", truncate_for_log(&body)),
        });
    }

    log::info!("[namecheap] Client IP: {ip}");
    Ok(ip.to_string())
}
