//! Generic HTTP client tools
//!
//! One place for sending a prepared request, logging it and mapping the
//! transport outcome to [`NamecheapError`]. Callers build the `RequestBuilder`
//! themselves (URL, form body, headers).
//!
//! # Status mapping
//! - 2xx: response text is returned
//! - 405: [`NamecheapError::MethodNotAllowed`], the one retryable outcome
//! - any other status: [`NamecheapError::HttpStatus`]

use reqwest::RequestBuilder;

use crate::error::NamecheapError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (URL, headers, body)
    /// * `method_name` - request method name (used for logs)
    /// * `url_or_action` - URL or command name (used for logs)
    ///
    /// # Returns
    /// * `Ok(response_text)` - body of a 2xx response
    /// * `Err(NamecheapError::MethodNotAllowed)` - HTTP 405
    /// * `Err(NamecheapError::HttpStatus)` - any other non-success status
    /// * `Err(NamecheapError::Timeout | NetworkError)` - transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url_or_action: &str,
    ) -> Result<String, NamecheapError> {
        log::debug!("[namecheap] {method_name} {url_or_action}");

        let response = request_builder.send().await.map_err(transport_error)?;

        let status_code = response.status().as_u16();
        log::debug!("[namecheap] Response Status: {status_code}");

        if status_code == 405 {
            log::warn!("[namecheap] Method not allowed (HTTP 405)");
            return Err(NamecheapError::MethodNotAllowed);
        }

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!(
                "[namecheap] HTTP {status_code}: {}",
                truncate_for_log(&body)
            );
            return Err(NamecheapError::HttpStatus {
                status: status_code,
                detail: truncate_for_log(&body),
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| NamecheapError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[namecheap] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok(response_text)
    }
}

fn transport_error(e: reqwest::Error) -> NamecheapError {
    if e.is_timeout() {
        NamecheapError::Timeout {
            detail: e.to_string(),
        }
    } else {
        NamecheapError::NetworkError {
            detail: e.to_string(),
        }
    }
}
