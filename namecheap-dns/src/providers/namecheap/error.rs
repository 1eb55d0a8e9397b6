//! Namecheap response decoding and error aggregation

use crate::error::{AggregateApiError, ApiErrorEntry, NamecheapError, Result};
use crate::utils::log_sanitizer::truncate_for_log;

use super::types::{ApiEnvelope, DomainDnsSetHostsResult, render_message};

/// Decodes a `setHosts` response body.
///
/// Every `<Error>` of the envelope ends up in one [`AggregateApiError`], in
/// server order. A command result sent next to errors is kept as `partial`.
pub(crate) fn decode_set_hosts(body: &str) -> Result<DomainDnsSetHostsResult> {
    let envelope = parse_envelope(body)?;

    for warning in &envelope.warnings.items {
        log::warn!("[namecheap] API warning: {}", render_message(warning));
    }

    let result = envelope
        .command_response
        .and_then(|command| {
            log::debug!("[namecheap] Command response: {}", command.command_type);
            command.set_hosts
        })
        .map(DomainDnsSetHostsResult::from);

    let entries: Vec<ApiErrorEntry> = envelope
        .errors
        .items
        .into_iter()
        .map(|e| ApiErrorEntry {
            code: e.number,
            message: e.message.trim().to_string(),
        })
        .collect();

    if let Some(errors) = AggregateApiError::from_entries(entries) {
        log::error!("[namecheap] API error (Status={}): {errors}", envelope.status);
        return Err(NamecheapError::Api {
            errors,
            partial: result.map(Box::new),
        });
    }

    result.ok_or_else(|| NamecheapError::ParseError {
        detail: "response has no DomainDNSSetHostsResult".to_string(),
    })
}

fn parse_envelope(body: &str) -> Result<ApiEnvelope> {
    quick_xml::de::from_str(body.trim()).map_err(|e| {
        log::error!("[namecheap] XML parse failed: {e}");
        log::error!("[namecheap] Raw response: {}", truncate_for_log(body));
        NamecheapError::ParseError {
            detail: e.to_string(),
        }
    })
}
