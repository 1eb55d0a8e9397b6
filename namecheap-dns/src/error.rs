use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::providers::namecheap::DomainDnsSetHostsResult;
use crate::types::{EmailType, RecordType};

/// Unified error type for every operation of the client.
///
/// Input errors are wrapped in [`Validation`](Self::Validation) and are raised
/// before any network access. Exactly one variant is retryable:
/// [`MethodNotAllowed`](Self::MethodNotAllowed), see [`is_retryable`](Self::is_retryable).
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum NamecheapError {
    /// The request was rejected locally, no call was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Client configuration is incomplete or unusable.
    #[error("[namecheap] Invalid configuration '{field}': {detail}")]
    InvalidConfig {
        /// Offending setting (environment variable or builder field).
        field: String,
        /// What is wrong with it.
        detail: String,
    },

    /// A network-level error (connection refused, DNS failure, broken body).
    #[error("[namecheap] Network error: {detail}")]
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("[namecheap] Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The API answered HTTP 405.
    ///
    /// The remote uses this status to shed bursts, so it is the only
    /// condition the executor retries.
    #[error("[namecheap] Method not allowed (HTTP 405)")]
    MethodNotAllowed,

    /// Any other non-success HTTP status.
    #[error("[namecheap] HTTP {status}: {detail}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Response body (truncated).
        detail: String,
    },

    /// The whole backoff schedule was consumed without a terminal outcome.
    #[error("[namecheap] API retry limit exceeded after {attempts} attempts")]
    RetryLimitExceeded {
        /// Total number of attempts, the first one included.
        attempts: usize,
    },

    /// The caller cancelled the operation.
    #[error("[namecheap] Request cancelled")]
    Cancelled,

    /// The response body is not a well-formed API envelope.
    #[error("[namecheap] Unable to parse server response: {detail}")]
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// The API reported one or more errors inside a well-formed response.
    ///
    /// `partial` holds whatever command result the server returned next to
    /// the errors; it is `None` when the envelope had no command result.
    #[error("{errors}")]
    Api {
        /// All reported errors, in server order.
        errors: AggregateApiError,
        /// Partially decoded command result.
        partial: Option<Box<DomainDnsSetHostsResult>>,
    },
}

impl NamecheapError {
    /// Whether another attempt may succeed.
    ///
    /// Only HTTP 405 qualifies. Timeouts, 5xx and connection failures are
    /// terminal.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::MethodNotAllowed)
    }

    /// Whether the error stems from caller input rather than the remote side.
    ///
    /// Used for log levels: `warn` when `true`, `error` otherwise.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidConfig { .. })
    }
}

/// A request rejected before it reached the wire.
///
/// Record indices are 0-based positions in [`SetHostsRequest::records`](crate::SetHostsRequest).
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "rule")]
pub enum ValidationError {
    #[error("invalid domain: incorrect format")]
    InvalidDomainFormat { domain: String },

    #[error("invalid EmailType value: {value}")]
    InvalidEmailType { value: String },

    #[error("invalid Tag value: {value}")]
    InvalidTag { value: String },

    #[error("Records[{index}].HostName is required")]
    MissingHostName { index: usize },

    #[error("Records[{index}].RecordType is required")]
    MissingRecordType { index: usize },

    #[error("invalid Records[{index}].RecordType value: {value}")]
    InvalidRecordType { index: usize, value: String },

    #[error("invalid Records[{index}].TTL value: {ttl}")]
    InvalidTtl { index: usize, ttl: u32 },

    #[error("Records[{index}].Address is required")]
    MissingAddress { index: usize },

    #[error("Records[{index}].RecordType {record_type} is not allowed for {}", email_type_label(.email_type))]
    IncompatibleRecordTypeForEmailType {
        index: usize,
        record_type: RecordType,
        email_type: Option<EmailType>,
    },

    #[error("Records[{index}].MXPref is nil but required for MX record type")]
    MissingMxPref { index: usize },

    #[error("Records[{index}].Address \"{address}\" must contain a protocol prefix for {kind} record")]
    MissingProtocolPrefix {
        index: usize,
        /// `URL`, `URL301`, `FRAME` or `CAA iodef`.
        kind: String,
        address: String,
    },

    #[error("minimum 1 MX record required for MX EmailType")]
    MissingRequiredMxRecord,

    #[error("one MXE record required for MXE EmailType")]
    RequireExactlyOneMxeRecord,
}

fn email_type_label(email_type: &Option<EmailType>) -> String {
    match email_type {
        Some(email_type) => format!("EmailType={email_type}"),
        None => "blank EmailType".to_string(),
    }
}

/// One `<Error Number="...">message</Error>` entry of an API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorEntry {
    /// Namecheap error number.
    pub code: String,
    /// Human readable message.
    pub message: String,
}

/// All errors reported by one API response, in the order the server sent them.
///
/// Rendered as `"<message> (<code>)"` entries joined by `"; "`. An entry
/// without a code renders as its message alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateApiError {
    entries: Vec<ApiErrorEntry>,
}

impl AggregateApiError {
    /// Returns `None` for an empty list, an aggregate always holds one entry at least.
    pub fn from_entries(entries: Vec<ApiErrorEntry>) -> Option<Self> {
        if entries.is_empty() {
            None
        } else {
            Some(Self { entries })
        }
    }

    pub fn entries(&self) -> &[ApiErrorEntry] {
        &self.entries
    }
}

impl std::fmt::Display for AggregateApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            if entry.code.is_empty() {
                f.write_str(&entry.message)?;
            } else {
                write!(f, "{} ({})", entry.message, entry.code)?;
            }
        }
        Ok(())
    }
}

/// Convenience type alias for `Result<T, NamecheapError>`.
pub type Result<T> = std::result::Result<T, NamecheapError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(code: &str, message: &str) -> ApiErrorEntry {
        ApiErrorEntry {
            code: code.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn aggregate_joins_in_order() {
        let errors = AggregateApiError::from_entries(vec![
            entry("2019166", "Domain not found"),
            entry("2016166", "Domain is not using Namecheap DNS servers"),
        ]);
        let Some(errors) = errors else {
            panic!("expected an aggregate");
        };
        assert_eq!(
            errors.to_string(),
            "Domain not found (2019166); Domain is not using Namecheap DNS servers (2016166)"
        );
    }

    #[test]
    fn aggregate_omits_empty_code() {
        let errors = AggregateApiError::from_entries(vec![
            entry("1", "a & b"),
            entry("", "no number"),
        ]);
        let Some(errors) = errors else {
            panic!("expected an aggregate");
        };
        assert_eq!(errors.to_string(), "a & b (1); no number");
    }

    #[test]
    fn aggregate_of_nothing_is_none() {
        assert!(AggregateApiError::from_entries(Vec::new()).is_none());
    }

    #[test]
    fn api_error_displays_aggregate_only() {
        let errors = AggregateApiError::from_entries(vec![entry("1011102", "API Key is invalid")]);
        let e = NamecheapError::Api {
            errors: errors.unwrap(),
            partial: None,
        };
        assert_eq!(e.to_string(), "API Key is invalid (1011102)");
    }

    #[test]
    fn only_method_not_allowed_is_retryable() {
        assert!(NamecheapError::MethodNotAllowed.is_retryable());
        for e in [
            NamecheapError::NetworkError {
                detail: "refused".into(),
            },
            NamecheapError::Timeout {
                detail: "30s".into(),
            },
            NamecheapError::HttpStatus {
                status: 503,
                detail: String::new(),
            },
            NamecheapError::ParseError {
                detail: "eof".into(),
            },
            NamecheapError::Cancelled,
            NamecheapError::RetryLimitExceeded { attempts: 6 },
            NamecheapError::Validation(ValidationError::MissingRequiredMxRecord),
        ] {
            assert!(!e.is_retryable(), "{e:?} must be terminal");
        }
    }

    #[test]
    fn incompatible_record_names_blank_email_type() {
        let e = ValidationError::IncompatibleRecordTypeForEmailType {
            index: 0,
            record_type: RecordType::Mx,
            email_type: None,
        };
        assert_eq!(
            e.to_string(),
            "Records[0].RecordType MX is not allowed for blank EmailType"
        );
    }

    #[test]
    fn incompatible_record_names_email_type() {
        let e = ValidationError::IncompatibleRecordTypeForEmailType {
            index: 2,
            record_type: RecordType::Mxe,
            email_type: Some(EmailType::Fwd),
        };
        assert_eq!(
            e.to_string(),
            "Records[2].RecordType MXE is not allowed for EmailType=FWD"
        );
    }

    #[test]
    fn validation_error_is_transparent() {
        let e: NamecheapError = ValidationError::MissingMxPref { index: 1 }.into();
        assert_eq!(
            e.to_string(),
            "Records[1].MXPref is nil but required for MX record type"
        );
    }

    #[test]
    fn serialize_tags_variant() {
        let e = NamecheapError::RetryLimitExceeded { attempts: 6 };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"RetryLimitExceeded\""));
        assert!(json.contains("\"attempts\":6"));
    }
}
