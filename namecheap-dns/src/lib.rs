//! # namecheap-dns
//!
//! Client for the Namecheap `namecheap.domains.dns.setHosts` command: replace
//! the full DNS host record set of a domain.
//!
//! A call runs through four stages:
//!
//! 1. **Validation**: domain split into SLD/TLD via the Public Suffix List,
//!    then per-record and list-level rules (TTL bounds, MX/MXE against the
//!    email type, protocol prefixes of redirect records). Nothing is sent
//!    for a rejected request.
//! 2. **Encoding**: records flattened into `RecordType1`, `HostName1`, ...
//! 3. **Execution**: form POST through a serialized retry executor. HTTP 405
//!    is retried after 1s, 5s, 15s, 30s and 50s; one backoff sequence at a
//!    time per client.
//! 4. **Decoding**: XML envelope parsed, all reported errors aggregated.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use namecheap_dns::{
//!     ClientOptions, DomainsDns, EmailType, HostRecord, RecordType, SetHostsRequest,
//!     create_provider, lookup_client_ip,
//! };
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cancel = CancellationToken::new();
//!     let client_ip = lookup_client_ip(&cancel).await?;
//!     let provider = create_provider(ClientOptions::from_env(client_ip)?)?;
//!
//!     let request = SetHostsRequest::new("domain.net")
//!         .email_type(EmailType::Mx)
//!         .record(HostRecord::new(RecordType::A, "@", "10.11.12.13").with_ttl(1800))
//!         .record(HostRecord::new(RecordType::Mx, "mail", "super-mail.com").with_mx_pref(10));
//!
//!     let result = provider.set_hosts_with_cancel(&request, &cancel).await?;
//!     println!("{} updated: {}", result.domain, result.is_success);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, NamecheapError>`](NamecheapError):
//!
//! - [`NamecheapError::Validation`]: request rejected locally
//! - [`NamecheapError::Api`]: every error the server reported, plus any partial result
//! - [`NamecheapError::RetryLimitExceeded`]: HTTP 405 on every attempt
//! - [`NamecheapError::Cancelled`]: the caller's token fired
//!
//! Only HTTP 405 is retried; see [`NamecheapError::is_retryable`].

mod config;
mod error;
mod factory;
mod http_client;
mod providers;
mod retry;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{AggregateApiError, ApiErrorEntry, NamecheapError, Result, ValidationError};

// Re-export configuration
pub use config::{ClientOptions, ENV_API_KEY, ENV_API_USER, ENV_USE_SANDBOX, ENV_USERNAME};

// Re-export factory functions
pub use factory::create_provider;

// Re-export core trait
pub use traits::DomainsDns;

// Re-export types
pub use types::{EmailType, HostRecord, RecordType, SetHostsRequest};

// Re-export retry executor
pub use retry::{RetrySchedule, SyncRetry};

// Re-export the concrete client and its building blocks
pub use providers::common::HttpTimeouts;
pub use providers::namecheap::{
    DomainDnsSetHostsResult, DomainParts, PRODUCTION_API_URL, SANDBOX_API_URL, ValidatedHosts,
    ValidatedRecord, encode_hosts, parse_domain, validate,
};
pub use providers::{NamecheapClient, NamecheapClientBuilder};

// Re-export utils
pub use utils::client_ip::{DEFAULT_IP_LOOKUP_URL, lookup_client_ip, lookup_client_ip_from};
