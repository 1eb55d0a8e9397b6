//! Namecheap DNS Provider

mod domain;
mod encode;
mod error;
mod http;
mod provider;
mod types;
mod validate;

use std::sync::Arc;

use reqwest::{Client, Url};

use crate::config::ClientOptions;
use crate::error::{NamecheapError, Result};
use crate::providers::common::{HttpTimeouts, create_http_client};
use crate::retry::{RetrySchedule, SyncRetry};

pub use domain::{DomainParts, parse_domain};
pub use encode::encode_hosts;
pub use types::DomainDnsSetHostsResult;
pub use validate::{ValidatedHosts, ValidatedRecord, validate};

pub const PRODUCTION_API_URL: &str = "https://api.namecheap.com/xml.response";
pub const SANDBOX_API_URL: &str = "https://api.sandbox.namecheap.com/xml.response";
pub(crate) const SET_HOSTS_COMMAND: &str = "namecheap.domains.dns.setHosts";

/// Namecheap API client
///
/// Holds one retry lock: concurrent calls on the same client never run two
/// backoff sequences at once. Use [`NamecheapClientBuilder::shared_retry`]
/// to extend that guarantee across clients.
pub struct NamecheapClient {
    pub(crate) client: Client,
    pub(crate) options: ClientOptions,
    pub(crate) base_url: String,
    pub(crate) retry: Arc<SyncRetry>,
}

impl NamecheapClient {
    /// Client with default timeouts and retry schedule.
    pub fn new(options: ClientOptions) -> Result<Self> {
        Self::builder(options).build()
    }

    pub fn builder(options: ClientOptions) -> NamecheapClientBuilder {
        NamecheapClientBuilder::new(options)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Retry executor of this client, for sharing with other clients.
    pub fn retry(&self) -> Arc<SyncRetry> {
        Arc::clone(&self.retry)
    }
}

/// Builder for [`NamecheapClient`].
#[derive(Debug)]
pub struct NamecheapClientBuilder {
    options: ClientOptions,
    base_url: Option<String>,
    schedule: Option<RetrySchedule>,
    retry: Option<Arc<SyncRetry>>,
    timeouts: HttpTimeouts,
}

impl NamecheapClientBuilder {
    pub fn new(options: ClientOptions) -> Self {
        Self {
            options,
            base_url: None,
            schedule: None,
            retry: None,
            timeouts: HttpTimeouts::default(),
        }
    }

    /// Endpoint override; defaults to the production or sandbox URL per
    /// [`ClientOptions::use_sandbox`].
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Backoff schedule of this client's own executor.
    ///
    /// Ignored when [`shared_retry`](Self::shared_retry) is set.
    #[must_use]
    pub fn retry_schedule(mut self, schedule: RetrySchedule) -> Self {
        self.schedule = Some(schedule);
        self
    }

    /// Serializes retries with every other client holding the same executor.
    #[must_use]
    pub fn shared_retry(mut self, retry: Arc<SyncRetry>) -> Self {
        self.retry = Some(retry);
        self
    }

    #[must_use]
    pub fn timeouts(mut self, timeouts: HttpTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    pub fn build(self) -> Result<NamecheapClient> {
        self.options.check()?;

        let base_url = self.base_url.unwrap_or_else(|| {
            if self.options.use_sandbox {
                SANDBOX_API_URL.to_string()
            } else {
                PRODUCTION_API_URL.to_string()
            }
        });
        Url::parse(&base_url).map_err(|e| NamecheapError::InvalidConfig {
            field: "base_url".to_string(),
            detail: format!("{base_url}: {e}"),
        })?;

        let retry = self
            .retry
            .unwrap_or_else(|| Arc::new(SyncRetry::new(self.schedule.unwrap_or_default())));

        log::debug!("[namecheap] Client for {base_url} (user {})", self.options.user_name);

        Ok(NamecheapClient {
            client: create_http_client(&self.timeouts)?,
            options: self.options,
            base_url,
            retry,
        })
    }
}
