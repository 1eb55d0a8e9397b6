use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::providers::namecheap::DomainDnsSetHostsResult;
use crate::types::SetHostsRequest;

/// DNS host management of a registrar account
#[async_trait]
pub trait DomainsDns: Send + Sync {
    /// Provider identifier
    fn id(&self) -> &'static str;

    /// Replaces the whole host record set of `req.domain`.
    ///
    /// The request is validated before any network access; a rejected
    /// request yields [`NamecheapError::Validation`](crate::NamecheapError::Validation).
    /// Cancelling `cancel` aborts the in-flight attempt or backoff wait with
    /// [`NamecheapError::Cancelled`](crate::NamecheapError::Cancelled).
    async fn set_hosts_with_cancel(
        &self,
        req: &SetHostsRequest,
        cancel: &CancellationToken,
    ) -> Result<DomainDnsSetHostsResult>;

    /// Same as [`set_hosts_with_cancel`](Self::set_hosts_with_cancel) without
    /// external cancellation.
    async fn set_hosts(&self, req: &SetHostsRequest) -> Result<DomainDnsSetHostsResult> {
        self.set_hosts_with_cancel(req, &CancellationToken::new())
            .await
    }
}
