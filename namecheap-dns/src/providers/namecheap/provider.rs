//! Namecheap `DomainsDns` trait implementation

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::{NamecheapError, Result};
use crate::traits::DomainsDns;
use crate::types::SetHostsRequest;

use super::error::decode_set_hosts;
use super::{DomainDnsSetHostsResult, NamecheapClient, SET_HOSTS_COMMAND, encode_hosts, validate};

impl NamecheapClient {
    /// Validates and encodes a request into `setHosts` parameters, without
    /// the auth fields.
    pub fn encode_set_hosts(req: &SetHostsRequest) -> Result<BTreeMap<String, String>> {
        let hosts = validate(req)?;
        Ok(encode_hosts(&hosts)?)
    }
}

#[async_trait]
impl DomainsDns for NamecheapClient {
    fn id(&self) -> &'static str {
        "namecheap"
    }

    async fn set_hosts_with_cancel(
        &self,
        req: &SetHostsRequest,
        cancel: &CancellationToken,
    ) -> Result<DomainDnsSetHostsResult> {
        let params = Self::encode_set_hosts(req).inspect_err(|e| {
            log::warn!("[namecheap] Rejected setHosts for {}: {e}", req.domain);
        })?;

        log::info!(
            "[namecheap] setHosts {} ({} records)",
            req.domain,
            req.records.len()
        );

        let body = self
            .do_xml(SET_HOSTS_COMMAND, params, cancel)
            .await
            .inspect_err(|e| log_failure(&req.domain, e))?;
        let result = decode_set_hosts(&body)?;

        if result.is_success {
            log::info!("[namecheap] setHosts {} succeeded", result.domain);
        } else {
            log::warn!("[namecheap] setHosts {} reported IsSuccess=false", result.domain);
        }
        Ok(result)
    }
}

fn log_failure(domain: &str, e: &NamecheapError) {
    if matches!(e, NamecheapError::Cancelled) {
        log::info!("[namecheap] setHosts {domain} cancelled");
    } else {
        log::error!("[namecheap] setHosts {domain} failed: {e}");
    }
}
