//! Provider factory functions.

use std::sync::Arc;

use crate::config::ClientOptions;
use crate::error::Result;
use crate::providers::NamecheapClient;
use crate::traits::DomainsDns;

/// Creates a [`DomainsDns`] instance from the given options.
///
/// The client gets default timeouts and its own retry executor. Use
/// [`NamecheapClient::builder`] for anything else.
///
/// # Examples
///
/// ```rust,no_run
/// use namecheap_dns::{ClientOptions, DomainsDns, create_provider};
///
/// let options = ClientOptions::from_env("203.0.113.7").unwrap();
/// let provider = create_provider(options).unwrap();
/// assert_eq!(provider.id(), "namecheap");
/// ```
pub fn create_provider(options: ClientOptions) -> Result<Arc<dyn DomainsDns>> {
    Ok(Arc::new(NamecheapClient::new(options)?))
}
