//! DNS Provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

pub mod namecheap;

pub use namecheap::{NamecheapClient, NamecheapClientBuilder};
