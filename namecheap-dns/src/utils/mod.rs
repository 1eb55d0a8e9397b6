//! Utility modules.

/// Public IP discovery for the `ClientIp` parameter.
pub mod client_ip;

/// Log sanitization utilities to prevent sensitive data exposure.
pub mod log_sanitizer;
