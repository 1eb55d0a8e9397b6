//! Log sanitization utilities
//!
//! Keeps API keys and long TXT payloads (DKIM keys, SPF records) out of
//! debug/error logs.

use std::collections::BTreeMap;

/// Maximum number of characters to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Request parameters whose value never reaches a log line.
const SECRET_PARAMS: &[&str] = &["ApiKey"];

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit,
/// otherwise returns the first `TRUNCATE_LIMIT` characters with a suffix
/// indicating the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Renders request parameters as `key=value` pairs for logging.
///
/// Secret values are replaced by `***`, every value is truncated.
pub fn mask_params(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(key, value)| {
            if SECRET_PARAMS.contains(&key.as_str()) {
                format!("{key}=***")
            } else {
                format!("{key}={}", truncate_for_log(value))
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- truncate_for_log ----

    #[test]
    fn short_string_unchanged() {
        let s = "hello world";
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
        assert!(result.contains(&format!("{} bytes]", TRUNCATE_LIMIT + 100)));
        assert!(result.len() < s.len());
    }

    #[test]
    fn multibyte_chars_safe() {
        // Ensure truncation doesn't split multi-byte characters
        let s = "你".repeat(200); // Each '你' is 3 bytes
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
    }

    // ---- mask_params ----

    #[test]
    fn api_key_is_masked() {
        let params = BTreeMap::from([
            ("ApiKey".to_string(), "0123456789abcdef".to_string()),
            ("ApiUser".to_string(), "alice".to_string()),
            ("SLD".to_string(), "domain".to_string()),
        ]);
        let rendered = mask_params(&params);
        assert_eq!(rendered, "ApiKey=*** ApiUser=alice SLD=domain");
        assert!(!rendered.contains("0123456789abcdef"));
    }

    #[test]
    fn long_values_are_truncated() {
        let params = BTreeMap::from([("Address1".to_string(), "v".repeat(TRUNCATE_LIMIT * 2))]);
        assert!(mask_params(&params).contains("... [truncated, total"));
    }
}
