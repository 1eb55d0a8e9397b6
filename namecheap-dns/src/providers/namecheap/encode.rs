//! Positional parameter encoding for `setHosts`
//!
//! The API takes no nested structures: the host list is flattened into
//! `RecordType1`, `HostName1`, `Address1`, ... with a 1-based suffix.

use std::collections::BTreeMap;

use crate::error::ValidationError;

use super::validate::ValidatedHosts;

/// Allowed values of the `Tag` passthrough field.
const CAA_TAGS: &[&str] = &["issue", "issuewild", "iodef"];

/// Flattens a validated host set into request parameters.
///
/// Record `i` always maps to suffix `i + 1`. Optional fields that are unset
/// (`TTL`, `MXPref`, `EmailType`, `Tag`, `Flag`) are left out, never sent empty.
pub fn encode_hosts(hosts: &ValidatedHosts) -> Result<BTreeMap<String, String>, ValidationError> {
    let mut params = BTreeMap::new();

    params.insert("SLD".to_string(), hosts.domain.sld.clone());
    params.insert("TLD".to_string(), hosts.domain.tld.clone());

    if let Some(email_type) = hosts.email_type {
        params.insert("EmailType".to_string(), email_type.to_string());
    }

    if let Some(tag) = &hosts.tag {
        if !CAA_TAGS.contains(&tag.as_str()) {
            return Err(ValidationError::InvalidTag { value: tag.clone() });
        }
        params.insert("Tag".to_string(), tag.clone());
    }

    if let Some(flag) = hosts.flag {
        params.insert("Flag".to_string(), flag.to_string());
    }

    for (i, record) in hosts.records.iter().enumerate() {
        let n = i + 1;
        params.insert(format!("RecordType{n}"), record.record_type.to_string());
        params.insert(format!("HostName{n}"), record.host_name.clone());
        params.insert(format!("Address{n}"), record.address.clone());
        if let Some(ttl) = record.ttl {
            params.insert(format!("TTL{n}"), ttl.to_string());
        }
        if let Some(mx_pref) = record.mx_pref {
            params.insert(format!("MXPref{n}"), mx_pref.to_string());
        }
    }

    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::namecheap::validate::validate;
    use crate::types::{EmailType, HostRecord, RecordType, SetHostsRequest};

    fn encode(req: &SetHostsRequest) -> Result<BTreeMap<String, String>, ValidationError> {
        let hosts = validate(req).expect("request should validate");
        encode_hosts(&hosts)
    }

    fn get<'a>(params: &'a BTreeMap<String, String>, key: &str) -> Option<&'a str> {
        params.get(key).map(String::as_str)
    }

    #[test]
    fn encodes_records_positionally() {
        let req = SetHostsRequest::new("domain.net")
            .email_type(EmailType::Mx)
            .record(HostRecord::new(RecordType::A, "@", "10.11.12.13").with_ttl(1800))
            .record(
                HostRecord::new(RecordType::Mx, "mail", "super-mail.com")
                    .with_ttl(1800)
                    .with_mx_pref(10),
            );
        let params = encode(&req).unwrap();

        assert_eq!(get(&params, "SLD"), Some("domain"));
        assert_eq!(get(&params, "TLD"), Some("net"));
        assert_eq!(get(&params, "EmailType"), Some("MX"));

        assert_eq!(get(&params, "RecordType1"), Some("A"));
        assert_eq!(get(&params, "HostName1"), Some("@"));
        assert_eq!(get(&params, "Address1"), Some("10.11.12.13"));
        assert_eq!(get(&params, "TTL1"), Some("1800"));
        assert_eq!(get(&params, "MXPref1"), None);

        assert_eq!(get(&params, "RecordType2"), Some("MX"));
        assert_eq!(get(&params, "HostName2"), Some("mail"));
        assert_eq!(get(&params, "Address2"), Some("super-mail.com"));
        assert_eq!(get(&params, "TTL2"), Some("1800"));
        assert_eq!(get(&params, "MXPref2"), Some("10"));

        assert_eq!(params.len(), 12);
    }

    #[test]
    fn omits_unset_optional_fields() {
        let req = SetHostsRequest::new("domain.net").record(HostRecord::new(
            RecordType::Url,
            "redirect",
            "https://domain.com",
        ));
        let params = encode(&req).unwrap();

        let keys: Vec<_> = params.keys().map(String::as_str).collect();
        assert_eq!(keys, ["Address1", "HostName1", "RecordType1", "SLD", "TLD"]);
    }

    #[test]
    fn mxe_record_carries_pref_when_given() {
        let req = SetHostsRequest::new("domain.net")
            .email_type(EmailType::Mxe)
            .record(
                HostRecord::new(RecordType::Mxe, "mail", "10.11.12.13")
                    .with_ttl(1800)
                    .with_mx_pref(10),
            );
        let params = encode(&req).unwrap();
        assert_eq!(get(&params, "RecordType1"), Some("MXE"));
        assert_eq!(get(&params, "MXPref1"), Some("10"));
    }

    #[test]
    fn index_suffixes_have_no_gaps() {
        let mut req = SetHostsRequest::new("domain.net");
        for i in 0..12 {
            req = req.record(HostRecord::new(RecordType::A, format!("h{i}"), "10.0.0.1"));
        }
        let params = encode(&req).unwrap();
        for n in 1..=12 {
            let expected = format!("h{}", n - 1);
            assert_eq!(get(&params, &format!("HostName{n}")), Some(expected.as_str()));
        }
        assert_eq!(get(&params, "HostName13"), None);
    }

    #[test]
    fn passes_tag_and_flag_through() {
        let req = SetHostsRequest::new("domain.net")
            .email_type(EmailType::Fwd)
            .tag("issue")
            .flag(100);
        let params = encode(&req).unwrap();
        assert_eq!(get(&params, "EmailType"), Some("FWD"));
        assert_eq!(get(&params, "Tag"), Some("issue"));
        assert_eq!(get(&params, "Flag"), Some("100"));
    }

    #[test]
    fn rejects_unknown_tag() {
        let req = SetHostsRequest::new("domain.net").tag("BAD_TAG");
        let e = encode(&req).unwrap_err();
        assert_eq!(e.to_string(), "invalid Tag value: BAD_TAG");
    }
}
