//! Host set validation
//!
//! The remote API enforces a compatibility matrix between record types and
//! the domain's email mode, but only reports violations after a round trip and
//! with terse messages. The checks below reproduce that matrix locally.
//!
//! Rules run in a fixed order and the first violation is returned:
//! records are scanned front to back, each through [`RECORD_RULES`], then the
//! whole list goes through [`LIST_RULES`].

use crate::error::ValidationError;
use crate::types::{EmailType, HostRecord, RecordType, SetHostsRequest};

use super::domain::{DomainParts, parse_domain};

/// Lowest TTL the API accepts, in seconds.
pub const MIN_TTL: u32 = 60;
/// Highest TTL the API accepts, in seconds.
pub const MAX_TTL: u32 = 60_000;

/// Record types bound to exactly one email mode.
///
/// A record whose type is listed here is only accepted when the request's
/// email type equals the paired value. Types not listed are allowed under any
/// email mode, blank included.
const EMAIL_BOUND_TYPES: &[(RecordType, EmailType)] = &[
    (RecordType::Mx, EmailType::Mx),
    (RecordType::Mxe, EmailType::Mxe),
];

const HTTP_SCHEMES: &[&str] = &["http://", "https://"];
const IODEF_SCHEMES: &[&str] = &["http://", "https://", "mailto:"];

/// A record that passed validation, with its type parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRecord {
    pub record_type: RecordType,
    pub host_name: String,
    pub address: String,
    /// `None` when the record asked for the default TTL.
    pub ttl: Option<u32>,
    pub mx_pref: Option<u8>,
}

/// A host set ready for encoding.
///
/// Only [`validate`] builds one, so the encoder never sees unchecked input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedHosts {
    pub domain: DomainParts,
    pub email_type: Option<EmailType>,
    pub records: Vec<ValidatedRecord>,
    pub tag: Option<String>,
    pub flag: Option<u8>,
}

/// Everything a per-record rule may look at.
struct RecordContext<'a> {
    index: usize,
    record: &'a HostRecord,
    record_type: RecordType,
    email_type: Option<EmailType>,
}

type RecordRule = fn(&RecordContext<'_>) -> Result<(), ValidationError>;
type ListRule = fn(Option<EmailType>, &[ValidatedRecord]) -> Result<(), ValidationError>;

/// Per-record rules that need the parsed type, in evaluation order.
const RECORD_RULES: &[RecordRule] = &[
    check_ttl,
    check_address,
    check_email_compatibility,
    check_mx_pref,
    check_protocol_prefix,
];

/// Whole-list rules, evaluated after every record passed.
const LIST_RULES: &[ListRule] = &[check_mx_present, check_single_mxe];

/// Validates `req` and returns the parts needed to encode it.
pub fn validate(req: &SetHostsRequest) -> Result<ValidatedHosts, ValidationError> {
    let domain = parse_domain(&req.domain)?;

    let records = req
        .records
        .iter()
        .enumerate()
        .map(|(index, record)| validate_record(index, record, req.email_type))
        .collect::<Result<Vec<_>, _>>()?;

    for rule in LIST_RULES {
        rule(req.email_type, &records)?;
    }

    Ok(ValidatedHosts {
        domain,
        email_type: req.email_type,
        records,
        tag: req.tag.clone(),
        flag: req.flag,
    })
}

fn validate_record(
    index: usize,
    record: &HostRecord,
    email_type: Option<EmailType>,
) -> Result<ValidatedRecord, ValidationError> {
    if record.host_name.is_empty() {
        return Err(ValidationError::MissingHostName { index });
    }

    let record_type = parse_record_type(index, &record.record_type)?;

    let ctx = RecordContext {
        index,
        record,
        record_type,
        email_type,
    };
    for rule in RECORD_RULES {
        rule(&ctx)?;
    }

    Ok(ValidatedRecord {
        record_type,
        host_name: record.host_name.clone(),
        address: record.address.clone(),
        ttl: (record.ttl != 0).then_some(record.ttl),
        mx_pref: record.mx_pref,
    })
}

fn parse_record_type(index: usize, raw: &str) -> Result<RecordType, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::MissingRecordType { index });
    }
    raw.parse::<RecordType>()
        .map_err(|value| ValidationError::InvalidRecordType { index, value })
}

// ============ Record rules ============

fn check_ttl(ctx: &RecordContext<'_>) -> Result<(), ValidationError> {
    let ttl = ctx.record.ttl;
    if ttl != 0 && !(MIN_TTL..=MAX_TTL).contains(&ttl) {
        return Err(ValidationError::InvalidTtl {
            index: ctx.index,
            ttl,
        });
    }
    Ok(())
}

fn check_address(ctx: &RecordContext<'_>) -> Result<(), ValidationError> {
    if ctx.record.address.is_empty() {
        return Err(ValidationError::MissingAddress { index: ctx.index });
    }
    Ok(())
}

fn check_email_compatibility(ctx: &RecordContext<'_>) -> Result<(), ValidationError> {
    let required = EMAIL_BOUND_TYPES
        .iter()
        .find(|(record_type, _)| *record_type == ctx.record_type)
        .map(|(_, email_type)| *email_type);

    match required {
        Some(required) if ctx.email_type != Some(required) => {
            Err(ValidationError::IncompatibleRecordTypeForEmailType {
                index: ctx.index,
                record_type: ctx.record_type,
                email_type: ctx.email_type,
            })
        }
        _ => Ok(()),
    }
}

fn check_mx_pref(ctx: &RecordContext<'_>) -> Result<(), ValidationError> {
    if ctx.record_type == RecordType::Mx && ctx.record.mx_pref.is_none() {
        return Err(ValidationError::MissingMxPref { index: ctx.index });
    }
    Ok(())
}

fn check_protocol_prefix(ctx: &RecordContext<'_>) -> Result<(), ValidationError> {
    let address = ctx.record.address.as_str();
    let (kind, target, schemes) = match ctx.record_type {
        RecordType::Url | RecordType::Url301 | RecordType::Frame => {
            (ctx.record_type.as_str(), address, HTTP_SCHEMES)
        }
        RecordType::Caa => match caa_iodef_target(address) {
            Some(target) => ("CAA iodef", target, IODEF_SCHEMES),
            None => return Ok(()),
        },
        _ => return Ok(()),
    };

    if has_scheme(target, schemes) {
        Ok(())
    } else {
        Err(ValidationError::MissingProtocolPrefix {
            index: ctx.index,
            kind: kind.to_string(),
            address: address.to_string(),
        })
    }
}

/// Returns the value following the `iodef` tag of a CAA address, quotes
/// stripped. The leading flag is optional.
fn caa_iodef_target(address: &str) -> Option<&str> {
    let mut parts = address.split_whitespace();
    parts.find(|part| part.eq_ignore_ascii_case("iodef"))?;
    Some(parts.next().unwrap_or("").trim_matches('"'))
}

fn has_scheme(target: &str, schemes: &[&str]) -> bool {
    schemes.iter().any(|scheme| {
        target
            .get(..scheme.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(scheme))
    })
}

// ============ List rules ============

fn count_of(records: &[ValidatedRecord], record_type: RecordType) -> usize {
    records
        .iter()
        .filter(|r| r.record_type == record_type)
        .count()
}

fn check_mx_present(
    email_type: Option<EmailType>,
    records: &[ValidatedRecord],
) -> Result<(), ValidationError> {
    if email_type == Some(EmailType::Mx) && count_of(records, RecordType::Mx) == 0 {
        return Err(ValidationError::MissingRequiredMxRecord);
    }
    Ok(())
}

fn check_single_mxe(
    email_type: Option<EmailType>,
    records: &[ValidatedRecord],
) -> Result<(), ValidationError> {
    if email_type == Some(EmailType::Mxe) && count_of(records, RecordType::Mxe) != 1 {
        return Err(ValidationError::RequireExactlyOneMxeRecord);
    }
    Ok(())
}
