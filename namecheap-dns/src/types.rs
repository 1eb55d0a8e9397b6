use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// ============ Record Types ============

/// DNS record types accepted by `namecheap.domains.dns.setHosts`.
///
/// Besides plain DNS types the API knows a few registrar-specific ones:
/// `URL`/`URL301` (HTTP redirects), `FRAME` (masked redirect) and `MXE`
/// (mail forwarding to an IP address).
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    #[serde(rename = "A")]
    A,
    #[serde(rename = "AAAA")]
    Aaaa,
    #[serde(rename = "ALIAS")]
    Alias,
    #[serde(rename = "CAA")]
    Caa,
    #[serde(rename = "CNAME")]
    Cname,
    #[serde(rename = "MX")]
    Mx,
    #[serde(rename = "MXE")]
    Mxe,
    #[serde(rename = "NS")]
    Ns,
    #[serde(rename = "TXT")]
    Txt,
    #[serde(rename = "URL")]
    Url,
    #[serde(rename = "URL301")]
    Url301,
    #[serde(rename = "FRAME")]
    Frame,
}

impl RecordType {
    pub const ALL: [Self; 12] = [
        Self::A,
        Self::Aaaa,
        Self::Alias,
        Self::Caa,
        Self::Cname,
        Self::Mx,
        Self::Mxe,
        Self::Ns,
        Self::Txt,
        Self::Url,
        Self::Url301,
        Self::Frame,
    ];

    /// Wire spelling of the type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Alias => "ALIAS",
            Self::Caa => "CAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Mxe => "MXE",
            Self::Ns => "NS",
            Self::Txt => "TXT",
            Self::Url => "URL",
            Self::Url301 => "URL301",
            Self::Frame => "FRAME",
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the exact wire spelling; the API is case-sensitive.
impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

impl From<RecordType> for String {
    fn from(record_type: RecordType) -> Self {
        record_type.as_str().to_string()
    }
}

// ============ Email Types ============

/// Email routing mode of a domain.
///
/// Decides which mail record types a host set may carry: `MX` records only
/// under [`EmailType::Mx`], a single `MXE` record only under [`EmailType::Mxe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EmailType {
    /// User-supplied MX records.
    Mx,
    /// Mail forwarded to a single IP address.
    Mxe,
    /// Namecheap email forwarding.
    Fwd,
    /// Namecheap private email.
    Ox,
    /// Google Workspace.
    Gmail,
}

impl EmailType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mx => "MX",
            Self::Mxe => "MXE",
            Self::Fwd => "FWD",
            Self::Ox => "OX",
            Self::Gmail => "GMAIL",
        }
    }
}

impl std::fmt::Display for EmailType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmailType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MX" => Ok(Self::Mx),
            "MXE" => Ok(Self::Mxe),
            "FWD" => Ok(Self::Fwd),
            "OX" => Ok(Self::Ox),
            "GMAIL" => Ok(Self::Gmail),
            _ => Err(ValidationError::InvalidEmailType {
                value: s.to_string(),
            }),
        }
    }
}

// ============ Host Records ============

/// One DNS record of a host set.
///
/// `record_type` keeps the caller's raw string so that a missing or unknown
/// type is reported by the validator with the record's position instead of
/// failing at deserialization time.
///
/// # TTL
///
/// `0` means "use the registrar default" and is not sent. Any other value
/// must lie within `60..=60000` seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostRecord {
    pub record_type: String,
    pub host_name: String,
    pub address: String,
    #[serde(default)]
    pub ttl: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mx_pref: Option<u8>,
}

impl HostRecord {
    pub fn new(
        record_type: impl Into<String>,
        host_name: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            record_type: record_type.into(),
            host_name: host_name.into(),
            address: address.into(),
            ttl: 0,
            mx_pref: None,
        }
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    #[must_use]
    pub fn with_mx_pref(mut self, mx_pref: u8) -> Self {
        self.mx_pref = Some(mx_pref);
        self
    }
}

/// Arguments of `namecheap.domains.dns.setHosts`.
///
/// The call replaces the whole host set of `domain`. `records` order is kept
/// on the wire: `records[i]` is sent with suffix `i + 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetHostsRequest {
    pub domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_type: Option<EmailType>,
    #[serde(default)]
    pub records: Vec<HostRecord>,
    /// CAA tag passthrough (`issue`, `issuewild` or `iodef`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// CAA flag passthrough.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<u8>,
}

impl SetHostsRequest {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn email_type(mut self, email_type: EmailType) -> Self {
        self.email_type = Some(email_type);
        self
    }

    #[must_use]
    pub fn record(mut self, record: HostRecord) -> Self {
        self.records.push(record);
        self
    }

    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    #[must_use]
    pub fn flag(mut self, flag: u8) -> Self {
        self.flag = Some(flag);
        self
    }
}
