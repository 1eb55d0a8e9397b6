//! Namecheap XML response types

use serde::{Deserialize, Deserializer, Serialize};

// ============ XML envelope ============

/// `<ApiResponse>` root element, shared by every command.
///
/// Elements the client has no use for (`RequestedCommand`, `Server`,
/// `ExecutionTime`, ...) are skipped.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiEnvelope {
    #[serde(rename = "@Status", default)]
    pub status: String,
    #[serde(rename = "Errors", default)]
    pub errors: ErrorList,
    #[serde(rename = "Warnings", default)]
    pub warnings: WarningList,
    #[serde(rename = "CommandResponse")]
    pub command_response: Option<CommandResponse>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorList {
    #[serde(rename = "Error", default)]
    pub items: Vec<NumberedMessage>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WarningList {
    #[serde(rename = "Warning", default)]
    pub items: Vec<NumberedMessage>,
}

/// `<Error Number="...">text</Error>`, warnings share the shape.
#[derive(Debug, Deserialize)]
pub(crate) struct NumberedMessage {
    #[serde(rename = "@Number", default)]
    pub number: String,
    #[serde(rename = "$text", default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommandResponse {
    #[serde(rename = "@Type", default)]
    pub command_type: String,
    #[serde(rename = "DomainDNSSetHostsResult")]
    pub set_hosts: Option<SetHostsResultNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SetHostsResultNode {
    #[serde(rename = "@Domain", default)]
    pub domain: String,
    #[serde(rename = "@EmailType")]
    pub email_type: Option<String>,
    #[serde(rename = "@IsSuccess", default, deserialize_with = "lenient_bool")]
    pub is_success: bool,
    #[serde(rename = "Warnings", default)]
    pub warnings: WarningList,
}

/// Boolean attribute in any spelling the API has been seen to use
/// (`true`, `True`, `TRUE`, `t`, `1` and their false counterparts).
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim() {
        "1" | "t" | "T" | "true" | "True" | "TRUE" => Ok(true),
        "0" | "f" | "F" | "false" | "False" | "FALSE" => Ok(false),
        other => Err(serde::de::Error::invalid_value(
            serde::de::Unexpected::Str(other),
            &"a boolean",
        )),
    }
}

// ============ Public result ============

/// Outcome of a `setHosts` call as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainDnsSetHostsResult {
    pub domain: String,
    /// Email type the server applied, as spelled by the server.
    pub email_type: Option<String>,
    pub is_success: bool,
    /// Result-level warnings, rendered `"<message> (<number>)"`.
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl From<SetHostsResultNode> for DomainDnsSetHostsResult {
    fn from(node: SetHostsResultNode) -> Self {
        Self {
            domain: node.domain,
            email_type: node.email_type.filter(|s| !s.is_empty()),
            is_success: node.is_success,
            warnings: node.warnings.items.iter().map(render_message).collect(),
        }
    }
}

pub(crate) fn render_message(entry: &NumberedMessage) -> String {
    let message = entry.message.trim();
    if entry.number.is_empty() {
        message.to_string()
    } else {
        format!("{message} ({})", entry.number)
    }
}
