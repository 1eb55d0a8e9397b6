//! Client configuration

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::{NamecheapError, Result};

pub const ENV_USERNAME: &str = "NAMECHEAP_USERNAME";
pub const ENV_API_USER: &str = "NAMECHEAP_API_USER";
pub const ENV_API_KEY: &str = "NAMECHEAP_API_KEY";
pub const ENV_USE_SANDBOX: &str = "NAMECHEAP_USE_SANDBOX";

/// Account credentials and endpoint selection.
///
/// `client_ip` must be whitelisted for API access in the account settings.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientOptions {
    pub user_name: String,
    pub api_user: String,
    pub api_key: String,
    pub client_ip: String,
    #[serde(default)]
    pub use_sandbox: bool,
}

impl ClientOptions {
    /// Reads credentials from the `NAMECHEAP_*` environment variables.
    ///
    /// The sandbox endpoint is used unless `NAMECHEAP_USE_SANDBOX` is `false`
    /// (any case).
    pub fn from_env(client_ip: impl Into<String>) -> Result<Self> {
        Self::from_lookup(client_ip, |key| env::var(key).ok())
    }

    fn from_lookup(
        client_ip: impl Into<String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| NamecheapError::InvalidConfig {
                    field: key.to_string(),
                    detail: "environment variable is not set".to_string(),
                })
        };

        let options = Self {
            user_name: required(ENV_USERNAME)?,
            api_user: required(ENV_API_USER)?,
            api_key: required(ENV_API_KEY)?,
            client_ip: client_ip.into(),
            use_sandbox: lookup(ENV_USE_SANDBOX)
                .is_none_or(|v| !v.trim().eq_ignore_ascii_case("false")),
        };
        options.check()?;
        Ok(options)
    }

    /// Fails with [`NamecheapError::InvalidConfig`] on the first blank field.
    pub fn check(&self) -> Result<()> {
        for (field, value) in [
            ("user_name", &self.user_name),
            ("api_user", &self.api_user),
            ("api_key", &self.api_key),
            ("client_ip", &self.client_ip),
        ] {
            if value.trim().is_empty() {
                return Err(NamecheapError::InvalidConfig {
                    field: field.to_string(),
                    detail: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientOptions")
            .field("user_name", &self.user_name)
            .field("api_user", &self.api_user)
            .field("api_key", &"***")
            .field("client_ip", &self.client_ip)
            .field("use_sandbox", &self.use_sandbox)
            .finish()
    }
}
