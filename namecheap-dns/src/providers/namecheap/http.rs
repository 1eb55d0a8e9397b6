//! Namecheap HTTP request methods

use std::collections::BTreeMap;

use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::utils::log_sanitizer::mask_params;

use super::NamecheapClient;

impl NamecheapClient {
    /// Adds the auth parameters to `params` and POSTs them form-encoded.
    ///
    /// Attempts run through the client's retry executor, so an HTTP 405 is
    /// retried on the backoff schedule. Returns the raw XML body.
    pub(crate) async fn do_xml(
        &self,
        command: &str,
        mut params: BTreeMap<String, String>,
        cancel: &CancellationToken,
    ) -> Result<String> {
        params.insert("ApiUser".to_string(), self.options.api_user.clone());
        params.insert("ApiKey".to_string(), self.options.api_key.clone());
        params.insert("UserName".to_string(), self.options.user_name.clone());
        params.insert("ClientIp".to_string(), self.options.client_ip.clone());
        params.insert("Command".to_string(), command.to_string());

        log::debug!("[namecheap] Request params: {}", mask_params(&params));

        self.retry
            .run(cancel, || {
                let request = self.client.post(&self.base_url).form(&params);
                HttpUtils::execute_request(request, "POST", command)
            })
            .await
    }
}
