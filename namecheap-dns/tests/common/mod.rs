//! Shared test helpers

#![allow(dead_code)]

use std::collections::HashMap;
use std::env;
use std::time::Duration;

use namecheap_dns::{
    ClientOptions, EmailType, HostRecord, NamecheapClient, RecordType, RetrySchedule,
    SetHostsRequest,
};
use wiremock::MockServer;

/// Skips the test when an environment variable is missing
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("Skipping test: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

pub const SUCCESS_XML: &str = r#"
    <?xml version="1.0" encoding="utf-8"?>
    <ApiResponse Status="OK" xmlns="http://api.namecheap.com/xml.response">
        <Errors />
        <Warnings />
        <RequestedCommand>namecheap.domains.dns.sethosts</RequestedCommand>
        <CommandResponse Type="namecheap.domains.dns.setHosts">
            <DomainDNSSetHostsResult Domain="domain.net" EmailType="MX" IsSuccess="true">
                <Warnings />
            </DomainDNSSetHostsResult>
        </CommandResponse>
        <Server>PHX01SBAPIEXT05</Server>
        <GMTTimeDifference>--4:00</GMTTimeDifference>
        <ExecutionTime>0.854</ExecutionTime>
    </ApiResponse>
"#;

pub const TWO_ERRORS_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<ApiResponse Status="ERROR" xmlns="http://api.namecheap.com/xml.response">
  <Errors>
    <Error Number="2019166">Domain not found</Error>
    <Error Number="2016166">Domain is not using Namecheap DNS servers</Error>
  </Errors>
  <Warnings />
  <CommandResponse Type="namecheap.domains.dns.setHosts">
    <DomainDNSSetHostsResult Domain="domain.net" IsSuccess="false" />
  </CommandResponse>
</ApiResponse>"#;

pub fn test_options() -> ClientOptions {
    ClientOptions {
        user_name: "user".to_string(),
        api_user: "api-user".to_string(),
        api_key: "api-key".to_string(),
        client_ip: "10.10.10.10".to_string(),
        use_sandbox: true,
    }
}

/// Client pointed at `server` with a millisecond backoff schedule.
pub fn mock_client(server: &MockServer, delays_ms: &[u64]) -> NamecheapClient {
    NamecheapClient::builder(test_options())
        .base_url(format!("{}/xml.response", server.uri()))
        .retry_schedule(RetrySchedule::new(
            delays_ms.iter().copied().map(Duration::from_millis).collect(),
        ))
        .build()
        .unwrap()
}

/// The two-record request used across the HTTP tests.
pub fn sample_request() -> SetHostsRequest {
    SetHostsRequest::new("domain.net")
        .email_type(EmailType::Mx)
        .record(HostRecord::new(RecordType::A, "@", "10.11.12.13").with_ttl(1800))
        .record(
            HostRecord::new(RecordType::Mx, "mail", "super-mail.com")
                .with_ttl(1800)
                .with_mx_pref(10),
        )
}

/// Decodes a form-encoded request body.
pub fn form_fields(request: &wiremock::Request) -> HashMap<String, String> {
    let body = String::from_utf8_lossy(&request.body);
    reqwest::Url::parse(&format!("http://form.invalid/?{body}"))
        .unwrap()
        .query_pairs()
        .into_owned()
        .collect()
}

/// Sandbox credentials, when all of them are set.
pub fn sandbox_options() -> Option<(ClientOptions, String)> {
    let client_ip = env::var("NAMECHEAP_CLIENT_IP").ok()?;
    let domain = env::var("TEST_DOMAIN").ok()?;
    let mut options = ClientOptions::from_env(client_ip).ok()?;
    options.use_sandbox = true;
    Some((options, domain))
}
