//! Namecheap sandbox integration test
//!
//! Needs `NAMECHEAP_USERNAME`, `NAMECHEAP_API_USER`, `NAMECHEAP_API_KEY`,
//! `NAMECHEAP_CLIENT_IP` and `TEST_DOMAIN` (a sandbox domain using Namecheap
//! DNS). Run with `cargo test -- --ignored`.

mod common;

use namecheap_dns::{
    DomainsDns, EmailType, HostRecord, NamecheapClient, RecordType, SetHostsRequest,
};

#[tokio::test]
#[ignore = "requires Namecheap sandbox credentials"]
async fn sandbox_set_hosts() {
    skip_if_no_credentials!(
        "NAMECHEAP_USERNAME",
        "NAMECHEAP_API_USER",
        "NAMECHEAP_API_KEY",
        "NAMECHEAP_CLIENT_IP",
        "TEST_DOMAIN"
    );
    let Some((options, domain)) = common::sandbox_options() else {
        return;
    };

    let client = NamecheapClient::new(options).unwrap();
    let req = SetHostsRequest::new(domain.clone())
        .email_type(EmailType::Mx)
        .record(HostRecord::new(RecordType::A, "@", "192.0.2.1").with_ttl(1800))
        .record(HostRecord::new(RecordType::Txt, "_test", "integration-test").with_ttl(1800))
        .record(
            HostRecord::new(RecordType::Mx, "@", "mail.example.com")
                .with_ttl(1800)
                .with_mx_pref(10),
        );

    let result = client.set_hosts(&req).await.unwrap();
    assert!(result.is_success);
    assert!(result.domain.eq_ignore_ascii_case(&domain));
}
