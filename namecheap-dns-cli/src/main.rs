//! `namecheap-sethosts`: replace the DNS host records of a Namecheap domain
//!
//! Credentials come from `NAMECHEAP_USERNAME`, `NAMECHEAP_API_USER`,
//! `NAMECHEAP_API_KEY` and `NAMECHEAP_USE_SANDBOX`. The client IP is taken from
//! `NAMECHEAP_CLIENT_IP` or looked up through an echo service.
//!
//! Ctrl-C cancels the call, backoff waits included.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use namecheap_dns::{
    ClientOptions, DomainsDns, EmailType, HostRecord, SetHostsRequest, create_provider,
    lookup_client_ip,
};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const ENV_CLIENT_IP: &str = "NAMECHEAP_CLIENT_IP";

#[derive(Parser)]
#[command(
    name = "namecheap-sethosts",
    about = "Replace the DNS host records of a Namecheap domain"
)]
struct Args {
    /// Domain to update, e.g. example.com
    domain: String,

    /// JSON file holding an array of host records
    /// (`recordType`, `hostName`, `address`, optional `ttl` and `mxPref`)
    records: PathBuf,

    /// Email routing mode: MX, MXE, FWD, OX or GMAIL
    #[arg(long)]
    email_type: Option<EmailType>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr, stdout carries the result
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let args = Args::parse();

    match run(args).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            tracing::error!("Server did not report success");
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<bool> {
    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("Interrupt received, cancelling");
                cancel.cancel();
            }
        }
    });

    let records = read_records(&args.records)?;

    let client_ip = match std::env::var(ENV_CLIENT_IP) {
        Ok(ip) if !ip.trim().is_empty() => ip.trim().to_string(),
        _ => lookup_client_ip(&cancel)
            .await
            .context("Failed to look up client IP")?,
    };

    let options = ClientOptions::from_env(client_ip)?;
    let provider = create_provider(options)?;

    let request = build_request(args.domain, args.email_type, records);
    let result = provider
        .set_hosts_with_cancel(&request, &cancel)
        .await
        .with_context(|| format!("setHosts failed for {}", request.domain))?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(result.is_success)
}

fn read_records(path: &Path) -> Result<Vec<HostRecord>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_records(&text).with_context(|| format!("Invalid records file {}", path.display()))
}

fn parse_records(text: &str) -> Result<Vec<HostRecord>> {
    Ok(serde_json::from_str(text)?)
}

fn build_request(
    domain: String,
    email_type: Option<EmailType>,
    records: Vec<HostRecord>,
) -> SetHostsRequest {
    SetHostsRequest {
        domain,
        email_type,
        records,
        ..Default::default()
    }
}
