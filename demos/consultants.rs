//! Promoter API example listing consultants, creating an invite and pausing a consultant.
//!
//! Run with tracing enabled:
//! ```sh
//! PROMOTER_API_TOKEN=... CONSULTANT_API_TOKEN=... \
//!   RUST_LOG=debug,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off \
//!   cargo run --example consultants --features tracing
//! ```
//!
//! Set `PROMOTER_API_HOST` to run against a host other than the production endpoint.

use std::env;

use promoter_client_sdk::promoter::types::{
    ConsultantStatus, ConsultantsRequest, InviteRequest, StatusChangeRequest,
};
use promoter_client_sdk::promoter::{Client, DEFAULT_HOST};
use tracing::{debug, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let host = env::var("PROMOTER_API_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_owned());
    let client = Client::new(&host, env::var("PROMOTER_API_TOKEN")?)?;

    let request = ConsultantsRequest::parse("rating", [("chat", "on"), ("premium", "off")])?;
    match client.list_consultants(&request).await {
        Ok(consultants) => {
            info!(endpoint = "list_consultants", count = consultants.len());
            for consultant in &consultants {
                info!(endpoint = "list_consultants", consultant = %consultant);
            }
        }
        Err(e) => debug!(endpoint = "list_consultants", error = %e),
    }

    let invite = InviteRequest::builder()
        .profile_name("Jane")
        .rate_in_euro_cents(1000)
        .note("Created from the consultants example")
        .build();
    match client.create_consultant_invite(&invite).await {
        Ok(url) if url.is_empty() => info!(endpoint = "create_invite", "invite not created"),
        Ok(url) => info!(endpoint = "create_invite", registration_url = %url),
        Err(e) => debug!(endpoint = "create_invite", error = %e),
    }

    if let Ok(consultant_token) = env::var("CONSULTANT_API_TOKEN") {
        let change = StatusChangeRequest::builder()
            .consultant_token(consultant_token)
            .status(ConsultantStatus::Paused)
            .build();
        match client.change_consultant_status(&change).await {
            Ok(changed) => info!(endpoint = "change_status", changed),
            Err(e) => debug!(endpoint = "change_status", kind = ?e.kind(), error = %e),
        }
    }

    Ok(())
}
