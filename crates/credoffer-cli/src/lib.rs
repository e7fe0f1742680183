//! # credoffer-cli — CLI Tool for Credential Offers
//!
//! Provides the `credoffer` command-line interface.
//!
//! ## Subcommands
//!
//! - `credoffer interactive` — Edit a credential offer form line by line and
//!   send it.
//! - `credoffer send` — Build an offer from flags and send it (or print it
//!   with `--dry-run`).
//! - `credoffer types` — List the credential types.
//!
//! ```bash
//! credoffer send --type ProofOfTicketDemo --name Festival --claim "Seat Number=12A"
//! credoffer --service-url http://issuer.local:9000 interactive
//! ```

pub mod send;
pub mod session;
pub mod types;

use anyhow::{Context, Result};
use credoffer_client::{ServiceClient, ServiceConfig};

/// Build the service client from the environment. A command-line URL
/// replaces `CREDOFFER_SERVICE_URL`.
pub fn service_client(service_url: Option<&str>) -> Result<ServiceClient> {
    let config = ServiceConfig::from_env_with_url(service_url)
        .context("failed to load service configuration")?;
    tracing::debug!(?config, "service configuration loaded");
    ServiceClient::new(config).context("failed to build service client")
}
