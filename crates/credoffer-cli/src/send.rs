//! # Send Subcommand
//!
//! Builds a credential offer from command-line flags and submits it.
//!
//! The form is assembled by replaying the same edits the interactive
//! session performs: select the type, then add one row per `--claim`. A
//! claim named after a document field fills the document row instead of
//! adding a second one.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use credoffer_client::{submit, OfferRequest, OfferResponse};
use credoffer_form::{CredentialType, FormState, DEFAULT_RENDER_AS};

/// Arguments for the `credoffer send` subcommand.
#[derive(Args, Debug)]
pub struct SendArgs {
    /// Credential type to offer.
    #[arg(
        long = "type",
        value_name = "TYPE",
        default_value_t = CredentialType::ProofOfIdCredentialDemo
    )]
    pub credential_type: CredentialType,

    /// Credential name.
    #[arg(long, default_value = "")]
    pub name: String,

    /// Render mode passed to the service.
    #[arg(long, default_value = DEFAULT_RENDER_AS)]
    pub render_as: String,

    /// A claim as `FIELD=VALUE`. Repeat for more claims.
    #[arg(long = "claim", value_name = "FIELD=VALUE", value_parser = parse_claim)]
    pub claims: Vec<(String, String)>,

    /// Print the request body instead of sending it.
    #[arg(long)]
    pub dry_run: bool,
}

/// Parse a `FIELD=VALUE` claim. The value may be empty; the field may not.
pub fn parse_claim(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((field, _)) if field.is_empty() => {
            Err(format!("claim `{raw}` has an empty field name"))
        }
        Some((field, value)) => Ok((field.to_string(), value.to_string())),
        None => Err(format!("claim `{raw}` is not of the form FIELD=VALUE")),
    }
}

/// Assemble the form described by `args`.
pub fn build_form(args: &SendArgs) -> FormState {
    let mut form = FormState::new();
    form.set_credential_type(args.credential_type);
    form.set_name(args.name.as_str());
    form.set_render_as(args.render_as.as_str());

    for (field, value) in &args.claims {
        let id = match form.row_by_field_name(field).filter(|r| r.is_protected()) {
            Some(row) => row.id.clone(),
            None => match form.add_row(field) {
                Some(id) => id,
                None => continue,
            },
        };
        form.update_row(&id, value.as_str());
    }
    form
}

/// Write a service response for a human reader.
pub fn write_response(out: &mut impl Write, resp: &OfferResponse) -> std::io::Result<()> {
    if let Some(qr) = &resp.qr {
        writeln!(out, "qr: {qr}")?;
    }
    match resp.err.as_deref() {
        Some(err) if !err.is_empty() => writeln!(out, "err: {err}"),
        _ => Ok(()),
    }
}

/// Execute the send subcommand.
///
/// Returns exit code 1 when the service reports an error in the response.
pub async fn run_send(
    args: &SendArgs,
    service_url: Option<&str>,
    out: &mut impl Write,
) -> Result<u8> {
    let form = build_form(args);

    if args.dry_run {
        let body = serde_json::to_string_pretty(&OfferRequest::from_form(&form))
            .context("failed to render request body")?;
        writeln!(out, "{body}")?;
        return Ok(0);
    }

    let client = crate::service_client(service_url)?;
    let resp = submit(&form, &client)
        .await
        .context("credential offer failed")?;
    write_response(out, &resp)?;

    Ok(match resp.err.as_deref() {
        Some(err) if !err.is_empty() => 1,
        _ => 0,
    })
}
