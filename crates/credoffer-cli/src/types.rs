//! # Types Subcommand
//!
//! Lists the credential types an offer can be issued as.

use std::io::Write;

use anyhow::Result;

use credoffer_form::CredentialType;

/// Write one line per credential type, marking document types.
pub fn run_types(out: &mut impl Write) -> Result<u8> {
    for t in CredentialType::ALL {
        let kind = if t.is_document() { "document" } else { "plain" };
        writeln!(out, "{t}\t{kind}")?;
    }
    Ok(0)
}
