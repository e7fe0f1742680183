//! # Credential Types
//!
//! The demo credential types an offer can be issued as. The identity and
//! driver licence types are *document* types: they carry the given name,
//! family name and photo rows. The ticket type carries only user claims.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Credential type of the offer. Serializes as the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CredentialType {
    /// Identity document demo credential.
    #[default]
    ProofOfIdCredentialDemo,
    /// Driver licence demo credential.
    ProofOfDriverLicenceDemo,
    /// Event ticket demo credential.
    ProofOfTicketDemo,
}

impl CredentialType {
    /// All credential types, in the order they are offered for selection.
    pub const ALL: [CredentialType; 3] = [
        Self::ProofOfIdCredentialDemo,
        Self::ProofOfDriverLicenceDemo,
        Self::ProofOfTicketDemo,
    ];

    /// Whether this type requires the document rows.
    pub fn is_document(&self) -> bool {
        matches!(
            self,
            Self::ProofOfIdCredentialDemo | Self::ProofOfDriverLicenceDemo
        )
    }

    /// The wire name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProofOfIdCredentialDemo => "ProofOfIdCredentialDemo",
            Self::ProofOfDriverLicenceDemo => "ProofOfDriverLicenceDemo",
            Self::ProofOfTicketDemo => "ProofOfTicketDemo",
        }
    }
}

impl fmt::Display for CredentialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CredentialType {
    type Err = FormError;

    /// Parses the wire name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| FormError::UnknownCredentialType(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_identity_document() {
        assert_eq!(CredentialType::default(), CredentialType::ProofOfIdCredentialDemo);
        assert!(CredentialType::default().is_document());
    }

    #[test]
    fn document_types() {
        assert!(CredentialType::ProofOfIdCredentialDemo.is_document());
        assert!(CredentialType::ProofOfDriverLicenceDemo.is_document());
        assert!(!CredentialType::ProofOfTicketDemo.is_document());
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(
            "proofofticketdemo".parse::<CredentialType>().unwrap(),
            CredentialType::ProofOfTicketDemo
        );
        assert_eq!(
            " ProofOfDriverLicenceDemo ".parse::<CredentialType>().unwrap(),
            CredentialType::ProofOfDriverLicenceDemo
        );
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "Passport".parse::<CredentialType>().unwrap_err();
        assert_eq!(err, FormError::UnknownCredentialType("Passport".into()));
    }

    #[test]
    fn serializes_as_variant_name() {
        let json = serde_json::to_string(&CredentialType::ProofOfTicketDemo).unwrap();
        assert_eq!(json, "\"ProofOfTicketDemo\"");
    }

    #[test]
    fn display_matches_wire_name() {
        for t in CredentialType::ALL {
            assert_eq!(t.to_string(), t.as_str());
        }
    }
}
