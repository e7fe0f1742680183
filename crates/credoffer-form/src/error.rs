//! Form error types.

use thiserror::Error;

/// Errors raised while interpreting form input.
///
/// Row edits never fail; only parsing user-supplied values can.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// The credential type name does not match any known type.
    #[error("unknown credential type: {0}")]
    UnknownCredentialType(String),
}
