//! # Claim Rows
//!
//! A claim row is one editable key/value pair of the offer. Each row carries
//! a synthetic [`RowId`] that is stable for the life of the form and never
//! leaves the process.
//!
//! ## Document Rows
//!
//! Document credential types carry three fixed rows whose id equals their
//! field name: `givenName`, `familyName` and `photo`. These rows are
//! protected: the form view never offers a remove control for them.

use std::fmt;

use uuid::Uuid;

/// Field name of the given-name document row.
pub const GIVEN_NAME: &str = "givenName";
/// Field name of the family-name document row.
pub const FAMILY_NAME: &str = "familyName";
/// Field name of the photo document row.
pub const PHOTO: &str = "photo";

/// Document field names, in head-of-form order.
pub const DOCUMENT_FIELDS: [&str; 3] = [GIVEN_NAME, FAMILY_NAME, PHOTO];

/// Placeholder shown on the document rows.
pub const MANDATORY_PLACEHOLDER: &str = "(mandatory)";

/// Photo URL the photo row starts out with.
pub const DEFAULT_PHOTO_URL: &str =
    "https://i.pinimg.com/564x/64/4d/dc/644ddca56c43e4b01af5aec27e010feb.jpg";

/// Synthetic identifier of a claim row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowId(pub String);

impl RowId {
    /// Generate a fresh random identifier for a user-added row.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Identifier of the photo document row.
    pub fn photo() -> Self {
        Self(PHOTO.to_string())
    }

    /// Whether this id belongs to one of the protected document rows.
    pub fn is_protected(&self) -> bool {
        DOCUMENT_FIELDS.contains(&self.0.as_str())
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RowId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One editable claim of the offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimRow {
    /// Synthetic identifier, unique within the form.
    pub id: RowId,
    /// User-visible label. Becomes the claim key after normalization.
    pub field_name: String,
    /// Current value.
    pub value: String,
}

impl ClaimRow {
    /// A new user row with an empty value.
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            id: RowId::generate(),
            field_name: field_name.into(),
            value: String::new(),
        }
    }

    /// Whether this row is one of the protected document rows.
    pub fn is_protected(&self) -> bool {
        self.id.is_protected()
    }

    /// Placeholder text shown while the value is empty.
    pub fn placeholder(&self) -> Option<&'static str> {
        self.is_protected().then_some(MANDATORY_PLACEHOLDER)
    }
}

/// The three document rows with their default values.
pub fn document_rows() -> Vec<ClaimRow> {
    DOCUMENT_FIELDS
        .iter()
        .map(|field| ClaimRow {
            id: RowId::from(*field),
            field_name: field.to_string(),
            value: if *field == PHOTO {
                DEFAULT_PHOTO_URL.to_string()
            } else {
                String::new()
            },
        })
        .collect()
}
