//! # Form State
//!
//! The aggregate edited by the offer builder: credential name, credential
//! type, render mode, the pending new-claim label, and the ordered claim
//! rows.
//!
//! ## Type-Switch Policy
//!
//! ```text
//! select document type ──▶ no `givenName` row? ──yes──▶ prepend document rows
//!                                 │
//!                                 no ──▶ rows untouched
//!
//! select ticket type ──▶ drop every row named givenName / familyName / photo
//! ```
//!
//! Switching between the two document types never touches existing rows.
//!
//! ## Lifecycle
//!
//! A fresh form uses the identity document type and therefore starts with
//! the document rows. Nothing resets the form after a submission.

use crate::claims::{build_claims, Claims};
use crate::credential_type::CredentialType;
use crate::row::{document_rows, ClaimRow, RowId, DOCUMENT_FIELDS, GIVEN_NAME};

/// Render mode a fresh form submits with.
pub const DEFAULT_RENDER_AS: &str = "document";

/// Editable state of one credential offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    name: String,
    credential_type: CredentialType,
    pending_label: String,
    render_as: String,
    rows: Vec<ClaimRow>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// A fresh form with default type and, for document types, the
    /// document rows.
    pub fn new() -> Self {
        let credential_type = CredentialType::default();
        let rows = if credential_type.is_document() {
            document_rows()
        } else {
            Vec::new()
        };
        Self {
            name: String::new(),
            credential_type,
            pending_label: String::new(),
            render_as: DEFAULT_RENDER_AS.to_string(),
            rows,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// Credential name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Selected credential type.
    pub fn credential_type(&self) -> CredentialType {
        self.credential_type
    }

    /// Label typed into the new-claim input but not yet added.
    pub fn pending_label(&self) -> &str {
        &self.pending_label
    }

    /// Render mode sent alongside the offer.
    pub fn render_as(&self) -> &str {
        &self.render_as
    }

    /// Claim rows in display order.
    pub fn rows(&self) -> &[ClaimRow] {
        &self.rows
    }

    /// Row with the given id.
    pub fn row(&self, id: &RowId) -> Option<&ClaimRow> {
        self.rows.iter().find(|r| &r.id == id)
    }

    /// First row whose field name equals `field_name`.
    pub fn row_by_field_name(&self, field_name: &str) -> Option<&ClaimRow> {
        self.rows.iter().find(|r| r.field_name == field_name)
    }

    /// Position of the row with the given id.
    pub fn position(&self, id: &RowId) -> Option<usize> {
        self.rows.iter().position(|r| &r.id == id)
    }

    /// Claims map of the current rows.
    pub fn claims(&self) -> Claims {
        build_claims(&self.rows)
    }

    // ── Scalar fields ────────────────────────────────────────────────

    /// Set the credential name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Set the pending new-claim label.
    pub fn set_pending_label(&mut self, label: impl Into<String>) {
        self.pending_label = label.into();
    }

    /// Set the render mode.
    pub fn set_render_as(&mut self, render_as: impl Into<String>) {
        self.render_as = render_as.into();
    }

    // ── Row editor ───────────────────────────────────────────────────

    /// Append a user row labelled `label` and clear the pending label.
    ///
    /// An empty label is a no-op and returns `None`.
    pub fn add_row(&mut self, label: &str) -> Option<RowId> {
        if label.is_empty() {
            return None;
        }
        let row = ClaimRow::new(label);
        let id = row.id.clone();
        self.pending_label.clear();
        self.rows.push(row);
        tracing::debug!(row_id = %id, field_name = label, "claim row added");
        Some(id)
    }

    /// Append a row labelled with the pending label.
    pub fn add_pending_row(&mut self) -> Option<RowId> {
        let label = self.pending_label.clone();
        self.add_row(&label)
    }

    /// Replace the value of the row with the given id.
    ///
    /// Returns `false` and leaves the form untouched if no such row exists.
    pub fn update_row(&mut self, id: &RowId, value: impl Into<String>) -> bool {
        match self.rows.iter_mut().find(|r| &r.id == id) {
            Some(row) => {
                row.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Remove the row with the given id. Returns whether a row was removed.
    pub fn remove_row(&mut self, id: &RowId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| &r.id != id);
        let removed = self.rows.len() != before;
        if removed {
            tracing::debug!(row_id = %id, "claim row removed");
        }
        removed
    }

    // ── Type-switch policy ───────────────────────────────────────────

    /// Select a credential type, adding or dropping the document rows.
    pub fn set_credential_type(&mut self, credential_type: CredentialType) {
        if credential_type.is_document() {
            if !self.rows.iter().any(|r| r.field_name == GIVEN_NAME) {
                // A leftover row holding a document id would collide with the
                // fresh document rows.
                let mut rows = document_rows();
                rows.extend(self.rows.drain(..).filter(|r| !r.is_protected()));
                self.rows = rows;
            }
        } else {
            self.rows
                .retain(|r| !DOCUMENT_FIELDS.contains(&r.field_name.as_str()));
        }
        tracing::debug!(
            from = %self.credential_type,
            to = %credential_type,
            rows = self.rows.len(),
            "credential type selected"
        );
        self.credential_type = credential_type;
    }
}
