//! # Form View
//!
//! A read-only projection of [`FormState`] carrying everything needed to
//! draw the form: headings, the type selector, one field per claim row, and
//! the new-claim input. `Display` renders it as plain text.

use std::fmt;

use crate::credential_type::CredentialType;
use crate::form::FormState;
use crate::row::{RowId, MANDATORY_PLACEHOLDER};

/// Title of the form.
pub const TITLE: &str = "Custom Credentials";
/// Subtitle of the form.
pub const SUBTITLE: &str = "(For UI testing)";
/// Placeholder of the new-claim input.
pub const NEW_CLAIM_PLACEHOLDER: &str = "e.g. birthDate";

/// One claim row as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub id: RowId,
    pub label: String,
    pub value: String,
    pub placeholder: Option<&'static str>,
    /// Whether a remove control is offered. False for document rows.
    pub removable: bool,
}

/// The whole form as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub type_options: Vec<(CredentialType, bool)>,
    pub credential_name: String,
    pub fields: Vec<FieldView>,
    pub new_claim: String,
    pub render_as: String,
}

impl FormView {
    /// Project the current form state.
    pub fn of(form: &FormState) -> Self {
        let selected = form.credential_type();
        Self {
            type_options: CredentialType::ALL
                .into_iter()
                .map(|t| (t, t == selected))
                .collect(),
            credential_name: form.name().to_string(),
            fields: form
                .rows()
                .iter()
                .map(|row| FieldView {
                    id: row.id.clone(),
                    label: row.field_name.clone(),
                    value: row.value.clone(),
                    placeholder: row.placeholder(),
                    removable: !row.is_protected(),
                })
                .collect(),
            new_claim: form.pending_label().to_string(),
            render_as: form.render_as().to_string(),
        }
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: Option<&'a str>) -> &'a str {
    match (value.is_empty(), placeholder) {
        (true, Some(p)) => p,
        _ => value,
    }
}

impl fmt::Display for FormView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        writeln!(f, "{SUBTITLE}")?;
        writeln!(f)?;
        writeln!(f, "Credential type")?;
        for (t, selected) in &self.type_options {
            let mark = if *selected { 'x' } else { ' ' };
            writeln!(f, "  [{mark}] {t}")?;
        }
        writeln!(f)?;
        writeln!(f, "Credential name")?;
        writeln!(
            f,
            "  > {}",
            or_placeholder(&self.credential_name, Some(MANDATORY_PLACEHOLDER))
        )?;
        writeln!(f)?;
        writeln!(f, "Render as")?;
        writeln!(f, "  > {}", self.render_as)?;
        writeln!(f)?;
        writeln!(f, "Claims")?;
        for field in &self.fields {
            let remove = if field.removable { " (x)" } else { "" };
            writeln!(
                f,
                "  {} [{}]{}: {}",
                field.label,
                field.id,
                remove,
                or_placeholder(&field.value, field.placeholder)
            )?;
        }
        writeln!(f)?;
        writeln!(f, "New claim")?;
        writeln!(
            f,
            "  > {}",
            or_placeholder(&self.new_claim, Some(NEW_CLAIM_PLACEHOLDER))
        )?;
        write!(f, "  [+]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_view_marks_identity_type() {
        let view = FormView::of(&FormState::new());
        assert_eq!(view.type_options.len(), 3);
        assert_eq!(
            view.type_options[0],
            (CredentialType::ProofOfIdCredentialDemo, true)
        );
        assert!(!view.type_options[2].1);
    }

    #[test]
    fn document_fields_are_not_removable() {
        let mut form = FormState::new();
        form.add_row("seat");
        let view = FormView::of(&form);
        let removable: Vec<_> = view.fields.iter().map(|f| f.removable).collect();
        assert_eq!(removable, [false, false, false, true]);
        assert_eq!(view.fields[0].placeholder, Some(MANDATORY_PLACEHOLDER));
        assert_eq!(view.fields[3].placeholder, None);
    }

    #[test]
    fn text_rendering_shows_placeholders() {
        let text = FormView::of(&FormState::new()).to_string();
        assert!(text.starts_with("Custom Credentials\n(For UI testing)"));
        assert!(text.contains("[x] ProofOfIdCredentialDemo"));
        assert!(text.contains("givenName [givenName]: (mandatory)"));
        assert!(text.contains("> e.g. birthDate"));
    }

    #[test]
    fn text_rendering_shows_render_mode() {
        let mut form = FormState::new();
        assert!(FormView::of(&form).to_string().contains("Render as\n  > document\n"));
        form.set_render_as("card");
        assert!(FormView::of(&form).to_string().contains("Render as\n  > card\n"));
    }

    #[test]
    fn text_rendering_marks_removable_rows() {
        let mut form = FormState::new();
        form.set_credential_type(CredentialType::ProofOfTicketDemo);
        let id = form.add_row("seat").unwrap();
        form.update_row(&id, "12A");
        let text = FormView::of(&form).to_string();
        assert!(text.contains(&format!("seat [{id}] (x): 12A")));
        assert!(text.contains("[x] ProofOfTicketDemo"));
    }
}
