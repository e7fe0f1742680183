//! # credoffer-form — Credential Offer Form State
//!
//! The in-memory model behind the credential offer builder. A developer
//! picks a credential type, names the credential, and edits a list of
//! freeform claim rows; this crate owns that bookkeeping and nothing else.
//!
//! - **Credential types** (`credential_type.rs`): the three demo types and
//!   which of them are *document* types.
//! - **Rows** (`row.rs`): `ClaimRow`, its synthetic `RowId`, and the three
//!   protected document rows.
//! - **Form** (`form.rs`): the row editor and the type-switch policy.
//! - **Claims** (`claims.rs`): reduction of rows into the flat claims map
//!   sent to the issuing service.
//! - **View** (`view.rs`): a read-only projection used to render the form.
//!
//! ## Crate Policy
//!
//! - No I/O. Submission lives in `credoffer-client`.
//! - Mutations are synchronous `&mut self` methods and never fail; lookups
//!   that miss are no-ops.

pub mod claims;
pub mod credential_type;
pub mod error;
pub mod form;
pub mod row;
pub mod view;

pub use claims::{build_claims, claim_key, Claims};
pub use credential_type::CredentialType;
pub use error::FormError;
pub use form::{FormState, DEFAULT_RENDER_AS};
pub use row::{ClaimRow, RowId, DOCUMENT_FIELDS};
pub use view::{FieldView, FormView};
