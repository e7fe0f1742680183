//! # Credential Offer Submission
//!
//! Turns a [`FormState`] into one `genericCredentialOffer` RPC.
//!
//! ## Submission Steps
//!
//! 1. Look up the photo row by id. A photo row at position 0 counts as
//!    absent.
//! 2. If present, fetch its image and encode it as a data URL. The encoded
//!    value is logged and dropped: the request keeps the original URL.
//! 3. Reduce the rows to the claims map.
//! 4. Send `{ renderAs, name, type, claims }` and hand back the response.
//!
//! Errors from steps 2 and 4 are returned as-is.

use serde::{Deserialize, Serialize};

use credoffer_form::{Claims, CredentialType, FormState, RowId};

use crate::client::ServiceClient;
use crate::error::ServiceError;
use crate::routes::RpcRoute;

/// Body of the `genericCredentialOffer` RPC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferRequest {
    pub render_as: String,
    pub name: String,
    #[serde(rename = "type")]
    pub credential_type: CredentialType,
    pub claims: Claims,
}

impl OfferRequest {
    /// Build the request body from the current form.
    pub fn from_form(form: &FormState) -> Self {
        Self {
            render_as: form.render_as().to_string(),
            name: form.name().to_string(),
            credential_type: form.credential_type(),
            claims: form.claims(),
        }
    }
}

/// Response of the `genericCredentialOffer` RPC.
///
/// Neither field is required; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferResponse {
    /// The scannable offer payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr: Option<String>,
    /// Error reported by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err: Option<String>,
}

/// Position of the photo row, treating position 0 as not found.
pub fn photo_row_index(form: &FormState) -> Option<usize> {
    form.position(&RowId::photo()).filter(|&idx| idx != 0)
}

/// Submit the form as a credential offer.
///
/// The form is not modified and not reset.
pub async fn submit(
    form: &FormState,
    client: &ServiceClient,
) -> Result<OfferResponse, ServiceError> {
    if let Some(idx) = photo_row_index(form) {
        let photo = &form.rows()[idx];
        let img = client.fetch_image_data_url(&photo.value).await?;
        tracing::debug!(url = %photo.value, encoded_len = img.len(), "photo encoded");
    }

    let request = OfferRequest::from_form(form);
    tracing::info!(
        credential_type = %request.credential_type,
        name = %request.name,
        claims = request.claims.len(),
        "submitting credential offer"
    );

    let resp: OfferResponse = client
        .send_rpc(RpcRoute::GenericCredentialOffer, &request)
        .await?;

    match serde_json::to_string_pretty(&resp) {
        Ok(pretty) => tracing::info!("credential offer response:\n{pretty}"),
        Err(e) => tracing::warn!("could not render credential offer response: {e}"),
    }

    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_wire_field_names() {
        let mut form = FormState::new();
        form.set_name("My ID");
        form.update_row(&RowId::from("givenName"), "Ada");
        let value = serde_json::to_value(OfferRequest::from_form(&form)).unwrap();
        assert_eq!(value["renderAs"], "document");
        assert_eq!(value["name"], "My ID");
        assert_eq!(value["type"], "ProofOfIdCredentialDemo");
        assert_eq!(value["claims"]["givenName"], "Ada");
        assert_eq!(value["claims"]["familyName"], "");
        assert_eq!(
            value["claims"]["photo"],
            credoffer_form::row::DEFAULT_PHOTO_URL
        );
    }

    #[test]
    fn photo_at_head_is_not_found() {
        let mut form = FormState::new();
        form.remove_row(&RowId::from("givenName"));
        form.remove_row(&RowId::from("familyName"));
        assert_eq!(form.position(&RowId::photo()), Some(0));
        assert_eq!(photo_row_index(&form), None);
    }

    #[test]
    fn photo_in_default_form_is_found() {
        assert_eq!(photo_row_index(&FormState::new()), Some(2));
    }

    #[test]
    fn ticket_form_has_no_photo() {
        let mut form = FormState::new();
        form.set_credential_type(CredentialType::ProofOfTicketDemo);
        assert_eq!(photo_row_index(&form), None);
    }

    #[test]
    fn response_fields_are_optional() {
        let resp: OfferResponse = serde_json::from_str(r#"{"qr":"abc","extra":1}"#).unwrap();
        assert_eq!(resp.qr.as_deref(), Some("abc"));
        assert_eq!(resp.err, None);
        let resp: OfferResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp, OfferResponse::default());
    }
}
