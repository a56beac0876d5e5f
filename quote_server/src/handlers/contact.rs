//! Contact form echo route.
use axum::extract::rejection::JsonRejection;
use axum::response::Json;
use log::info;
use quote_common::QuoteError;
use quote_common::contact::{ContactMessage, ContactRequest};
use serde::Serialize;

use crate::error::ApiError;

/// Echo of an accepted contact form.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactReceipt {
    /// Acknowledgement sentence.
    pub confirmation: String,
    /// The validated, trimmed form.
    pub contact: ContactMessage,
    /// RFC 3339 time of receipt.
    pub received_at: String,
}

/// POST /contact - Validate and echo a contact form
pub async fn submit_contact(
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ContactReceipt>, ApiError> {
    let Json(request) = payload.map_err(|e| QuoteError::InvalidContact(e.body_text()))?;
    let contact = request.validate()?;
    info!("Contact message received from {}", contact.email);

    Ok(Json(ContactReceipt {
        confirmation: contact.confirmation(),
        contact,
        received_at: chrono::Utc::now().to_rfc3339(),
    }))
}
