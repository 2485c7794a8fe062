// ============================================================================
// Portal API - Contact Handlers
// File: crates/portal-api/src/handlers/contacts.rs
// ============================================================================
//! Contact record HTTP handlers (create, list)

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use portal_core::{ContactRecord, NewContact};

use crate::dto::CreateContactRequest;
use crate::error::ApiError;
use crate::state::AppState;

/// Create handler - POST /contacts
///
/// Responds with the created record as bare JSON.
pub async fn create_contact(
    State(state): State<AppState>,
    payload: Result<Json<CreateContactRequest>, JsonRejection>,
) -> Result<Json<ContactRecord>, ApiError> {
    let Json(request) = payload?;
    let contact = NewContact::try_from(request)?;

    let record = state.contact_service.submit(contact).await?;
    Ok(Json(record))
}

/// List handler - GET /contacts
pub async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactRecord>>, ApiError> {
    let records = state.contact_service.list().await?;
    Ok(Json(records))
}
