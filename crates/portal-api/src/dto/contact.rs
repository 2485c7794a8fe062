//! Contact request payloads

use portal_core::NewContact;
use serde::Deserialize;
use validator::Validate;

use crate::error::ApiError;

/// Body of `POST /contacts`.
///
/// Fields are optional at the serde level so a missing or `null` field is
/// reported by validation as a 400 instead of an extractor rejection.
/// Only presence is checked; empty strings pass.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateContactRequest {
    #[validate(required(message = "name is required"))]
    pub name: Option<String>,

    #[validate(required(message = "email is required"))]
    pub email: Option<String>,

    #[validate(required(message = "message is required"))]
    pub message: Option<String>,
}

impl TryFrom<CreateContactRequest> for NewContact {
    type Error = ApiError;

    fn try_from(request: CreateContactRequest) -> Result<Self, Self::Error> {
        request
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        match (request.name, request.email, request.message) {
            (Some(name), Some(email), Some(message)) => Ok(NewContact { name, email, message }),
            _ => Err(ApiError::BadRequest("name, email and message are required".to_string())),
        }
    }
}
