// ============================================================================
// Portal Core - Contact Service
// File: crates/portal-core/src/services/contact_service.rs
// ============================================================================
//! Contact submission service in front of the record store

use std::sync::Arc;
use tracing::{info, error};

use portal_shared::utils::mask_email;

use crate::domain::{ContactRecord, NewContact};
use crate::error::DomainError;
use crate::repositories::ContactRepository;

/// Handles contact submissions and listings
pub struct ContactService<R: ContactRepository + ?Sized> {
    contact_repo: Arc<R>,
}

impl<R: ContactRepository + ?Sized> ContactService<R> {
    pub fn new(contact_repo: Arc<R>) -> Self {
        Self { contact_repo }
    }

    /// Store a submission and return the created record
    pub async fn submit(&self, contact: NewContact) -> Result<ContactRecord, DomainError> {
        let masked = mask_email(&contact.email);

        let record = self.contact_repo.append(contact).await.map_err(|e| {
            error!("Failed to store contact from {}: {}", masked, e);
            e
        })?;

        info!("Contact {} stored from {}", record.id, masked);
        Ok(record)
    }

    /// All records in submission order
    pub async fn list(&self) -> Result<Vec<ContactRecord>, DomainError> {
        let records = self.contact_repo.list_all().await?;
        info!("Listing {} contact records", records.len());
        Ok(records)
    }
}
