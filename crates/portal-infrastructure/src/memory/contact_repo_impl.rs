// ============================================================================
// Portal Infrastructure - In-Memory Contact Repository
// File: crates/portal-infrastructure/src/memory/contact_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use portal_core::domain::{ContactRecord, NewContact};
use portal_core::error::DomainError;
use portal_core::repositories::ContactRepository;

/// Unbounded list of contact records living as long as the process.
#[derive(Default)]
pub struct InMemoryContactRepository {
    records: RwLock<Vec<ContactRecord>>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn append(&self, contact: NewContact) -> Result<ContactRecord, DomainError> {
        let record = ContactRecord::create(contact);

        // The write guard covers the push, so readers never see a partial record.
        let mut records = self.records.write().await;
        records.push(record.clone());
        debug!(id = %record.id, total = records.len(), "contact appended");

        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<ContactRecord>, DomainError> {
        Ok(self.records.read().await.clone())
    }
}
