//! Contact repository trait (port)

use async_trait::async_trait;
use crate::domain::{ContactRecord, NewContact};
use crate::error::DomainError;

/// Append-only store of contact records.
///
/// Implementations keep records unique by id and in insertion order, and make
/// each append atomic with respect to concurrent callers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Assigns a new id, appends the record and returns it.
    async fn append(&self, contact: NewContact) -> Result<ContactRecord, DomainError>;

    /// Snapshot of every record in insertion order.
    async fn list_all(&self) -> Result<Vec<ContactRecord>, DomainError>;
}
