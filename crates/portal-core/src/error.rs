//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Contact store unavailable: {0}")]
    StoreUnavailable(String),
}
