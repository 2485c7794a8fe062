//! # Portal Core
//! 
//! Contact record entities, the repository port and the contact service.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
