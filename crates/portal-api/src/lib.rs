//! # Portal API
//! 
//! HTTP handlers, DTOs, error responses and the router for the contact backend.

pub mod handlers;
pub mod dto;
pub mod error;
pub mod response;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
