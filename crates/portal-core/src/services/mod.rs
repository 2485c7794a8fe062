//! Domain services (business logic)

pub mod contact_service;

pub use contact_service::ContactService;
