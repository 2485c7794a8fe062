//! Request payloads

pub mod contact;

pub use contact::CreateContactRequest;
