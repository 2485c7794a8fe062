//! # Portal Core - Domain Module

pub mod contact;

pub use contact::{ContactRecord, NewContact};
