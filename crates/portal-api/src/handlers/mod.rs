//! HTTP handlers

pub mod contacts;
pub mod health;
