//! Process-lifetime, in-memory stores

pub mod contact_repo_impl;

pub use contact_repo_impl::InMemoryContactRepository;
