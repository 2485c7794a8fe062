//! # Portal Infrastructure
//! 
//! Storage implementations of the core repository ports.

pub mod memory;

pub use memory::InMemoryContactRepository;
