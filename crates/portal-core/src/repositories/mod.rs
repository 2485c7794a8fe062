//! Repository traits (ports)

pub mod contact_repository;

pub use contact_repository::ContactRepository;

#[cfg(test)]
pub use contact_repository::MockContactRepository;
