//! Credential check for the login form.
//!
//! This is a placeholder scheme: a single hard-coded account compared
//! literally. Replace it with delegated authentication before exposing the
//! portal to real users.

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "password";

/// Exact, case-sensitive match against the built-in account.
pub fn verify_credentials(username: &str, password: &str) -> bool {
    username == ADMIN_USERNAME && password == ADMIN_PASSWORD
}
