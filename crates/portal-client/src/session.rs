// ============================================================================
// Portal Client - Session State
// File: crates/portal-client/src/session.rs
// ============================================================================
//! Single source of truth for the client: login flag and form fields

use std::fmt;

use portal_core::NewContact;
use tracing::{debug, info};

use crate::error::StorageError;
use crate::storage::FlagStorage;

/// Storage key of the persisted login flag.
pub const LOGIN_FLAG_KEY: &str = "isLoggedIn";
/// Only this exact stored value counts as logged in.
pub const LOGIN_FLAG_VALUE: &str = "true";
pub const DEFAULT_PAGE: &str = "Home";

/// Client session state. Mutated only through its own methods.
///
/// `is_logged_in` mirrors the persisted login flag: every login transition
/// writes or removes the flag first and only then updates the in-memory value.
pub struct SessionState<S: FlagStorage> {
    storage: S,
    is_logged_in: bool,
    current_page: String,
    username: String,
    password: String,
    name: String,
    email: String,
    message: String,
}

impl<S: FlagStorage> SessionState<S> {
    /// Fresh state, logged out until [`check_login_status`](Self::check_login_status) runs.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            is_logged_in: false,
            current_page: DEFAULT_PAGE.to_string(),
            username: String::new(),
            password: String::new(),
            name: String::new(),
            email: String::new(),
            message: String::new(),
        }
    }

    pub fn set_is_logged_in(&mut self, logged_in: bool) -> Result<(), StorageError> {
        if logged_in {
            self.storage.set_item(LOGIN_FLAG_KEY, LOGIN_FLAG_VALUE)?;
        } else {
            self.storage.remove_item(LOGIN_FLAG_KEY)?;
        }
        self.is_logged_in = logged_in;
        debug!(logged_in, "login flag updated");
        Ok(())
    }

    /// Reloads the login state from storage; the stored flag is ground truth.
    pub fn check_login_status(&mut self) {
        self.is_logged_in =
            self.storage.get_item(LOGIN_FLAG_KEY).as_deref() == Some(LOGIN_FLAG_VALUE);
        debug!(logged_in = self.is_logged_in, "login status restored");
    }

    /// Idempotent.
    pub fn logout(&mut self) -> Result<(), StorageError> {
        self.storage.remove_item(LOGIN_FLAG_KEY)?;
        self.is_logged_in = false;
        info!("Logged out");
        Ok(())
    }

    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in
    }

    pub fn current_page(&self) -> &str {
        &self.current_page
    }

    pub fn set_current_page(&mut self, page: impl Into<String>) {
        self.current_page = page.into();
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Clears the contact form fields. Credentials are left alone.
    pub fn reset_form(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    /// Current contact form fields as a submission.
    pub fn contact_form(&self) -> NewContact {
        NewContact::new(self.name.clone(), self.email.clone(), self.message.clone())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

impl<S: FlagStorage> fmt::Debug for SessionState<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionState")
            .field("is_logged_in", &self.is_logged_in)
            .field("current_page", &self.current_page)
            .field("username", &self.username)
            .field("password", &"***")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("message", &self.message)
            .finish()
    }
}
