// ============================================================================
// Portal Client - Application Shell
// File: crates/portal-client/src/app.rs
// ============================================================================
//! The client application root: owns the session and wires the guard, the
//! login flow and the contact submission flow together.

use portal_core::ContactRecord;
use portal_shared::utils::mask_email;
use tracing::{debug, info, warn};

use crate::api::ContactApi;
use crate::auth::verify_credentials;
use crate::error::ClientError;
use crate::guard;
use crate::notify::{Notification, Notifier};
use crate::route::{NavLink, Route};
use crate::session::SessionState;
use crate::storage::FlagStorage;

pub const SITE_TITLE: &str = "My Website";

/// Result of a contact form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Submitted(ContactRecord),
    /// The backend rejected the request or could not be reached; the form is kept.
    Failed,
    /// The contact form is not the current view, nothing was sent.
    FormNotShown,
}

/// Which chrome surrounds the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub show_header: bool,
    pub show_navigation: bool,
    pub show_logout: bool,
}

pub struct PortalApp<S: FlagStorage, A: ContactApi, N: Notifier> {
    session: SessionState<S>,
    api: A,
    notifier: N,
    location: Route,
}

impl<S: FlagStorage, A: ContactApi, N: Notifier> PortalApp<S, A, N> {
    pub fn new(storage: S, api: A, notifier: N) -> Self {
        Self {
            session: SessionState::new(storage),
            api,
            notifier,
            location: Route::Login,
        }
    }

    /// Restores the persisted login state and opens `initial_path`.
    pub fn start(&mut self, initial_path: &str) -> Route {
        self.session.check_login_status();
        self.navigate(initial_path)
    }

    /// Runs the route guard for `path` and moves to the resolved view.
    pub fn navigate(&mut self, path: &str) -> Route {
        let route = guard::resolve(self.session.is_logged_in(), path);
        if Route::from_path(path) != Some(route) {
            debug!("Redirecting {} to {}", path, route);
        }
        self.location = route;
        route
    }

    pub fn follow_link(&mut self, link: NavLink) -> Route {
        self.session.set_current_page(link.label());
        self.navigate(link.route().path())
    }

    /// Checks the credentials typed into the session.
    ///
    /// On success the session is logged in and the home view opens. On failure
    /// the user is notified and nothing else changes.
    pub fn login(&mut self) -> Result<bool, ClientError> {
        if !verify_credentials(self.session.username(), self.session.password()) {
            warn!("Login rejected for user {:?}", self.session.username());
            self.notifier.notify(Notification::InvalidCredentials);
            return Ok(false);
        }

        self.session.set_is_logged_in(true)?;
        info!("User {:?} logged in", self.session.username());
        self.navigate(Route::Home.path());
        Ok(true)
    }

    pub fn logout(&mut self) -> Result<(), ClientError> {
        self.session.logout()?;
        self.navigate(Route::Login.path());
        Ok(())
    }

    /// Sends the contact form to the backend.
    ///
    /// Success clears the form; failure leaves it filled so the user can retry.
    pub async fn submit_contact(&mut self) -> SubmissionOutcome {
        if self.location != Route::ContactForm {
            debug!("Submission ignored, current view is {}", self.location);
            return SubmissionOutcome::FormNotShown;
        }

        let contact = self.session.contact_form();
        match self.api.create_contact(&contact).await {
            Ok(record) => {
                info!("Contact {} submitted for {}", record.id, mask_email(&record.email));
                self.notifier.notify(Notification::SubmissionSucceeded);
                self.session.reset_form();
                SubmissionOutcome::Submitted(record)
            }
            Err(e) => {
                warn!("Contact submission failed: {}", e);
                self.notifier.notify(Notification::SubmissionFailed);
                SubmissionOutcome::Failed
            }
        }
    }

    pub async fn list_contacts(&self) -> Result<Vec<ContactRecord>, ClientError> {
        self.api.list_contacts().await
    }

    pub fn layout(&self) -> Layout {
        let logged_in = self.session.is_logged_in();
        Layout {
            show_header: logged_in,
            show_navigation: logged_in,
            show_logout: logged_in,
        }
    }

    pub fn location(&self) -> Route {
        self.location
    }

    pub fn session(&self) -> &SessionState<S> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionState<S> {
        &mut self.session
    }

    pub fn into_storage(self) -> S {
        self.session.into_storage()
    }
}
