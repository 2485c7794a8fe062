//! # Portal Client
//! 
//! Client side of the contact portal: session state with a persisted login
//! flag, the route guard, the login and contact submission flows, and the
//! HTTP client for the contact backend.

pub mod api;
pub mod app;
pub mod auth;
pub mod error;
pub mod guard;
pub mod notify;
pub mod route;
pub mod session;
pub mod storage;

pub use api::{ContactApi, HttpContactApi};
pub use app::{Layout, PortalApp, SubmissionOutcome};
pub use error::{ClientError, StorageError};
pub use notify::{Notification, Notifier, RecordingNotifier};
pub use route::{NavLink, Page, Route};
pub use session::SessionState;
pub use storage::{FileStorage, FlagStorage, MemoryStorage};
