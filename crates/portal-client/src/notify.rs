//! User-facing notifications

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

/// The fixed set of blocking notifications the client can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    InvalidCredentials,
    SubmissionSucceeded,
    SubmissionFailed,
}

impl Notification {
    pub fn message(&self) -> &'static str {
        match self {
            Notification::InvalidCredentials => "Invalid credentials",
            Notification::SubmissionSucceeded => "Data submitted successfully",
            Notification::SubmissionFailed => "Error submitting data",
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Delivers notifications to the user.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Keeps every notification for later inspection; for headless runs.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    seen: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.seen.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(Notification::InvalidCredentials.to_string(), "Invalid credentials");
        assert_eq!(Notification::SubmissionSucceeded.to_string(), "Data submitted successfully");
        assert_eq!(Notification::SubmissionFailed.to_string(), "Error submitting data");
    }

    #[test]
    fn test_recording_notifier_shares_history_across_clones() {
        let notifier = RecordingNotifier::new();
        let handle = notifier.clone();

        notifier.notify(Notification::SubmissionFailed);
        notifier.notify(Notification::SubmissionSucceeded);

        assert_eq!(
            handle.notifications(),
            vec![Notification::SubmissionFailed, Notification::SubmissionSucceeded]
        );
    }
}
