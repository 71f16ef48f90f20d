//! Simulated notification delivery.
//!
//! Nothing leaves the process: [`Notifier::send`] logs the delivery and keeps
//! the most recent [`Notification`] so scenarios can inspect the response.

use tracing::info;

/// A message addressed to a recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    message: String,
    recipient: String,
}

impl Notification {
    /// Returns the message body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the recipient address.
    #[must_use]
    pub fn recipient(&self) -> &str {
        &self.recipient
    }
}

/// Records notifications instead of delivering them.
#[derive(Debug, Default)]
pub struct Notifier {
    last: Option<Notification>,
}

impl Notifier {
    /// Creates a notifier that has not sent anything yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Sends `message` to `recipient`, replacing the previous notification.
    pub fn send(
        &mut self,
        message: impl Into<String>,
        recipient: impl Into<String>,
    ) -> &Notification {
        let notification = Notification {
            message: message.into(),
            recipient: recipient.into(),
        };
        info!(
            body = notification.message(),
            recipient = notification.recipient(),
            "notification sent"
        );
        self.last.insert(notification)
    }

    /// Returns the last sent notification, if any.
    #[must_use]
    pub const fn last(&self) -> Option<&Notification> {
        self.last.as_ref()
    }

    /// Returns the body of the last sent notification, if any.
    #[must_use]
    pub fn last_message(&self) -> Option<&str> {
        self.last.as_ref().map(Notification::message)
    }

    /// Reports whether a notification was sent and its body contains
    /// `expected`.
    #[must_use]
    pub fn response_contains(&self, expected: &str) -> bool {
        self.last_message()
            .is_some_and(|message| message.contains(expected))
    }
}
