//! Error types shared by the user store and the scenario driver.
//!
//! Store preconditions and scenario assertions fail in different ways: a
//! [`StoreError`] means a step was attempted in the wrong lifecycle state,
//! whereas [`StepError::Assertion`] means the store answered but the answer
//! did not match what the scenario expected.

use std::fmt;

use thiserror::Error;

/// Lifecycle precondition violations raised by [`crate::UserStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// An administrator tried to log in before the system was initialized.
    #[error("system must be initialized before login")]
    SystemNotInitialized,
    /// A user was created without an active administrator session.
    #[error("must be logged in as admin to create users")]
    AdminSessionRequired,
}

/// Expected-versus-actual mismatch reported by an assertion step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionFailure {
    /// What was being checked, for example `role of 'alice'`.
    pub subject: String,
    /// The literal the scenario expected.
    pub expected: String,
    /// What the store actually reported; `None` when nothing was found.
    pub actual: Option<String>,
}

impl AssertionFailure {
    /// Builds a failure for `subject` from the expected and observed values.
    pub fn new(
        subject: impl Into<String>,
        expected: impl Into<String>,
        actual: Option<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            expected: expected.into(),
            actual,
        }
    }
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.actual {
            Some(actual) => write!(
                f,
                "{} mismatch: expected '{}' but got '{actual}'",
                self.subject, self.expected
            ),
            None => write!(
                f,
                "{} mismatch: expected '{}' but found nothing",
                self.subject, self.expected
            ),
        }
    }
}

/// Failure signalled by a scenario step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    /// The store rejected the call because of its lifecycle state.
    #[error(transparent)]
    State(#[from] StoreError),
    /// A `Then`-style check observed a different value.
    #[error("{0}")]
    Assertion(AssertionFailure),
}

impl From<AssertionFailure> for StepError {
    fn from(failure: AssertionFailure) -> Self {
        Self::Assertion(failure)
    }
}
