//! In-memory user management used by the user-management scenarios.
//!
//! [`UserStore`] owns every [`User`] record plus the two lifecycle flags that
//! gate mutation: the system must be initialized before an administrator can
//! log in, and an administrator session must exist before users can be
//! created. Reads never depend on those flags.

mod role;
mod store;


pub use role::{AccessLevel, CustomRole, Role};
pub use store::UserStore;

/// Status assigned to every freshly created user.
pub const DEFAULT_STATUS: &str = "active";

/// One provisioned identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    username: String,
    email: String,
    role: Role,
    status: String,
    active: bool,
}

impl User {
    pub(crate) fn new(username: String, email: String, role: Role) -> Self {
        Self {
            username,
            email,
            role,
            status: DEFAULT_STATUS.to_owned(),
            active: true,
        }
    }

    /// Returns the unique username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the email address recorded at creation.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the role recorded at creation.
    #[must_use]
    pub const fn role(&self) -> &Role {
        &self.role
    }

    /// Returns the current status text.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Reports whether the account is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Derives the access level from the user's role.
    #[must_use]
    pub const fn access_level(&self) -> AccessLevel {
        self.role.access_level()
    }

    pub(crate) fn set_status(&mut self, status: String) {
        self.status = status;
    }

    pub(crate) const fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}
