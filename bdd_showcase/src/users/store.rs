//! The stateful user store and its lifecycle rules.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::{AccessLevel, Role, User};
use crate::error::StoreError;

/// Per-scenario aggregate holding users and lifecycle flags.
///
/// A store starts uninitialized. [`UserStore::initialize_system`] enables
/// [`UserStore::login_as_admin`], which in turn enables
/// [`UserStore::create_user`]. [`UserStore::clear_database`] drops user data
/// but leaves both flags untouched.
///
/// # Examples
///
/// ```
/// use bdd_showcase::{AccessLevel, UserStore};
///
/// # fn main() -> Result<(), bdd_showcase::StoreError> {
/// let mut store = UserStore::new();
/// store.initialize_system();
/// store.login_as_admin()?;
/// store.create_user("alice", "alice@x.com", "admin")?;
///
/// assert_eq!(store.user_status("alice"), Some("active"));
/// assert_eq!(store.access_level("alice"), Some(AccessLevel::Full));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct UserStore {
    users: HashMap<String, User>,
    system_initialized: bool,
    admin_logged_in: bool,
    last_created_username: Option<String>,
}

impl UserStore {
    /// Creates an empty, uninitialized store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the system as initialized. Calling it again has no effect.
    pub fn initialize_system(&mut self) {
        self.system_initialized = true;
        debug!("user management system initialized");
    }

    /// Removes every user and forgets the last created username.
    pub fn clear_database(&mut self) {
        let removed = self.users.len();
        self.users.clear();
        self.last_created_username = None;
        debug!(removed, "user database cleared");
    }

    /// Opens an administrator session.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::SystemNotInitialized`] when
    /// [`UserStore::initialize_system`] has not been called.
    pub fn login_as_admin(&mut self) -> Result<(), StoreError> {
        if !self.system_initialized {
            warn!("administrator login attempted before initialization");
            return Err(StoreError::SystemNotInitialized);
        }
        self.admin_logged_in = true;
        debug!("administrator logged in");
        Ok(())
    }

    /// Creates `username`, silently replacing any existing record with that
    /// name. New users start with status `active` and the active flag set.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AdminSessionRequired`] when no administrator is
    /// logged in.
    pub fn create_user(
        &mut self,
        username: &str,
        email: &str,
        role: impl Into<Role>,
    ) -> Result<(), StoreError> {
        if !self.admin_logged_in {
            warn!(username, "user creation attempted without admin session");
            return Err(StoreError::AdminSessionRequired);
        }
        let user = User::new(username.to_owned(), email.to_owned(), role.into());
        debug!(username, email, role = %user.role(), "user created");
        // Last write wins on duplicate usernames.
        self.users.insert(username.to_owned(), user);
        self.last_created_username = Some(username.to_owned());
        Ok(())
    }

    /// Reports whether `username` is known.
    #[must_use]
    pub fn user_exists(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    /// Returns the full record for `username`.
    #[must_use]
    pub fn user(&self, username: &str) -> Option<&User> {
        self.users.get(username)
    }

    /// Returns the status of `username`, or `None` when unknown.
    #[must_use]
    pub fn user_status(&self, username: &str) -> Option<&str> {
        self.user(username).map(User::status)
    }

    /// Returns the role of `username`, or `None` when unknown.
    #[must_use]
    pub fn user_role(&self, username: &str) -> Option<&Role> {
        self.user(username).map(User::role)
    }

    /// Returns the access level derived from the role of `username`.
    ///
    /// `None` only when the user does not exist; unrecognised roles map to
    /// [`AccessLevel::None`].
    #[must_use]
    pub fn access_level(&self, username: &str) -> Option<AccessLevel> {
        self.user(username).map(User::access_level)
    }

    /// Returns whether `username` is active, or `None` when unknown.
    #[must_use]
    pub fn is_user_active(&self, username: &str) -> Option<bool> {
        self.user(username).map(User::is_active)
    }

    /// Sets the active flag of `username`. Unknown usernames are ignored.
    pub fn set_user_active_status(&mut self, username: &str, active: bool) {
        if let Some(user) = self.users.get_mut(username) {
            user.set_active(active);
            debug!(username, active, "user active flag updated");
        }
    }

    /// Replaces the status text of `username`. Unknown usernames are ignored.
    pub fn set_user_status(&mut self, username: &str, status: impl Into<String>) {
        if let Some(user) = self.users.get_mut(username) {
            user.set_status(status.into());
            debug!(username, status = user.status(), "user status updated");
        }
    }

    /// Returns the username passed to the most recent successful
    /// [`UserStore::create_user`] since construction or the last clear.
    #[must_use]
    pub fn last_created_username(&self) -> Option<&str> {
        self.last_created_username.as_deref()
    }

    /// Iterates over every stored user in no particular order.
    pub fn all_users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    /// Returns the number of distinct stored usernames.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Reports whether [`UserStore::initialize_system`] has been called.
    #[must_use]
    pub const fn is_system_initialized(&self) -> bool {
        self.system_initialized
    }

    /// Reports whether an administrator session is open.
    #[must_use]
    pub const fn is_admin_logged_in(&self) -> bool {
        self.admin_logged_in
    }
}
