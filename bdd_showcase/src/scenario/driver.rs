//! Step-level operations for the user-management scenarios.

use tracing::{debug, info};

use super::NewUser;
use crate::config::SuiteConfig;
use crate::error::{AssertionFailure, StepError, StoreError};
use crate::users::{AccessLevel, Role, User, UserStore};

/// Owns the store for one scenario and exposes one method per phrase.
///
/// Each scenario gets a fresh driver, so nothing leaks between scenarios.
#[derive(Debug, Default)]
pub struct ScenarioDriver {
    store: UserStore,
    config: SuiteConfig,
}

impl ScenarioDriver {
    /// Creates a driver with an empty store and the given settings.
    #[must_use]
    pub fn new(config: SuiteConfig) -> Self {
        Self {
            store: UserStore::new(),
            config,
        }
    }

    /// Read-only access to the underlying store.
    #[must_use]
    pub const fn store(&self) -> &UserStore {
        &self.store
    }

    /// Settings used to fill in defaults for abbreviated phrases.
    #[must_use]
    pub const fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// "the user management system is initialized"
    pub fn initialize_system(&mut self) {
        self.store.initialize_system();
        info!("user management system initialized");
    }

    /// "the database is clean"
    pub fn clean_database(&mut self) {
        self.store.clear_database();
        info!("database cleaned");
    }

    /// "I am logged in as an administrator"
    ///
    /// # Errors
    ///
    /// Returns [`StepError::State`] when the system is not initialized.
    pub fn log_in_as_admin(&mut self) -> Result<(), StepError> {
        self.store.login_as_admin()?;
        info!("logged in as administrator");
        Ok(())
    }

    /// "I create a user with username X and email Y"; the role comes from
    /// [`SuiteConfig::default_role`].
    ///
    /// # Errors
    ///
    /// Returns [`StepError::State`] without an administrator session.
    pub fn create_user_with_email(&mut self, username: &str, email: &str) -> Result<(), StepError> {
        let role = Role::from(self.config.default_role.as_str());
        self.store.create_user(username, email, role)?;
        info!(username, email, "created user");
        Ok(())
    }

    /// "I create a user with username X and role R"; the email is derived
    /// as `X@<email_domain>`.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::State`] without an administrator session.
    pub fn create_user_with_role(&mut self, username: &str, role: &str) -> Result<(), StepError> {
        let email = self.config.email_for(username);
        self.store.create_user(username, &email, role)?;
        info!(username, role, "created user");
        Ok(())
    }

    /// "I create the following users:"
    ///
    /// Rows are applied in order: each row creates its user, then sets the
    /// active flag. Returns the number of rows applied.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::State`] without an administrator session. Rows
    /// before a failing row stay applied.
    pub fn create_users_from_table(
        &mut self,
        rows: impl IntoIterator<Item = NewUser>,
    ) -> Result<usize, StepError> {
        let mut applied = 0;
        for row in rows {
            let NewUser {
                username,
                email,
                role,
                active,
            } = row;
            self.store.create_user(&username, &email, role.as_str())?;
            self.store.set_user_active_status(&username, active);
            debug!(%username, %email, %role, active, "created user from row");
            applied += 1;
        }
        info!(rows = applied, "created users from data table");
        Ok(applied)
    }

    /// "the user X should exist in the system"
    ///
    /// # Errors
    ///
    /// Returns [`StepError::Assertion`] when the user is unknown.
    pub fn assert_user_exists(&self, username: &str) -> Result<(), StepError> {
        if self.store.user_exists(username) {
            return Ok(());
        }
        Err(AssertionFailure::new(
            format!("existence of user '{username}'"),
            "present",
            Some("absent".to_owned()),
        )
        .into())
    }

    /// "the user should have status S", checked against the last created
    /// user.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::Assertion`] on mismatch or when no user has been
    /// created.
    pub fn assert_last_user_status(&self, expected: &str) -> Result<(), StepError> {
        let actual = self
            .store
            .last_created_username()
            .and_then(|username| self.store.user_status(username));
        expect_equal("status of the last created user", expected, actual)
    }

    /// "the user X should have role R"
    ///
    /// # Errors
    ///
    /// Returns [`StepError::Assertion`] on mismatch or when the user is
    /// unknown.
    pub fn assert_user_role(&self, username: &str, expected: &str) -> Result<(), StepError> {
        let actual = self.store.user_role(username).map(Role::as_str);
        expect_equal(&format!("role of user '{username}'"), expected, actual)
    }

    /// "the user X should have email E"
    ///
    /// # Errors
    ///
    /// Returns [`StepError::Assertion`] on mismatch or when the user is
    /// unknown.
    pub fn assert_user_email(&self, username: &str, expected: &str) -> Result<(), StepError> {
        let actual = self.store.user(username).map(User::email);
        expect_equal(&format!("email of user '{username}'"), expected, actual)
    }

    /// "the user should have access level L", checked against the last
    /// created user.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::Assertion`] on mismatch or when no user has been
    /// created.
    pub fn assert_last_user_access_level(&self, expected: &str) -> Result<(), StepError> {
        let actual = self
            .store
            .last_created_username()
            .and_then(|username| self.store.access_level(username))
            .map(AccessLevel::as_str);
        expect_equal("access level of the last created user", expected, actual)
    }

    /// "all users should be created successfully"
    ///
    /// # Errors
    ///
    /// Returns [`StepError::Assertion`] when the store is empty.
    pub fn assert_users_created(&self) -> Result<(), StepError> {
        let count = self.store.all_users().count();
        if count > 0 {
            return Ok(());
        }
        Err(AssertionFailure::new(
            "created users",
            "at least one",
            Some(count.to_string()),
        )
        .into())
    }

    /// "there should be N users in the system"
    ///
    /// # Errors
    ///
    /// Returns [`StepError::Assertion`] when the count differs.
    pub fn assert_user_count(&self, expected: usize) -> Result<(), StepError> {
        let actual = self.store.user_count();
        if actual == expected {
            return Ok(());
        }
        Err(AssertionFailure::new(
            "user count",
            expected.to_string(),
            Some(actual.to_string()),
        )
        .into())
    }

    /// "the user X should be active" / "the user X should be inactive"
    ///
    /// # Errors
    ///
    /// Returns [`StepError::Assertion`] on mismatch or when the user is
    /// unknown.
    pub fn assert_user_active(&self, username: &str, expected: bool) -> Result<(), StepError> {
        let actual = self.store.is_user_active(username).map(activity);
        expect_equal(
            &format!("activity of user '{username}'"),
            activity(expected),
            actual,
        )
    }

    /// "creating the user X without an admin session is rejected"
    ///
    /// Attempts the creation only while no administrator session is open,
    /// so a passing check never adds a user.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::Assertion`] when an administrator session is open
    /// or the store accepts the creation.
    pub fn assert_create_rejected(&mut self, username: &str) -> Result<(), StepError> {
        let subject = format!("creation of user '{username}'");
        if self.store.is_admin_logged_in() {
            return Err(AssertionFailure::new(
                subject,
                "rejected",
                Some("admin session open".to_owned()),
            )
            .into());
        }
        let email = self.config.email_for(username);
        let role = Role::from(self.config.default_role.as_str());
        match self.store.create_user(username, &email, role) {
            Err(StoreError::AdminSessionRequired) => Ok(()),
            Err(other) => Err(other.into()),
            Ok(()) => {
                let found = Some("accepted".to_owned());
                Err(AssertionFailure::new(subject, "rejected", found).into())
            }
        }
    }
}

const fn activity(active: bool) -> &'static str {
    if active { "active" } else { "inactive" }
}

fn expect_equal(subject: &str, expected: &str, actual: Option<&str>) -> Result<(), StepError> {
    if actual == Some(expected) {
        return Ok(());
    }
    let found = actual.map(str::to_owned);
    Err(AssertionFailure::new(subject, expected, found).into())
}
