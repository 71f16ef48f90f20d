//! Roles and the access levels derived from them.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Role assigned to a user at creation time.
///
/// Unrecognised role names are kept verbatim in [`Role::Other`] so reading a
/// role back always yields the text it was created with. Roles are built
/// through [`Role::from`], so `Other` never carries a recognised name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    /// Full administrative control.
    Admin,
    /// Elevated content moderation rights.
    Moderator,
    /// A regular account.
    User,
    /// A read-only visitor.
    Guest,
    /// Any other role name.
    Other(CustomRole),
}

/// Role name outside the built-in set; only [`Role::from`] creates one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomRole(String);

impl CustomRole {
    /// Returns the role name exactly as it was supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Role {
    /// Returns the role name as written in scenarios.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Moderator => "moderator",
            Self::User => "user",
            Self::Guest => "guest",
            Self::Other(custom) => custom.as_str(),
        }
    }

    /// Derives the access level granted by this role.
    ///
    /// # Examples
    ///
    /// ```
    /// use bdd_showcase::{AccessLevel, Role};
    ///
    /// assert_eq!(Role::Moderator.access_level(), AccessLevel::Elevated);
    /// assert_eq!(Role::from("auditor").access_level(), AccessLevel::None);
    /// ```
    #[must_use]
    pub const fn access_level(&self) -> AccessLevel {
        match self {
            Self::Admin => AccessLevel::Full,
            Self::Moderator => AccessLevel::Elevated,
            Self::User => AccessLevel::Limited,
            Self::Guest => AccessLevel::ReadOnly,
            Self::Other(_) => AccessLevel::None,
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match value {
            "admin" => Self::Admin,
            "moderator" => Self::Moderator,
            "user" => Self::User,
            "guest" => Self::Guest,
            other => Self::Other(CustomRole(other.to_owned())),
        }
    }
}

impl FromStr for Role {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification computed from a [`Role`]; never stored on the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessLevel {
    /// Granted to administrators.
    Full,
    /// Granted to moderators.
    Elevated,
    /// Granted to regular users.
    Limited,
    /// Granted to guests.
    ReadOnly,
    /// Granted to any unrecognised role.
    None,
}

impl AccessLevel {
    /// Returns the access level name as written in scenarios.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Elevated => "elevated",
            Self::Limited => "limited",
            Self::ReadOnly => "readonly",
            Self::None => "none",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
