//! Layered settings shared by every scenario.
//!
//! Values are merged in increasing precedence: compiled defaults, then
//! `bdd_showcase.toml` in the working directory, then `BDD_SHOWCASE_*`
//! environment variables.

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Configuration file consulted by [`SuiteConfig::load`].
pub const CONFIG_FILE: &str = "bdd_showcase.toml";

/// Prefix for environment overrides, for example `BDD_SHOWCASE_EMAIL_DOMAIN`.
pub const ENV_PREFIX: &str = "BDD_SHOWCASE_";

/// Errors raised while loading [`SuiteConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A provider could not be read or its values could not be deserialized.
    #[error("failed to gather configuration: {0}")]
    Gathering(#[from] Box<figment::Error>),
    /// A value was present but unusable.
    #[error("invalid configuration for '{key}': {message}")]
    Validation {
        /// Configuration key that failed validation.
        key: &'static str,
        /// Human-readable explanation of the failure.
        message: String,
    },
}

/// Defaults applied by abbreviated scenario phrases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    /// Domain appended to usernames when a phrase omits the email.
    pub email_domain: String,
    /// Role assigned when a phrase omits the role.
    pub default_role: String,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            email_domain: "example.com".to_owned(),
            default_role: "user".to_owned(),
        }
    }
}

impl SuiteConfig {
    /// Loads the configuration from defaults, [`CONFIG_FILE`], and
    /// [`ENV_PREFIX`] variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source cannot be parsed or a value is
    /// blank.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// The layered provider stack used by [`SuiteConfig::load`].
    #[must_use]
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Extracts and validates a configuration from `figment`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when extraction fails or a value is blank.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract().map_err(Box::new)?;
        config.validate()?;
        debug!(?config, "suite configuration loaded");
        Ok(config)
    }

    /// Builds the email address used for `username`.
    ///
    /// ```
    /// use bdd_showcase::SuiteConfig;
    ///
    /// assert_eq!(SuiteConfig::default().email_for("bob"), "bob@example.com");
    /// ```
    #[must_use]
    pub fn email_for(&self, username: &str) -> String {
        format!("{username}@{}", self.email_domain)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let domain = self.email_domain.trim();
        if domain.is_empty() || domain.contains('@') {
            return Err(ConfigError::Validation {
                key: "email_domain",
                message: format!("'{}' is not a usable email domain", self.email_domain),
            });
        }
        if self.default_role.trim().is_empty() {
            return Err(ConfigError::Validation {
                key: "default_role",
                message: "must contain visible characters".to_owned(),
            });
        }
        Ok(())
    }
}
