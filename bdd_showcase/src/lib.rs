//! Example subsystems driven by behaviour-driven scenarios.
//!
//! The crate hosts three small subsystems exercised by the `rstest-bdd`
//! suite under `tests/`: an integer [`calculator`], a [`notification`]
//! sender, and an in-memory user-management store ([`users`]). The
//! [`scenario`] module translates declarative scenario phrases into store
//! calls and reports mismatches as assertion failures, while [`hooks`] and
//! [`config`] provide the lifecycle logging and layered settings shared by
//! every scenario.

pub mod calculator;
pub mod config;
mod error;
pub mod hooks;
pub mod money;
pub mod notification;
pub mod scenario;
pub mod users;

pub use calculator::{Calculator, CalculatorError};
pub use config::{ConfigError, SuiteConfig};
pub use error::{AssertionFailure, StepError, StoreError};
pub use money::{Money, MoneyError};
pub use notification::{Notification, Notifier};
pub use scenario::{NewUser, ScenarioDriver};
pub use users::{AccessLevel, CustomRole, Role, User, UserStore};
