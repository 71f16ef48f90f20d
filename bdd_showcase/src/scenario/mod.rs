//! Adapters between declarative scenario phrases and the user store.
//!
//! The `rstest-bdd` step registry matches each phrase and calls one method
//! on [`ScenarioDriver`]. Action methods forward to [`crate::UserStore`];
//! assertion methods compare a store read with the expected literal and
//! return [`crate::StepError::Assertion`] on mismatch. Bulk-creation tables
//! arrive as typed [`NewUser`] rows.

mod driver;
mod new_user;


pub use driver::ScenarioDriver;
pub use new_user::NewUser;
