//! Typed rows for the bulk user-creation table.

use std::convert::Infallible;

use rstest_bdd_macros::DataTableRow;

/// One row of "I create the following users:".
///
/// Rows are parsed with [`rstest_bdd::datatable::Rows`], which requires the
/// `username`, `email` and `role` columns and rejects rows whose width
/// differs from the header. The `active` column is optional.
///
/// # Examples
///
/// ```
/// use bdd_showcase::NewUser;
/// use rstest_bdd::datatable::Rows;
///
/// # fn main() -> Result<(), rstest_bdd::datatable::DataTableError> {
/// let table = vec![
///     vec!["username".to_owned(), "email".to_owned(), "role".to_owned()],
///     vec!["alice".to_owned(), "alice@example.com".to_owned(), "admin".to_owned()],
/// ];
/// let rows = Rows::<NewUser>::try_from(table)?.into_vec();
/// let alice = rows.first().expect("one body row");
/// assert_eq!(alice.role, "admin");
/// assert!(!alice.active);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, DataTableRow)]
pub struct NewUser {
    /// Username to create.
    pub username: String,
    /// Email address stored on the user.
    pub email: String,
    /// Role name, mapped through [`crate::Role::from`].
    pub role: String,
    /// Whether the user starts active. Only `true` (any ASCII case) reads as
    /// `true`; any other cell, or a missing column, reads as `false`.
    #[datatable(default, parse_with = active_flag)]
    pub active: bool,
}

#[expect(
    clippy::unnecessary_wraps,
    reason = "datatable parse_with hooks must return a Result"
)]
fn active_flag(cell: &str) -> Result<bool, Infallible> {
    Ok(cell.trim().eq_ignore_ascii_case("true"))
}
