//! `rstest-bdd` behavioural suite for `bdd_showcase`.
//!
//! [`fixtures`] provides fresh per-scenario state, [`steps`] registers the
//! step implementations, and [`scenarios`] binds the feature files under
//! `tests/features` so every scenario runs under the stock `cargo test`
//! harness.

mod scenarios;
