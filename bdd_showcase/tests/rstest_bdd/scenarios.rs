//! Binds the feature files to the step registry.
//!
//! Every scenario also takes a [`ScenarioHookGuard`] built from its title,
//! feature file, line and tags, so the lifecycle hooks run around each one.
//! The scenario bodies run after the last step and check which
//! before-scenario hooks fired; the after-scenario hooks run when the guard
//! drops.

use crate::fixtures::{
    CalculatorState, calculator_state, notifier, scenario_hooks, user_management,
};
use bdd_showcase::hooks::{HookEvent, REGRESSION_TAG, SMOKE_TAG, ScenarioHookGuard};
use bdd_showcase::{Notifier, ScenarioDriver};
use rstest_bdd_macros::scenario;

const CALCULATOR: &str = "tests/features/calculator.feature";
const NOTIFICATION: &str = "tests/features/notification.feature";
const USER_MANAGEMENT: &str = "tests/features/user_management.feature";

const SMOKE: &[&str] = &[SMOKE_TAG];
const REGRESSION: &[&str] = &[REGRESSION_TAG];
const UNTAGGED: &[&str] = &[];

/// Checks that the start hook ran first, followed by exactly `tag_hooks`.
fn assert_started_with(hooks: &ScenarioHookGuard, tag_hooks: &[HookEvent]) {
    let events = hooks.log().events();
    match events.split_first() {
        Some((HookEvent::Started { name, .. }, rest)) => {
            assert_eq!(name, &hooks.meta().name);
            assert_eq!(rest, tag_hooks);
        }
        other => panic!("expected a start event first, got {other:?}"),
    }
}

#[scenario(path = "tests/features/calculator.feature", name = "Add two numbers")]
fn add_two_numbers(
    calculator_state: CalculatorState,
    #[with("Add two numbers", CALCULATOR, 9, SMOKE)] scenario_hooks: ScenarioHookGuard,
) {
    let _ = calculator_state;
    assert_started_with(&scenario_hooks, &[HookEvent::SmokeSuite]);
}

#[scenario(path = "tests/features/calculator.feature", name = "Add then multiply")]
fn add_then_multiply(
    calculator_state: CalculatorState,
    #[with("Add then multiply", CALCULATOR, 14, REGRESSION)] scenario_hooks: ScenarioHookGuard,
) {
    let _ = calculator_state;
    assert_started_with(&scenario_hooks, &[HookEvent::RegressionSuite]);
}

#[scenario(
    path = "tests/features/calculator.feature",
    name = "Add pairs of numbers"
)]
fn add_pairs_of_numbers(
    calculator_state: CalculatorState,
    #[with("Add pairs of numbers", CALCULATOR, 19, UNTAGGED)] scenario_hooks: ScenarioHookGuard,
    _first: String,
    _second: String,
    _sum: String,
) {
    let _ = calculator_state;
    assert_started_with(&scenario_hooks, &[]);
}

#[scenario(path = "tests/features/calculator.feature", name = "Add money amounts")]
fn add_money_amounts(
    calculator_state: CalculatorState,
    #[with("Add money amounts", CALCULATOR, 30, SMOKE)] scenario_hooks: ScenarioHookGuard,
) {
    let _ = calculator_state;
    assert_started_with(&scenario_hooks, &[HookEvent::SmokeSuite]);
}

#[scenario(
    path = "tests/features/calculator.feature",
    name = "Money amounts carry cents into dollars"
)]
fn money_amounts_carry_cents(
    calculator_state: CalculatorState,
    #[with("Money amounts carry cents into dollars", CALCULATOR, 34, UNTAGGED)]
    scenario_hooks: ScenarioHookGuard,
) {
    let _ = calculator_state;
    assert_started_with(&scenario_hooks, &[]);
}

#[scenario(
    path = "tests/features/calculator.feature",
    name = "Amounts finer than a cent are rejected"
)]
fn amounts_finer_than_a_cent_are_rejected(
    calculator_state: CalculatorState,
    #[with("Amounts finer than a cent are rejected", CALCULATOR, 38, UNTAGGED)]
    scenario_hooks: ScenarioHookGuard,
) {
    let _ = calculator_state;
    assert_started_with(&scenario_hooks, &[]);
}

#[scenario(
    path = "tests/features/notification.feature",
    name = "Send a welcome notification"
)]
fn send_a_welcome_notification(
    notifier: Notifier,
    #[with("Send a welcome notification", NOTIFICATION, 6, SMOKE)]
    scenario_hooks: ScenarioHookGuard,
) {
    let _ = notifier;
    assert_started_with(&scenario_hooks, &[HookEvent::SmokeSuite]);
}

#[scenario(
    path = "tests/features/notification.feature",
    name = "Only the latest notification is inspected"
)]
fn only_the_latest_notification_is_inspected(
    notifier: Notifier,
    #[with(
        "Only the latest notification is inspected",
        NOTIFICATION,
        10,
        UNTAGGED
    )]
    scenario_hooks: ScenarioHookGuard,
) {
    let _ = notifier;
    assert_started_with(&scenario_hooks, &[]);
}

#[scenario(
    path = "tests/features/user_management.feature",
    name = "Create a new user"
)]
fn create_a_new_user(
    user_management: ScenarioDriver,
    #[with("Create a new user", USER_MANAGEMENT, 11, SMOKE)] scenario_hooks: ScenarioHookGuard,
) {
    let _ = user_management;
    assert_started_with(&scenario_hooks, &[HookEvent::SmokeSuite]);
}

#[scenario(
    path = "tests/features/user_management.feature",
    name = "Roles determine access levels"
)]
fn roles_determine_access_levels(
    user_management: ScenarioDriver,
    #[with("Roles determine access levels", USER_MANAGEMENT, 18, REGRESSION)]
    scenario_hooks: ScenarioHookGuard,
    _username: String,
    _role: String,
    _access: String,
) {
    let _ = user_management;
    assert_started_with(&scenario_hooks, &[HookEvent::RegressionSuite]);
}

#[scenario(
    path = "tests/features/user_management.feature",
    name = "Create users from a data table"
)]
fn create_users_from_a_data_table(
    user_management: ScenarioDriver,
    #[with("Create users from a data table", USER_MANAGEMENT, 33, REGRESSION)]
    scenario_hooks: ScenarioHookGuard,
) {
    let _ = user_management;
    assert_started_with(&scenario_hooks, &[HookEvent::RegressionSuite]);
}

#[scenario(
    path = "tests/features/user_management.feature",
    name = "Malformed active flags are treated as inactive"
)]
fn malformed_active_flags_are_inactive(
    user_management: ScenarioDriver,
    #[with(
        "Malformed active flags are treated as inactive",
        USER_MANAGEMENT,
        46,
        UNTAGGED
    )]
    scenario_hooks: ScenarioHookGuard,
) {
    let _ = user_management;
    assert_started_with(&scenario_hooks, &[]);
}

#[scenario(
    path = "tests/features/user_management.feature",
    name = "Re-creating a username replaces the earlier record"
)]
fn re_creating_a_username_replaces_the_record(
    user_management: ScenarioDriver,
    #[with(
        "Re-creating a username replaces the earlier record",
        USER_MANAGEMENT,
        53,
        UNTAGGED
    )]
    scenario_hooks: ScenarioHookGuard,
) {
    let _ = user_management;
    assert_started_with(&scenario_hooks, &[]);
}

#[scenario(
    path = "tests/features/user_management.feature",
    name = "Users cannot be created without an administrator session"
)]
fn users_need_an_administrator_session(
    user_management: ScenarioDriver,
    #[with(
        "Users cannot be created without an administrator session",
        USER_MANAGEMENT,
        61,
        UNTAGGED
    )]
    scenario_hooks: ScenarioHookGuard,
) {
    let _ = user_management;
    assert_started_with(&scenario_hooks, &[]);
}

#[scenario(
    path = "tests/features/user_management.feature",
    name = "Role-based creation derives the email address"
)]
fn role_based_creation_derives_the_email(
    user_management: ScenarioDriver,
    #[with(
        "Role-based creation derives the email address",
        USER_MANAGEMENT,
        65,
        UNTAGGED
    )]
    scenario_hooks: ScenarioHookGuard,
) {
    let _ = user_management;
    assert_started_with(&scenario_hooks, &[]);
}
