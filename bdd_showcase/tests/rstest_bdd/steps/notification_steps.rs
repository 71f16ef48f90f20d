//! Steps covering simulated notification delivery.

use super::value_parsing::unquote;
use anyhow::{Result, ensure};
use bdd_showcase::Notifier;
use rstest_bdd_macros::{then, when};

#[when("I send a notification with {message} to {recipient}")]
fn send_notification(notifier: &mut Notifier, message: String, recipient: String) {
    notifier.send(unquote(&message), unquote(&recipient));
}

#[then("the response should contain {expected}")]
fn response_contains(notifier: &mut Notifier, expected: String) -> Result<()> {
    let fragment = unquote(&expected);
    ensure!(
        notifier.response_contains(fragment),
        "expected the response to contain {fragment:?}; last message was {:?}",
        notifier.last_message()
    );
    Ok(())
}
