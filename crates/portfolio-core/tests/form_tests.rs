// Host-side tests for the contact form gate.

use portfolio_core::form::can_submit;

#[test]
fn requires_every_field() {
    assert!(can_submit("Ada", "ada@example.com", "hello"));
    assert!(!can_submit("", "ada@example.com", "hello"));
    assert!(!can_submit("Ada", "", "hello"));
    assert!(!can_submit("Ada", "ada@example.com", ""));
    assert!(!can_submit("", "", ""));
}
