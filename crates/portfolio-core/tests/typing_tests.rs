// Host-side tests for the typed-roles state machine. All pacing comes
// from the returned delays, so no real timers are involved.

use portfolio_core::constants::{DELETE_TICK_MS, HOLD_FULL_MS, TYPE_TICK_MS};
use portfolio_core::typing::TypingEffect;

fn roles() -> Vec<String> {
    vec!["AI Developer".to_string(), "Tech Consultant".to_string()]
}

#[test]
fn displays_only_prefixes_of_the_current_role() {
    let mut fx = TypingEffect::new(roles());
    for _ in 0..600 {
        let text = fx.tick().text.to_string();
        assert!(
            fx.current().starts_with(&text),
            "{text:?} is not a prefix of {:?}",
            fx.current()
        );
    }
}

#[test]
fn full_cycle_returns_to_first_role_with_empty_text() {
    let mut fx = TypingEffect::new(roles());
    let mut ticks = 0;
    // type, hold and delete through role 0
    while fx.role_index() == 0 {
        fx.tick();
        ticks += 1;
        assert!(ticks < 1000, "never left role 0");
    }
    // same through role 1, wrapping back
    let mut last_text = String::new();
    while fx.role_index() != 0 {
        last_text = fx.tick().text.to_string();
        ticks += 1;
        assert!(ticks < 2000, "never wrapped to role 0");
    }
    assert!(last_text.is_empty());
}

#[test]
fn first_tick_shows_the_first_character() {
    // drivers tick once at startup, so the text is never blank while typing
    let mut fx = TypingEffect::new(roles());
    assert_eq!(fx.tick().text, "A");
}

#[test]
fn delays_follow_the_phase() {
    let mut fx = TypingEffect::new(vec!["ABC".to_string()]);
    assert_eq!(fx.tick().delay_ms, TYPE_TICK_MS); // "A"
    assert_eq!(fx.tick().delay_ms, TYPE_TICK_MS); // "AB"
    assert_eq!(fx.tick().delay_ms, HOLD_FULL_MS); // "ABC", full word
    assert_eq!(fx.tick().delay_ms, DELETE_TICK_MS); // "AB"
    assert_eq!(fx.tick().delay_ms, DELETE_TICK_MS); // "A"
    let frame = fx.tick(); // empty, wrapped
    assert_eq!(frame.delay_ms, TYPE_TICK_MS);
    assert_eq!(frame.text, "");
}

#[test]
fn deleting_is_faster_than_typing() {
    assert!(DELETE_TICK_MS < TYPE_TICK_MS);
}

#[test]
fn empty_role_list_stays_blank() {
    let mut fx = TypingEffect::new(Vec::new());
    for _ in 0..10 {
        assert_eq!(fx.tick().text, "");
    }
}
