// Host-side tests for stat counter parsing, easing and formatting.

use portfolio_core::counter::{ease_out_cubic, StatCounter};

#[test]
fn integer_target_lands_exactly() {
    let counter = StatCounter::parse("42", "").unwrap();
    assert_eq!(counter.display(1.0), "42");
    assert_eq!(counter.display(0.0), "0");
}

#[test]
fn decimal_target_lands_exactly_with_suffix() {
    let counter = StatCounter::parse("3.5", "+").unwrap();
    assert_eq!(counter.display(1.0), "3.5+");
    assert_eq!(counter.display(0.0), "0.0+");
}

#[test]
fn intermediate_values_climb_monotonically() {
    let counter = StatCounter::parse("42", "").unwrap();
    let mut prev = -1_i64;
    for i in 0..=100 {
        let progress = i as f64 / 100.0;
        let shown: i64 = counter.display(progress).parse().unwrap();
        assert!(shown >= prev, "counter went backwards at p={progress}");
        assert!(shown <= 42);
        prev = shown;
    }
    assert_eq!(prev, 42);
}

#[test]
fn ease_out_cubic_shape() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    // ease-out front-loads the progress
    assert!(ease_out_cubic(0.5) > 0.5);
    // clamped outside [0, 1]
    assert_eq!(ease_out_cubic(-1.0), 0.0);
    assert_eq!(ease_out_cubic(2.0), 1.0);
}

#[test]
fn malformed_target_is_an_error() {
    assert!(StatCounter::parse("fast", "").is_err());
    assert!(StatCounter::parse("", "%").is_err());
    assert!(StatCounter::parse("4.2.1", "").is_err());
}

#[test]
fn suffix_is_appended_verbatim() {
    let counter = StatCounter::parse("99", "%").unwrap();
    assert_eq!(counter.display(1.0), "99%");
}
