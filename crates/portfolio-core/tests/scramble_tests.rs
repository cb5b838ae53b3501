// Host-side tests for the heading scramble. Randomness is seeded so the
// assertions are about structure, not specific glyphs.

use portfolio_core::constants::{GLITCH_WINDOW, GLYPHS};
use portfolio_core::scramble::ScrambleEffect;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn progress_one_is_exactly_the_final_text() {
    let fx = ScrambleEffect::new("HELLO");
    let mut rng = StdRng::seed_from_u64(7);
    assert_eq!(fx.frame(1.0, &mut rng), "HELLO");
    assert_eq!(fx.frame(1.5, &mut rng), "HELLO");
}

#[test]
fn progress_zero_resolves_nothing() {
    let final_text = "HELLO";
    let fx = ScrambleEffect::new(final_text);
    let mut rng = StdRng::seed_from_u64(7);
    let out = fx.frame(0.0, &mut rng);
    assert_eq!(out.chars().count(), final_text.len());
    // the glitch window shows glyphs from the set; everything past it
    // still shows the final text
    for (i, (got, want)) in out.chars().zip(final_text.chars()).enumerate() {
        if i < GLITCH_WINDOW {
            assert!(GLYPHS.contains(&(got as u8)), "unexpected glyph {got:?}");
        } else {
            assert_eq!(got, want);
        }
    }
}

#[test]
fn resolved_characters_match_final_text() {
    let final_text = "PORTFOLIO";
    let fx = ScrambleEffect::new(final_text);
    let mut rng = StdRng::seed_from_u64(42);
    for step in 0..10 {
        let progress = step as f64 / 10.0;
        let resolved = (progress * final_text.len() as f64).floor() as usize;
        let out = fx.frame(progress, &mut rng);
        for (i, (got, want)) in out.chars().zip(final_text.chars()).enumerate() {
            if i < resolved {
                assert_eq!(got, want, "unresolved char before the edge at p={progress}");
            }
        }
    }
}

#[test]
fn whitespace_always_passes_through() {
    let final_text = "AB CD\nEF";
    let fx = ScrambleEffect::new(final_text);
    let mut rng = StdRng::seed_from_u64(3);
    for step in 0..=10 {
        let progress = step as f64 / 10.0;
        let out = fx.frame(progress, &mut rng);
        assert_eq!(out.chars().count(), final_text.chars().count());
        for (got, want) in out.chars().zip(final_text.chars()) {
            if want.is_whitespace() {
                assert_eq!(got, want, "whitespace replaced at p={progress}");
            }
        }
    }
}

#[test]
fn negative_progress_clamps_to_zero() {
    let fx = ScrambleEffect::new("HI");
    let mut rng = StdRng::seed_from_u64(1);
    let out = fx.frame(-0.5, &mut rng);
    assert_eq!(out.chars().count(), 2);
}
