// Host-side tests for carousel stepping, the pause deadline flag and the
// drag-to-scroll math.

use portfolio_core::carousel::{Carousel, Drag, PauseState, Step};
use portfolio_core::constants::{
    BUTTON_RESUME_MS, MOUSE_DRAG_MULTIPLIER, TOUCH_DRAG_MULTIPLIER, TOUCH_RESUME_MS,
};

#[test]
fn auto_advance_wraps_instead_of_exceeding_max() {
    // five cards with one visible: max scroll is four card widths
    let card = 400.0;
    let model = Carousel {
        stride: card,
        wrap_epsilon: 10.0,
    };
    let max = 4.0 * card;
    let mut offset = 0.0_f64;
    let mut positions = Vec::new();
    for _ in 0..5 {
        match model.advance(offset, max) {
            Step::JumpToStart => offset = 0.0,
            Step::ScrollBy(dx) => offset = (offset + dx).min(max),
        }
        positions.push(offset);
    }
    assert!(positions.iter().all(|&p| p <= max));
    assert_eq!(positions, vec![card, 2.0 * card, 3.0 * card, max, 0.0]);
}

#[test]
fn wrap_epsilon_treats_near_end_as_end() {
    let model = Carousel::default();
    let max = 2000.0;
    assert_eq!(model.advance(max, max), Step::JumpToStart);
    assert_eq!(
        model.advance(max - model.wrap_epsilon, max),
        Step::JumpToStart
    );
    assert!(matches!(
        model.advance(max - model.wrap_epsilon - 1.0, max),
        Step::ScrollBy(_)
    ));
}

#[test]
fn retreat_steps_backward_one_stride() {
    let model = Carousel::default();
    assert_eq!(model.retreat(), Step::ScrollBy(-model.stride));
}

#[test]
fn hold_pauses_until_release() {
    let mut pause = PauseState::default();
    assert!(!pause.is_paused(0.0));
    pause.hold();
    assert!(pause.is_paused(1.0e9));
    pause.release();
    assert!(!pause.is_paused(1.0e9));
}

#[test]
fn touch_release_keeps_a_grace_period() {
    let mut pause = PauseState::default();
    pause.hold();
    pause.release_after(1000.0, TOUCH_RESUME_MS);
    assert!(pause.is_paused(1000.0));
    assert!(pause.is_paused(1000.0 + TOUCH_RESUME_MS - 1.0));
    assert!(!pause.is_paused(1000.0 + TOUCH_RESUME_MS));
}

#[test]
fn button_grace_is_shorter_than_touch_grace() {
    assert!(BUTTON_RESUME_MS < TOUCH_RESUME_MS);
}

#[test]
fn drag_maps_movement_to_scroll() {
    let drag = Drag::begin(100.0, 500.0);
    // dragging right scrolls the track left, scaled by the multiplier
    assert_eq!(
        drag.scroll_for(140.0, MOUSE_DRAG_MULTIPLIER),
        500.0 - 40.0 * MOUSE_DRAG_MULTIPLIER
    );
    assert_eq!(
        drag.scroll_for(60.0, TOUCH_DRAG_MULTIPLIER),
        500.0 + 40.0 * TOUCH_DRAG_MULTIPLIER
    );
    assert_eq!(drag.scroll_for(100.0, MOUSE_DRAG_MULTIPLIER), 500.0);
}
