//! Project carousel state: auto-advance stepping with wrap-around, a
//! deadline-based pause flag, and drag-to-scroll math. Scroll positions
//! are plain f64 pixels; the web crate applies the resulting steps to the
//! track element.

use crate::constants::{CARD_STRIDE_PX, WRAP_EPSILON_PX};

/// What the track should do on one advance/retreat.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// Within the wrap epsilon of max scroll: jump back to the start.
    JumpToStart,
    /// Scroll by this many pixels (negative for a retreat).
    ScrollBy(f64),
}

#[derive(Clone, Copy, Debug)]
pub struct Carousel {
    pub stride: f64,
    pub wrap_epsilon: f64,
}

impl Default for Carousel {
    fn default() -> Self {
        Self {
            stride: CARD_STRIDE_PX,
            wrap_epsilon: WRAP_EPSILON_PX,
        }
    }
}

impl Carousel {
    /// Single forward step. `max_scroll` is `scrollWidth - clientWidth`.
    pub fn advance(&self, scroll_left: f64, max_scroll: f64) -> Step {
        if scroll_left >= max_scroll - self.wrap_epsilon {
            Step::JumpToStart
        } else {
            Step::ScrollBy(self.stride)
        }
    }

    pub fn retreat(&self) -> Step {
        Step::ScrollBy(-self.stride)
    }
}

/// Pause flag for the auto-advance timer. `hold` pauses indefinitely
/// (hover, touch, drag); `release_after` lets the same gesture end with a
/// grace period so the timer does not fire immediately again.
#[derive(Clone, Copy, Debug, Default)]
pub struct PauseState {
    held: bool,
    resume_at_ms: Option<f64>,
}

impl PauseState {
    pub fn hold(&mut self) {
        self.held = true;
        self.resume_at_ms = None;
    }

    pub fn release(&mut self) {
        self.held = false;
        self.resume_at_ms = None;
    }

    pub fn release_after(&mut self, now_ms: f64, grace_ms: f64) {
        self.held = false;
        self.resume_at_ms = Some(now_ms + grace_ms);
    }

    pub fn is_paused(&self, now_ms: f64) -> bool {
        self.held || self.resume_at_ms.is_some_and(|t| now_ms < t)
    }
}

/// Active drag: maps horizontal pointer movement to a scroll position.
#[derive(Clone, Copy, Debug, Default)]
pub struct Drag {
    start_x: f64,
    start_scroll: f64,
}

impl Drag {
    pub fn begin(start_x: f64, scroll_left: f64) -> Self {
        Self {
            start_x,
            start_scroll: scroll_left,
        }
    }

    /// Scroll position for the current pointer x. `multiplier` scales the
    /// movement delta (mouse and touch use different feels).
    pub fn scroll_for(&self, current_x: f64, multiplier: f64) -> f64 {
        self.start_scroll - (current_x - self.start_x) * multiplier
    }
}
