//! Custom cursor state: the lagging ring and the magnetic pull applied to
//! interactive elements near the pointer. The dot itself needs no state;
//! the web crate snaps it straight to the pointer on every move event.

use glam::Vec2;

use crate::constants::{MAGNET_FACTOR, RING_SMOOTHING};

/// Ring position eased toward the pointer by a fixed fraction per frame.
///
/// Deliberately frame-rate dependent (no delta-time compensation); the
/// trail effect is tuned for ~60 fps and degrades gracefully elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct RingFollower {
    pub pos: Vec2,
}

impl RingFollower {
    /// Advance one frame toward `target` and return the new position.
    /// Never crosses the target: the step is a fixed fraction of the
    /// remaining distance.
    pub fn step(&mut self, target: Vec2) -> Vec2 {
        self.pos += (target - self.pos) * RING_SMOOTHING;
        self.pos
    }
}

/// Translation applied to an interactive element while the pointer moves
/// over it, pulling it slightly toward the pointer. Cleared by the wiring
/// on pointer-leave.
#[inline]
pub fn magnet_offset(pointer: Vec2, element_center: Vec2) -> Vec2 {
    (pointer - element_center) * MAGNET_FACTOR
}
