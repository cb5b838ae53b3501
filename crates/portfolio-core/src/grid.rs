//! Math for the animated hero grid.
//!
//! The renderer clears and redraws the whole canvas every frame: grid
//! lines first, then one dot per line intersection. Each dot's opacity,
//! radius and positional jitter scale with the pointer's proximity
//! ("influence") and a spatial-temporal oscillation. All of that is
//! computed here from plain numbers; the web crate owns the canvas.

use glam::Vec2;

use crate::constants::{
    GRID_ALPHA_SPAN, GRID_BASE_ALPHA, GRID_BASE_RADIUS, GRID_FALLOFF_PX, GRID_JITTER_PX,
    GRID_RADIUS_SPAN, GRID_SPACING_PX, GRID_TIME_SCALE, GRID_WAVE_FREQ, POINTER_SENTINEL,
};

/// Tunables for the grid renderer. Defaults match the page styling.
#[derive(Clone, Copy, Debug)]
pub struct GridParams {
    pub spacing: f32,
    pub falloff: f32,
    pub jitter: f32,
    pub base_alpha: f32,
    pub alpha_span: f32,
    pub base_radius: f32,
    pub radius_span: f32,
    pub wave_freq: f32,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            spacing: GRID_SPACING_PX,
            falloff: GRID_FALLOFF_PX,
            jitter: GRID_JITTER_PX,
            base_alpha: GRID_BASE_ALPHA,
            alpha_span: GRID_ALPHA_SPAN,
            base_radius: GRID_BASE_RADIUS,
            radius_span: GRID_RADIUS_SPAN,
            wave_freq: GRID_WAVE_FREQ,
        }
    }
}

/// One rendered grid dot: final position after jitter, plus styling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridDot {
    pub pos: Vec2,
    pub radius: f32,
    pub alpha: f32,
}

/// Column/row counts covering the viewport, by ceiling division. Partial
/// cells at the edges still get a line and a dot (indices are inclusive).
pub fn cell_counts(width: f32, height: f32, spacing: f32) -> (u32, u32) {
    let cols = (width / spacing).ceil().max(0.0) as u32 + 1;
    let rows = (height / spacing).ceil().max(0.0) as u32 + 1;
    (cols, rows)
}

/// Pointer proximity factor: 1 at zero distance, linearly down to 0 at the
/// falloff radius, exactly 0 from there on.
#[inline]
pub fn influence(dist: f32, falloff: f32) -> f32 {
    (1.0 - dist / falloff).max(0.0)
}

/// Spatial-temporal oscillation for the dot at (col, row), in [-1, 1].
#[inline]
pub fn wave(col: u32, row: u32, phase: f32, freq: f32) -> f32 {
    (col as f32 * freq + phase).sin() * (row as f32 * freq + phase).cos()
}

/// Wave phase for a millisecond timestamp (monotonic source expected).
#[inline]
pub fn wave_phase(now_ms: f64) -> f32 {
    (now_ms * GRID_TIME_SCALE) as f32
}

/// Pointer position before any movement has been observed: far enough off
/// screen that no dot is influenced.
#[inline]
pub fn pointer_sentinel() -> Vec2 {
    Vec2::splat(POINTER_SENTINEL)
}

impl GridParams {
    /// Compute the dot at grid intersection (col, row) for the current
    /// pointer position and wave phase.
    pub fn dot(&self, col: u32, row: u32, pointer: Vec2, phase: f32) -> GridDot {
        let anchor = Vec2::new(col as f32 * self.spacing, row as f32 * self.spacing);
        let infl = influence(pointer.distance(anchor), self.falloff);
        let jitter = wave(col, row, phase, self.wave_freq) * infl * self.jitter;
        GridDot {
            pos: anchor + Vec2::splat(jitter),
            radius: self.base_radius + infl * self.radius_span,
            alpha: self.base_alpha + infl * self.alpha_span,
        }
    }
}
