// Tuning constants shared by the core logic and the web wiring. These are
// stylistic values, not semantic contracts; modules document the math they
// feed into.

// Hero grid
pub const GRID_SPACING_PX: f32 = 60.0; // distance between grid lines
pub const GRID_FALLOFF_PX: f32 = 280.0; // pointer influence radius
pub const GRID_JITTER_PX: f32 = 6.0; // max positional jitter at full influence
pub const GRID_BASE_ALPHA: f32 = 0.06; // idle dot opacity
pub const GRID_ALPHA_SPAN: f32 = 0.25; // extra opacity at full influence
pub const GRID_BASE_RADIUS: f32 = 0.8; // idle dot radius (px)
pub const GRID_RADIUS_SPAN: f32 = 1.5; // extra radius at full influence
pub const GRID_WAVE_FREQ: f32 = 0.5; // spatial frequency of the oscillation
pub const GRID_TIME_SCALE: f64 = 0.0004; // milliseconds -> wave phase
pub const GRID_LINE_ALPHA: f32 = 0.025;
pub const GRID_LINE_WIDTH: f64 = 0.5;
pub const POINTER_SENTINEL: f32 = 9999.0; // far off-screen until first movement

// Custom cursor
pub const RING_SMOOTHING: f32 = 0.12; // per-frame easing fraction toward the pointer
pub const MAGNET_FACTOR: f32 = 0.1; // element displacement per px of pointer offset

// Hero typing
pub const TYPE_TICK_MS: f64 = 80.0;
pub const DELETE_TICK_MS: f64 = 35.0;
pub const HOLD_FULL_MS: f64 = 2000.0; // pause with the full role shown

// Heading scramble
pub const SCRAMBLE_DURATION_MS: f64 = 500.0;
pub const GLITCH_WINDOW: usize = 3; // unresolved chars shown as random glyphs
pub const GLYPHS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

// Stat counters
pub const COUNTER_DURATION_MS: f64 = 1400.0;

// Project carousel
pub const CARD_STRIDE_PX: f64 = 401.0; // card width + gap
pub const AUTO_ADVANCE_MS: i32 = 3000;
pub const WRAP_EPSILON_PX: f64 = 10.0; // treat as at-end within this of max scroll
pub const BUTTON_RESUME_MS: f64 = 1500.0; // auto-advance grace after a manual step
pub const TOUCH_RESUME_MS: f64 = 2000.0; // grace after touch-end
pub const MOUSE_DRAG_MULTIPLIER: f64 = 1.5;
pub const TOUCH_DRAG_MULTIPLIER: f64 = 1.2;

// Loading screen
pub const LOADER_SPLASH_MS: i32 = 1800;
pub const LOADER_FADE_MS: i32 = 800;

// Navigation
pub const HEADER_SCROLLED_PX: f64 = 40.0;

// Visibility thresholds for the intersection-based triggers
pub const HEADING_THRESHOLD: f64 = 0.4;
pub const SECTION_THRESHOLD: f64 = 0.06;
pub const SKILLS_THRESHOLD: f64 = 0.3;
pub const STATS_THRESHOLD: f64 = 0.5;

// Scroll-reveal library (AOS) configuration
pub const REVEAL_DURATION_MS: f64 = 800.0;
pub const REVEAL_OFFSET_PX: f64 = 60.0;
