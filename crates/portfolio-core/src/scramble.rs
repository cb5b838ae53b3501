//! Heading text scramble: a one-shot left-to-right resolve with a short
//! trailing window of random glyphs.
//!
//! At progress `p`, characters below `floor(p * len)` show their final
//! value, the next few show random A-Z glyphs, and the rest show final
//! text unchanged (the original styling choice: only the resolve edge
//! glitches). Whitespace always passes through. At `p >= 1` the output is
//! exactly the final text, so no stray glyph can survive the animation.

use rand::Rng;

use crate::constants::{GLITCH_WINDOW, GLYPHS};

pub struct ScrambleEffect {
    final_text: String,
    chars: Vec<char>,
}

impl ScrambleEffect {
    pub fn new(final_text: impl Into<String>) -> Self {
        let final_text = final_text.into();
        let chars = final_text.chars().collect();
        Self { final_text, chars }
    }

    pub fn final_text(&self) -> &str {
        &self.final_text
    }

    /// Text to display at `progress` in [0, 1]. Randomness is injected so
    /// tests can use a seeded generator.
    pub fn frame<R: Rng>(&self, progress: f64, rng: &mut R) -> String {
        if progress >= 1.0 {
            return self.final_text.clone();
        }
        let progress = progress.max(0.0);
        let resolved = (progress * self.chars.len() as f64).floor() as usize;
        let mut out = String::with_capacity(self.final_text.len());
        for (i, &c) in self.chars.iter().enumerate() {
            if c.is_whitespace() || i < resolved || i >= resolved + GLITCH_WINDOW {
                out.push(c);
            } else {
                out.push(GLYPHS[rng.gen_range(0..GLYPHS.len())] as char);
            }
        }
        out
    }
}
