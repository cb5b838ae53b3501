//! Animated statistic counters: ease-out ramp from 0 to a numeric target
//! parsed from the element's data attributes.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatError {
    #[error("malformed stat target {0:?}")]
    BadTarget(String),
}

/// Cubic ease-out, clamped to [0, 1]. Monotone non-decreasing.
#[inline]
pub fn ease_out_cubic(p: f64) -> f64 {
    1.0 - (1.0 - p.clamp(0.0, 1.0)).powi(3)
}

/// One counter: numeric target, whether the source text carried a decimal
/// point (which decides the display format), and a verbatim suffix.
#[derive(Clone, Debug, PartialEq)]
pub struct StatCounter {
    pub target: f64,
    pub decimal: bool,
    pub suffix: String,
}

impl StatCounter {
    /// Parse the raw `data-target` / `data-suffix` attribute values.
    /// A target of `"3.5"` formats with one decimal place, `"42"` as an
    /// integer.
    pub fn parse(raw_target: &str, suffix: &str) -> Result<Self, StatError> {
        let target: f64 = raw_target
            .trim()
            .parse()
            .map_err(|_| StatError::BadTarget(raw_target.to_owned()))?;
        Ok(Self {
            target,
            decimal: raw_target.contains('.'),
            suffix: suffix.to_owned(),
        })
    }

    /// Displayed text at `progress` in [0, 1]. At 1 this is exactly the
    /// formatted target with the suffix appended.
    pub fn display(&self, progress: f64) -> String {
        let value = self.target * ease_out_cubic(progress);
        if self.decimal {
            format!("{:.1}{}", value, self.suffix)
        } else {
            format!("{}{}", value.floor() as i64, self.suffix)
        }
    }
}
