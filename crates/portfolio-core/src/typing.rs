//! Typed-role hero animation as an explicit finite state machine.
//!
//! Cycles through a fixed list of role strings: type one character per
//! tick, hold the full word, delete one character per tick, advance to
//! the next role (wrapping). Each tick reports the text to display and
//! the delay until the next tick, so the driver needs no knowledge of
//! the pacing and tests need no real timers.

use crate::constants::{DELETE_TICK_MS, HOLD_FULL_MS, TYPE_TICK_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
}

pub struct TypingEffect {
    roles: Vec<String>,
    role: usize,
    shown: usize, // chars of the current role on display
    phase: Phase,
}

/// Result of one tick: what to display and when to tick again.
#[derive(Clone, Copy, Debug)]
pub struct TypingFrame<'a> {
    pub text: &'a str,
    pub delay_ms: f64,
}

impl TypingEffect {
    pub fn new(roles: Vec<String>) -> Self {
        if roles.is_empty() {
            log::warn!("typing effect created with no roles; it will stay blank");
        }
        Self {
            roles,
            role: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    /// Index of the role currently being typed or deleted.
    pub fn role_index(&self) -> usize {
        self.role
    }

    /// Role string currently being typed or deleted.
    pub fn current(&self) -> &str {
        self.roles.get(self.role).map(String::as_str).unwrap_or("")
    }

    /// Prefix of the current role on display (char-aligned).
    pub fn text(&self) -> &str {
        let s = self.current();
        match s.char_indices().nth(self.shown) {
            Some((i, _)) => &s[..i],
            None => s,
        }
    }

    /// Advance the machine one step.
    pub fn tick(&mut self) -> TypingFrame<'_> {
        if self.roles.is_empty() {
            return TypingFrame {
                text: "",
                delay_ms: TYPE_TICK_MS,
            };
        }
        let len = self.current().chars().count();
        let delay_ms = match self.phase {
            Phase::Typing => {
                self.shown = (self.shown + 1).min(len);
                if self.shown == len {
                    self.phase = Phase::Holding;
                    HOLD_FULL_MS
                } else {
                    TYPE_TICK_MS
                }
            }
            // The hold has elapsed; start deleting.
            Phase::Holding => {
                self.phase = Phase::Deleting;
                self.shown = self.shown.saturating_sub(1);
                self.after_delete()
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                self.after_delete()
            }
        };
        TypingFrame {
            text: self.text(),
            delay_ms,
        }
    }

    fn after_delete(&mut self) -> f64 {
        if self.shown == 0 {
            self.role = (self.role + 1) % self.roles.len();
            self.phase = Phase::Typing;
            TYPE_TICK_MS
        } else {
            DELETE_TICK_MS
        }
    }
}
