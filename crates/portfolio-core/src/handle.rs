//! Shared stop token for the frame loops. Pure state so hosts and tests
//! can exercise teardown without a browser.

use std::cell::Cell;
use std::rc::Rc;

/// Cloning hands out another handle to the same loop; `stop` prevents the
/// next frame from being scheduled.
#[derive(Clone)]
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn new() -> Self {
        Self {
            running: Rc::new(Cell::new(true)),
        }
    }

    pub fn stop(&self) {
        self.running.set(false);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

impl Default for LoopHandle {
    fn default() -> Self {
        Self::new()
    }
}
