// Host-side tests for the frame-loop stop token.

use portfolio_core::handle::LoopHandle;

#[test]
fn new_handle_is_running() {
    assert!(LoopHandle::new().is_running());
    assert!(LoopHandle::default().is_running());
}

#[test]
fn stop_reaches_every_clone() {
    let handle = LoopHandle::new();
    let clone = handle.clone();
    assert!(clone.is_running());
    handle.stop();
    assert!(!handle.is_running());
    assert!(!clone.is_running());
}

#[test]
fn stopping_through_a_clone_stops_the_original() {
    let handle = LoopHandle::new();
    handle.clone().stop();
    assert!(!handle.is_running());
}
