// Host-side tests for the cursor ring follower and the magnet offset.

use glam::Vec2;
use portfolio_core::constants::{MAGNET_FACTOR, RING_SMOOTHING};
use portfolio_core::cursor::{magnet_offset, RingFollower};

#[test]
fn ring_converges_to_pointer() {
    let mut ring = RingFollower::default();
    let target = Vec2::new(320.0, 240.0);
    for _ in 0..400 {
        ring.step(target);
    }
    assert!(ring.pos.distance(target) < 0.5);
}

#[test]
fn ring_approaches_monotonically_without_overshoot() {
    let mut ring = RingFollower::default();
    let target = Vec2::new(100.0, 0.0);
    let mut prev = ring.pos.x;
    for _ in 0..200 {
        let p = ring.step(target);
        assert!(p.x <= target.x + 1e-3, "overshoot to {}", p.x);
        assert!(p.x >= prev, "moved away from target");
        prev = p.x;
    }
}

#[test]
fn ring_step_is_fixed_fraction_of_remaining_distance() {
    let mut ring = RingFollower::default();
    let target = Vec2::new(50.0, -30.0);
    let before = ring.pos;
    let after = ring.step(target);
    let expected = before + (target - before) * RING_SMOOTHING;
    assert!(after.distance(expected) < 1e-5);
}

#[test]
fn magnet_offset_scales_pointer_displacement() {
    let center = Vec2::new(200.0, 100.0);
    let pointer = Vec2::new(240.0, 80.0);
    let offset = magnet_offset(pointer, center);
    assert!((offset.x - 40.0 * MAGNET_FACTOR).abs() < 1e-5);
    assert!((offset.y + 20.0 * MAGNET_FACTOR).abs() < 1e-5);
}

#[test]
fn magnet_offset_zero_at_center() {
    let center = Vec2::new(10.0, 10.0);
    assert_eq!(magnet_offset(center, center), Vec2::ZERO);
}
