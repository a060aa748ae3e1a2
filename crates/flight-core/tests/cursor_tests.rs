// Host-side tests for the cursor driving point.

use flight_core::{ConfigError, CursorTracker, CURSOR_HISTORY_LEN};
use glam::{Vec2, Vec3};

fn close2(a: Vec2, b: Vec2) -> bool {
    (a - b).abs().max_element() < 1e-6
}

#[test]
fn velocity_accumulates_until_end_of_frame() {
    let mut c = CursorTracker::default();
    c.on_pointer_move(500.0, 500.0, 1000.0, 1000.0); // (0, 0)
    c.on_pointer_move(750.0, 500.0, 1000.0, 1000.0); // (0.5, 0)
    c.on_pointer_move(750.0, 250.0, 1000.0, 1000.0); // (0.5, 0.5)
    assert!(close2(c.position(), Vec2::new(0.5, 0.5)));
    assert!(close2(c.velocity(), Vec2::new(0.5, 0.5)));

    c.end_frame();
    assert_eq!(c.velocity(), Vec2::ZERO);
    assert_eq!(c.world_velocity(), Vec3::ZERO);
    assert!(close2(c.position(), Vec2::new(0.5, 0.5)));
}

#[test]
fn world_mapping_scales_axes() {
    let mut c = CursorTracker::default();
    c.on_pointer_move(1000.0, 0.0, 1000.0, 1000.0); // (1, 1)
    let w = c.world_position();
    assert!((w - Vec3::new(10.0, 5.0, 0.0)).length() < 1e-5);
    assert_eq!(c.world_velocity().z, 0.0);
}

#[test]
fn history_is_fixed_length_newest_first() {
    let mut c = CursorTracker::default();
    assert_eq!(c.history().len(), CURSOR_HISTORY_LEN);
    for i in 0..30 {
        c.on_pointer_move(i as f32 * 10.0, 0.0, 1000.0, 1000.0);
    }
    let h: Vec<Vec2> = c.history().collect();
    assert_eq!(h.len(), CURSOR_HISTORY_LEN);
    assert!(close2(h[0], c.position()));
    assert!(h[0].x > h[1].x);
}

#[test]
fn button_state() {
    let mut c = CursorTracker::default();
    assert!(!c.is_down());
    c.on_pointer_down();
    assert!(c.is_down());
    c.on_pointer_up();
    assert!(!c.is_down());
}

#[test]
fn zero_history_is_rejected() {
    assert!(matches!(
        CursorTracker::new(0),
        Err(ConfigError::ZeroCapacity { .. })
    ));
    assert!(CursorTracker::new(4).is_ok());
}
