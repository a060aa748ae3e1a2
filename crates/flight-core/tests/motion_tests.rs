// Host-side tests for the craft motion integrator.

use flight_core::{ControlState, MotionIntegrator, MotionParams, MAX_FRAME_DT_SEC};
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn forward() -> ControlState {
    ControlState {
        forward: true,
        ..Default::default()
    }
}

#[test]
fn forward_from_rest_moves_along_negative_z() {
    let mut m = MotionIntegrator::default();
    let k = m.step(0.1, &forward());
    assert!(k.velocity.z < 0.0);
    assert!(k.velocity.length() <= 1.0);
    // 2.0 * 0.1 then one damping step
    assert!((k.velocity.z + 0.196).abs() < 1e-5, "got {}", k.velocity.z);
    assert!(k.velocity.x.abs() < 1e-6 && k.velocity.y.abs() < 1e-6);
    assert!(k.is_moving);
    assert!(!k.is_boosting);
}

#[test]
fn speed_never_exceeds_limit() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut m = MotionIntegrator::default();
    for i in 0..2000 {
        let c = ControlState {
            forward: rng.gen_bool(0.7),
            backward: rng.gen_bool(0.1),
            left: rng.gen_bool(0.3),
            right: rng.gen_bool(0.3),
            up: rng.gen_bool(0.2),
            down: rng.gen_bool(0.2),
            boost: rng.gen_bool(0.4),
            pointer: Vec2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0)),
        };
        let dt = match i % 5 {
            0 => 5.0,
            1 => -1.0,
            _ => rng.gen_range(0.0..0.1),
        };
        let k = m.step(dt, &c);
        let limit = if c.boost { 2.0 } else { 1.0 };
        assert!(
            k.velocity.length() <= limit + 1e-5,
            "step {i}: speed {} over {limit}",
            k.velocity.length()
        );
    }
}

#[test]
fn boost_raises_cruise_speed() {
    let mut cruise = MotionIntegrator::default();
    let mut boosted = MotionIntegrator::default();
    let boost = ControlState {
        forward: true,
        boost: true,
        ..Default::default()
    };
    let (mut a, mut b) = (Vec3::ZERO, Vec3::ZERO);
    for _ in 0..300 {
        a = cruise.step(MAX_FRAME_DT_SEC, &forward()).velocity;
        b = boosted.step(MAX_FRAME_DT_SEC, &boost).velocity;
    }
    assert!((a.length() - 0.98).abs() < 1e-4, "cruise {}", a.length());
    assert!((b.length() - 1.96).abs() < 1e-4, "boost {}", b.length());
}

#[test]
fn idle_velocity_decays_strictly() {
    let mut m = MotionIntegrator::default();
    for _ in 0..30 {
        m.step(1.0 / 60.0, &forward());
    }
    let idle = ControlState::default();
    let mut prev = m.step(1.0 / 60.0, &idle).velocity.length();
    assert!(prev > 0.0);
    for _ in 0..500 {
        let k = m.step(1.0 / 60.0, &idle);
        assert!(!k.is_moving);
        let speed = k.velocity.length();
        assert!(speed < prev || speed == 0.0);
        prev = speed;
    }
    assert!(prev < 1e-3);
}

#[test]
fn pointer_steers_movement() {
    let mut m = MotionIntegrator::default();
    let c = ControlState {
        forward: true,
        pointer: Vec2::new(1.0, 0.0),
        ..Default::default()
    };
    let k = m.step(0.05, &c);
    assert!(k.velocity.x > 0.0, "aiming right should drift right");
    assert!(k.velocity.z < 0.0);
    assert!((k.velocity.x - (-k.velocity.z)).abs() < 1e-5);
}

#[test]
fn yaw_follows_pointer_directly() {
    let mut m = MotionIntegrator::default();
    let c = ControlState {
        pointer: Vec2::new(0.5, -0.3),
        ..Default::default()
    };
    let k = m.step(0.016, &c);
    assert!((k.orientation.yaw + std::f32::consts::FRAC_PI_8).abs() < 1e-6);
}

#[test]
fn strafing_right_banks_left_wing_up() {
    let mut m = MotionIntegrator::default();
    let c = ControlState {
        right: true,
        ..Default::default()
    };
    let mut k = m.step(1.0 / 60.0, &c);
    for _ in 0..60 {
        k = m.step(1.0 / 60.0, &c);
    }
    assert!(k.velocity.x > 0.0);
    assert!(k.orientation.roll < 0.0);
    assert!(k.orientation.pitch.abs() < 1e-6);
}

#[test]
fn orientation_blends_toward_banked_target() {
    let mut m = MotionIntegrator::default();
    let c = ControlState {
        forward: true,
        right: true,
        ..Default::default()
    };
    // blend = 1.5 * 0.1, then one 0.95 damping step
    let k1 = m.step(0.1, &c);
    let pitch1 = k1.velocity.z * 0.5 * 0.15 * 0.95;
    let roll1 = -k1.velocity.x * 0.5 * 0.15 * 0.95;
    assert!(pitch1 < 0.0 && roll1 < 0.0);
    assert!((k1.orientation.pitch - pitch1).abs() < 1e-6, "pitch {}", k1.orientation.pitch);
    assert!((k1.orientation.roll - roll1).abs() < 1e-6, "roll {}", k1.orientation.roll);

    let k2 = m.step(0.1, &c);
    let pitch2 = (pitch1 + (k2.velocity.z * 0.5 - pitch1) * 0.15) * 0.95;
    let roll2 = (roll1 + (-k2.velocity.x * 0.5 - roll1) * 0.15) * 0.95;
    assert!((k2.orientation.pitch - pitch2).abs() < 1e-6, "pitch {}", k2.orientation.pitch);
    assert!((k2.orientation.roll - roll2).abs() < 1e-6, "roll {}", k2.orientation.roll);
    assert_eq!(k2.orientation.yaw, 0.0);
}

#[test]
fn orientation_blend_saturates_at_one() {
    let mut m = MotionIntegrator::new(MotionParams {
        rotation_speed: 100.0,
        ..Default::default()
    })
    .unwrap();
    let k = m.step(0.05, &forward());
    // fraction clamps to 1, so pitch lands on the target before damping
    let expected = k.velocity.z * 0.5 * 0.95;
    assert!((k.orientation.pitch - expected).abs() < 1e-6, "pitch {}", k.orientation.pitch);
}

#[test]
fn vertical_pointer_pitches_movement() {
    let mut m = MotionIntegrator::default();
    let c = ControlState {
        forward: true,
        pointer: Vec2::new(0.0, 1.0),
        ..Default::default()
    };
    // pitch = -pointer.y * pi/4 about +X turns -Z toward -Y
    let k = m.step(0.05, &c);
    assert!(k.velocity.y < 0.0, "got {}", k.velocity);
    assert!(k.velocity.z < 0.0);
    assert!((k.velocity.y - k.velocity.z).abs() < 1e-5);
    assert!(k.velocity.x.abs() < 1e-6);

    let mut m = MotionIntegrator::default();
    let c = ControlState {
        pointer: Vec2::new(0.0, -1.0),
        ..c
    };
    assert!(m.step(0.05, &c).velocity.y > 0.0);
}

#[test]
fn heading_at_rest_is_model_forward() {
    let mut m = MotionIntegrator::default();
    let k = m.step(0.016, &ControlState::default());
    assert!((k.direction - Vec3::Z).length() < 1e-6);
    assert_eq!(k.velocity, Vec3::ZERO);
}

#[test]
fn bad_dt_does_not_accelerate() {
    let mut m = MotionIntegrator::default();
    for dt in [f32::NAN, -0.2, f32::NEG_INFINITY, f32::INFINITY] {
        let k = m.step(dt, &forward());
        assert_eq!(k.velocity, Vec3::ZERO, "dt {dt}");
        assert!(k.velocity.is_finite());
    }
}

#[test]
fn stalled_clock_is_capped() {
    let mut stalled = MotionIntegrator::default();
    let mut capped = MotionIntegrator::default();
    let a = stalled.step(10.0, &forward());
    let b = capped.step(MAX_FRAME_DT_SEC, &forward());
    assert_eq!(a, b);
}

#[test]
fn invalid_params_are_rejected() {
    let bad = [
        MotionParams {
            acceleration: 0.0,
            ..Default::default()
        },
        MotionParams {
            damping: 1.5,
            ..Default::default()
        },
        MotionParams {
            max_dt: f32::NAN,
            ..Default::default()
        },
    ];
    for params in bad {
        assert!(MotionIntegrator::new(params.clone()).is_err(), "{params:?}");
    }
    assert!(MotionIntegrator::new(MotionParams::default()).is_ok());
}
