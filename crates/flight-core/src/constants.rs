use glam::Vec3;

// Shared motion/trail/particle tuning constants used by the core and the frontends.

// Frame clock
pub const MAX_FRAME_DT_SEC: f32 = 1.0 / 15.0; // a stalled clock never advances more than this

// Craft motion
pub const ACCELERATION: f32 = 2.0; // units/s^2 along the desired direction
pub const MAX_SPEED: f32 = 1.0; // cruise speed cap (units per frame)
pub const BOOST_MAX_SPEED: f32 = 2.0; // speed cap while boost is held
pub const VELOCITY_DAMPING: f32 = 0.98; // applied once per step, not dt-scaled
pub const ROTATION_SPEED: f32 = 1.5; // orientation blend rate per second
pub const ROTATION_DAMPING: f32 = 0.95; // pitch/roll decay per step
pub const POINTER_ANGLE: f32 = std::f32::consts::FRAC_PI_4; // full pointer deflection
pub const BANK_FACTOR: f32 = 0.5; // velocity -> pitch/roll target

// Craft presentation
pub const HOVER_FREQUENCY: f32 = 2.0; // rad/s of the idle bob
pub const HOVER_AMPLITUDE: f32 = 0.002; // world units added per frame
pub const GLOW_BOOSTING: f32 = 2.0;
pub const GLOW_MOVING: f32 = 1.0;
pub const GLOW_IDLE: f32 = 0.5;
pub const ENGINE_PULSE_FREQUENCY: f32 = 10.0;
pub const ENGINE_PULSE_BASE: f32 = 0.8;
pub const ENGINE_PULSE_SPAN: f32 = 0.2;

// Trail
pub const TRAIL_MAX_POINTS: usize = 150;
pub const TRAIL_PUSH_DECAY: f32 = 0.97; // stored alpha decay on every push
pub const TRAIL_TICK_DECAY: f32 = 0.99; // stored alpha decay on every passive tick
pub const TRAIL_FAST_SPEED: f32 = 2.0; // above this: purple band
pub const TRAIL_MEDIUM_SPEED: f32 = 1.0; // above this: blue band

// Trail palette (HSL hue, full saturation, mid lightness)
pub const TRAIL_FAST_HUE: f32 = 0.7; // purple
pub const TRAIL_MEDIUM_HUE: f32 = 0.6; // blue
pub const TRAIL_SLOW_HUE: f32 = 0.5; // cyan

// Particle field
pub const PARTICLE_COUNT: usize = 1000;
pub const PARTICLE_SPAWN_RATE: f32 = 10.0; // spawns per unit of driving speed
pub const PARTICLE_SPAWN_JITTER: f32 = 0.25; // +/- per axis around the driving point
pub const PARTICLE_VELOCITY_GAIN: f32 = 2.0; // driving velocity multiplier
pub const PARTICLE_VELOCITY_JITTER: f32 = 0.1; // +/- per axis on spawn velocity
pub const PARTICLE_CENTERING: f32 = 0.001; // pull toward the origin per step
pub const PARTICLE_WANDER: f32 = 0.005; // +/- per axis random walk per step
pub const PARTICLE_DRAG: f32 = 0.98; // applied once per step, not dt-scaled
pub const PARTICLE_LIFE_DECAY: f32 = 0.01; // life lost per step
pub const PARTICLE_FAST_SPEED: f32 = 0.05; // driving speed above this: fast band

// Particle palette
pub const PARTICLE_FAST_HUE: f32 = 0.6; // blue
pub const PARTICLE_SLOW_HUE: f32 = 0.3; // green

// Cursor
pub const CURSOR_HISTORY_LEN: usize = 20;
pub const CURSOR_WORLD_SCALE: [f32; 3] = [10.0, 5.0, 0.0]; // NDC -> world for the particle field

#[inline]
pub fn cursor_world_scale_vec3() -> Vec3 {
    Vec3::from(CURSOR_WORLD_SCALE)
}
