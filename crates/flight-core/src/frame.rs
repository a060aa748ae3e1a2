//! One-tick orchestration of the flight core.
//!
//! [`FlightFrame`] owns every component and runs them in a fixed order each frame:
//! sample input, integrate motion, move the craft, feed and fade the trail, step the
//! particle field around the cursor. The event source mutates input through
//! [`FlightFrame::input_mut`] / [`FlightFrame::cursor_mut`] between frames; the renderer
//! reads back through the shared accessors.

use glam::Vec3;
use rand::Rng;

use crate::constants::*;
use crate::cursor::CursorTracker;
use crate::error::{check_capacity, ConfigError};
use crate::input::InputSampler;
use crate::motion::{sanitize_dt, KinematicState, MotionIntegrator, MotionParams};
use crate::particles::{ParticleField, ParticleParams};
use crate::trail::{TrailBuffer, TrailParams};

#[derive(Clone, Debug, PartialEq)]
pub struct FlightConfig {
    pub motion: MotionParams,
    pub trail: TrailParams,
    pub particles: ParticleParams,
    pub cursor_history: usize,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            motion: MotionParams::default(),
            trail: TrailParams::default(),
            particles: ParticleParams::default(),
            cursor_history: CURSOR_HISTORY_LEN,
        }
    }
}

impl FlightConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.motion.validate()?;
        self.trail.validate()?;
        self.particles.validate()?;
        check_capacity("cursor_history", self.cursor_history)
    }
}

/// What the renderer needs to place the craft for this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub kinematics: KinematicState,
    pub position: Vec3,
    /// Emissive strength of the hull.
    pub glow: f32,
    /// Uniform scale of the engine exhaust.
    pub engine_pulse: f32,
    pub trail_len: usize,
    pub particle_count: usize,
    pub spawned: usize,
    /// The clamped delta actually used.
    pub dt: f32,
}

#[inline]
pub fn glow_intensity(kin: &KinematicState) -> f32 {
    match (kin.is_moving, kin.is_boosting) {
        (true, true) => GLOW_BOOSTING,
        (true, false) => GLOW_MOVING,
        _ => GLOW_IDLE,
    }
}

#[inline]
pub fn engine_pulse(elapsed: f32, glow: f32) -> f32 {
    ENGINE_PULSE_BASE + (elapsed * ENGINE_PULSE_FREQUENCY).sin() * ENGINE_PULSE_SPAN * glow
}

#[inline]
pub fn hover_offset(elapsed: f32) -> f32 {
    (elapsed * HOVER_FREQUENCY).sin() * HOVER_AMPLITUDE
}

pub struct FlightFrame {
    input: InputSampler,
    cursor: CursorTracker,
    integrator: MotionIntegrator,
    trail: TrailBuffer,
    particles: ParticleField,
    position: Vec3,
    elapsed: f32,
}

impl Default for FlightFrame {
    fn default() -> Self {
        Self {
            input: InputSampler::new(),
            cursor: CursorTracker::default(),
            integrator: MotionIntegrator::default(),
            trail: TrailBuffer::default(),
            particles: ParticleField::default(),
            position: Vec3::ZERO,
            elapsed: 0.0,
        }
    }
}

impl FlightFrame {
    pub fn new(config: FlightConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        log::debug!("[frame] flight ready: {config:?}");
        Ok(Self {
            input: InputSampler::new(),
            cursor: CursorTracker::with_history(config.cursor_history),
            integrator: MotionIntegrator::from_params(config.motion),
            trail: TrailBuffer::from_params(config.trail),
            particles: ParticleField::from_params(config.particles),
            position: Vec3::ZERO,
            elapsed: 0.0,
        })
    }

    pub fn frame<R: Rng + ?Sized>(&mut self, dt: f32, rng: &mut R) -> FrameReport {
        let dt = sanitize_dt(dt, self.integrator.params().max_dt);
        self.elapsed += dt;

        let controls = self.input.sample();
        let kinematics = self.integrator.step(dt, &controls);

        self.position += kinematics.velocity;
        self.position.y += hover_offset(self.elapsed);

        if kinematics.is_moving || kinematics.is_boosting {
            self.trail.push(self.position, kinematics.velocity);
        }
        self.trail.tick();

        let spawned = self.particles.step(
            dt,
            self.cursor.world_position(),
            self.cursor.world_velocity(),
            rng,
        );
        self.cursor.end_frame();

        let glow = glow_intensity(&kinematics);
        FrameReport {
            kinematics,
            position: self.position,
            glow,
            engine_pulse: engine_pulse(self.elapsed, glow),
            trail_len: self.trail.len(),
            particle_count: self.particles.len(),
            spawned,
            dt,
        }
    }

    pub fn input_mut(&mut self) -> &mut InputSampler {
        &mut self.input
    }

    pub fn cursor_mut(&mut self) -> &mut CursorTracker {
        &mut self.cursor
    }

    pub fn input(&self) -> &InputSampler {
        &self.input
    }

    pub fn cursor(&self) -> &CursorTracker {
        &self.cursor
    }

    pub fn trail(&self) -> &TrailBuffer {
        &self.trail
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}
