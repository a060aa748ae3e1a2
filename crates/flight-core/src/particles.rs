//! Ambient particle field seeded from a driving point.
//!
//! Particles spawn around the driving position at a rate proportional to its speed and
//! drift under a weak pull toward the origin, a random walk and drag. Velocities are
//! per-step displacements, matching the motion integrator, so `step` does not use its
//! frame delta. Randomness comes from the caller's generator.

use glam::Vec3;
use rand::Rng;

use crate::color::band_color;
use crate::constants::*;
use crate::error::{check_capacity, check_non_negative, check_positive, check_unit, ConfigError};

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleParams {
    pub particle_count: usize,
    pub spawn_rate: f32,
    pub spawn_jitter: f32,
    pub velocity_gain: f32,
    pub velocity_jitter: f32,
    pub centering: f32,
    pub wander: f32,
    pub drag: f32,
    pub life_decay: f32,
    pub fast_speed: f32,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            spawn_rate: PARTICLE_SPAWN_RATE,
            spawn_jitter: PARTICLE_SPAWN_JITTER,
            velocity_gain: PARTICLE_VELOCITY_GAIN,
            velocity_jitter: PARTICLE_VELOCITY_JITTER,
            centering: PARTICLE_CENTERING,
            wander: PARTICLE_WANDER,
            drag: PARTICLE_DRAG,
            life_decay: PARTICLE_LIFE_DECAY,
            fast_speed: PARTICLE_FAST_SPEED,
        }
    }
}

impl ParticleParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_capacity("particle_count", self.particle_count)?;
        check_non_negative("spawn_rate", self.spawn_rate)?;
        check_non_negative("spawn_jitter", self.spawn_jitter)?;
        check_non_negative("velocity_gain", self.velocity_gain)?;
        check_non_negative("velocity_jitter", self.velocity_jitter)?;
        check_non_negative("centering", self.centering)?;
        check_non_negative("wander", self.wander)?;
        check_unit("drag", self.drag)?;
        // zero decay would make particles immortal and starve spawning once full
        check_positive("life_decay", self.life_decay)?;
        check_non_negative("fast_speed", self.fast_speed)?;
        Ok(())
    }

    /// Particles to emit for a driving speed: none at rest, otherwise
    /// `floor(speed * spawn_rate) + 1`, never more than `particle_count`.
    pub fn spawn_count(&self, speed: f32) -> usize {
        if !speed.is_finite() || speed <= 0.0 {
            return 0;
        }
        let cap = self.particle_count as f32;
        let count = ((speed * self.spawn_rate).floor().min(cap) as usize).saturating_add(1);
        count.min(self.particle_count)
    }

    pub fn band(&self, speed: f32) -> ParticleBand {
        if speed > self.fast_speed {
            ParticleBand::Fast
        } else {
            ParticleBand::Slow
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleBand {
    Slow,
    Fast,
}

impl ParticleBand {
    pub fn color(self) -> Vec3 {
        band_color(match self {
            ParticleBand::Slow => PARTICLE_SLOW_HUE,
            ParticleBand::Fast => PARTICLE_FAST_HUE,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Remaining life in (0, 1]; the particle is culled once it reaches 0.
    pub life: f32,
    pub color: Vec3,
}

/// Renderable particle: `alpha` is the particle's remaining life.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSample {
    pub position: Vec3,
    pub color: Vec3,
    pub alpha: f32,
}

#[inline]
fn jitter<R: Rng + ?Sized>(rng: &mut R, half_extent: f32) -> Vec3 {
    Vec3::new(
        rng.gen_range(-half_extent..=half_extent),
        rng.gen_range(-half_extent..=half_extent),
        rng.gen_range(-half_extent..=half_extent),
    )
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    params: ParticleParams,
    particles: Vec<Particle>,
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::from_params(ParticleParams::default())
    }
}

impl ParticleField {
    pub fn new(params: ParticleParams) -> Result<Self, ConfigError> {
        params.validate()?;
        log::debug!("[particles] field ready: {params:?}");
        Ok(Self::from_params(params))
    }

    pub(crate) fn from_params(params: ParticleParams) -> Self {
        Self {
            particles: Vec::with_capacity(params.particle_count),
            params,
        }
    }

    pub fn params(&self) -> &ParticleParams {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Spawn around the driving point, then advance and cull every particle.
    ///
    /// Returns how many particles were spawned this step.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        _dt: f32,
        driving_position: Vec3,
        driving_velocity: Vec3,
        rng: &mut R,
    ) -> usize {
        let spawned = self.spawn(driving_position, driving_velocity, rng);
        self.advance(rng);
        spawned
    }

    fn spawn<R: Rng + ?Sized>(&mut self, origin: Vec3, velocity: Vec3, rng: &mut R) -> usize {
        if !origin.is_finite() || !velocity.is_finite() {
            log::debug!("[particles] skipping spawn for non-finite driver {origin} / {velocity}");
            return 0;
        }
        let p = &self.params;
        let speed = velocity.length();
        let free = p.particle_count - self.particles.len();
        let count = p.spawn_count(speed).min(free);
        let color = p.band(speed).color();
        for _ in 0..count {
            self.particles.push(Particle {
                position: origin + jitter(rng, p.spawn_jitter),
                velocity: velocity * p.velocity_gain + jitter(rng, p.velocity_jitter),
                life: 1.0,
                color,
            });
        }
        count
    }

    fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let p = &self.params;
        self.particles.retain_mut(|particle| {
            particle.position += particle.velocity;
            particle.velocity += -particle.position * p.centering;
            particle.velocity += jitter(rng, p.wander);
            particle.velocity *= p.drag;
            particle.life -= p.life_decay;
            particle.life > 0.0
        });
    }

    pub fn snapshot(&self) -> Vec<ParticleSample> {
        let mut out = Vec::with_capacity(self.particles.len());
        self.snapshot_into(&mut out);
        out
    }

    /// Same as [`snapshot`](Self::snapshot) but reuses `out`'s allocation.
    pub fn snapshot_into(&self, out: &mut Vec<ParticleSample>) {
        out.clear();
        out.extend(self.iter());
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = ParticleSample> + '_ {
        self.particles.iter().map(|p| ParticleSample {
            position: p.position,
            color: p.color,
            alpha: p.life,
        })
    }
}
