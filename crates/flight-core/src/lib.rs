//! Per-frame motion, trail and particle state for the flight scene.
//!
//! Everything here is platform-free and single-threaded: the host owns the frame loop,
//! forwards input events, supplies `dt` and a random source, and reads snapshots back
//! for drawing.

pub mod color;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod frame;
pub mod input;
pub mod motion;
pub mod particles;
pub mod trail;
pub mod vertex;

pub use constants::*;
pub use cursor::CursorTracker;
pub use error::ConfigError;
pub use frame::{FlightConfig, FlightFrame, FrameReport};
pub use input::{ControlKey, ControlState, InputSampler};
pub use motion::{KinematicState, MotionIntegrator, MotionParams, Orientation};
pub use particles::{Particle, ParticleField, ParticleParams, ParticleSample};
pub use trail::{TrailBuffer, TrailParams, TrailPoint};
pub use vertex::{ParticleVertex, TrailVertex};
