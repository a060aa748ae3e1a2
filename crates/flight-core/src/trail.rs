//! Fixed-capacity engine trail.
//!
//! Points are inserted at the head and evicted from the tail. Each point carries a stored
//! alpha that only ever decays: by `push_decay` whenever a new point is pushed and by
//! `tick_decay` on every passive frame tick. The alpha handed to the renderer is the
//! stored alpha shaped by a sine window over the trail, so both ends fade to nothing.

use std::collections::VecDeque;
use std::f32::consts::PI;

use glam::Vec3;

use crate::color::band_color;
use crate::constants::*;
use crate::error::{check_capacity, check_non_negative, check_unit, ConfigError};

#[derive(Clone, Debug, PartialEq)]
pub struct TrailParams {
    pub max_points: usize,
    pub push_decay: f32,
    pub tick_decay: f32,
    pub fast_speed: f32,
    pub medium_speed: f32,
}

impl Default for TrailParams {
    fn default() -> Self {
        Self {
            max_points: TRAIL_MAX_POINTS,
            push_decay: TRAIL_PUSH_DECAY,
            tick_decay: TRAIL_TICK_DECAY,
            fast_speed: TRAIL_FAST_SPEED,
            medium_speed: TRAIL_MEDIUM_SPEED,
        }
    }
}

impl TrailParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_capacity("max_points", self.max_points)?;
        check_unit("push_decay", self.push_decay)?;
        check_unit("tick_decay", self.tick_decay)?;
        check_non_negative("medium_speed", self.medium_speed)?;
        check_non_negative("fast_speed", self.fast_speed)?;
        if self.fast_speed < self.medium_speed {
            return Err(ConfigError::Inverted {
                name: "fast_speed",
                value: self.fast_speed,
                floor_name: "medium_speed",
                floor: self.medium_speed,
            });
        }
        Ok(())
    }

    pub fn band(&self, speed: f32) -> TrailBand {
        if speed > self.fast_speed {
            TrailBand::Fast
        } else if speed > self.medium_speed {
            TrailBand::Medium
        } else {
            TrailBand::Slow
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrailBand {
    Slow,
    Medium,
    Fast,
}

impl TrailBand {
    pub fn color(self) -> Vec3 {
        band_color(match self {
            TrailBand::Slow => TRAIL_SLOW_HUE,
            TrailBand::Medium => TRAIL_MEDIUM_HUE,
            TrailBand::Fast => TRAIL_FAST_HUE,
        })
    }
}

/// One renderable trail sample. `age` is the index from the head (0 = newest).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub position: Vec3,
    pub color: Vec3,
    pub alpha: f32,
    pub age: usize,
}

#[derive(Clone, Copy, Debug)]
struct StoredPoint {
    position: Vec3,
    color: Vec3,
    alpha: f32,
}

/// Taper over a trail of `count` points: 0 at both ends, 1 in the middle.
/// A single point is shown at full strength.
#[inline]
pub fn trail_window(index: usize, count: usize) -> f32 {
    if count <= 1 {
        return 1.0;
    }
    (PI * index as f32 / (count - 1) as f32).sin().max(0.0)
}

#[derive(Clone, Debug)]
pub struct TrailBuffer {
    params: TrailParams,
    points: VecDeque<StoredPoint>,
}

impl Default for TrailBuffer {
    fn default() -> Self {
        Self::from_params(TrailParams::default())
    }
}

impl TrailBuffer {
    pub fn new(params: TrailParams) -> Result<Self, ConfigError> {
        params.validate()?;
        log::debug!("[trail] buffer ready: {params:?}");
        Ok(Self::from_params(params))
    }

    pub fn with_max_points(max_points: usize) -> Result<Self, ConfigError> {
        Self::new(TrailParams {
            max_points,
            ..Default::default()
        })
    }

    pub(crate) fn from_params(params: TrailParams) -> Self {
        Self {
            points: VecDeque::with_capacity(params.max_points),
            params,
        }
    }

    pub fn params(&self) -> &TrailParams {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.params.max_points
    }

    /// Record the driving entity's position. Any velocity is accepted; zero falls in
    /// the slow band.
    pub fn push(&mut self, position: Vec3, velocity: Vec3) {
        let color = self.params.band(velocity.length()).color();
        if self.points.len() == self.params.max_points {
            self.points.pop_back();
        }
        self.points.push_front(StoredPoint {
            position,
            color,
            alpha: 1.0,
        });
        for p in &mut self.points {
            p.alpha *= self.params.push_decay;
        }
    }

    /// Passive per-frame fade; call once every frame whether or not a push happened.
    pub fn tick(&mut self) {
        for p in &mut self.points {
            p.alpha *= self.params.tick_decay;
        }
    }

    pub fn snapshot(&self) -> Vec<TrailPoint> {
        let mut out = Vec::with_capacity(self.points.len());
        self.snapshot_into(&mut out);
        out
    }

    /// Same as [`snapshot`](Self::snapshot) but reuses `out`'s allocation.
    pub fn snapshot_into(&self, out: &mut Vec<TrailPoint>) {
        out.clear();
        out.extend(self.iter());
    }

    /// Renderable points, newest first.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = TrailPoint> + '_ {
        let count = self.points.len();
        self.points.iter().enumerate().map(move |(i, p)| TrailPoint {
            position: p.position,
            color: p.color,
            alpha: p.alpha * trail_window(i, count),
            age: i,
        })
    }
}
