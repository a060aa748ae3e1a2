//! GPU-ready vertex layouts for the trail and particle snapshots.
//!
//! Both are plain `#[repr(C)]` structs so a renderer can upload them with
//! `bytemuck::cast_slice` without touching the simulation types.

use bytemuck::{Pod, Zeroable};

use crate::particles::ParticleField;
use crate::trail::TrailBuffer;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct TrailVertex {
    pub position: [f32; 3],
    pub alpha: f32,
    pub color: [f32; 3],
    /// Normalized position along the trail, 0 at the head.
    pub along: f32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ParticleVertex {
    pub position: [f32; 3],
    pub alpha: f32,
    /// Color pre-multiplied by life for additive blending.
    pub color: [f32; 3],
    pub _pad: f32,
}

impl TrailBuffer {
    /// Write one vertex per trail point, newest first, replacing `out`'s contents.
    pub fn vertices_into(&self, out: &mut Vec<TrailVertex>) {
        out.clear();
        let capacity = self.capacity() as f32;
        out.extend(self.iter().map(|p| TrailVertex {
            position: p.position.to_array(),
            alpha: p.alpha,
            color: p.color.to_array(),
            along: p.age as f32 / capacity,
        }));
    }
}

impl ParticleField {
    /// Write one vertex per live particle, replacing `out`'s contents.
    pub fn vertices_into(&self, out: &mut Vec<ParticleVertex>) {
        out.clear();
        out.extend(self.iter().map(|s| ParticleVertex {
            position: s.position.to_array(),
            alpha: s.alpha,
            color: (s.color * s.alpha).to_array(),
            _pad: 0.0,
        }));
    }
}
