//! Pointer tracking for the ambient particle field.
//!
//! The cursor acts as a driving point: its NDC position is mapped into world space and
//! the motion accumulated since the previous frame becomes the driving velocity.

use std::collections::VecDeque;

use glam::{Vec2, Vec3};

use crate::constants::{cursor_world_scale_vec3, CURSOR_HISTORY_LEN};
use crate::error::{check_capacity, ConfigError};
use crate::input::pointer_ndc;

#[derive(Clone, Debug)]
pub struct CursorTracker {
    position: Vec2,
    frame_velocity: Vec2,
    history: VecDeque<Vec2>,
    history_len: usize,
    down: bool,
}

impl Default for CursorTracker {
    fn default() -> Self {
        Self::with_history(CURSOR_HISTORY_LEN)
    }
}

impl CursorTracker {
    pub fn new(history_len: usize) -> Result<Self, ConfigError> {
        check_capacity("history_len", history_len)?;
        Ok(Self::with_history(history_len))
    }

    pub(crate) fn with_history(history_len: usize) -> Self {
        Self {
            position: Vec2::ZERO,
            frame_velocity: Vec2::ZERO,
            // pre-filled so the history has a fixed length from the start
            history: std::iter::repeat(Vec2::ZERO).take(history_len).collect(),
            history_len,
            down: false,
        }
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let ndc = pointer_ndc(x, y, width, height, self.position);
        self.frame_velocity += ndc - self.position;
        self.position = ndc;
        if self.history.len() == self.history_len {
            self.history.pop_back();
        }
        self.history.push_front(ndc);
    }

    pub fn on_pointer_down(&mut self) {
        self.down = true;
    }

    pub fn on_pointer_up(&mut self) {
        self.down = false;
    }

    /// Call once per frame after the particle field consumed the velocity.
    pub fn end_frame(&mut self) {
        self.frame_velocity = Vec2::ZERO;
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// NDC motion accumulated since the last [`end_frame`](Self::end_frame).
    pub fn velocity(&self) -> Vec2 {
        self.frame_velocity
    }

    pub fn is_down(&self) -> bool {
        self.down
    }

    pub fn world_position(&self) -> Vec3 {
        self.position.extend(0.0) * cursor_world_scale_vec3()
    }

    /// Driving velocity for the particle field: NDC units per frame on the z = 0 plane.
    pub fn world_velocity(&self) -> Vec3 {
        self.frame_velocity.extend(0.0)
    }

    /// Recent pointer positions, newest first.
    pub fn history(&self) -> impl ExactSizeIterator<Item = Vec2> + '_ {
        self.history.iter().copied()
    }
}
