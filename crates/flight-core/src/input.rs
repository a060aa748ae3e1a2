use glam::Vec2;

/// Logical craft controls. Physical keys are classified into this set by the event source
/// (or by [`ControlKey::from_code`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlKey {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
    Boost,
}

impl ControlKey {
    /// Classify a physical key code (`KeyboardEvent.code` naming).
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "KeyW" | "ArrowUp" => Some(Self::Forward),
            "KeyS" | "ArrowDown" => Some(Self::Backward),
            "KeyA" | "ArrowLeft" => Some(Self::Left),
            "KeyD" | "ArrowRight" => Some(Self::Right),
            "Space" => Some(Self::Up),
            "ControlLeft" | "ControlRight" => Some(Self::Down),
            "ShiftLeft" | "ShiftRight" => Some(Self::Boost),
            _ => None,
        }
    }
}

/// Held controls plus the pointer offset in normalized device coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ControlState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub boost: bool,
    /// x right, y up, both in \[-1, 1\].
    pub pointer: Vec2,
}

impl ControlState {
    fn flag_mut(&mut self, key: ControlKey) -> &mut bool {
        match key {
            ControlKey::Forward => &mut self.forward,
            ControlKey::Backward => &mut self.backward,
            ControlKey::Left => &mut self.left,
            ControlKey::Right => &mut self.right,
            ControlKey::Up => &mut self.up,
            ControlKey::Down => &mut self.down,
            ControlKey::Boost => &mut self.boost,
        }
    }

    pub fn is_held(&self, key: ControlKey) -> bool {
        match key {
            ControlKey::Forward => self.forward,
            ControlKey::Backward => self.backward,
            ControlKey::Left => self.left,
            ControlKey::Right => self.right,
            ControlKey::Up => self.up,
            ControlKey::Down => self.down,
            ControlKey::Boost => self.boost,
        }
    }
}

/// Pixel position to NDC on one axis; `None` when the result is not finite
/// (zero-sized viewport, NaN/inf coordinates).
#[inline]
pub fn pixel_to_ndc(pixel: f32, extent: f32) -> Option<f32> {
    let ndc = (pixel / extent) * 2.0 - 1.0;
    ndc.is_finite().then(|| ndc.clamp(-1.0, 1.0))
}

/// Pointer pixel coordinates to NDC with y flipped so up is positive. Axes that fail
/// to normalize keep their value from `last`.
#[inline]
pub fn pointer_ndc(x: f32, y: f32, width: f32, height: f32, last: Vec2) -> Vec2 {
    let nx = pixel_to_ndc(x, width);
    let ny = pixel_to_ndc(y, height).map(|v| -v);
    if nx.is_none() || ny.is_none() {
        log::debug!(
            "[input] dropping non-finite pointer axis: ({x}, {y}) in {width}x{height}"
        );
    }
    Vec2::new(nx.unwrap_or(last.x), ny.unwrap_or(last.y))
}

/// Accumulates asynchronous key and pointer events into a [`ControlState`].
#[derive(Clone, Debug, Default)]
pub struct InputSampler {
    state: ControlState,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_key_down(&mut self, key: ControlKey) {
        *self.state.flag_mut(key) = true;
    }

    pub fn on_key_up(&mut self, key: ControlKey) {
        *self.state.flag_mut(key) = false;
    }

    /// Apply a raw key code; unknown codes are ignored.
    pub fn on_key_code(&mut self, code: &str, pressed: bool) {
        match ControlKey::from_code(code) {
            Some(key) if pressed => self.on_key_down(key),
            Some(key) => self.on_key_up(key),
            None => log::trace!("[input] unmapped key code {code:?}"),
        }
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.state.pointer = pointer_ndc(x, y, width, height, self.state.pointer);
    }

    /// Copy of the current controls; later events do not affect it.
    #[inline]
    pub fn sample(&self) -> ControlState {
        self.state
    }
}
