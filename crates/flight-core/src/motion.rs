//! Craft motion integration.
//!
//! [`MotionIntegrator`] turns a [`ControlState`] snapshot and a frame delta into a damped
//! per-frame velocity and a smoothed orientation. It does not own the craft's absolute
//! position: the caller adds `velocity` to its own position each frame.
//!
//! Damping is applied once per step and is not scaled by `dt`, so motion depends on the
//! frame rate.

use glam::{EulerRot, Quat, Vec3};

use crate::constants::*;
use crate::error::{check_positive, check_unit, ConfigError};
use crate::input::ControlState;

#[derive(Clone, Debug, PartialEq)]
pub struct MotionParams {
    pub acceleration: f32,
    pub max_speed: f32,
    pub boost_max_speed: f32,
    pub damping: f32,
    pub rotation_speed: f32,
    pub rotation_damping: f32,
    pub pointer_angle: f32,
    pub bank_factor: f32,
    pub max_dt: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            acceleration: ACCELERATION,
            max_speed: MAX_SPEED,
            boost_max_speed: BOOST_MAX_SPEED,
            damping: VELOCITY_DAMPING,
            rotation_speed: ROTATION_SPEED,
            rotation_damping: ROTATION_DAMPING,
            pointer_angle: POINTER_ANGLE,
            bank_factor: BANK_FACTOR,
            max_dt: MAX_FRAME_DT_SEC,
        }
    }
}

impl MotionParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("acceleration", self.acceleration)?;
        check_positive("max_speed", self.max_speed)?;
        check_positive("boost_max_speed", self.boost_max_speed)?;
        if self.boost_max_speed < self.max_speed {
            return Err(ConfigError::Inverted {
                name: "boost_max_speed",
                value: self.boost_max_speed,
                floor_name: "max_speed",
                floor: self.max_speed,
            });
        }
        check_unit("damping", self.damping)?;
        check_positive("rotation_speed", self.rotation_speed)?;
        check_unit("rotation_damping", self.rotation_damping)?;
        check_positive("pointer_angle", self.pointer_angle)?;
        check_positive("bank_factor", self.bank_factor)?;
        check_positive("max_dt", self.max_dt)?;
        Ok(())
    }

    #[inline]
    pub fn speed_limit(&self, boosting: bool) -> f32 {
        if boosting {
            self.boost_max_speed
        } else {
            self.max_speed
        }
    }
}

/// Euler angles in radians, applied in intrinsic X-Y-Z order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orientation {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl Orientation {
    #[inline]
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.pitch, self.yaw, self.roll)
    }

    /// The craft's nose (+Z in model space) in world space.
    #[inline]
    pub fn heading(self) -> Vec3 {
        self.to_quat() * Vec3::Z
    }
}

/// Immutable per-step output handed to callers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct KinematicState {
    /// Displacement to add to the craft position this frame.
    pub velocity: Vec3,
    pub orientation: Orientation,
    pub direction: Vec3,
    pub is_moving: bool,
    pub is_boosting: bool,
}

/// Clamp an untrusted frame delta into `[0, max_dt]`. NaN and negative values become 0.
#[inline]
pub fn sanitize_dt(dt: f32, max_dt: f32) -> f32 {
    if !dt.is_finite() || dt < 0.0 {
        log::trace!("[motion] non-usable dt {dt}, treating as 0");
        return 0.0;
    }
    if dt > max_dt {
        log::trace!("[motion] dt {dt} exceeds {max_dt}, clamping");
        return max_dt;
    }
    dt
}

/// Unit movement intent in local axes (x right, y up, -z forward), or zero when the
/// held keys cancel out.
pub fn desired_direction(controls: &ControlState) -> Vec3 {
    let axis = |pos: bool, neg: bool| f32::from(pos as i8 - neg as i8);
    let raw = Vec3::new(
        axis(controls.right, controls.left),
        axis(controls.up, controls.down),
        axis(controls.backward, controls.forward),
    );
    raw.normalize_or_zero()
}

/// Rotation that points movement where the pointer aims.
#[inline]
pub fn aim_rotation(controls: &ControlState, pointer_angle: f32) -> Quat {
    Quat::from_euler(
        EulerRot::XYZ,
        -controls.pointer.y * pointer_angle,
        -controls.pointer.x * pointer_angle,
        0.0,
    )
}

#[derive(Clone, Debug)]
pub struct MotionIntegrator {
    params: MotionParams,
    velocity: Vec3,
    orientation: Orientation,
}

impl Default for MotionIntegrator {
    fn default() -> Self {
        Self::from_params(MotionParams::default())
    }
}

impl MotionIntegrator {
    pub fn new(params: MotionParams) -> Result<Self, ConfigError> {
        params.validate()?;
        log::debug!("[motion] integrator ready: {params:?}");
        Ok(Self::from_params(params))
    }

    pub(crate) fn from_params(params: MotionParams) -> Self {
        Self {
            params,
            velocity: Vec3::ZERO,
            orientation: Orientation::default(),
        }
    }

    pub fn params(&self) -> &MotionParams {
        &self.params
    }

    pub fn step(&mut self, dt: f32, controls: &ControlState) -> KinematicState {
        let p = &self.params;
        let dt = sanitize_dt(dt, p.max_dt);

        let intent = desired_direction(controls);
        let is_moving = intent.length_squared() > 0.0;
        let direction = aim_rotation(controls, p.pointer_angle) * intent;

        self.velocity += direction * p.acceleration * dt;
        self.velocity = self
            .velocity
            .clamp_length_max(p.speed_limit(controls.boost));
        self.velocity *= p.damping;

        // Bank into the turn and pitch with forward speed; yaw follows the pointer directly.
        let target_roll = -self.velocity.x * p.bank_factor;
        let target_pitch = self.velocity.z * p.bank_factor;
        let blend = (p.rotation_speed * dt).clamp(0.0, 1.0);
        let o = &mut self.orientation;
        o.pitch += (target_pitch - o.pitch) * blend;
        o.roll += (target_roll - o.roll) * blend;
        o.yaw = -controls.pointer.x * p.pointer_angle;
        o.pitch *= p.rotation_damping;
        o.roll *= p.rotation_damping;

        KinematicState {
            velocity: self.velocity,
            orientation: self.orientation,
            direction: self.orientation.heading(),
            is_moving,
            is_boosting: controls.boost,
        }
    }
}
