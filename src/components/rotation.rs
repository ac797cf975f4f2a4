//! Euler rotation in radians.
//!
//! Axes follow the host convention: `x` is pitch (also used for the tilt of a
//! held object), `y` is yaw around the vertical axis, `z` is roll.
use bevy_ecs::prelude::Component;
use glam::{EulerRot, Quat, Vec3};

#[derive(Component, Clone, Debug, Copy, Default, PartialEq)]
pub struct Rotation {
    pub euler: Vec3,
}

impl Rotation {
    pub fn from_yaw(yaw: f32) -> Self {
        Self {
            euler: Vec3::new(0.0, yaw, 0.0),
        }
    }

    pub fn yaw(&self) -> f32 {
        self.euler.y
    }

    /// Orientation as a quaternion, applying yaw first, then pitch, then roll.
    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.euler.y, self.euler.x, self.euler.z)
    }

    /// Keep only the yaw component, flattening pitch and roll to zero.
    pub fn flatten(&mut self) {
        self.euler = Vec3::new(0.0, self.euler.y, 0.0);
    }
}
