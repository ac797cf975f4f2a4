//! Physics body exposed to the host engine.
//!
//! The [`RigidBody`] component is the settable surface the gameplay code uses
//! to steer a simulated body: linear and angular velocity, a gravity scale,
//! per-layer collision mask bits and an accumulated central impulse. The host
//! (or the headless integrator in [`crate::systems::movement`]) reads these
//! values each physics step.
//!
//! Collision layers are numbered from 1, matching the host editor. Layer
//! [`PLAYER_LAYER`] is the player's body; clearing it from a body's mask stops
//! that body from pushing against the player while it is carried.

use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Collision layer occupied by the player body.
pub const PLAYER_LAYER: u32 = 3;
/// Collision layer occupied by world geometry.
pub const WORLD_LAYER: u32 = 1;

/// Simulated body steered by gameplay code.
///
/// # Example
/// ```ignore
/// let mut rb = RigidBody::new(1.0);
/// rb.gravity_scale = 0.0;
/// rb.set_collision_mask_value(PLAYER_LAYER, false);
/// rb.apply_central_impulse(Vec3::Y * 5.0);
/// ```
#[derive(Component, Clone, Debug, PartialEq)]
pub struct RigidBody {
    /// Linear velocity in world units per second.
    pub linear_velocity: Vec3,
    /// Angular velocity in radians per second around each world axis.
    pub angular_velocity: Vec3,
    /// Multiplier applied to world gravity. 1.0 is normal, 0.0 floats.
    pub gravity_scale: f32,
    /// Bit mask of layers this body collides with. Bit `n - 1` is layer `n`.
    pub collision_mask: u32,
    /// Mass in kilograms, used to turn impulses into velocity changes.
    pub mass: f32,
    /// Impulse accumulated since the host last consumed it.
    pub pending_impulse: Vec3,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl RigidBody {
    /// Create a body at rest with normal gravity, colliding with the world and the player.
    pub fn new(mass: f32) -> Self {
        let mut rb = Self {
            linear_velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            gravity_scale: 1.0,
            collision_mask: 0,
            mass: mass.max(f32::EPSILON),
            pending_impulse: Vec3::ZERO,
        };
        rb.set_collision_mask_value(WORLD_LAYER, true);
        rb.set_collision_mask_value(PLAYER_LAYER, true);
        rb
    }

    /// Enable or disable collision against a 1-based layer number.
    ///
    /// Layers outside 1..=32 are ignored.
    pub fn set_collision_mask_value(&mut self, layer: u32, enabled: bool) {
        if !(1..=32).contains(&layer) {
            return;
        }
        let bit = 1u32 << (layer - 1);
        if enabled {
            self.collision_mask |= bit;
        } else {
            self.collision_mask &= !bit;
        }
    }

    /// Whether collision against a 1-based layer number is enabled.
    pub fn collision_mask_value(&self, layer: u32) -> bool {
        if !(1..=32).contains(&layer) {
            return false;
        }
        self.collision_mask & (1u32 << (layer - 1)) != 0
    }

    /// Queue an impulse through the center of mass.
    pub fn apply_central_impulse(&mut self, impulse: Vec3) {
        self.pending_impulse += impulse;
    }

    /// Take the queued impulse, leaving zero behind.
    pub fn take_impulse(&mut self) -> Vec3 {
        std::mem::take(&mut self.pending_impulse)
    }

    /// Stop all linear and angular motion.
    pub fn halt(&mut self) {
        self.linear_velocity = Vec3::ZERO;
        self.angular_velocity = Vec3::ZERO;
    }
}
