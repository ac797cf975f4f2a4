//! Ray query results supplied by the host.
//!
//! The player carries two rays. [`AimRay`] points from the camera along the
//! view direction and decides what is highlighted or picked up. [`DropRay`]
//! probes from the held object toward the surface it would land on; the
//! gameplay code moves its origin every tick and the host answers with the
//! nearest hit.
use bevy_ecs::prelude::{Component, Entity};
use glam::Vec3;

/// Nearest intersection reported by a ray query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Entity owning the collider that was hit.
    pub entity: Entity,
    /// World-space contact point.
    pub point: Vec3,
    /// Surface normal at the contact point.
    pub normal: Vec3,
}

/// Camera ray used for aiming. `hit` is `None` when nothing is within reach.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct AimRay {
    pub hit: Option<RayHit>,
}

/// Drop-surface probe cast from the held object.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct DropRay {
    /// Where the probe starts; updated each tick to the held object's position.
    pub origin: Vec3,
    /// Direction of the probe. Straight down by default.
    pub direction: Vec3,
    pub hit: Option<RayHit>,
}

impl Default for DropRay {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            direction: Vec3::NEG_Y,
            hit: None,
        }
    }
}
