//! Trigger volumes for the headless host.
//!
//! A [`TriggerVolume`] remembers which bodies it contained on the previous
//! tick so [`crate::systems::zonevolume`] can report only boundary crossings.
use bevy_ecs::prelude::*;
use glam::Vec3;
use rustc_hash::FxHashSet;

use crate::components::boxcollider::BoxCollider;

#[derive(Component, Clone, Debug)]
pub struct TriggerVolume {
    pub shape: BoxCollider,
    /// Bodies inside as of the last detection pass.
    pub inside: FxHashSet<Entity>,
}

impl TriggerVolume {
    pub fn new(half_extents: Vec3) -> Self {
        Self {
            shape: BoxCollider::new(half_extents),
            inside: FxHashSet::default(),
        }
    }
}
