//! Headless trigger-volume detection.
//!
//! Stand-in for the host's area overlap signals. Each frame
//! [`zone_volume_detector`] compares the bodies overlapping every
//! [`TriggerVolume`] with the set from the previous frame and triggers
//! [`BodyEnteredZone`] / [`BodyExitedZone`] for the differences only.

use bevy_ecs::prelude::*;
use rustc_hash::FxHashSet;

use crate::components::boxcollider::BoxCollider;
use crate::components::position::Position;
use crate::components::rigidbody::RigidBody;
use crate::components::triggervolume::TriggerVolume;
use crate::events::zone::{BodyEnteredZone, BodyExitedZone};

pub fn zone_volume_detector(
    mut volumes: Query<(Entity, &Position, &mut TriggerVolume)>,
    bodies: Query<(Entity, &Position, &BoxCollider), With<RigidBody>>,
    mut commands: Commands,
) {
    for (zone, zone_pos, mut volume) in volumes.iter_mut() {
        let current: FxHashSet<Entity> = bodies
            .iter()
            .filter(|(_, pos, collider)| volume.shape.overlaps(zone_pos.pos, collider, pos.pos))
            .map(|(entity, _, _)| entity)
            .collect();

        for &body in current.difference(&volume.inside) {
            commands.trigger(BodyEnteredZone { zone, body });
        }
        for &body in volume.inside.difference(&current) {
            commands.trigger(BodyExitedZone { zone, body });
        }
        volume.inside = current;
    }
}
