//! Unpacking boxes.
//!
//! [`open_box_observer`] answers [`OpenBoxEvent`]: a closed box with content
//! spawns every configured item at its spawn point and marks itself opened.
//! Movable items get a random upward impulse so they scatter out of the box.

use bevy_ecs::prelude::*;
use glam::Vec3;
use log::{debug, info};

use crate::components::container::UnpackingBox;
use crate::components::position::Position;
use crate::components::rotation::Rotation;
use crate::events::container::OpenBoxEvent;
use crate::systems::interaction::random_f32_range;

/// Direction of the scatter impulse: always up, randomly sideways.
pub fn scatter_direction(rng: &mut fastrand::Rng) -> Vec3 {
    Vec3::new(
        random_f32_range(rng, -1.0, 1.0),
        1.0,
        random_f32_range(rng, -1.0, 1.0),
    )
    .normalize()
}

pub fn open_box_observer(
    trigger: On<OpenBoxEvent>,
    mut boxes: Query<(&mut UnpackingBox, &Position, Option<&Rotation>)>,
    mut rng: Local<fastrand::Rng>,
    mut commands: Commands,
) {
    let container = trigger.event().container;
    let Ok((mut unpacking, position, rotation)) = boxes.get_mut(container) else {
        debug!("OpenBoxEvent for {:?} which is not a box", container);
        return;
    };
    if !unpacking.can_open() {
        return;
    }
    unpacking.opened = true;

    let yaw = rotation.map_or(0.0, Rotation::yaw);
    let spawn_point = position.pos + Rotation::from_yaw(yaw).quat() * unpacking.spawn_offset;
    info!("Unpacking box {:?}", container);

    let force = unpacking.unpack_force;
    for template in unpacking.templates() {
        let impulse = if template.is_movable() {
            scatter_direction(&mut rng) * force
        } else {
            Vec3::ZERO
        };
        let item = template.spawn_with_impulse(&mut commands, spawn_point, yaw, impulse);
        debug!("Unpacked {} as {:?}", template.name, item);
    }
}
