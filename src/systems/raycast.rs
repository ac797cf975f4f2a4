//! Headless ray queries.
//!
//! Stand-in for the host's ray casts: [`cast_player_rays`] fills the
//! player's [`AimRay`] and [`DropRay`] against every [`BoxCollider`] in the
//! world. The held body is excluded from both rays, and the player carries
//! no collider, so neither ray can hit the caster.

use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::components::boxcollider::BoxCollider;
use crate::components::player::{Head, Player, PlayerController};
use crate::components::position::Position;
use crate::components::raycast::{AimRay, DropRay, RayHit};
use crate::components::rotation::Rotation;
use crate::resources::gameconfig::GameConfig;
use crate::systems::interaction::{eye_position, view_direction};

/// Nearest collider hit along a ray, skipping `exclude`.
pub fn nearest_hit<'a>(
    origin: Vec3,
    direction: Vec3,
    max_distance: f32,
    exclude: Option<Entity>,
    colliders: impl Iterator<Item = (Entity, &'a Position, &'a BoxCollider)>,
) -> Option<RayHit> {
    let direction = direction.normalize_or_zero();
    if direction == Vec3::ZERO {
        return None;
    }
    let mut best: Option<(f32, RayHit)> = None;
    for (entity, position, collider) in colliders {
        if Some(entity) == exclude {
            continue;
        }
        let Some((t, normal)) = collider.ray_hit(position.pos, origin, direction, max_distance)
        else {
            continue;
        };
        if best.as_ref().is_none_or(|(bt, _)| t < *bt) {
            best = Some((
                t,
                RayHit {
                    entity,
                    point: origin + direction * t,
                    normal,
                },
            ));
        }
    }
    best.map(|(_, hit)| hit)
}

pub fn cast_player_rays(
    config: Res<GameConfig>,
    mut players: Query<
        (&PlayerController, &Position, &Rotation, &Head, &mut AimRay, &mut DropRay),
        With<Player>,
    >,
    colliders: Query<(Entity, &Position, &BoxCollider), Without<Player>>,
) {
    for (ctrl, position, rotation, head, mut aim, mut drop_ray) in players.iter_mut() {
        let eye = eye_position(position.pos, config.eye_height);
        let forward = view_direction(rotation.yaw(), head.pitch);
        aim.hit = nearest_hit(eye, forward, config.reach, ctrl.held, colliders.iter());

        drop_ray.hit = if ctrl.is_holding() {
            nearest_hit(
                drop_ray.origin,
                drop_ray.direction,
                config.drop_probe_length,
                ctrl.held,
                colliders.iter(),
            )
        } else {
            None
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_of_two_boxes_wins() {
        let mut world = World::new();
        let near = world.spawn_empty().id();
        let far = world.spawn_empty().id();
        let near_pos = Position::new(0.0, 0.0, -2.0);
        let far_pos = Position::new(0.0, 0.0, -5.0);
        let shape = BoxCollider::new(Vec3::splat(0.5));
        let colliders = vec![(far, &far_pos, &shape), (near, &near_pos, &shape)];

        let hit = nearest_hit(Vec3::ZERO, Vec3::NEG_Z, 10.0, None, colliders.into_iter())
            .expect("hit");
        assert_eq!(hit.entity, near);
        assert!((hit.point.z + 1.5).abs() < 1e-5);
        assert_eq!(hit.normal, Vec3::Z);
    }

    #[test]
    fn excluded_entity_is_skipped() {
        let mut world = World::new();
        let only = world.spawn_empty().id();
        let pos = Position::new(0.0, 0.0, -2.0);
        let shape = BoxCollider::new(Vec3::splat(0.5));
        let hit = nearest_hit(
            Vec3::ZERO,
            Vec3::NEG_Z,
            10.0,
            Some(only),
            vec![(only, &pos, &shape)].into_iter(),
        );
        assert!(hit.is_none());
    }
}
