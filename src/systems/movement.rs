//! Headless kinematic integration.
//!
//! Stand-in for the host's physics step. Bodies fall under gravity (scaled
//! per body), consume queued impulses, and come to rest on top of static
//! colliders (anything with a [`BoxCollider`] and no [`RigidBody`]). There is
//! no side collision and bodies do not stack on each other.

use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::components::boxcollider::BoxCollider;
use crate::components::characterbody::CharacterBody;
use crate::components::position::Position;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::resources::gameconfig::GameConfig;
use crate::resources::worldtime::WorldTime;

/// Horizontal velocity lost per second while resting on a surface.
const GROUND_FRICTION: f32 = 8.0;
/// How far below a surface top a body may start and still land on it.
const STEP_TOLERANCE: f32 = 0.05;

type StaticSurfaces<'w, 's> =
    Query<
        'w,
        's,
        (&'static Position, &'static BoxCollider),
        (Without<RigidBody>, Without<CharacterBody>),
    >;

/// Height of the highest surface under a footprint that a body would come to
/// rest on. `above` must not start below a surface top (minus a small step)
/// and `next_bottom` must reach it.
fn landing_height(
    center: Vec3,
    half_xz: Vec3,
    above: f32,
    next_bottom: f32,
    surfaces: &StaticSurfaces,
) -> Option<f32> {
    let mut best: Option<f32> = None;
    for (pos, collider) in surfaces.iter() {
        let (min, max) = collider.aabb(pos.pos);
        let overlaps_xz = center.x + half_xz.x > min.x
            && center.x - half_xz.x < max.x
            && center.z + half_xz.z > min.z
            && center.z - half_xz.z < max.z;
        if !overlaps_xz {
            continue;
        }
        let top = max.y;
        if above >= top - STEP_TOLERANCE && next_bottom <= top {
            best = Some(best.map_or(top, |b: f32| b.max(top)));
        }
    }
    best
}

pub fn integrate_rigid_bodies(
    time: Res<WorldTime>,
    config: Res<GameConfig>,
    mut bodies: Query<(&mut Position, &mut Rotation, &mut RigidBody, &BoxCollider)>,
    surfaces: StaticSurfaces,
) {
    let dt = time.delta;
    if dt <= 0.0 {
        return;
    }
    for (mut position, mut rotation, mut body, collider) in bodies.iter_mut() {
        let impulse = body.take_impulse();
        let mass = body.mass;
        let gravity_scale = body.gravity_scale;
        body.linear_velocity += impulse / mass;
        body.linear_velocity.y -= config.gravity * gravity_scale * dt;

        // A body dropped slightly into a surface still rests on it as long as
        // its center was above the top.
        let center = position.pos + collider.offset;
        let mut next = position.pos + body.linear_velocity * dt;
        let half = collider.half_extents;
        let next_bottom = next.y + collider.offset.y - half.y;

        let landing = landing_height(
            next + collider.offset,
            half,
            center.y,
            next_bottom,
            &surfaces,
        );
        if let Some(top) = landing {
            next.y = top + half.y - collider.offset.y;
            if body.linear_velocity.y < 0.0 {
                body.linear_velocity.y = 0.0;
            }
            if body.gravity_scale > 0.0 {
                let keep = (1.0 - GROUND_FRICTION * dt).max(0.0);
                body.linear_velocity.x *= keep;
                body.linear_velocity.z *= keep;
            }
        }

        position.pos = next;
        let spin = body.angular_velocity * dt;
        rotation.euler += spin;
    }
}

pub fn integrate_character_bodies(
    time: Res<WorldTime>,
    mut characters: Query<(&mut Position, &mut CharacterBody)>,
    surfaces: StaticSurfaces,
) {
    let dt = time.delta;
    if dt <= 0.0 {
        return;
    }
    for (mut position, mut body) in characters.iter_mut() {
        let mut next = position.pos + body.velocity * dt;
        match landing_height(next, Vec3::splat(0.3), position.pos.y, next.y, &surfaces) {
            Some(top) => {
                next.y = top;
                if body.velocity.y < 0.0 {
                    body.velocity.y = 0.0;
                }
                body.on_floor = true;
            }
            None => body.on_floor = false,
        }
        position.pos = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_with_floor() -> World {
        let mut world = World::new();
        world.insert_resource(GameConfig::new());
        world.insert_resource(WorldTime {
            delta: 1.0 / 60.0,
            ..Default::default()
        });
        world.spawn((
            Position::new(0.0, -0.5, 0.0),
            BoxCollider::new(Vec3::new(10.0, 0.5, 10.0)),
        ));
        world
    }

    #[test]
    fn falling_body_comes_to_rest_on_floor() {
        let mut world = world_with_floor();
        let item = world
            .spawn((
                Position::new(0.0, 1.0, 0.0),
                Rotation::default(),
                RigidBody::new(1.0),
                BoxCollider::new(Vec3::splat(0.15)),
            ))
            .id();
        let mut schedule = Schedule::default();
        schedule.add_systems(integrate_rigid_bodies);
        for _ in 0..120 {
            schedule.run(&mut world);
        }
        let pos = world.get::<Position>(item).expect("item");
        assert!((pos.pos.y - 0.15).abs() < 1e-4);
        let body = world.get::<RigidBody>(item).expect("item");
        assert_eq!(body.linear_velocity.y, 0.0);
    }

    #[test]
    fn body_snapped_into_a_surface_is_lifted_onto_it() {
        let mut world = world_with_floor();
        let item = world
            .spawn((
                Position::new(0.0, 0.05, 0.0),
                Rotation::default(),
                RigidBody::new(1.0),
                BoxCollider::new(Vec3::splat(0.15)),
            ))
            .id();
        let mut schedule = Schedule::default();
        schedule.add_systems(integrate_rigid_bodies);
        schedule.run(&mut world);
        let pos = world.get::<Position>(item).expect("item");
        assert!((pos.pos.y - 0.15).abs() < 1e-4);
    }

    #[test]
    fn weightless_body_does_not_fall() {
        let mut world = world_with_floor();
        let mut rb = RigidBody::new(1.0);
        rb.gravity_scale = 0.0;
        let item = world
            .spawn((
                Position::new(0.0, 1.0, 0.0),
                Rotation::default(),
                rb,
                BoxCollider::new(Vec3::splat(0.15)),
            ))
            .id();
        let mut schedule = Schedule::default();
        schedule.add_systems(integrate_rigid_bodies);
        for _ in 0..30 {
            schedule.run(&mut world);
        }
        let pos = world.get::<Position>(item).expect("item");
        assert!((pos.pos.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn impulse_is_consumed_once() {
        let mut world = world_with_floor();
        let mut rb = RigidBody::new(2.0);
        rb.gravity_scale = 0.0;
        rb.apply_central_impulse(Vec3::new(4.0, 0.0, 0.0));
        let item = world
            .spawn((
                Position::new(0.0, 1.0, 0.0),
                Rotation::default(),
                rb,
                BoxCollider::new(Vec3::splat(0.15)),
            ))
            .id();
        let mut schedule = Schedule::default();
        schedule.add_systems(integrate_rigid_bodies);
        schedule.run(&mut world);
        schedule.run(&mut world);
        let body = world.get::<RigidBody>(item).expect("item");
        assert!((body.linear_velocity.x - 2.0).abs() < 1e-5);
        assert_eq!(body.pending_impulse, Vec3::ZERO);
    }

    #[test]
    fn character_lands_and_reports_floor() {
        let mut world = world_with_floor();
        let player = world
            .spawn((Position::new(0.0, 0.5, 0.0), CharacterBody::default()))
            .id();
        let mut schedule = Schedule::default();
        schedule.add_systems(integrate_character_bodies);
        world
            .get_mut::<CharacterBody>(player)
            .expect("player")
            .velocity = Vec3::new(0.0, -10.0, 0.0);
        for _ in 0..10 {
            schedule.run(&mut world);
        }
        let body = world.get::<CharacterBody>(player).expect("player");
        assert!(body.on_floor);
        let pos = world.get::<Position>(player).expect("player");
        assert!(pos.pos.y.abs() < 1e-5);
    }
}
