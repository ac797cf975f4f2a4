//! First-person locomotion.
//!
//! Reads the shared [`InputState`](crate::resources::input::InputState) and
//! writes the player's [`CharacterBody`] velocity: gravity while airborne, a
//! jump impulse when standing, and walking along the body's yaw. Releasing
//! the movement keys stops horizontal motion within one step.

use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::components::characterbody::CharacterBody;
use crate::components::player::Player;
use crate::components::rotation::Rotation;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// Move `from` toward `to` by at most `delta`.
pub fn move_toward(from: f32, to: f32, delta: f32) -> f32 {
    if (to - from).abs() <= delta {
        to
    } else {
        from + (to - from).signum() * delta
    }
}

/// World-space walking direction for a movement axis (x = right, y = forward)
/// and a body yaw. Zero when there is no input.
pub fn walk_direction(axis: glam::Vec2, yaw: f32) -> Vec3 {
    let local = Vec3::new(axis.x, 0.0, -axis.y);
    let dir = Rotation::from_yaw(yaw).quat() * local;
    dir.normalize_or_zero()
}

pub fn player_movement_system(
    input: Res<InputState>,
    config: Res<GameConfig>,
    time: Res<WorldTime>,
    mut query: Query<(&Rotation, &mut CharacterBody), With<Player>>,
) {
    let dt = time.delta;
    for (rotation, mut body) in query.iter_mut() {
        let mut velocity = body.velocity;

        if !body.on_floor {
            velocity.y -= config.gravity * dt;
        }
        if input.jump.just_pressed && body.on_floor {
            velocity.y = config.jump_velocity;
        }

        let direction = walk_direction(input.move_axis, rotation.yaw());
        if direction != Vec3::ZERO {
            velocity.x = direction.x * config.speed;
            velocity.z = direction.z * config.speed;
        } else {
            velocity.x = move_toward(velocity.x, 0.0, config.speed);
            velocity.z = move_toward(velocity.z, 0.0, config.speed);
        }

        body.velocity = velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn move_toward_stops_at_target() {
        assert_eq!(move_toward(3.0, 0.0, 5.0), 0.0);
        assert_eq!(move_toward(-8.0, 0.0, 5.0), -3.0);
    }

    #[test]
    fn forward_with_no_yaw_is_negative_z() {
        let d = walk_direction(Vec2::new(0.0, 1.0), 0.0);
        assert!((d.z + 1.0).abs() < EPSILON);
        assert!(d.x.abs() < EPSILON);
    }

    #[test]
    fn diagonal_is_normalized() {
        let d = walk_direction(Vec2::new(1.0, 1.0), 0.3);
        assert!((d.length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn jump_only_from_floor() {
        let mut world = World::new();
        let mut input = InputState::default();
        input.press(crate::events::input::InputAction::Jump);
        world.insert_resource(input);
        world.insert_resource(GameConfig::new());
        world.insert_resource(WorldTime {
            delta: 1.0 / 60.0,
            ..Default::default()
        });
        let grounded = world
            .spawn((
                Player,
                Rotation::default(),
                CharacterBody {
                    velocity: Vec3::ZERO,
                    on_floor: true,
                },
            ))
            .id();
        let airborne = world
            .spawn((Player, Rotation::default(), CharacterBody::default()))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(player_movement_system);
        schedule.run(&mut world);

        let g = world.get::<CharacterBody>(grounded).expect("grounded body");
        assert!((g.velocity.y - 4.5).abs() < EPSILON);
        let a = world.get::<CharacterBody>(airborne).expect("airborne body");
        assert!(a.velocity.y < 0.0);
    }
}
