//! Player interaction: highlight, pick up, carry, rotate, tilt and drop.
//!
//! Per frame, in this order:
//! - [`hold_object_system`] pulls the held body toward the hold point, keeps it
//!   upright (plus tilt), and places the ghost preview and shadow dot where
//!   the drop probe lands.
//! - [`highlight_system`] outlines the movable item under the crosshair and
//!   keeps the crosshair tint and HUD hints in sync.
//!
//! Then the input observers react to this frame's edges:
//! - [`interaction_input_observer`] handles interact, rotate and tilt.
//! - [`mouse_look_observer`] turns the body and head, or spins the held item.
//!
//! Ray results come from the host through [`AimRay`] and [`DropRay`].

use bevy_ecs::hierarchy::{ChildOf, Children};
use bevy_ecs::prelude::*;
use glam::{EulerRot, Quat, Vec3};
use log::{debug, info};

use crate::components::ghostpreview::{GhostPart, GhostPreview, ShadowDot};
use crate::components::interactable::{DisplayName, Interactable};
use crate::components::meshpart::{MeshPart, collect_mesh_parts, set_highlight};
use crate::components::player::{Head, HintState, Player, PlayerController};
use crate::components::position::Position;
use crate::components::raycast::{AimRay, DropRay};
use crate::components::rigidbody::{PLAYER_LAYER, RigidBody};
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::tint::{Color, Crosshair, Tint};
use crate::components::visibility::Visibility;
use crate::events::audio::AudioCmd;
use crate::events::container::OpenBoxEvent;
use crate::events::hint::HintEvent;
use crate::events::input::{InputAction, InputEvent, MouseMotionEvent};
use crate::resources::gameconfig::GameConfig;

/// Velocity that pulls a held body from `current` toward `target`,
/// proportional to the distance and capped at `max_speed`.
pub fn pull_velocity(target: Vec3, current: Vec3, pull_power: f32, max_speed: f32) -> Vec3 {
    ((target - current) * pull_power).clamp_length_max(max_speed.max(0.0))
}

pub(crate) fn random_f32_range(rng: &mut fastrand::Rng, min: f32, max: f32) -> f32 {
    min + rng.f32() * (max - min)
}

/// Shadow dot scale for a held body `distance` units above the surface.
pub fn shadow_scale(distance: f32, falloff: f32, min_scale: f32) -> f32 {
    (1.0 - distance * falloff).clamp(min_scale.max(0.0).min(1.0), 1.0)
}

/// Unit view direction for a body yaw and head pitch. Forward is -Z.
pub fn view_direction(yaw: f32, pitch: f32) -> Vec3 {
    Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0) * Vec3::NEG_Z
}

/// Camera position for a player standing at `feet`.
pub fn eye_position(feet: Vec3, eye_height: f32) -> Vec3 {
    feet + Vec3::Y * eye_height
}

/// Point in front of the camera the held body is pulled toward.
pub fn hold_point(feet: Vec3, yaw: f32, pitch: f32, config: &GameConfig) -> Vec3 {
    eye_position(feet, config.eye_height) + view_direction(yaw, pitch) * config.hold_distance
}

fn hide_previews(
    ctrl: &PlayerController,
    ghosts: &mut Query<
        (&mut Position, &mut Rotation, &mut Visibility),
        (With<GhostPreview>, Without<Player>, Without<ShadowDot>),
    >,
    shadows: &mut Query<
        (&mut Position, &mut Scale, &mut Visibility),
        (With<ShadowDot>, Without<Player>, Without<GhostPreview>),
    >,
) {
    if let Some((_, _, mut vis)) = ctrl.ghost_preview.and_then(|e| ghosts.get_mut(e).ok()) {
        vis.hide();
    }
    if let Some((_, _, mut vis)) = ctrl.shadow_dot.and_then(|e| shadows.get_mut(e).ok()) {
        vis.hide();
    }
}

/// Drive the held body toward the hold point and place the drop previews.
pub fn hold_object_system(
    config: Res<GameConfig>,
    mut players: Query<
        (&PlayerController, &Position, &Rotation, &Head, &mut DropRay),
        With<Player>,
    >,
    mut held_bodies: Query<
        (&Position, &mut Rotation, &mut RigidBody),
        (Without<Player>, Without<GhostPreview>, Without<ShadowDot>),
    >,
    mut ghosts: Query<
        (&mut Position, &mut Rotation, &mut Visibility),
        (With<GhostPreview>, Without<Player>, Without<ShadowDot>),
    >,
    mut shadows: Query<
        (&mut Position, &mut Scale, &mut Visibility),
        (With<ShadowDot>, Without<Player>, Without<GhostPreview>),
    >,
) {
    for (ctrl, position, rotation, head, mut drop_ray) in players.iter_mut() {
        let Some((held_pos, mut held_rot, mut body)) =
            ctrl.held.and_then(|e| held_bodies.get_mut(e).ok())
        else {
            hide_previews(ctrl, &mut ghosts, &mut shadows);
            continue;
        };

        let target = hold_point(position.pos, rotation.yaw(), head.pitch, &config);
        body.linear_velocity = pull_velocity(
            target,
            held_pos.pos,
            config.pull_power,
            config.max_pull_speed,
        );

        let yaw = held_rot.yaw();
        held_rot.euler = Vec3::new(ctrl.tilt.angle(config.tilt_radians()), yaw, 0.0);

        if ctrl.rotating {
            body.angular_velocity.x = 0.0;
            body.angular_velocity.z = 0.0;
        } else {
            body.angular_velocity = Vec3::ZERO;
        }

        drop_ray.origin = held_pos.pos;
        let Some(hit) = drop_ray.hit else {
            hide_previews(ctrl, &mut ghosts, &mut shadows);
            continue;
        };
        let marker = hit.point + Vec3::Y * config.shadow_lift;

        if let Some((mut pos, mut scale, mut vis)) =
            ctrl.shadow_dot.and_then(|e| shadows.get_mut(e).ok())
        {
            let s = shadow_scale(
                held_pos.pos.distance(hit.point),
                config.shadow_falloff,
                config.shadow_min_scale,
            );
            scale.scale = Vec3::new(s, 1.0, s);
            pos.pos = marker;
            vis.show();
        }
        if let Some((mut pos, mut rot, mut vis)) =
            ctrl.ghost_preview.and_then(|e| ghosts.get_mut(e).ok())
        {
            pos.pos = marker;
            *rot = *held_rot;
            vis.show();
        }
    }
}

fn set_crosshair(
    ctrl: &PlayerController,
    tints: &mut Query<&mut Tint, With<Crosshair>>,
    color: Color,
) {
    if let Some(mut tint) = ctrl.crosshair.and_then(|e| tints.get_mut(e).ok()) {
        if tint.color != color {
            tint.color = color;
        }
    }
}

/// Send a hint request only when it differs from the last one sent.
fn request_hint(ctrl: &mut PlayerController, next: HintState, commands: &mut Commands) {
    if ctrl.hint == next {
        return;
    }
    let event = match &next {
        HintState::Hidden => HintEvent::HideAll,
        HintState::Pickup(name) => HintEvent::ShowPickup {
            item_name: name.clone(),
        },
        HintState::Holding => HintEvent::ShowHolding,
    };
    debug!("Hint {:?} -> {:?}", ctrl.hint, next);
    ctrl.hint = next;
    commands.trigger(event);
}

fn clear_highlight(
    ctrl: &mut PlayerController,
    children: &Query<&Children>,
    parts: &mut Query<&mut MeshPart>,
) {
    if let Some(previous) = ctrl.hovered.take() {
        set_highlight(previous, false, children, parts);
    }
}

/// Outline the movable item under the crosshair.
pub fn highlight_system(
    mut players: Query<(&mut PlayerController, &AimRay), With<Player>>,
    interactables: Query<(&Interactable, Option<&DisplayName>)>,
    children: Query<&Children>,
    mut parts: Query<&mut MeshPart>,
    mut tints: Query<&mut Tint, With<Crosshair>>,
    mut commands: Commands,
) {
    for (mut ctrl, aim) in players.iter_mut() {
        if ctrl.is_holding() {
            clear_highlight(&mut ctrl, &children, &mut parts);
            set_crosshair(&ctrl, &mut tints, Color::WHITE);
            request_hint(&mut ctrl, HintState::Holding, &mut commands);
            continue;
        }

        let target = aim.hit.and_then(|hit| match interactables.get(hit.entity) {
            Ok((kind, name)) if kind.is_movable() => Some((
                hit.entity,
                name.map_or_else(|| "item".to_string(), |n| n.as_str().to_string()),
            )),
            _ => None,
        });

        match target {
            Some((entity, name)) => {
                set_crosshair(&ctrl, &mut tints, Color::YELLOW);
                request_hint(&mut ctrl, HintState::Pickup(name), &mut commands);
                if ctrl.hovered != Some(entity) {
                    clear_highlight(&mut ctrl, &children, &mut parts);
                    set_highlight(entity, true, &children, &mut parts);
                    ctrl.hovered = Some(entity);
                    debug!("Highlight {:?}", entity);
                }
            }
            None => {
                clear_highlight(&mut ctrl, &children, &mut parts);
                set_crosshair(&ctrl, &mut tints, Color::WHITE);
                request_hint(&mut ctrl, HintState::Hidden, &mut commands);
            }
        }
    }
}

/// Replace the ghost preview's parts with copies of the visible parts of `item`.
fn rebuild_ghost(
    ghost: Entity,
    item: Entity,
    material: &str,
    previews: &mut Query<(&mut GhostPreview, &mut Visibility)>,
    children: &Query<&Children>,
    parts: &Query<&mut MeshPart>,
    commands: &mut Commands,
) {
    let Ok((mut preview, _)) = previews.get_mut(ghost) else {
        return;
    };
    for old in preview.parts.drain(..) {
        commands.entity(old).try_despawn();
    }
    let mut found = Vec::new();
    collect_mesh_parts(item, children, parts, &mut found);
    for part_entity in found {
        let Ok(part) = parts.get(part_entity) else {
            continue;
        };
        if !part.visible {
            continue;
        }
        let copy = commands
            .spawn((part.ghost_copy(material), GhostPart, ChildOf(ghost)))
            .id();
        preview.parts.push(copy);
    }
}

/// React to interact, rotate and tilt edges.
#[allow(clippy::too_many_arguments)]
pub fn interaction_input_observer(
    trigger: On<InputEvent>,
    config: Res<GameConfig>,
    mut players: Query<(&mut PlayerController, &AimRay, &DropRay, &Position), With<Player>>,
    interactables: Query<&Interactable>,
    mut items: Query<(&mut Position, &mut Rotation, &mut RigidBody), Without<Player>>,
    mut previews: Query<(&mut GhostPreview, &mut Visibility)>,
    children: Query<&Children>,
    mut parts: Query<&mut MeshPart>,
    mut audio: MessageWriter<AudioCmd>,
    mut rng: Local<fastrand::Rng>,
    mut commands: Commands,
) {
    let event = *trigger.event();
    for (mut ctrl, aim, drop_ray, player_pos) in players.iter_mut() {
        match (event.action, event.pressed) {
            (InputAction::Interact, true) => {
                if let Some(held) = ctrl.held.take() {
                    // Drop.
                    let pitch =
                        random_f32_range(&mut rng, config.drop_pitch_min, config.drop_pitch_max);
                    audio.write(AudioCmd::PlayFx {
                        id: config.drop_sound.clone(),
                        pitch_scale: pitch,
                        position: Some(eye_position(player_pos.pos, config.eye_height)),
                    });
                    if let Ok((mut pos, mut rot, mut body)) = items.get_mut(held) {
                        if let Some(hit) = drop_ray.hit {
                            pos.pos = hit.point + hit.normal * config.drop_surface_offset;
                            rot.flatten();
                        }
                        body.set_collision_mask_value(PLAYER_LAYER, true);
                        body.gravity_scale = 1.0;
                        body.halt();
                    }
                    if let Some((_, mut vis)) =
                        ctrl.ghost_preview.and_then(|e| previews.get_mut(e).ok())
                    {
                        vis.hide();
                    }
                    info!("Dropped {:?}", held);
                    continue;
                }

                let Some(hit) = aim.hit else {
                    continue;
                };
                match interactables.get(hit.entity).copied().unwrap_or_default() {
                    Interactable::Container => {
                        commands.trigger(OpenBoxEvent {
                            container: hit.entity,
                        });
                    }
                    Interactable::Movable => {
                        let Ok((_, _, mut body)) = items.get_mut(hit.entity) else {
                            continue;
                        };
                        body.angular_velocity = Vec3::ZERO;
                        body.gravity_scale = 0.0;
                        body.set_collision_mask_value(PLAYER_LAYER, false);
                        clear_highlight(&mut ctrl, &children, &mut parts);
                        ctrl.held = Some(hit.entity);
                        if let Some(ghost) = ctrl.ghost_preview {
                            rebuild_ghost(
                                ghost,
                                hit.entity,
                                &config.ghost_material,
                                &mut previews,
                                &children,
                                &parts,
                                &mut commands,
                            );
                        }
                        info!("Picked up {:?}", hit.entity);
                    }
                    Interactable::Static => {}
                }
            }
            (InputAction::Rotate, pressed) => {
                ctrl.rotating = pressed;
            }
            (InputAction::ToggleTilt, true) if ctrl.is_holding() => {
                ctrl.tilt = ctrl.tilt.toggled();
                debug!("Tilt {:?}", ctrl.tilt);
            }
            _ => {}
        }
    }
}

/// Turn the view, or spin the held item while rotating.
pub fn mouse_look_observer(
    trigger: On<MouseMotionEvent>,
    config: Res<GameConfig>,
    mut players: Query<(&PlayerController, &mut Rotation, &mut Head), With<Player>>,
    mut bodies: Query<&mut RigidBody, Without<Player>>,
) {
    let delta = trigger.event().relative;
    for (ctrl, mut rotation, mut head) in players.iter_mut() {
        if ctrl.rotating {
            if let Some(mut body) = ctrl.held.and_then(|e| bodies.get_mut(e).ok()) {
                body.angular_velocity.y = delta.x * config.rotation_speed * config.spin_multiplier;
                continue;
            }
        }
        rotation.euler.y -= delta.x * config.mouse_sensitivity;
        let limit = config.pitch_limit_radians();
        head.pitch = (head.pitch - delta.y * config.mouse_sensitivity).clamp(-limit, limit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn pull_is_proportional_below_the_cap() {
        let v = pull_velocity(Vec3::new(0.5, 0.0, 0.0), Vec3::ZERO, 20.0, 25.0);
        assert!((v.x - 10.0).abs() < EPSILON);
    }

    #[test]
    fn pull_is_capped_at_max_speed() {
        let v = pull_velocity(Vec3::new(100.0, 0.0, 0.0), Vec3::ZERO, 20.0, 25.0);
        assert!((v.length() - 25.0).abs() < EPSILON);
        assert!(v.x > 0.0);
    }

    #[test]
    fn shadow_shrinks_with_distance_and_clamps() {
        assert!((shadow_scale(0.0, 0.3, 0.2) - 1.0).abs() < EPSILON);
        assert!((shadow_scale(1.0, 0.3, 0.2) - 0.7).abs() < EPSILON);
        assert!((shadow_scale(10.0, 0.3, 0.2) - 0.2).abs() < EPSILON);
    }

    #[test]
    fn out_of_range_shadow_floor_is_clamped() {
        assert!((shadow_scale(1.0, 0.3, 1.5) - 1.0).abs() < EPSILON);
        assert!((shadow_scale(10.0, 0.3, -0.5) - 0.0).abs() < EPSILON);
        assert!((shadow_scale(10.0, 0.3, f32::NAN) - 0.0).abs() < EPSILON);
    }

    #[test]
    fn negative_pull_cap_stops_the_body() {
        let v = pull_velocity(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO, 20.0, -5.0);
        assert_eq!(v, Vec3::ZERO);
    }

    #[test]
    fn hold_point_sits_in_front_of_the_eyes() {
        let config = GameConfig::new();
        let p = hold_point(Vec3::ZERO, 0.0, 0.0, &config);
        assert!((p.y - 1.6).abs() < EPSILON);
        assert!((p.z + 1.5).abs() < EPSILON);
    }

    #[test]
    fn looking_down_lowers_the_view() {
        let d = view_direction(0.0, -0.5);
        assert!(d.y < 0.0);
        assert!((d.length() - 1.0).abs() < EPSILON);
    }
}
