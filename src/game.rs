//! World assembly and the per-frame schedule.
//!
//! [`setup_world`] builds a ready-to-run [`World`] from a [`GameConfig`] and a
//! [`LevelLayout`]: resources, observers, the HUD, zones, surfaces, boxes,
//! loose items and the player. [`build_schedule`] returns the frame schedule,
//! split into three ordered sets:
//!
//! - [`FrameSet::Gameplay`] – config propagation, locomotion, carrying,
//!   highlighting, input dispatch (which fires the interaction observers),
//!   timers and HUD animation
//! - [`FrameSet::Host`] – the headless engine step: body integration, trigger
//!   volumes and ray probes
//! - [`FrameSet::Audio`] – message queue maintenance and the audio bridge
//!
//! An embedding engine that owns physics and rendering can skip
//! [`add_headless_host_systems`] and write the host-facing components itself.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use glam::Vec3;
use log::{info, warn};

use crate::components::boxcollider::BoxCollider;
use crate::components::characterbody::CharacterBody;
use crate::components::container::UnpackingBox;
use crate::components::ghostpreview::{GhostPreview, ShadowDot};
use crate::components::interactable::{DisplayName, Interactable};
use crate::components::label::{InfoDisplay, Label};
use crate::components::particles::OneShotParticles;
use crate::components::player::{Head, Player, PlayerController};
use crate::components::position::Position;
use crate::components::raycast::{AimRay, DropRay};
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::tint::{Crosshair, Tint};
use crate::components::triggervolume::TriggerVolume;
use crate::components::visibility::Visibility;
use crate::components::zone::PlacementZone;
use crate::level::LevelLayout;
use crate::resources::audio::{AudioBridge, init_audio_messages};
use crate::resources::gameconfig::GameConfig;
use crate::resources::hints::HintPresenter;
use crate::resources::hud::Hud;
use crate::resources::input::{CursorMode, InputState};
use crate::resources::levelprogress::LevelProgress;
use crate::resources::worldtime::WorldTime;
use crate::systems::audio::{
    forward_audio_cmds, poll_audio_messages, update_bevy_audio_cmds, update_bevy_audio_messages,
};
use crate::systems::container::open_box_observer;
use crate::systems::gameconfig::apply_gameconfig_changes;
use crate::systems::hud::{
    hint_fade_system, hint_observer, initial_checklist_text, level_victory_observer,
    zone_status_observer,
};
use crate::systems::input::{cursor_mode_observer, dispatch_input_events};
use crate::systems::interaction::{
    highlight_system, hold_object_system, interaction_input_observer, mouse_look_observer,
};
use crate::systems::movement::{integrate_character_bodies, integrate_rigid_bodies};
use crate::systems::playermovement::player_movement_system;
use crate::systems::raycast::cast_player_rays;
use crate::systems::timer::{show_info_display, timer_observer, update_timers};
use crate::systems::tween::tween_scale_system;
use crate::systems::zone::{
    body_entered_zone_observer, body_exited_zone_observer, zone_completed_observer,
};
use crate::systems::zonevolume::zone_volume_detector;

const INFO_TEXT: &str = "Unpack the box and put everything where it belongs";

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Gameplay,
    Host,
    Audio,
}

/// Spawn every observer the gameplay relies on.
pub fn register_observers(world: &mut World) {
    world.spawn(Observer::new(cursor_mode_observer));
    world.spawn(Observer::new(interaction_input_observer));
    world.spawn(Observer::new(mouse_look_observer));
    world.spawn(Observer::new(open_box_observer));
    world.spawn(Observer::new(body_entered_zone_observer));
    world.spawn(Observer::new(body_exited_zone_observer));
    world.spawn(Observer::new(zone_completed_observer));
    world.spawn(Observer::new(zone_status_observer));
    world.spawn(Observer::new(level_victory_observer));
    world.spawn(Observer::new(hint_observer));
    world.spawn(Observer::new(timer_observer));
    // Ensure the observers are registered before any system triggers events.
    world.flush();
}

pub fn add_gameplay_systems(schedule: &mut Schedule) {
    schedule.add_systems(
        (
            // Must run early to apply config before other systems
            apply_gameconfig_changes,
            player_movement_system,
            hold_object_system,
            highlight_system,
            // Interaction observers fire from here, after carrying this frame
            dispatch_input_events,
            update_timers,
            tween_scale_system,
            hint_fade_system,
        )
            .chain()
            .in_set(FrameSet::Gameplay),
    );
}

pub fn add_headless_host_systems(schedule: &mut Schedule) {
    schedule.add_systems(
        (
            integrate_character_bodies,
            integrate_rigid_bodies,
            zone_volume_detector,
            cast_player_rays,
        )
            .chain()
            .in_set(FrameSet::Host),
    );
}

pub fn add_audio_systems(schedule: &mut Schedule) {
    schedule.add_systems(
        // audio systems must be together
        (
            update_bevy_audio_cmds,
            forward_audio_cmds.run_if(resource_exists::<AudioBridge>),
            poll_audio_messages.run_if(resource_exists::<AudioBridge>),
            update_bevy_audio_messages,
        )
            .chain()
            .in_set(FrameSet::Audio),
    );
}

/// Full frame schedule for a headless run.
pub fn build_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.configure_sets((FrameSet::Gameplay, FrameSet::Host, FrameSet::Audio).chain());
    add_gameplay_systems(&mut schedule);
    add_headless_host_systems(&mut schedule);
    add_audio_systems(&mut schedule);
    schedule
}

fn spawn_hud(commands: &mut Commands, config: &GameConfig) -> (Entity, Hud) {
    let crosshair = commands.spawn((Crosshair, Tint::default())).id();
    let screen_stars = commands.spawn(OneShotParticles::default()).id();
    let info_display = commands
        .spawn((InfoDisplay, Label::new(INFO_TEXT), Visibility::hidden()))
        .id();
    show_info_display(commands, info_display, config.info_display_seconds);
    (
        crosshair,
        Hud {
            screen_stars: Some(screen_stars),
            info_display: Some(info_display),
        },
    )
}

fn spawn_zones(commands: &mut Commands, layout: &LevelLayout) {
    for zone_spec in &layout.zones {
        let label = commands
            .spawn((
                Label::new(initial_checklist_text(
                    &zone_spec.name,
                    zone_spec.required_items,
                )),
                Tint::default(),
                Scale::default(),
            ))
            .id();
        let stars = commands
            .spawn((
                OneShotParticles::default(),
                Position::from_vec(zone_spec.position),
            ))
            .id();
        let mut zone = PlacementZone::new(zone_spec.name.clone(), zone_spec.required_items)
            .with_status_label(label)
            .with_stars(stars);
        if let Some(sound) = &zone_spec.victory_sound {
            zone = zone.with_victory_sound(sound.clone());
        }
        commands.spawn((
            zone,
            Position::from_vec(zone_spec.position),
            TriggerVolume::new(zone_spec.half_extents),
        ));
    }
}

fn spawn_props(commands: &mut Commands, layout: &LevelLayout) {
    for surface in &layout.surfaces {
        let mut entity = commands.spawn((
            Position::from_vec(surface.position),
            BoxCollider::new(surface.half_extents),
        ));
        if let Some(name) = &surface.name {
            entity.insert(DisplayName::new(name.clone()));
        }
    }

    for box_spec in &layout.boxes {
        commands.spawn((
            UnpackingBox::new(box_spec.contents.clone())
                .with_force(box_spec.unpack_force)
                .with_spawn_offset(box_spec.spawn_offset),
            Interactable::Container,
            DisplayName::new(box_spec.name.clone()),
            Position::from_vec(box_spec.position),
            Rotation::from_yaw(box_spec.yaw),
            BoxCollider::new(box_spec.half_extents),
            Visibility::visible(),
        ));
    }

    for placed in &layout.items {
        placed
            .template
            .spawn(commands, placed.position, placed.yaw);
    }
}

fn spawn_player(commands: &mut Commands, layout: &LevelLayout, crosshair: Entity) -> Entity {
    let ghost = commands
        .spawn((
            GhostPreview::default(),
            Position::default(),
            Rotation::default(),
            Visibility::hidden(),
        ))
        .id();
    let shadow = commands
        .spawn((
            ShadowDot,
            Position::default(),
            Scale::default(),
            Visibility::hidden(),
        ))
        .id();
    commands
        .spawn((
            Player,
            PlayerController::new()
                .with_ghost_preview(ghost)
                .with_shadow_dot(shadow)
                .with_crosshair(crosshair),
            Position::from_vec(layout.player_spawn),
            Rotation::from_yaw(layout.player_yaw),
            Head::default(),
            CharacterBody::default(),
            AimRay::default(),
            DropRay::default(),
        ))
        .id()
}

/// Build a world holding `layout`, ready for [`build_schedule`].
///
/// Audio messages are initialized but no audio thread is started; call
/// [`setup_audio`](crate::resources::audio::setup_audio) for that.
pub fn setup_world(config: GameConfig, layout: &LevelLayout) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(InputState::default());
    world.insert_resource(CursorMode::default());
    world.insert_resource(HintPresenter::new(
        &config.pickup_tip,
        &config.place_tip,
        &config.rotate_tip,
        config.fade_seconds,
    ));
    if layout.zones.len() < config.total_zones_required {
        warn!(
            "Level '{}' has {} zones but {} must be completed; victory is unreachable",
            layout.name,
            layout.zones.len(),
            config.total_zones_required
        );
    }
    world.insert_resource(LevelProgress::new(config.total_zones_required));
    init_audio_messages(&mut world);

    register_observers(&mut world);

    let hud = {
        let mut commands = world.commands();
        let (crosshair, hud) = spawn_hud(&mut commands, &config);
        spawn_zones(&mut commands, layout);
        spawn_props(&mut commands, layout);
        spawn_player(&mut commands, layout, crosshair);
        hud
    };
    world.insert_resource(hud);
    world.insert_resource(config);
    world.flush();

    info!(
        "Level '{}' ready: {} zones, {} items, {} boxes",
        layout.name,
        layout.zones.len(),
        layout.items.len(),
        layout.boxes.len()
    );
    world
}

/// First interactable whose display name is `name`.
pub fn find_item_named(world: &mut World, name: &str) -> Option<Entity> {
    let mut query = world.query_filtered::<(Entity, &DisplayName), With<Interactable>>();
    query
        .iter(world)
        .find(|(_, n)| n.as_str() == name)
        .map(|(e, _)| e)
}

/// Zone entity by name.
pub fn find_zone_named(world: &mut World, name: &str) -> Option<Entity> {
    let mut query = world.query::<(Entity, &PlacementZone)>();
    query
        .iter(world)
        .find(|(_, z)| z.name == name)
        .map(|(e, _)| e)
}

/// Teleport a movable body, clearing its velocity.
pub fn place_body(world: &mut World, entity: Entity, at: Vec3) {
    if let Some(mut pos) = world.get_mut::<Position>(entity) {
        pos.pos = at;
    }
    if let Some(mut body) = world.get_mut::<RigidBody>(entity) {
        body.halt();
    }
}
