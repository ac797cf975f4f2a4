//! Integration tests for zone tracking, the HUD checklist and level victory.
//!
//! Bodies are moved in and out of zones by triggering the enter/exit events
//! directly, the way the host reports trigger overlaps.
//!
//! # Usage
//!
//! ```sh
//! cargo test --test zone_integration
//! ```

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemState;
use glam::Vec3;

use tidykitchen::components::interactable::Interactable;
use tidykitchen::components::label::Label;
use tidykitchen::components::particles::OneShotParticles;
use tidykitchen::components::position::Position;
use tidykitchen::components::tint::{Color, Tint};
use tidykitchen::components::tween::TweenScale;
use tidykitchen::components::zone::PlacementZone;
use tidykitchen::events::audio::AudioCmd;
use tidykitchen::events::zone::{BodyEnteredZone, BodyExitedZone};
use tidykitchen::resources::audio::init_audio_messages;
use tidykitchen::resources::hud::Hud;
use tidykitchen::resources::levelprogress::LevelProgress;
use tidykitchen::systems::hud::{
    initial_checklist_text, level_victory_observer, zone_status_observer,
};
use tidykitchen::systems::zone::{
    body_entered_zone_observer, body_exited_zone_observer, zone_completed_observer,
};

struct Zone {
    entity: Entity,
    label: Entity,
    stars: Entity,
}

fn make_world(zones_required: usize) -> World {
    let mut world = World::new();
    init_audio_messages(&mut world);
    let screen_stars = world.spawn(OneShotParticles::default()).id();
    world.insert_resource(Hud {
        screen_stars: Some(screen_stars),
        info_display: None,
    });
    world.insert_resource(LevelProgress::new(zones_required));
    world.spawn(Observer::new(body_entered_zone_observer));
    world.spawn(Observer::new(body_exited_zone_observer));
    world.spawn(Observer::new(zone_completed_observer));
    world.spawn(Observer::new(zone_status_observer));
    world.spawn(Observer::new(level_victory_observer));
    world.flush();
    world
}

fn spawn_zone(world: &mut World, name: &str, required: usize) -> Zone {
    let label = world
        .spawn((
            Label::new(initial_checklist_text(name, required)),
            Tint::default(),
        ))
        .id();
    let stars = world.spawn(OneShotParticles::default()).id();
    let entity = world
        .spawn((
            PlacementZone::new(name, required)
                .with_status_label(label)
                .with_stars(stars)
                .with_victory_sound("victory"),
            Position::from_vec(Vec3::new(-3.0, 1.2, -3.0)),
        ))
        .id();
    Zone {
        entity,
        label,
        stars,
    }
}

fn spawn_items(world: &mut World, n: usize) -> Vec<Entity> {
    (0..n)
        .map(|_| world.spawn(Interactable::Movable).id())
        .collect()
}

fn enter(world: &mut World, zone: &Zone, body: Entity) {
    world.trigger(BodyEnteredZone {
        zone: zone.entity,
        body,
    });
    world.flush();
}

fn exit(world: &mut World, zone: &Zone, body: Entity) {
    world.trigger(BodyExitedZone {
        zone: zone.entity,
        body,
    });
    world.flush();
}

fn label_text(world: &World, zone: &Zone) -> String {
    world.get::<Label>(zone.label).expect("label").content.clone()
}

fn label_color(world: &World, zone: &Zone) -> Color {
    world.get::<Tint>(zone.label).expect("label tint").color
}

fn restarts(world: &World, emitter: Entity) -> u32 {
    world
        .get::<OneShotParticles>(emitter)
        .expect("emitter")
        .restarts
}

fn screen_restarts(world: &World) -> u32 {
    let stars = world.resource::<Hud>().screen_stars.expect("screen stars");
    restarts(world, stars)
}

fn victory_sounds(world: &mut World) -> usize {
    let mut state: SystemState<MessageReader<AudioCmd>> = SystemState::new(world);
    let mut reader = state.get_mut(world);
    reader
        .read()
        .filter(|cmd| matches!(cmd, AudioCmd::PlayFx { id, .. } if id == "victory"))
        .count()
}

#[test]
fn three_items_complete_a_zone_once() {
    let mut world = make_world(2);
    let counter = spawn_zone(&mut world, "Counter", 3);
    let items = spawn_items(&mut world, 3);

    enter(&mut world, &counter, items[0]);
    assert_eq!(label_text(&world, &counter), "[  ] Counter (1/3)");
    assert_eq!(label_color(&world, &counter), Color::WHITE);
    enter(&mut world, &counter, items[1]);
    assert_eq!(victory_sounds(&mut world), 0);

    enter(&mut world, &counter, items[2]);
    assert_eq!(label_text(&world, &counter), "[DONE] Counter (3/3)");
    assert_eq!(label_color(&world, &counter), Color::GREEN);
    assert!(world.get::<TweenScale>(counter.label).is_some());
    assert_eq!(victory_sounds(&mut world), 1);
    assert_eq!(restarts(&world, counter.stars), 1);
    assert_eq!(screen_restarts(&world), 1);
    assert!(world.get::<PlacementZone>(counter.entity).expect("zone").goal_reached);
}

#[test]
fn extra_items_do_not_replay_the_victory() {
    let mut world = make_world(2);
    let counter = spawn_zone(&mut world, "Counter", 2);
    let items = spawn_items(&mut world, 3);
    for &item in &items {
        enter(&mut world, &counter, item);
    }
    assert_eq!(label_text(&world, &counter), "[DONE] Counter (3/2)");
    assert_eq!(victory_sounds(&mut world), 1);
    assert_eq!(restarts(&world, counter.stars), 1);
}

#[test]
fn duplicate_and_non_movable_entries_are_ignored() {
    let mut world = make_world(2);
    let counter = spawn_zone(&mut world, "Counter", 3);
    let item = spawn_items(&mut world, 1)[0];
    let vase = world.spawn(Interactable::Static).id();
    let player = world.spawn_empty().id();

    enter(&mut world, &counter, item);
    enter(&mut world, &counter, item);
    enter(&mut world, &counter, vase);
    enter(&mut world, &counter, player);

    let zone = world.get::<PlacementZone>(counter.entity).expect("zone");
    assert_eq!(zone.count(), 1);
    assert_eq!(label_text(&world, &counter), "[  ] Counter (1/3)");
}

#[test]
fn exit_of_a_non_member_changes_nothing() {
    let mut world = make_world(2);
    let counter = spawn_zone(&mut world, "Counter", 3);
    let item = spawn_items(&mut world, 1)[0];

    exit(&mut world, &counter, item);

    assert_eq!(label_text(&world, &counter), "[ ] Counter (0/3)");
    assert!(world.get::<TweenScale>(counter.label).is_none());
}

#[test]
fn leaving_the_zone_rearms_the_victory() {
    let mut world = make_world(2);
    let counter = spawn_zone(&mut world, "Counter", 3);
    let items = spawn_items(&mut world, 3);
    for &item in &items {
        enter(&mut world, &counter, item);
    }

    exit(&mut world, &counter, items[1]);
    assert_eq!(label_text(&world, &counter), "[  ] Counter (2/3)");
    assert_eq!(label_color(&world, &counter), Color::WHITE);
    assert!(!world.get::<PlacementZone>(counter.entity).expect("zone").goal_reached);

    enter(&mut world, &counter, items[1]);
    assert_eq!(label_text(&world, &counter), "[DONE] Counter (3/3)");
    assert_eq!(victory_sounds(&mut world), 2);
    assert_eq!(restarts(&world, counter.stars), 2);
}

#[test]
fn level_victory_fires_once_when_every_zone_is_complete() {
    let mut world = make_world(2);
    let counter = spawn_zone(&mut world, "Stove and Counter Area", 1);
    let cabinet = spawn_zone(&mut world, "Cabinet Area", 1);
    let items = spawn_items(&mut world, 3);

    enter(&mut world, &counter, items[0]);
    assert!(!world.resource::<LevelProgress>().is_victorious());
    assert_eq!(world.resource::<LevelProgress>().completed, 1);

    enter(&mut world, &cabinet, items[1]);
    assert!(world.resource::<LevelProgress>().is_victorious());
    // One burst per zone plus one for the level.
    assert_eq!(screen_restarts(&world), 3);

    // More status updates while everything is complete stay quiet.
    enter(&mut world, &counter, items[2]);
    exit(&mut world, &counter, items[2]);
    assert_eq!(screen_restarts(&world), 3);
    assert!(world.resource::<LevelProgress>().is_victorious());
}

#[test]
fn level_victory_rearms_after_a_zone_reopens() {
    let mut world = make_world(2);
    let counter = spawn_zone(&mut world, "Stove and Counter Area", 1);
    let cabinet = spawn_zone(&mut world, "Cabinet Area", 1);
    let items = spawn_items(&mut world, 2);
    enter(&mut world, &counter, items[0]);
    enter(&mut world, &cabinet, items[1]);
    assert_eq!(screen_restarts(&world), 3);

    exit(&mut world, &cabinet, items[1]);
    assert!(!world.resource::<LevelProgress>().is_victorious());

    enter(&mut world, &cabinet, items[1]);
    assert!(world.resource::<LevelProgress>().is_victorious());
    assert_eq!(screen_restarts(&world), 5);
}

#[test]
fn zone_without_label_still_counts_toward_the_level() {
    let mut world = make_world(1);
    let zone = world.spawn(PlacementZone::new("Shelf", 1)).id();
    let item = spawn_items(&mut world, 1)[0];

    world.trigger(BodyEnteredZone { zone, body: item });
    world.flush();

    assert!(world.resource::<LevelProgress>().is_victorious());
    // No zone sound was configured.
    assert_eq!(victory_sounds(&mut world), 0);
}
