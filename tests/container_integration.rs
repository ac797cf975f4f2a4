//! Integration tests for unpacking boxes.
//!
//! # Usage
//!
//! ```sh
//! cargo test --test container_integration
//! ```

use bevy_ecs::hierarchy::Children;
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use glam::Vec3;

use tidykitchen::components::container::{DEFAULT_UNPACK_FORCE, UnpackingBox};
use tidykitchen::components::interactable::{DisplayName, Interactable};
use tidykitchen::components::meshpart::MeshPart;
use tidykitchen::components::position::Position;
use tidykitchen::components::rigidbody::RigidBody;
use tidykitchen::components::rotation::Rotation;
use tidykitchen::events::container::OpenBoxEvent;
use tidykitchen::level::{BodyKind, ItemTemplate};
use tidykitchen::systems::container::open_box_observer;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world() -> World {
    let mut world = World::new();
    world.spawn(Observer::new(open_box_observer));
    world.flush();
    world
}

fn spawn_box(world: &mut World, contents: Vec<Option<ItemTemplate>>, yaw: f32) -> Entity {
    world
        .spawn((
            UnpackingBox::new(contents)
                .with_force(DEFAULT_UNPACK_FORCE)
                .with_spawn_offset(Vec3::new(0.0, 0.5, 0.0)),
            Interactable::Container,
            Position::new(1.0, 0.3, 2.0),
            Rotation::from_yaw(yaw),
        ))
        .id()
}

fn open(world: &mut World, container: Entity) {
    world.trigger(OpenBoxEvent { container });
    world.flush();
}

fn spawned_items(world: &mut World) -> Vec<(Entity, String)> {
    let mut query = world.query::<(Entity, &DisplayName)>();
    let mut items: Vec<(Entity, String)> = query
        .iter(world)
        .map(|(e, n)| (e, n.as_str().to_string()))
        .collect();
    items.sort_by(|a, b| a.1.cmp(&b.1));
    items
}

fn kitchen_templates() -> Vec<Option<ItemTemplate>> {
    vec![
        Some(ItemTemplate::movable("Mug")),
        Some(ItemTemplate::movable("Plate")),
        Some(ItemTemplate::movable("Bowl")),
    ]
}

#[test]
fn opening_spawns_every_template_at_the_spawn_point() {
    let mut world = make_world();
    let container = spawn_box(&mut world, kitchen_templates(), 0.0);

    open(&mut world, container);

    let items = spawned_items(&mut world);
    let names: Vec<&str> = items.iter().map(|(_, n)| n.as_str()).collect();
    assert_eq!(names, vec!["Bowl", "Mug", "Plate"]);
    for (entity, _) in &items {
        let pos = world.get::<Position>(*entity).expect("position");
        assert!(approx_eq(pos.pos.x, 1.0));
        assert!(approx_eq(pos.pos.y, 0.8));
        assert!(approx_eq(pos.pos.z, 2.0));
        assert_eq!(world.get::<Interactable>(*entity), Some(&Interactable::Movable));
    }
    assert!(world.get::<UnpackingBox>(container).expect("box").opened);
}

#[test]
fn scatter_impulse_points_up_with_the_configured_strength() {
    let mut world = make_world();
    let container = spawn_box(&mut world, kitchen_templates(), 0.0);

    open(&mut world, container);

    for (entity, _) in spawned_items(&mut world) {
        let body = world.get::<RigidBody>(entity).expect("rigid body");
        assert!(approx_eq(body.pending_impulse.length(), DEFAULT_UNPACK_FORCE));
        assert!(body.pending_impulse.y > 0.0);
    }
}

#[test]
fn opening_twice_spawns_nothing_more() {
    let mut world = make_world();
    let container = spawn_box(&mut world, kitchen_templates(), 0.0);

    open(&mut world, container);
    open(&mut world, container);

    assert_eq!(spawned_items(&mut world).len(), 3);
}

#[test]
fn empty_slots_are_skipped() {
    let mut world = make_world();
    let container = spawn_box(
        &mut world,
        vec![None, Some(ItemTemplate::movable("Mug")), None],
        0.0,
    );

    open(&mut world, container);

    let items = spawned_items(&mut world);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].1, "Mug");
}

#[test]
fn box_without_contents_stays_closed() {
    let mut world = make_world();
    let container = spawn_box(&mut world, Vec::new(), 0.0);

    open(&mut world, container);

    assert!(spawned_items(&mut world).is_empty());
    assert!(!world.get::<UnpackingBox>(container).expect("box").opened);
}

#[test]
fn static_contents_get_no_body_or_impulse() {
    let mut world = make_world();
    let vase = ItemTemplate::movable("Vase").with_body(BodyKind::Static);
    let container = spawn_box(&mut world, vec![Some(vase)], 0.0);

    open(&mut world, container);

    let items = spawned_items(&mut world);
    assert_eq!(items.len(), 1);
    let entity = items[0].0;
    assert!(world.get::<RigidBody>(entity).is_none());
    assert_eq!(world.get::<Interactable>(entity), Some(&Interactable::Static));
}

#[test]
fn spawn_offset_follows_the_box_yaw() {
    let mut world = make_world();
    let container = world
        .spawn((
            UnpackingBox::new(kitchen_templates()).with_spawn_offset(Vec3::new(1.0, 0.5, 0.0)),
            Position::new(0.0, 0.0, 0.0),
            Rotation::from_yaw(std::f32::consts::FRAC_PI_2),
        ))
        .id();

    open(&mut world, container);

    for (entity, _) in spawned_items(&mut world) {
        let pos = world.get::<Position>(entity).expect("position");
        assert!(approx_eq(pos.pos.x, 0.0));
        assert!(approx_eq(pos.pos.y, 0.5));
        assert!(approx_eq(pos.pos.z, -1.0));
        let rot = world.get::<Rotation>(entity).expect("rotation");
        assert!(approx_eq(rot.yaw(), std::f32::consts::FRAC_PI_2));
    }
}

#[test]
fn spawned_items_carry_outlined_mesh_parts() {
    let mut world = make_world();
    let container = spawn_box(&mut world, kitchen_templates(), 0.0);

    open(&mut world, container);

    for (entity, name) in spawned_items(&mut world) {
        let children = world.get::<Children>(entity).expect("mesh parts");
        assert_eq!(children.len(), 1);
        let part = world.get::<MeshPart>(children[0]).expect("mesh part");
        assert_eq!(part.mesh, name.to_lowercase());
        assert!(part.overlay.is_some());
    }
}

#[test]
fn event_for_something_that_is_not_a_box_is_ignored() {
    let mut world = make_world();
    let not_a_box = world.spawn(Position::default()).id();

    open(&mut world, not_a_box);

    assert!(spawned_items(&mut world).is_empty());
}
