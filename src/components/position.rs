//! World-space position of an entity.
//!
//! Mesh parts and ghost parts parented with [`ChildOf`](bevy_ecs::hierarchy::ChildOf)
//! store their offset from the parent here instead.
use bevy_ecs::prelude::Component;
use glam::Vec3;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub pos: Vec3,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            pos: Vec3::new(x, y, z),
        }
    }

    pub fn from_vec(pos: Vec3) -> Self {
        Self { pos }
    }
}
