//! Unpacking boxes.
//!
//! An [`UnpackingBox`] holds an ordered list of item templates. Opening it
//! spawns each template at the box's spawn point and gives movable items a
//! small upward pop; see [`crate::systems::container`]. A box opens at most
//! once.
use bevy_ecs::prelude::Component;
use glam::Vec3;

use crate::level::ItemTemplate;

/// Default impulse magnitude applied to unpacked items.
pub const DEFAULT_UNPACK_FORCE: f32 = 5.0;

#[derive(Component, Clone, Debug)]
pub struct UnpackingBox {
    /// Items to spawn, in order. Empty slots are skipped.
    pub contents: Vec<Option<ItemTemplate>>,
    /// Magnitude of the scatter impulse.
    pub unpack_force: f32,
    /// Spawn point relative to the box, rotated with the box's yaw.
    pub spawn_offset: Vec3,
    pub opened: bool,
}

impl UnpackingBox {
    pub fn new(contents: Vec<Option<ItemTemplate>>) -> Self {
        Self {
            contents,
            unpack_force: DEFAULT_UNPACK_FORCE,
            spawn_offset: Vec3::new(0.0, 0.5, 0.0),
            opened: false,
        }
    }

    pub fn with_force(mut self, force: f32) -> Self {
        self.unpack_force = force;
        self
    }

    pub fn with_spawn_offset(mut self, offset: Vec3) -> Self {
        self.spawn_offset = offset;
        self
    }

    /// True while the box is closed and has something configured.
    pub fn can_open(&self) -> bool {
        !self.opened && !self.contents.is_empty()
    }

    /// Iterate the templates that will actually spawn.
    pub fn templates(&self) -> impl Iterator<Item = &ItemTemplate> {
        self.contents.iter().flatten()
    }
}
