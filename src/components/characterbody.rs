//! Kinematic body driven by player input.
//!
//! The host moves the body by `velocity` each physics step (slide-and-collide)
//! and reports back whether it is standing on the floor.
use bevy_ecs::prelude::Component;
use glam::Vec3;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct CharacterBody {
    /// Desired velocity in world units per second.
    pub velocity: Vec3,
    /// Set by the host after moving: true while resting on a floor.
    pub on_floor: bool,
}
