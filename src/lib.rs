//! Tidy Kitchen library.
//!
//! Gameplay layer of a first-person "put the kitchen away" game, written as
//! bevy_ecs components, resources, events and systems. The crate exposes
//! them for embedding hosts and integration tests; [`game`] wires them into a
//! headless world that runs without a renderer.

pub mod components;
pub mod events;
pub mod game;
pub mod inputscript;
pub mod level;
pub mod resources;
pub mod systems;
