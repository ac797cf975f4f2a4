//! Interaction capabilities and display names.
//!
//! What happens when the player interacts with an entity is decided by its
//! [`Interactable`] tag rather than by inspecting which other components it
//! carries. Entities without the component behave as [`Interactable::Static`].
use bevy_ecs::prelude::Component;

/// What the player can do with an entity under the crosshair.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Interactable {
    /// Can be highlighted, picked up and counted by placement zones.
    Movable,
    /// Opens once, spilling its configured contents.
    Container,
    /// Blocks rays but offers no interaction.
    #[default]
    Static,
}

impl Interactable {
    pub fn is_movable(self) -> bool {
        self == Interactable::Movable
    }
}

/// Human-readable name shown in HUD hints.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct DisplayName(pub String);

impl DisplayName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
