use bevy_ecs::prelude::*;

/// Request to unpack a container. Ignored when the box was already opened.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenBoxEvent {
    pub container: Entity,
}
