//! Zone membership and progress events.
//!
//! The host reports trigger-volume crossings with [`BodyEnteredZone`] and
//! [`BodyExitedZone`]. Zone observers answer with a [`ZoneStatusChanged`]
//! report for the HUD on every membership change, and with [`ZoneCompleted`]
//! on the rising edge of a zone's goal. The HUD aggregates zone reports and
//! triggers [`LevelVictoryEvent`] once all required zones are complete.

use bevy_ecs::prelude::*;

/// A body crossed into a zone's trigger volume.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyEnteredZone {
    pub zone: Entity,
    pub body: Entity,
}

/// A body left a zone's trigger volume.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyExitedZone {
    pub zone: Entity,
    pub body: Entity,
}

/// Status report from a zone after its membership changed.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct ZoneStatusChanged {
    pub zone: Entity,
    /// Checklist label bound to the zone, if any.
    pub label: Option<Entity>,
    pub name: String,
    pub count: usize,
    pub required: usize,
    pub complete: bool,
}

/// Rising edge of a zone's goal.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneCompleted {
    pub zone: Entity,
}

/// Rising edge of the level goal: enough zones are complete.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelVictoryEvent {
    pub completed: usize,
}
