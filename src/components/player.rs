//! Player controller state.
//!
//! The player entity carries a [`PlayerController`] holding everything the
//! interaction state machine needs between ticks: the held and highlighted
//! entities, the rotate and tilt sub-states, the last hint requested from the
//! HUD, and the presentation entities it drives. Those entities are handed in
//! at spawn time; any of them may be absent, in which case the matching visual
//! is skipped.
//!
//! See [`crate::systems::interaction`] for the transitions.
use bevy_ecs::prelude::*;

/// Marker for the player body.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Player;

/// Look node pitch in radians. Positive looks up.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct Head {
    pub pitch: f32,
}

/// Discrete tilt applied to a held object around its pitch axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tilt {
    #[default]
    Flat,
    Tilted,
}

impl Tilt {
    pub fn toggled(self) -> Self {
        match self {
            Tilt::Flat => Tilt::Tilted,
            Tilt::Tilted => Tilt::Flat,
        }
    }

    /// Pitch angle in radians for this tilt given the raised angle.
    pub fn angle(self, raised_radians: f32) -> f32 {
        match self {
            Tilt::Flat => 0.0,
            Tilt::Tilted => raised_radians,
        }
    }
}

/// Observable state of the interaction state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionState {
    /// Nothing held, nothing under the crosshair.
    Idle,
    /// Nothing held, a movable entity is highlighted.
    Aiming,
    /// An entity is attached to the hold point.
    Holding,
    /// An entity is attached and rotation input is active.
    HoldingRotating,
}

/// Hint set most recently requested from the HUD.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum HintState {
    #[default]
    Hidden,
    Pickup(String),
    Holding,
}

#[derive(Component, Clone, Debug, Default)]
pub struct PlayerController {
    /// Entity currently carried.
    pub held: Option<Entity>,
    /// Entity whose outline is currently shown.
    pub hovered: Option<Entity>,
    /// Rotation input is held down.
    pub rotating: bool,
    /// Tilt applied to the held object. Kept across pickups.
    pub tilt: Tilt,
    /// Last hint set sent to the HUD.
    pub hint: HintState,
    pub ghost_preview: Option<Entity>,
    pub shadow_dot: Option<Entity>,
    pub crosshair: Option<Entity>,
}

impl PlayerController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ghost_preview(mut self, entity: Entity) -> Self {
        self.ghost_preview = Some(entity);
        self
    }

    pub fn with_shadow_dot(mut self, entity: Entity) -> Self {
        self.shadow_dot = Some(entity);
        self
    }

    pub fn with_crosshair(mut self, entity: Entity) -> Self {
        self.crosshair = Some(entity);
        self
    }

    pub fn is_holding(&self) -> bool {
        self.held.is_some()
    }

    pub fn state(&self) -> InteractionState {
        match (self.held, self.rotating, self.hovered) {
            (Some(_), true, _) => InteractionState::HoldingRotating,
            (Some(_), false, _) => InteractionState::Holding,
            (None, _, Some(_)) => InteractionState::Aiming,
            (None, _, None) => InteractionState::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilt_alternates() {
        assert_eq!(Tilt::Flat.toggled(), Tilt::Tilted);
        assert_eq!(Tilt::Tilted.toggled(), Tilt::Flat);
        assert_eq!(Tilt::Flat.angle(1.5), 0.0);
        assert_eq!(Tilt::Tilted.angle(1.5), 1.5);
    }

    #[test]
    fn state_follows_held_hovered_and_rotating() {
        let mut world = World::new();
        let e = world.spawn_empty().id();
        let mut pc = PlayerController::new();
        assert_eq!(pc.state(), InteractionState::Idle);
        pc.hovered = Some(e);
        assert_eq!(pc.state(), InteractionState::Aiming);
        pc.hovered = None;
        pc.held = Some(e);
        assert_eq!(pc.state(), InteractionState::Holding);
        pc.rotating = true;
        assert_eq!(pc.state(), InteractionState::HoldingRotating);
    }

    #[test]
    fn rotating_without_holding_is_not_a_hold_state() {
        let mut pc = PlayerController::new();
        pc.rotating = true;
        assert_eq!(pc.state(), InteractionState::Idle);
    }
}
