//! Per-frame input resource.
//!
//! The host (or a replayed [`InputScript`](crate::inputscript::InputScript))
//! writes raw presses, releases, movement and look deltas into
//! [`InputState`]. Once per frame [`dispatch_input_events`] turns the edges
//! into [`InputEvent`](crate::events::input::InputEvent)s and clears them.
//!
//! [`dispatch_input_events`]: crate::systems::input::dispatch_input_events
use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::events::input::InputAction;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Boolean action state with per-frame edges.
pub struct BoolState {
    /// Whether the action is currently held.
    pub active: bool,
    /// Whether the action was pressed this frame.
    pub just_pressed: bool,
    /// Whether the action was released this frame.
    pub just_released: bool,
}

impl BoolState {
    fn press(&mut self) {
        if !self.active {
            self.active = true;
            self.just_pressed = true;
        }
    }
    fn release(&mut self) {
        if self.active {
            self.active = false;
            self.just_released = true;
        }
    }
}

/// Resource capturing the per-frame input relevant to gameplay.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    pub jump: BoolState,
    pub interact: BoolState,
    pub rotate: BoolState,
    pub toggle_tilt: BoolState,
    pub cancel: BoolState,
    pub capture: BoolState,
    /// Movement input, x = strafe right, y = forward. Each axis in [-1, 1].
    pub move_axis: Vec2,
    /// Mouse motion accumulated since the last dispatch, in pixels.
    pub look_delta: Vec2,
}

impl InputState {
    pub fn action(&self, action: InputAction) -> &BoolState {
        match action {
            InputAction::Jump => &self.jump,
            InputAction::Interact => &self.interact,
            InputAction::Rotate => &self.rotate,
            InputAction::ToggleTilt => &self.toggle_tilt,
            InputAction::Cancel => &self.cancel,
            InputAction::Capture => &self.capture,
        }
    }

    fn action_mut(&mut self, action: InputAction) -> &mut BoolState {
        match action {
            InputAction::Jump => &mut self.jump,
            InputAction::Interact => &mut self.interact,
            InputAction::Rotate => &mut self.rotate,
            InputAction::ToggleTilt => &mut self.toggle_tilt,
            InputAction::Cancel => &mut self.cancel,
            InputAction::Capture => &mut self.capture,
        }
    }

    /// Register a press. Repeated presses while held do not produce new edges.
    pub fn press(&mut self, action: InputAction) {
        self.action_mut(action).press();
    }

    pub fn release(&mut self, action: InputAction) {
        self.action_mut(action).release();
    }

    pub fn add_look(&mut self, delta: Vec2) {
        self.look_delta += delta;
    }

    pub fn set_move_axis(&mut self, axis: Vec2) {
        self.move_axis = axis.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
    }

    /// Forget this frame's edges and look delta. Held state is kept.
    pub fn clear_edges(&mut self) {
        for state in [
            &mut self.jump,
            &mut self.interact,
            &mut self.rotate,
            &mut self.toggle_tilt,
            &mut self.cancel,
            &mut self.capture,
        ] {
            state.just_pressed = false;
            state.just_released = false;
        }
        self.look_delta = Vec2::ZERO;
    }
}

/// Whether the host should lock the mouse to the window.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CursorMode {
    #[default]
    Captured,
    Visible,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_sets_edge_once() {
        let mut input = InputState::default();
        input.press(InputAction::Interact);
        assert!(input.interact.active);
        assert!(input.interact.just_pressed);
        input.clear_edges();
        input.press(InputAction::Interact);
        assert!(input.interact.active);
        assert!(!input.interact.just_pressed);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut input = InputState::default();
        input.release(InputAction::Rotate);
        assert!(!input.rotate.just_released);
    }

    #[test]
    fn clear_edges_keeps_held_state_and_resets_look() {
        let mut input = InputState::default();
        input.press(InputAction::Rotate);
        input.add_look(Vec2::new(3.0, -1.0));
        input.add_look(Vec2::new(1.0, 1.0));
        assert_eq!(input.look_delta, Vec2::new(4.0, 0.0));
        input.clear_edges();
        assert!(input.rotate.active);
        assert!(!input.rotate.just_pressed);
        assert_eq!(input.look_delta, Vec2::ZERO);
    }

    #[test]
    fn move_axis_is_clamped() {
        let mut input = InputState::default();
        input.set_move_axis(Vec2::new(2.0, -3.0));
        assert_eq!(input.move_axis, Vec2::new(1.0, -1.0));
    }
}
