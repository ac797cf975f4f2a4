//! Input systems.
//!
//! - [`dispatch_input_events`] turns the edges recorded on
//!   [`InputState`](crate::resources::input::InputState) into
//!   [`InputEvent`]s and a [`MouseMotionEvent`], then clears them.
//! - [`cursor_mode_observer`] releases and captures the mouse cursor.
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;

use crate::events::input::{InputAction, InputEvent, MouseMotionEvent};
use crate::resources::input::{CursorMode, InputState};

const ACTIONS: [InputAction; 6] = [
    InputAction::Jump,
    InputAction::Interact,
    InputAction::Rotate,
    InputAction::ToggleTilt,
    InputAction::Cancel,
    InputAction::Capture,
];

/// Emit input events for actions pressed or released since the last frame.
///
/// Mouse motion is delivered before button edges. A press still acts on the
/// aim ray cast at the end of the previous frame.
pub fn dispatch_input_events(mut input: ResMut<InputState>, mut commands: Commands) {
    if input.look_delta != Vec2::ZERO {
        commands.trigger(MouseMotionEvent {
            relative: input.look_delta,
        });
    }
    for action in ACTIONS {
        let state = *input.action(action);
        if state.just_pressed {
            commands.trigger(InputEvent {
                action,
                pressed: true,
            });
        }
        if state.just_released {
            commands.trigger(InputEvent {
                action,
                pressed: false,
            });
        }
    }
    input.clear_edges();
}

pub fn cursor_mode_observer(trigger: On<InputEvent>, mut cursor: ResMut<CursorMode>) {
    let event = trigger.event();
    if !event.pressed {
        return;
    }
    let next = match event.action {
        InputAction::Cancel => CursorMode::Visible,
        InputAction::Capture => CursorMode::Captured,
        _ => return,
    };
    if *cursor != next {
        debug!("Cursor mode {:?} -> {:?}", *cursor, next);
        *cursor = next;
    }
}
