//! Input action events.
//!
//! This module defines [`InputEvent`] which is triggered when gameplay-relevant
//! input actions occur (press or release), and [`MouseMotionEvent`] for
//! relative look deltas. The [`InputAction`] enum lists all recognized
//! actions.
//!
//! Observers subscribe to these events to react to input without reading the
//! [`InputState`](crate::resources::input::InputState) resource directly.

use bevy_ecs::prelude::*;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Enumeration of logical input actions.
///
/// Movement is a 2-axis value on [`InputState`](crate::resources::input::InputState)
/// and is not listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputAction {
    /// Jump (default: Space).
    Jump,
    /// Pick up, place or open (default: left mouse button).
    Interact,
    /// Spin the held object with the mouse while active (default: R).
    Rotate,
    /// Tip the held object on its side or back (default: T).
    ToggleTilt,
    /// Release the cursor (default: Escape).
    Cancel,
    /// Capture the cursor (default: left mouse button).
    Capture,
}

/// Event emitted when an input action is pressed or released.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    /// The input action that triggered this event.
    pub action: InputAction,
    /// Whether the action was pressed (true) or released (false).
    pub pressed: bool,
}

/// Relative mouse motion accumulated over one frame, in pixels.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct MouseMotionEvent {
    pub relative: Vec2,
}
