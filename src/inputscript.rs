//! Recorded input for headless runs.
//!
//! An [`InputScript`] is a JSON list of frame-stamped steps:
//!
//! ```json
//! [
//!   { "frame": 10, "look": [120.0, 0.0] },
//!   { "frame": 12, "press": "interact" },
//!   { "frame": 13, "release": "interact" },
//!   { "frame": 20, "move": [0.0, 1.0] }
//! ]
//! ```
//!
//! Steps are applied to [`InputState`] before the frame they are stamped with
//! runs; several steps may share a frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::events::input::InputAction;
use crate::level::LevelError;
use crate::resources::input::InputState;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ScriptAction {
    Press(InputAction),
    Release(InputAction),
    Look(Vec2),
    Move(Vec2),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ScriptStep {
    pub frame: u64,
    #[serde(flatten)]
    pub action: ScriptAction,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputScript {
    steps: Vec<ScriptStep>,
    cursor: usize,
}

impl InputScript {
    pub fn new(mut steps: Vec<ScriptStep>) -> Self {
        steps.sort_by_key(|s| s.frame);
        Self { steps, cursor: 0 }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let steps: Vec<ScriptStep> =
            serde_json::from_str(&text).map_err(|source| LevelError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::new(steps))
    }

    /// Apply every step stamped `frame` or earlier that has not run yet.
    pub fn apply(&mut self, frame: u64, input: &mut InputState) -> usize {
        let mut applied = 0;
        while let Some(step) = self.steps.get(self.cursor) {
            if step.frame > frame {
                break;
            }
            match step.action {
                ScriptAction::Press(action) => input.press(action),
                ScriptAction::Release(action) => input.release(action),
                ScriptAction::Look(delta) => input.add_look(delta),
                ScriptAction::Move(axis) => input.set_move_axis(axis),
            }
            self.cursor += 1;
            applied += 1;
        }
        applied
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.steps.len()
    }

    /// Last frame any step is stamped with.
    pub fn last_frame(&self) -> Option<u64> {
        self.steps.last().map(|s| s.frame)
    }
}
