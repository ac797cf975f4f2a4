//! Level completion aggregate.
use bevy_ecs::prelude::*;

/// Counts complete zones and latches the level goal.
///
/// `latched` is true while `completed >= total_required` has already been
/// announced; it re-arms when the count drops below the threshold.
#[derive(Resource, Debug, Clone, Default)]
pub struct LevelProgress {
    pub total_required: usize,
    pub completed: usize,
    pub latched: bool,
}

impl LevelProgress {
    pub fn new(total_required: usize) -> Self {
        Self {
            total_required,
            ..Default::default()
        }
    }

    /// Record the current number of complete zones. Returns true only on the
    /// rising edge of the level goal.
    pub fn evaluate(&mut self, completed: usize) -> bool {
        self.completed = completed;
        let reached = completed >= self.total_required;
        match (reached, self.latched) {
            (true, false) => {
                self.latched = true;
                true
            }
            (false, true) => {
                self.latched = false;
                false
            }
            _ => false,
        }
    }

    pub fn is_victorious(&self) -> bool {
        self.latched
    }
}
