//! One-shot countdown that triggers a [`TimerEvent`](crate::events::timer::TimerEvent).
//!
//! Inserting a new `Timer` on an entity replaces the pending one, so the
//! earlier countdown never fires.
use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug)]
pub struct Timer {
    pub duration: f32,
    pub elapsed: f32,
    pub signal: String,
}
impl Timer {
    pub fn new(duration: f32, signal: impl Into<String>) -> Self {
        Timer {
            duration,
            elapsed: 0.0,
            signal: signal.into(),
        }
    }
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}
