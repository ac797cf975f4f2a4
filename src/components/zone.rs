//! Placement goal regions.
//!
//! A [`PlacementZone`] counts the movable bodies inside its trigger volume and
//! is complete once that count reaches `required_items`. Membership is only
//! ever changed through enter/exit events
//! (see [`crate::systems::zone`]); the zone never polls for overlaps itself.
//!
//! The victory effect is latched: it fires on the rising edge of completion
//! and re-arms only after the zone drops below its requirement again.
use bevy_ecs::prelude::*;
use rustc_hash::FxHashSet;

/// Effect-relevant outcome of a membership change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoneTransition {
    /// The zone just became complete and its latch was armed.
    Completed,
    /// The zone fell below its requirement; the latch was released.
    Reopened,
    /// Nothing that needs an effect.
    Unchanged,
}

#[derive(Component, Clone, Debug)]
pub struct PlacementZone {
    pub name: String,
    pub required_items: usize,
    /// Movable bodies currently inside the volume.
    pub members: FxHashSet<Entity>,
    /// Latch for the one-shot victory effect.
    pub goal_reached: bool,
    /// HUD checklist line reporting this zone.
    pub status_label: Option<Entity>,
    /// Sound played on completion.
    pub victory_sound: Option<String>,
    /// Particle burst restarted on completion.
    pub stars: Option<Entity>,
}

impl PlacementZone {
    pub fn new(name: impl Into<String>, required_items: usize) -> Self {
        Self {
            name: name.into(),
            required_items,
            members: FxHashSet::default(),
            goal_reached: false,
            status_label: None,
            victory_sound: None,
            stars: None,
        }
    }

    pub fn with_status_label(mut self, label: Entity) -> Self {
        self.status_label = Some(label);
        self
    }

    pub fn with_victory_sound(mut self, id: impl Into<String>) -> Self {
        self.victory_sound = Some(id.into());
        self
    }

    pub fn with_stars(mut self, emitter: Entity) -> Self {
        self.stars = Some(emitter);
        self
    }

    pub fn count(&self) -> usize {
        self.members.len()
    }

    pub fn is_complete(&self) -> bool {
        self.count() >= self.required_items
    }

    /// Add a body. Returns false if it was already a member.
    pub fn enter(&mut self, body: Entity) -> bool {
        self.members.insert(body)
    }

    /// Remove a body. Returns false if it was not a member.
    pub fn exit(&mut self, body: Entity) -> bool {
        self.members.remove(&body)
    }

    /// Re-evaluate completion against the latch after a membership change.
    pub fn evaluate(&mut self) -> ZoneTransition {
        let complete = self.is_complete();
        if complete && !self.goal_reached {
            self.goal_reached = true;
            ZoneTransition::Completed
        } else if !complete && self.goal_reached {
            self.goal_reached = false;
            ZoneTransition::Reopened
        } else {
            ZoneTransition::Unchanged
        }
    }

    /// Checklist line for this zone.
    pub fn status_text(&self) -> String {
        format_status(&self.name, self.count(), self.required_items, self.is_complete())
    }
}

/// Format a checklist line, e.g. `[DONE] Cabinet Area (3/3)`.
pub fn format_status(name: &str, current: usize, required: usize, done: bool) -> String {
    let status = if done { "[DONE]" } else { "[  ]" };
    format!("{status} {name} ({current}/{required})")
}
