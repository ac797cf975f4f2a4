//! One-shot particle bursts.
//!
//! Particle simulation belongs to the host. Gameplay code only asks for a
//! burst to be (re)started: [`OneShotParticles::restart`] raises `emitting`
//! and bumps `restarts`, and the host plays one burst per bump.
use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OneShotParticles {
    /// True from a restart until the host finishes the burst.
    pub emitting: bool,
    /// Number of bursts requested so far.
    pub restarts: u32,
}

impl OneShotParticles {
    pub fn restart(&mut self) {
        self.emitting = true;
        self.restarts += 1;
    }
}
