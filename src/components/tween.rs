//! Tween components for animated interpolation.
//!
//! HUD feedback uses short tweens: a checklist label "pops" by scaling up and
//! back down when its zone reports a new status. See
//! [`crate::systems::tween`] for the update system and easing curves.

use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Determines how a tween behaves when it reaches the end.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopMode {
    /// Play once and stop.
    Once,
    /// Play forward, then backward once, then stop at the start value.
    Yoyo,
}

/// Easing functions for smooth interpolation.
///
/// These functions transform a linear `t` value (0.0 to 1.0) to create
/// different acceleration/deceleration curves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed (no easing).
    Linear,
    /// Starts fast, decelerates (quadratic).
    QuadOut,
}

/// Animates an entity's [`Scale`](super::scale::Scale) between two values.
#[derive(Component, Clone, Debug)]
pub struct TweenScale {
    /// Starting scale.
    pub from: Vec3,
    /// Ending scale.
    pub to: Vec3,
    /// Duration in seconds of one leg.
    pub duration: f32,
    /// Easing function to use.
    pub easing: Easing,
    /// Behavior when the tween ends.
    pub loop_mode: LoopMode,
    /// Whether the tween is currently playing.
    pub playing: bool,
    /// Current time within the tween.
    pub time: f32,
    /// Direction of playback (true = forward).
    pub forward: bool,
}

impl TweenScale {
    pub fn new(from: Vec3, to: Vec3, duration: f32) -> Self {
        TweenScale {
            from,
            to,
            duration,
            easing: Easing::Linear,
            loop_mode: LoopMode::Once,
            playing: true,
            time: 0.0,
            forward: true,
        }
    }

    /// Scale up to `peak` and back to 1.0, each leg taking `leg_seconds`.
    pub fn pulse(peak: f32, leg_seconds: f32) -> Self {
        Self::new(Vec3::ONE, Vec3::new(peak, peak, 1.0), leg_seconds)
            .with_loop_mode(LoopMode::Yoyo)
    }

    pub fn with_loop_mode(mut self, loop_mode: LoopMode) -> Self {
        self.loop_mode = loop_mode;
        self
    }
}
