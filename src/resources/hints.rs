//! Contextual tip lines shown at the bottom of the HUD.
//!
//! [`HintPresenter`] owns three tips (pick up, place, rotate). Each tip fades
//! its alpha toward a target with a quad-out curve. Requesting the alpha a tip
//! is already heading for is a no-op, so the controller can re-send the same
//! hint every frame without restarting fades.
use bevy_ecs::prelude::*;

use crate::components::tween::Easing;
use crate::systems::tween::ease;

pub const DEFAULT_FADE_SECONDS: f32 = 0.2;
pub const DEFAULT_PICKUP_TIP: &str = "Click Left Mouse Button to Pick Up {item}";
pub const DEFAULT_PLACE_TIP: &str = "Click Left Mouse Button to Place";
pub const DEFAULT_ROTATE_TIP: &str = "Hold R and move the mouse to rotate, T to tilt";

const ALPHA_EPSILON: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Fade {
    from: f32,
    to: f32,
    elapsed: f32,
    duration: f32,
}

/// A single line of hint text and its opacity.
#[derive(Debug, Clone, PartialEq)]
pub struct Tip {
    pub text: String,
    pub alpha: f32,
    fade: Option<Fade>,
}

impl Tip {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            alpha: 0.0,
            fade: None,
        }
    }

    /// Alpha the tip is at or heading toward.
    pub fn target_alpha(&self) -> f32 {
        self.fade.map_or(self.alpha, |f| f.to)
    }

    pub fn is_fading(&self) -> bool {
        self.fade.is_some()
    }

    /// Start a fade toward `to`. Returns false when already there or on the way.
    pub fn fade_to(&mut self, to: f32, duration: f32) -> bool {
        if (self.target_alpha() - to).abs() < ALPHA_EPSILON {
            return false;
        }
        if duration <= 0.0 {
            self.alpha = to;
            self.fade = None;
            return true;
        }
        self.fade = Some(Fade {
            from: self.alpha,
            to,
            elapsed: 0.0,
            duration,
        });
        true
    }

    pub fn advance(&mut self, dt: f32) {
        let Some(fade) = self.fade.as_mut() else {
            return;
        };
        fade.elapsed += dt;
        let t = (fade.elapsed / fade.duration).clamp(0.0, 1.0);
        self.alpha = fade.from + (fade.to - fade.from) * ease(Easing::QuadOut, t);
        if t >= 1.0 {
            self.alpha = fade.to;
            self.fade = None;
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct HintPresenter {
    pub pickup: Tip,
    pub place: Tip,
    pub rotate: Tip,
    /// Pick-up text with an `{item}` placeholder.
    pub pickup_template: String,
    pub fade_seconds: f32,
}

impl Default for HintPresenter {
    fn default() -> Self {
        Self::new(
            DEFAULT_PICKUP_TIP,
            DEFAULT_PLACE_TIP,
            DEFAULT_ROTATE_TIP,
            DEFAULT_FADE_SECONDS,
        )
    }
}

impl HintPresenter {
    pub fn new(pickup: &str, place: &str, rotate: &str, fade_seconds: f32) -> Self {
        Self {
            pickup: Tip::new(pickup.replace("{item}", "")),
            place: Tip::new(place),
            rotate: Tip::new(rotate),
            pickup_template: pickup.to_string(),
            fade_seconds,
        }
    }

    pub fn show_pickup(&mut self, item_name: &str) {
        self.pickup.text = self.pickup_template.replace("{item}", item_name);
        let d = self.fade_seconds;
        self.pickup.fade_to(1.0, d);
        self.place.fade_to(0.0, d);
        self.rotate.fade_to(0.0, d);
    }

    pub fn show_holding(&mut self) {
        let d = self.fade_seconds;
        self.pickup.fade_to(0.0, d);
        self.place.fade_to(1.0, d);
        self.rotate.fade_to(1.0, d);
    }

    pub fn hide_all(&mut self) {
        let d = self.fade_seconds;
        self.pickup.fade_to(0.0, d);
        self.place.fade_to(0.0, d);
        self.rotate.fade_to(0.0, d);
    }

    pub fn advance(&mut self, dt: f32) {
        self.pickup.advance(dt);
        self.place.advance(dt);
        self.rotate.advance(dt);
    }

    pub fn is_fading(&self) -> bool {
        self.pickup.is_fading() || self.place.is_fading() || self.rotate.is_fading()
    }
}
