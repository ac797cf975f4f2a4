//! Color tint for HUD elements.
//!
//! Checklist labels turn green when their zone is done; the crosshair turns
//! yellow while a movable item is under it.

use bevy_ecs::prelude::Component;

/// Linear RGBA color with components in 0.0..=1.0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Color tint component for rendering modulation.
#[derive(Component, Clone, Debug, Copy, PartialEq)]
pub struct Tint {
    pub color: Color,
}

impl Tint {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    /// Multiply this tint with another color (component-wise).
    pub fn multiply(&self, other: Color) -> Color {
        Color::new(
            self.color.r * other.r,
            self.color.g * other.g,
            self.color.b * other.b,
            self.color.a * other.a,
        )
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
        }
    }
}

/// Marker for the screen-center crosshair.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Crosshair;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_white() {
        assert_eq!(Tint::default().color, Color::WHITE);
    }

    #[test]
    fn multiply_by_white_is_identity() {
        let t = Tint::new(Color::new(0.2, 0.4, 0.6, 0.8));
        assert_eq!(t.multiply(Color::WHITE), t.color);
    }
}
