use bevy_ecs::prelude::Component;
use glam::Vec3;

#[derive(Component, Clone, Debug, Copy, PartialEq)]
pub struct Scale {
    pub scale: Vec3,
}
impl Scale {
    pub fn new(sx: f32, sy: f32, sz: f32) -> Self {
        Self {
            scale: Vec3::new(sx, sy, sz),
        }
    }
    pub fn uniform(s: f32) -> Self {
        Self::new(s, s, s)
    }
}
impl Default for Scale {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}
