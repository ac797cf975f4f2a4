//! Host-rendered visibility flag.
use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visibility {
    pub visible: bool,
}

impl Visibility {
    pub fn visible() -> Self {
        Self { visible: true }
    }
    pub fn hidden() -> Self {
        Self { visible: false }
    }
    pub fn show(&mut self) {
        self.visible = true;
    }
    pub fn hide(&mut self) {
        self.visible = false;
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::visible()
    }
}
