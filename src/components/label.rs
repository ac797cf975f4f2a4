use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug, PartialEq, Eq)]
/// HUD text line, such as a zone's checklist entry.
pub struct Label {
    /// The text content to render.
    pub content: String,
}

impl Label {
    /// Creates a new Label component.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
    /// Updates the text content.
    pub fn set_content(&mut self, new_content: impl Into<String>) {
        self.content = new_content.into();
    }
}

/// Marker for the timed "how to play" display shown at level start.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct InfoDisplay;
