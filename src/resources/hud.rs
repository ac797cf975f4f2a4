use bevy_ecs::prelude::*;

/// HUD collaborators that are not tied to a single zone.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct Hud {
    /// Full-screen star burst played on zone completion and level victory.
    pub screen_stars: Option<Entity>,
    /// Welcome panel hidden after a few seconds.
    pub info_display: Option<Entity>,
}
