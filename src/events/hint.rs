//! Contextual hint requests sent from the interaction controller to the HUD.
use bevy_ecs::prelude::*;

#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub enum HintEvent {
    /// Aiming at a movable item: show the pick-up tip naming it.
    ShowPickup { item_name: String },
    /// Holding an item: show the place and rotate tips.
    ShowHolding,
    HideAll,
}
