//! HUD observers and systems.
//!
//! - [`zone_status_observer`] rewrites a zone's checklist line, tints it,
//!   pulses it, and re-counts complete zones for the level goal.
//! - [`level_victory_observer`] plays the screen-wide star burst.
//! - [`hint_observer`] forwards hint requests to the
//!   [`HintPresenter`](crate::resources::hints::HintPresenter).
//! - [`hint_fade_system`] advances tip fades each frame.

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::label::Label;
use crate::components::particles::OneShotParticles;
use crate::components::tint::{Color, Tint};
use crate::components::tween::TweenScale;
use crate::components::zone::{PlacementZone, format_status};
use crate::events::hint::HintEvent;
use crate::events::zone::{LevelVictoryEvent, ZoneStatusChanged};
use crate::resources::hints::HintPresenter;
use crate::resources::hud::Hud;
use crate::resources::levelprogress::LevelProgress;
use crate::resources::worldtime::WorldTime;

/// Peak scale of the checklist pulse.
pub const PULSE_PEAK: f32 = 1.05;
/// Duration of each leg of the checklist pulse.
pub const PULSE_LEG_SECONDS: f32 = 0.05;

/// Checklist line shown before a zone has reported anything.
pub fn initial_checklist_text(name: &str, required: usize) -> String {
    format!("[ ] {name} (0/{required})")
}

pub fn zone_status_observer(
    trigger: On<ZoneStatusChanged>,
    mut labels: Query<(&mut Label, Option<&mut Tint>)>,
    zones: Query<&PlacementZone>,
    mut progress: ResMut<LevelProgress>,
    mut commands: Commands,
) {
    let status = trigger.event();

    if let Some(label_entity) = status.label {
        if let Ok((mut label, tint)) = labels.get_mut(label_entity) {
            label.set_content(format_status(
                &status.name,
                status.count,
                status.required,
                status.complete,
            ));
            if let Some(mut tint) = tint {
                tint.color = if status.complete {
                    Color::GREEN
                } else {
                    Color::WHITE
                };
            }
            commands
                .entity(label_entity)
                .insert(TweenScale::pulse(PULSE_PEAK, PULSE_LEG_SECONDS));
        }
    }

    let completed = zones.iter().filter(|z| z.is_complete()).count();
    if progress.evaluate(completed) {
        commands.trigger(LevelVictoryEvent { completed });
    }
}

pub fn level_victory_observer(
    trigger: On<LevelVictoryEvent>,
    hud: Res<Hud>,
    mut particles: Query<&mut OneShotParticles>,
) {
    info!(
        "Kitchen organized: {} zones complete",
        trigger.event().completed
    );
    if let Some(mut burst) = hud.screen_stars.and_then(|e| particles.get_mut(e).ok()) {
        burst.restart();
    }
}

pub fn hint_observer(trigger: On<HintEvent>, mut hints: ResMut<HintPresenter>) {
    match trigger.event() {
        HintEvent::ShowPickup { item_name } => hints.show_pickup(item_name),
        HintEvent::ShowHolding => hints.show_holding(),
        HintEvent::HideAll => hints.hide_all(),
    }
    debug!("Hints now {:?}", trigger.event());
}

pub fn hint_fade_system(time: Res<WorldTime>, mut hints: ResMut<HintPresenter>) {
    if hints.is_fading() {
        hints.advance(time.delta);
    }
}
