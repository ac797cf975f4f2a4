//! Placement zone tracking.
//!
//! Enter/exit observers keep each [`PlacementZone`]'s member set in sync with
//! the host's trigger reports, ignoring anything that is not movable. Every
//! membership change is reported to the HUD as [`ZoneStatusChanged`]; the
//! rising edge of a zone's goal additionally triggers [`ZoneCompleted`],
//! whose observer plays the victory effects.

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::interactable::Interactable;
use crate::components::particles::OneShotParticles;
use crate::components::position::Position;
use crate::components::zone::{PlacementZone, ZoneTransition};
use crate::events::audio::AudioCmd;
use crate::events::zone::{BodyEnteredZone, BodyExitedZone, ZoneCompleted, ZoneStatusChanged};
use crate::resources::hud::Hud;

fn is_movable(body: Entity, interactables: &Query<&Interactable>) -> bool {
    interactables.get(body).is_ok_and(|i| i.is_movable())
}

/// Re-evaluate a zone after its membership changed and report the result.
fn report_zone(zone_entity: Entity, zone: &mut PlacementZone, commands: &mut Commands) {
    let transition = zone.evaluate();
    debug!(
        "Zone '{}' now {}/{} ({:?})",
        zone.name,
        zone.count(),
        zone.required_items,
        transition
    );
    commands.trigger(ZoneStatusChanged {
        zone: zone_entity,
        label: zone.status_label,
        name: zone.name.clone(),
        count: zone.count(),
        required: zone.required_items,
        complete: zone.is_complete(),
    });
    if transition == ZoneTransition::Completed {
        commands.trigger(ZoneCompleted { zone: zone_entity });
    }
}

pub fn body_entered_zone_observer(
    trigger: On<BodyEnteredZone>,
    interactables: Query<&Interactable>,
    mut zones: Query<&mut PlacementZone>,
    mut commands: Commands,
) {
    let event = *trigger.event();
    if !is_movable(event.body, &interactables) {
        return;
    }
    let Ok(mut zone) = zones.get_mut(event.zone) else {
        return;
    };
    if zone.enter(event.body) {
        report_zone(event.zone, &mut zone, &mut commands);
    }
}

pub fn body_exited_zone_observer(
    trigger: On<BodyExitedZone>,
    mut zones: Query<&mut PlacementZone>,
    mut commands: Commands,
) {
    let event = *trigger.event();
    let Ok(mut zone) = zones.get_mut(event.zone) else {
        return;
    };
    if zone.exit(event.body) {
        report_zone(event.zone, &mut zone, &mut commands);
    }
}

/// Play the zone's victory sound and star bursts.
pub fn zone_completed_observer(
    trigger: On<ZoneCompleted>,
    zones: Query<(&PlacementZone, Option<&Position>)>,
    mut particles: Query<&mut OneShotParticles>,
    hud: Res<Hud>,
    mut audio: MessageWriter<AudioCmd>,
) {
    let Ok((zone, position)) = zones.get(trigger.event().zone) else {
        return;
    };
    info!("Zone '{}' complete", zone.name);

    if let Some(sound) = &zone.victory_sound {
        audio.write(AudioCmd::PlayFx {
            id: sound.clone(),
            pitch_scale: 1.0,
            position: position.map(|p| p.pos),
        });
    }
    for emitter in [zone.stars, hud.screen_stars].into_iter().flatten() {
        if let Ok(mut burst) = particles.get_mut(emitter) {
            burst.restart();
        }
    }
}
