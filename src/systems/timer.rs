//! Timer systems.
//!
//! - [`update_timers`] – counts [`Timer`] components down and triggers
//!   [`TimerEvent`] once when they expire
//! - [`timer_observer`] – reacts to the signals the HUD schedules
//!
//! Timers are one-shot: the component is removed in the same frame its event
//! fires. Inserting a fresh `Timer` on an entity that still has one replaces
//! it, which is how a pending hide is cancelled.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::label::InfoDisplay;
use crate::components::timer::Timer;
use crate::components::visibility::Visibility;
use crate::events::timer::TimerEvent;
use crate::resources::worldtime::WorldTime;

/// Signal used to hide the info display after its welcome period.
pub const HIDE_INFO_SIGNAL: &str = "hide_info";

pub fn update_timers(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Timer)>,
    mut commands: Commands,
) {
    for (entity, mut timer) in query.iter_mut() {
        timer.elapsed += world_time.delta;
        if timer.is_finished() {
            commands.trigger(TimerEvent {
                entity,
                signal: timer.signal.clone(),
            });
            commands.entity(entity).remove::<Timer>();
        }
    }
}

/// Hide the info display when its timer fires.
pub fn timer_observer(
    trigger: On<TimerEvent>,
    mut displays: Query<&mut Visibility, With<InfoDisplay>>,
) {
    let event = trigger.event();
    if event.signal != HIDE_INFO_SIGNAL {
        return;
    }
    if let Ok(mut visibility) = displays.get_mut(event.entity) {
        visibility.hide();
        debug!("Info display hidden");
    }
}

/// Show the info display and (re)arm its auto-hide.
pub fn show_info_display(commands: &mut Commands, display: Entity, seconds: f32) {
    commands
        .entity(display)
        .insert((Visibility::visible(), Timer::new(seconds, HIDE_INFO_SIGNAL)));
}
