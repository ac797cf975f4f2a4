//! Game configuration change detection system.
//!
//! Monitors [`GameConfig`] for changes and pushes the HUD-related settings
//! into the resources that use them.

use crate::events::zone::LevelVictoryEvent;
use crate::resources::gameconfig::GameConfig;
use crate::resources::hints::HintPresenter;
use crate::resources::levelprogress::LevelProgress;
use bevy_ecs::prelude::*;
use log::debug;

/// Apply tip texts, fade duration and the required zone count whenever the
/// configuration is added or modified.
///
/// A new zone count is checked against the zones already complete, so
/// lowering it can win the level without waiting for another zone report.
///
/// Other settings are read directly from [`GameConfig`] by the systems that
/// need them and need no propagation.
pub fn apply_gameconfig_changes(
    maybe_config: Option<Res<GameConfig>>,
    hints: Option<ResMut<HintPresenter>>,
    progress: Option<ResMut<LevelProgress>>,
    mut commands: Commands,
) {
    let Some(config) = maybe_config else {
        return;
    };
    if !(config.is_changed() || config.is_added()) {
        return;
    }

    if let Some(mut hints) = hints {
        hints.pickup_template = config.pickup_tip.clone();
        hints.place.text = config.place_tip.clone();
        hints.rotate.text = config.rotate_tip.clone();
        hints.fade_seconds = config.fade_seconds;
    }
    if let Some(mut progress) = progress {
        if progress.total_required != config.total_zones_required {
            progress.total_required = config.total_zones_required;
            let completed = progress.completed;
            if progress.evaluate(completed) {
                commands.trigger(LevelVictoryEvent { completed });
            }
        }
    }
    debug!("GameConfig changes applied.");
}
