use bevy_ecs::message::Message;
use glam::Vec3;

/// Commands sent *to* the audio thread
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioCmd {
    /// Play a one-shot effect. `position` is `None` for non-positional HUD sounds.
    PlayFx {
        id: String,
        pitch_scale: f32,
        position: Option<Vec3>,
    },
    Shutdown,
}

impl AudioCmd {
    pub fn play_fx(id: impl Into<String>) -> Self {
        AudioCmd::PlayFx {
            id: id.into(),
            pitch_scale: 1.0,
            position: None,
        }
    }
}

/// Events sent *back* from the audio thread
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioMessage {
    FxStarted { id: String, pitch_scale: f32 },
}
