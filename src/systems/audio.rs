//! Audio bridge systems and the headless audio thread.
//!
//! - [`audio_thread`] runs on its own OS thread and consumes
//!   [`AudioCmd`](crate::events::audio::AudioCmd) messages. The headless build
//!   has no mixer: it logs each effect and answers with
//!   [`AudioMessage::FxStarted`]. A host with a sound device replaces it.
//! - [`forward_audio_cmds`] sends this frame's gameplay sound requests to the
//!   thread; [`poll_audio_messages`] drains its replies into the ECS.
//! - [`update_bevy_audio_cmds`] and [`update_bevy_audio_messages`] advance the
//!   double-buffered message queues.
//!
//! See also: [`crate::events::audio`] and [`crate::resources::audio`].
use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::{MessageReader, MessageWriter, Messages, Res, ResMut};
use crossbeam_channel::{Receiver, Sender};
use log::{debug, info};

/// Drain any pending messages from the audio thread into the ECS mailbox.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`AudioMessage`].
pub fn update_bevy_audio_messages(mut msgs: ResMut<Messages<AudioMessage>>) {
    msgs.update();
}

/// Forward ECS AudioCmd messages to the audio thread via the AudioBridge sender.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // ignore send error on shutdown
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for AudioCmd so same-frame readers can observe writes.
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Entry point of the dedicated audio thread.
///
/// Blocks on the command channel until it receives [`AudioCmd::Shutdown`] or
/// the sender is dropped.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>) {
    debug!(
        "[audio] thread starting (id={:?})",
        std::thread::current().id()
    );
    let mut played: u64 = 0;
    while let Ok(cmd) = rx_cmd.recv() {
        match cmd {
            AudioCmd::PlayFx {
                id,
                pitch_scale,
                position,
            } => {
                played += 1;
                match position {
                    Some(p) => info!(
                        "[audio] fx '{}' pitch={:.2} at ({:.2}, {:.2}, {:.2})",
                        id, pitch_scale, p.x, p.y, p.z
                    ),
                    None => info!("[audio] fx '{}' pitch={:.2}", id, pitch_scale),
                }
                let _ = tx_msg.send(AudioMessage::FxStarted { id, pitch_scale });
            }
            AudioCmd::Shutdown => break,
        }
    }
    debug!("[audio] thread exiting after {} effects", played);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn thread_acknowledges_effects_and_stops_on_shutdown() {
        let (tx_cmd, rx_cmd) = unbounded();
        let (tx_msg, rx_msg) = unbounded();
        let handle = std::thread::spawn(move || audio_thread(rx_cmd, tx_msg));

        tx_cmd.send(AudioCmd::play_fx("drop")).unwrap();
        tx_cmd.send(AudioCmd::Shutdown).unwrap();
        handle.join().unwrap();

        let replies: Vec<_> = rx_msg.try_iter().collect();
        assert_eq!(
            replies,
            vec![AudioMessage::FxStarted {
                id: "drop".to_string(),
                pitch_scale: 1.0
            }]
        );
    }
}
