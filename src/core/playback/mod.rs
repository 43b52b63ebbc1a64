//! core/playback/mod.rs
//! Playback engine thread + the channel types used to talk to it.
//!
//! The GUI never touches rodio/symphonia: it sends `PlayerCommand`s and polls
//! `PlayerEvent`s.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

mod decoder;
mod engine;

use engine::PlaybackEngine;

#[derive(Debug, Clone)]
pub struct PlaybackController {
    command_tx: Sender<PlayerCommand>,
}

impl PlaybackController {
    pub(crate) fn from_sender(command_tx: Sender<PlayerCommand>) -> Self {
        Self { command_tx }
    }

    /// Best-effort send. If the engine died, the command is dropped.
    pub fn send(&self, cmd: PlayerCommand) {
        if self.command_tx.send(cmd).is_err() {
            log::warn!("playback engine is gone; command dropped");
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    PlayFile(PathBuf),
    Pause,
    Resume,
    Stop,
    Seek(u64),      // ms
    SetVolume(f32), // 0.0..=1.0
    /// Stop playback and end the engine thread.
    Shutdown,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    Started {
        path: PathBuf,
        duration_ms: Option<u64>,
        start_ms: u64,
    },
    Paused,
    Resumed,
    Stopped,
    Position {
        position_ms: u64,
    },
    Seeked {
        position_ms: u64,
    },
    /// `path` ran out of samples. Lets the GUI drop stale end notifications.
    TrackEnded {
        path: PathBuf,
    },
    Error(String),
}

/// Transport state as last reported by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlayerState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Spawns the playback thread and returns:
/// - PlaybackController (store in GUI state)
/// - Receiver<PlayerEvent> (drained by the GUI on every tick)
pub fn start_playback(volume: f32, tick: Duration) -> (PlaybackController, Receiver<PlayerEvent>) {
    let (command_tx, command_rx) = mpsc::channel::<PlayerCommand>();
    let (event_tx, event_rx) = mpsc::channel::<PlayerEvent>();

    let spawned = thread::Builder::new()
        .name("aplay-playback".into())
        .spawn(move || {
            let mut engine = match PlaybackEngine::new(event_tx.clone(), volume, tick) {
                Ok(e) => e,
                Err(e) => {
                    log::error!("playback engine failed to start: {e}");
                    let _ = event_tx.send(PlayerEvent::Error(e.to_string()));
                    return;
                }
            };

            engine.run(command_rx);
            log::debug!("playback engine stopped");
        });

    if let Err(e) = spawned {
        log::error!("could not spawn playback thread: {e}");
    }

    (PlaybackController::from_sender(command_tx), event_rx)
}
