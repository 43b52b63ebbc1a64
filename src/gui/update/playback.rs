//! gui/update/playback.rs
//! GUI <-> playback engine bridge.
//!
//! - GUI never touches rodio/symphonia directly.
//! - Position/duration are only ever mirrored from engine events.
//! - The engine thread is started lazily on the first command that needs it.

use std::path::PathBuf;
use std::sync::mpsc::TryRecvError;
use std::time::Duration;

use iced::Task;

use super::super::state::{Aplay, Message};
use super::super::util::entry_label;
use crate::core::playback::{PlayerCommand, PlayerEvent, PlayerState, start_playback};
use crate::core::time::format_time;

fn volume_ratio(volume: u8) -> f32 {
    f32::from(volume.min(100)) / 100.0
}

fn ensure_engine(state: &mut Aplay) {
    if state.playback.is_some() {
        return;
    }

    log::debug!("starting playback engine");
    let (controller, events) = start_playback(
        volume_ratio(state.volume),
        Duration::from_millis(state.tick_ms),
    );

    state.playback = Some(controller);
    state.playback_events = Some(events);
}

/// Send a command, starting the engine first if needed.
fn send(state: &mut Aplay, cmd: PlayerCommand) {
    ensure_engine(state);
    if let Some(controller) = &state.playback {
        controller.send(cmd);
    }
}

/// Send a command only if the engine already exists.
fn send_if_running(state: &Aplay, cmd: PlayerCommand) {
    if let Some(controller) = &state.playback {
        controller.send(cmd);
    }
}

pub(crate) fn drain_events(state: &mut Aplay) -> Task<Message> {
    let Some(rx) = state.playback_events.as_ref() else {
        return Task::none();
    };

    let mut drained: Vec<PlayerEvent> = Vec::new();
    let mut disconnected = false;
    loop {
        match rx.try_recv() {
            Ok(ev) => drained.push(ev),
            Err(TryRecvError::Empty) => break,
            Err(TryRecvError::Disconnected) => {
                disconnected = true;
                break;
            }
        }
    }

    for ev in drained {
        let _ = handle_event(state, ev);
    }

    if disconnected {
        // Engine thread is gone; the next command will start a fresh one.
        log::warn!("playback engine exited");
        state.playback = None;
        state.playback_events = None;
        state.player_state = PlayerState::Stopped;
    }

    Task::none()
}

/// Double-click on a playlist row.
pub(crate) fn play_entry(state: &mut Aplay, index: usize) -> Task<Message> {
    if index >= state.playlist.len() {
        return Task::none();
    }

    state.playlist.set_current(index);
    start_current(state)
}

/// Play the playlist's current entry from the beginning.
fn start_current(state: &mut Aplay) -> Task<Message> {
    let Some(path) = state.playlist.current_path().map(PathBuf::from) else {
        return Task::none();
    };

    state.status = format!("Playing: {}", entry_label(&path));
    send(state, PlayerCommand::PlayFile(path));

    // Optimistic; the engine confirms with Started (or reports an Error).
    state.player_state = PlayerState::Playing;
    state.position_ms = 0;
    state.seek_preview_ms = None;

    Task::none()
}

pub(crate) fn toggle_play_pause(state: &mut Aplay) -> Task<Message> {
    match state.player_state {
        PlayerState::Playing => {
            send(state, PlayerCommand::Pause);
            state.player_state = PlayerState::Paused;
            Task::none()
        }
        PlayerState::Paused => {
            send(state, PlayerCommand::Resume);
            state.player_state = PlayerState::Playing;
            Task::none()
        }
        PlayerState::Stopped => {
            if state.playlist.is_empty() {
                state.status = "Playlist is empty.".to_string();
                return Task::none();
            }
            if state.playlist.current().is_none() {
                state.playlist.next();
            }
            start_current(state)
        }
    }
}

pub(crate) fn stop(state: &mut Aplay) -> Task<Message> {
    send_if_running(state, PlayerCommand::Stop);

    state.player_state = PlayerState::Stopped;
    state.position_ms = 0;
    state.seek_preview_ms = None;

    Task::none()
}

pub(crate) fn next(state: &mut Aplay) -> Task<Message> {
    if state.playlist.is_empty() {
        return Task::none();
    }
    let was_playing = state.is_playing();
    state.playlist.next();
    after_move(state, was_playing)
}

pub(crate) fn previous(state: &mut Aplay) -> Task<Message> {
    if state.playlist.is_empty() {
        return Task::none();
    }
    let was_playing = state.is_playing();
    state.playlist.previous();
    after_move(state, was_playing)
}

/// The playlist cursor moved: keep playing, park on the new entry, or finish.
fn after_move(state: &mut Aplay, was_playing: bool) -> Task<Message> {
    match state.playlist.current() {
        None => finish(state),
        Some(_) if was_playing => start_current(state),
        Some(_) => stop(state),
    }
}

/// Playlist ran off either end: nothing is loaded any more.
fn finish(state: &mut Aplay) -> Task<Message> {
    send_if_running(state, PlayerCommand::Stop);

    state.player_state = PlayerState::Stopped;
    state.position_ms = 0;
    state.duration_ms = 0;
    state.seek_preview_ms = None;
    state.info_label = format_time(0);
    state.status = "End of playlist.".to_string();

    Task::none()
}

/// Seek slider dragged: preview only (UI updates, no engine command).
pub(crate) fn seek_preview(state: &mut Aplay, value: f32) -> Task<Message> {
    if !state.can_seek() {
        return Task::none();
    }

    let target_ms = (value.max(0.0).round() as u64).min(state.duration_ms);
    state.seek_preview_ms = Some(target_ms);
    state.position_ms = target_ms;

    Task::none()
}

/// Seek slider released: commit the last preview to the engine.
pub(crate) fn seek_commit(state: &mut Aplay) -> Task<Message> {
    let Some(target_ms) = state.seek_preview_ms.take() else {
        return Task::none();
    };

    if state.player_state == PlayerState::Stopped {
        return Task::none();
    }

    log::debug!("seek to {target_ms} ms of {}", state.duration_ms);
    send_if_running(state, PlayerCommand::Seek(target_ms));
    state.position_ms = target_ms;

    Task::none()
}

/// Window is closing: stop the engine thread, then exit.
pub(crate) fn shutdown(state: &mut Aplay) -> Task<Message> {
    if let Some(controller) = state.playback.take() {
        controller.send(PlayerCommand::Shutdown);
    }
    state.playback_events = None;
    state.player_state = PlayerState::Stopped;

    iced::exit()
}

pub(crate) fn set_volume(state: &mut Aplay, volume: u8) -> Task<Message> {
    state.volume = volume.min(100);
    send_if_running(state, PlayerCommand::SetVolume(volume_ratio(state.volume)));
    Task::none()
}

pub(crate) fn handle_event(state: &mut Aplay, event: PlayerEvent) -> Task<Message> {
    match event {
        PlayerEvent::Started {
            path,
            duration_ms,
            start_ms,
        } => {
            log::debug!(
                "started {} duration_ms={duration_ms:?} start_ms={start_ms}",
                path.display()
            );
            state.player_state = PlayerState::Playing;
            state.duration_ms = duration_ms.unwrap_or(0);
            state.position_ms = start_ms;
            state.seek_preview_ms = None;
            state.info_label = format_time(state.duration_ms);
            state.status = format!("Now playing: {}", entry_label(&path));
        }
        PlayerEvent::Paused => state.player_state = PlayerState::Paused,
        PlayerEvent::Resumed => state.player_state = PlayerState::Playing,
        PlayerEvent::Stopped => {
            state.player_state = PlayerState::Stopped;
            state.position_ms = 0;
            state.seek_preview_ms = None;
        }
        PlayerEvent::Position { position_ms } => {
            // If user is dragging the seek slider, don't fight them.
            if state.seek_preview_ms.is_none() {
                state.position_ms = if state.duration_ms > 0 {
                    position_ms.min(state.duration_ms)
                } else {
                    position_ms
                };
            }
        }
        PlayerEvent::Seeked { position_ms } => {
            if state.seek_preview_ms.is_none() {
                state.position_ms = position_ms;
            }
        }
        PlayerEvent::TrackEnded { path } => {
            // Ends that raced a Stop or a jump to another entry are stale.
            let current = state.playlist.current_path() == Some(path.as_path());
            if state.player_state != PlayerState::Playing || !current {
                log::debug!("ignoring stale track end for {}", path.display());
                return Task::none();
            }

            state.player_state = PlayerState::Stopped;
            state.position_ms = 0;
            state.seek_preview_ms = None;

            return match state.playlist.next() {
                Some(_) => start_current(state),
                None => finish(state),
            };
        }
        PlayerEvent::Error(err) => {
            log::warn!("playback error: {err}");
            state.status = format!("Playback error: {err}");
        }
    }

    Task::none()
}
