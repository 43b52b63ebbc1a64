use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};

use super::super::state::{Aplay, EMPTY_LABEL, Message};
use super::super::util::UNKNOWN_TRACK_LABEL;
use super::update;
use crate::core::playback::{PlaybackController, PlayerCommand, PlayerEvent, PlayerState};
use crate::core::tags::write_fixture;

/// State with a fake engine: commands land in the returned receiver.
fn wired_state() -> (Aplay, Receiver<PlayerCommand>) {
    let (tx, rx) = mpsc::channel();
    let mut state = Aplay::default();
    state.playback = Some(PlaybackController::from_sender(tx));
    (state, rx)
}

fn sent(rx: &Receiver<PlayerCommand>) -> Vec<PlayerCommand> {
    rx.try_iter().collect()
}

fn ended(path: &Path) -> PlayerEvent {
    PlayerEvent::TrackEnded {
        path: path.to_path_buf(),
    }
}

fn queue(state: &mut Aplay, names: &[&str]) -> Vec<PathBuf> {
    let paths: Vec<PathBuf> = names
        .iter()
        .map(|n| PathBuf::from(format!("/nonexistent/{n}")))
        .collect();
    let _ = update(state, Message::FolderScanned(Ok(paths.clone())));
    paths
}

#[test]
fn first_queued_track_sets_label_and_later_ones_do_not() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.flac");
    let second = dir.path().join("second.flac");
    write_fixture(&first, &[("ARTIST", &["Low"]), ("TITLE", &["Words"])]);
    write_fixture(&second, &[("ARTIST", &["Other"]), ("TITLE", &["Song"])]);

    let mut state = Aplay::default();
    assert_eq!(state.info_label, EMPTY_LABEL);

    let _ = update(&mut state, Message::FileChosen(Some(first.clone())));
    assert_eq!(state.info_label, "Low - Words");

    let _ = update(&mut state, Message::FileChosen(Some(second.clone())));
    assert_eq!(state.info_label, "Low - Words");
    assert_eq!(state.playlist.entries(), &[first, second]);
}

#[test]
fn unreadable_first_track_shows_track_info() {
    let mut state = Aplay::default();
    queue(&mut state, &["missing.flac"]);
    assert_eq!(state.info_label, UNKNOWN_TRACK_LABEL);
}

#[test]
fn cancelled_dialogs_do_nothing() {
    let mut state = Aplay::default();
    let _ = update(&mut state, Message::FileChosen(None));
    let _ = update(&mut state, Message::FolderChosen(None));

    assert!(state.playlist.is_empty());
    assert!(!state.loading);
    assert_eq!(state.info_label, EMPTY_LABEL);
}

#[test]
fn folder_results_are_queued_in_order() {
    let mut state = Aplay::default();
    state.loading = true;
    let paths = queue(&mut state, &["b.flac", "a.FLAC", "c.flac"]);

    assert!(!state.loading);
    assert_eq!(state.playlist.entries(), paths.as_slice());
}

#[test]
fn folder_errors_and_empty_folders_only_touch_status() {
    let mut state = Aplay::default();
    let _ = update(&mut state, Message::FolderScanned(Ok(Vec::new())));
    assert!(state.status.contains("No FLAC"));

    let _ = update(
        &mut state,
        Message::FolderScanned(Err("permission denied".into())),
    );
    assert!(state.status.contains("permission denied"));
    assert!(state.playlist.is_empty());
}

#[test]
fn play_from_stopped_starts_the_first_entry() {
    let (mut state, rx) = wired_state();
    let paths = queue(&mut state, &["a.flac", "b.flac"]);

    let _ = update(&mut state, Message::TogglePlayPause);

    assert_eq!(sent(&rx), vec![PlayerCommand::PlayFile(paths[0].clone())]);
    assert_eq!(state.playlist.current(), Some(0));
    assert_eq!(state.player_state, PlayerState::Playing);
}

#[test]
fn play_button_toggles_pause_and_resume() {
    let (mut state, rx) = wired_state();
    queue(&mut state, &["a.flac"]);
    let _ = update(&mut state, Message::TogglePlayPause);
    sent(&rx);

    let _ = update(&mut state, Message::TogglePlayPause);
    assert_eq!(state.player_state, PlayerState::Paused);
    let _ = update(&mut state, Message::TogglePlayPause);
    assert_eq!(state.player_state, PlayerState::Playing);

    assert_eq!(sent(&rx), vec![PlayerCommand::Pause, PlayerCommand::Resume]);
}

#[test]
fn play_on_empty_playlist_does_nothing() {
    let (mut state, rx) = wired_state();
    let _ = update(&mut state, Message::TogglePlayPause);

    assert!(sent(&rx).is_empty());
    assert_eq!(state.player_state, PlayerState::Stopped);
}

#[test]
fn stop_resets_position_but_keeps_the_current_entry() {
    let (mut state, rx) = wired_state();
    queue(&mut state, &["a.flac", "b.flac"]);
    let _ = update(&mut state, Message::PlayEntry(1));
    state.position_ms = 12_000;
    sent(&rx);

    let _ = update(&mut state, Message::Stop);

    assert_eq!(sent(&rx), vec![PlayerCommand::Stop]);
    assert_eq!(state.position_ms, 0);
    assert_eq!(state.playlist.current(), Some(1));
    assert_eq!(state.player_state, PlayerState::Stopped);
}

#[test]
fn next_while_playing_plays_the_next_entry() {
    let (mut state, rx) = wired_state();
    let paths = queue(&mut state, &["a.flac", "b.flac"]);
    let _ = update(&mut state, Message::TogglePlayPause);
    sent(&rx);

    let _ = update(&mut state, Message::Next);
    assert_eq!(sent(&rx), vec![PlayerCommand::PlayFile(paths[1].clone())]);

    let _ = update(&mut state, Message::Previous);
    assert_eq!(sent(&rx), vec![PlayerCommand::PlayFile(paths[0].clone())]);
}

#[test]
fn next_while_stopped_only_moves_the_cursor() {
    let (mut state, rx) = wired_state();
    queue(&mut state, &["a.flac", "b.flac"]);

    let _ = update(&mut state, Message::Next);

    assert_eq!(state.playlist.current(), Some(0));
    assert_eq!(sent(&rx), vec![PlayerCommand::Stop]);
    assert_eq!(state.player_state, PlayerState::Stopped);
}

#[test]
fn running_off_the_end_stops_and_clears_duration() {
    let (mut state, rx) = wired_state();
    queue(&mut state, &["a.flac"]);
    let _ = update(&mut state, Message::TogglePlayPause);
    state.duration_ms = 200_000;
    sent(&rx);

    let _ = update(&mut state, Message::Next);

    assert_eq!(sent(&rx), vec![PlayerCommand::Stop]);
    assert_eq!(state.playlist.current(), None);
    assert_eq!(state.duration_ms, 0);
    assert_eq!(state.info_label, "00:00");
}

#[test]
fn play_entry_out_of_range_is_ignored() {
    let (mut state, rx) = wired_state();
    queue(&mut state, &["a.flac"]);

    let _ = update(&mut state, Message::PlayEntry(3));

    assert!(sent(&rx).is_empty());
    assert_eq!(state.playlist.current(), None);
}

#[test]
fn started_event_sets_duration_and_label() {
    let mut state = Aplay::default();
    let path = PathBuf::from("/music/a.flac");

    let _ = super::playback::handle_event(
        &mut state,
        PlayerEvent::Started {
            path,
            duration_ms: Some(205_000),
            start_ms: 0,
        },
    );

    assert_eq!(state.duration_ms, 205_000);
    assert_eq!(state.info_label, "03:25");
    assert_eq!(state.player_state, PlayerState::Playing);
}

#[test]
fn position_updates_are_ignored_while_dragging() {
    let (mut state, rx) = wired_state();
    queue(&mut state, &["a.flac"]);
    let _ = update(&mut state, Message::TogglePlayPause);
    state.duration_ms = 100_000;
    sent(&rx);

    let _ = update(&mut state, Message::SeekTo(40_000.0));
    let _ = super::playback::handle_event(
        &mut state,
        PlayerEvent::Position { position_ms: 5_000 },
    );
    assert_eq!(state.position_ms, 40_000);

    let _ = update(&mut state, Message::SeekCommit);
    assert_eq!(sent(&rx), vec![PlayerCommand::Seek(40_000)]);
    assert_eq!(state.seek_preview_ms, None);

    let _ = super::playback::handle_event(
        &mut state,
        PlayerEvent::Position { position_ms: 41_000 },
    );
    assert_eq!(state.position_ms, 41_000);
}

#[test]
fn seeking_without_a_duration_is_ignored() {
    let (mut state, rx) = wired_state();
    let _ = update(&mut state, Message::SeekTo(1_000.0));
    let _ = update(&mut state, Message::SeekCommit);

    assert!(sent(&rx).is_empty());
    assert_eq!(state.position_ms, 0);
}

#[test]
fn track_end_advances_then_finishes() {
    let (mut state, rx) = wired_state();
    let paths = queue(&mut state, &["a.flac", "b.flac"]);
    let _ = update(&mut state, Message::TogglePlayPause);
    sent(&rx);

    let _ = super::playback::handle_event(&mut state, ended(&paths[0]));
    assert_eq!(sent(&rx), vec![PlayerCommand::PlayFile(paths[1].clone())]);
    assert_eq!(state.player_state, PlayerState::Playing);

    let _ = super::playback::handle_event(&mut state, ended(&paths[1]));
    assert_eq!(state.playlist.current(), None);
    assert_eq!(state.player_state, PlayerState::Stopped);
    assert_eq!(state.status, "End of playlist.");
}

#[test]
fn track_end_after_stop_is_ignored() {
    let (mut state, rx) = wired_state();
    let paths = queue(&mut state, &["a.flac", "b.flac"]);
    let _ = update(&mut state, Message::TogglePlayPause);
    let _ = update(&mut state, Message::Stop);
    sent(&rx);

    let _ = super::playback::handle_event(&mut state, ended(&paths[0]));

    assert!(sent(&rx).is_empty());
    assert_eq!(state.playlist.current(), Some(0));
    assert_eq!(state.player_state, PlayerState::Stopped);
}

#[test]
fn track_end_for_a_replaced_entry_keeps_the_new_one() {
    let (mut state, rx) = wired_state();
    let paths = queue(&mut state, &["a.flac", "b.flac", "c.flac"]);
    let _ = update(&mut state, Message::TogglePlayPause);
    let _ = update(&mut state, Message::PlayEntry(2));
    sent(&rx);

    // a.flac ran out just before the engine saw PlayFile(c.flac).
    let _ = super::playback::handle_event(&mut state, ended(&paths[0]));

    assert!(sent(&rx).is_empty());
    assert_eq!(state.playlist.current(), Some(2));
    assert_eq!(state.player_state, PlayerState::Playing);
}

#[test]
fn closing_the_window_shuts_the_engine_down() {
    let (mut state, rx) = wired_state();
    queue(&mut state, &["a.flac"]);
    let _ = update(&mut state, Message::TogglePlayPause);
    sent(&rx);

    let _ = update(&mut state, Message::CloseRequested);

    assert_eq!(sent(&rx), vec![PlayerCommand::Shutdown]);
    assert!(state.playback.is_none());
    assert!(state.playback_events.is_none());
    assert_eq!(state.player_state, PlayerState::Stopped);
}

#[test]
fn closing_without_an_engine_does_not_start_one() {
    let mut state = Aplay::default();
    let _ = update(&mut state, Message::CloseRequested);
    assert!(state.playback.is_none());
}

#[test]
fn seek_bar_is_live_only_with_a_known_length() {
    let mut state = Aplay::default();
    assert!(!state.can_seek());

    let _ = super::playback::handle_event(
        &mut state,
        PlayerEvent::Started {
            path: PathBuf::from("/music/a.flac"),
            duration_ms: Some(1_000),
            start_ms: 0,
        },
    );
    assert!(state.can_seek());

    let _ = super::playback::handle_event(
        &mut state,
        PlayerEvent::Started {
            path: PathBuf::from("/music/b.flac"),
            duration_ms: None,
            start_ms: 0,
        },
    );
    assert!(!state.can_seek());
}

#[test]
fn volume_slider_maps_to_a_ratio() {
    let (mut state, rx) = wired_state();
    let _ = update(&mut state, Message::SetVolume(50));

    assert_eq!(state.volume, 50);
    assert_eq!(sent(&rx), vec![PlayerCommand::SetVolume(0.5)]);
}

#[test]
fn engine_errors_surface_in_the_status_line() {
    let mut state = Aplay::default();
    let _ = super::playback::handle_event(&mut state, PlayerEvent::Error("no device".into()));
    assert_eq!(state.status, "Playback error: no device");
}
