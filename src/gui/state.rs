//! GUI state + messages.
//! Pure data definitions used by update/ + view/.

use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use crate::config::Settings;
use crate::core::playback::{PlaybackController, PlayerEvent, PlayerState};
use crate::core::playlist::Playlist;

/// Info label text before anything is loaded.
pub(crate) const EMPTY_LABEL: &str = "--:--";

/// App state
pub(crate) struct Aplay {
    pub status: String,
    pub loading: bool,
    pub start_dir: Option<PathBuf>,

    pub playlist: Playlist,
    /// Right-hand label: "artist - title" of the first queued track, then the
    /// current track length once playback reports it.
    pub info_label: String,

    // Engine handles (created lazily on first use)
    pub playback: Option<PlaybackController>,
    pub playback_events: Option<Receiver<PlayerEvent>>,
    pub tick_ms: u64,

    // Mirror of engine state
    pub player_state: PlayerState,
    pub position_ms: u64,
    pub duration_ms: u64,
    /// Set while the seek slider is being dragged.
    pub seek_preview_ms: Option<u64>,

    /// Volume slider value, 0..=100.
    pub volume: u8,
}

impl Aplay {
    pub(crate) fn new(settings: &Settings) -> Self {
        Self {
            status: "Open a FLAC file or folder.".to_string(),
            loading: false,
            start_dir: settings.library.start_dir.clone(),

            playlist: Playlist::new(),
            info_label: EMPTY_LABEL.to_string(),

            playback: None,
            playback_events: None,
            tick_ms: settings.audio.tick_ms,

            player_state: PlayerState::Stopped,
            position_ms: 0,
            duration_ms: 0,
            seek_preview_ms: None,

            volume: settings.audio.volume.min(100),
        }
    }

    pub(crate) fn is_playing(&self) -> bool {
        self.player_state == PlayerState::Playing
    }

    /// Seeking needs a known track length.
    pub(crate) fn can_seek(&self) -> bool {
        self.duration_ms > 0
    }
}

#[cfg(test)]
impl Default for Aplay {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

/// Message = “something happened”.
#[derive(Debug, Clone)]
pub(crate) enum Message {
    TickPlayback,

    // File menu
    OpenFile,
    OpenFolder,
    FileChosen(Option<PathBuf>),
    FolderChosen(Option<PathBuf>),
    FolderScanned(Result<Vec<PathBuf>, String>),

    // Transport
    TogglePlayPause,
    Stop,
    Next,
    Previous,
    /// Double-click on a playlist row.
    PlayEntry(usize),

    // Seek: preview while dragging, commit on release
    SeekTo(f32),
    SeekCommit,

    SetVolume(u8),

    /// Window close button; exit waits for the engine to be told to stop.
    CloseRequested,
}
