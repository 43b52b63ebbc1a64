//! gui/update/open.rs
//! File menu: Open File / Open Folder, and queueing the results.
//!
//! Dialog cancellation comes back as `None` and is a no-op.

use std::path::PathBuf;

use iced::Task;
use rfd::AsyncFileDialog;

use super::super::state::{Aplay, Message};
use super::super::util::track_label;
use super::util::spawn_blocking;
use crate::core::library::collect_flacs;

pub(crate) fn open_file(state: &mut Aplay) -> Task<Message> {
    if state.loading {
        return Task::none();
    }

    let mut dialog = AsyncFileDialog::new()
        .set_title("Open Audio File")
        .add_filter("FLAC Files", &["flac"]);
    if let Some(dir) = &state.start_dir {
        dialog = dialog.set_directory(dir);
    }

    Task::perform(
        async move {
            dialog
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::FileChosen,
    )
}

pub(crate) fn open_folder(state: &mut Aplay) -> Task<Message> {
    if state.loading {
        return Task::none();
    }

    let mut dialog = AsyncFileDialog::new().set_title("Open Audio Folder");
    if let Some(dir) = &state.start_dir {
        dialog = dialog.set_directory(dir);
    }

    Task::perform(
        async move {
            dialog
                .pick_folder()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::FolderChosen,
    )
}

pub(crate) fn file_chosen(state: &mut Aplay, path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };

    add_to_playlist(state, vec![path]);
    Task::none()
}

pub(crate) fn folder_chosen(state: &mut Aplay, dir: Option<PathBuf>) -> Task<Message> {
    let Some(dir) = dir else {
        return Task::none();
    };

    state.loading = true;
    state.status = format!("Scanning {}...", dir.display());

    Task::perform(
        spawn_blocking(move || collect_flacs(&dir).map_err(|e| e.to_string())),
        |result| Message::FolderScanned(result.and_then(std::convert::identity)),
    )
}

pub(crate) fn folder_scanned(
    state: &mut Aplay,
    result: Result<Vec<PathBuf>, String>,
) -> Task<Message> {
    state.loading = false;

    match result {
        Ok(paths) if paths.is_empty() => {
            state.status = "No FLAC files in that folder.".to_string();
        }
        Ok(paths) => add_to_playlist(state, paths),
        Err(e) => {
            log::warn!("folder scan failed: {e}");
            state.status = format!("Could not read folder: {e}");
        }
    }

    Task::none()
}

/// Queue paths in order. The first track ever queued also sets the info label.
pub(crate) fn add_to_playlist(state: &mut Aplay, paths: Vec<PathBuf>) {
    let count = paths.len();

    for path in paths {
        if state.playlist.is_empty() {
            state.info_label = track_label(&path);
        }
        log::debug!("queued {}", path.display());
        state.playlist.add(path);
    }

    log::info!("added {count} track(s); playlist has {}", state.playlist.len());
    state.status = format!("Added {count} track(s).");
}
