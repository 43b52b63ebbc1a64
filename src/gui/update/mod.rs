//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{Aplay, Message};

mod open;
mod playback;
mod util;

#[cfg(test)]
mod tests;

pub(crate) fn update(state: &mut Aplay, message: Message) -> Task<Message> {
    match message {
        Message::TickPlayback => playback::drain_events(state),

        // File menu
        Message::OpenFile => open::open_file(state),
        Message::OpenFolder => open::open_folder(state),
        Message::FileChosen(path) => open::file_chosen(state, path),
        Message::FolderChosen(dir) => open::folder_chosen(state, dir),
        Message::FolderScanned(result) => open::folder_scanned(state, result),

        // Transport
        Message::TogglePlayPause => playback::toggle_play_pause(state),
        Message::Stop => playback::stop(state),
        Message::Next => playback::next(state),
        Message::Previous => playback::previous(state),
        Message::PlayEntry(i) => playback::play_entry(state, i),

        // Seek: preview vs commit
        Message::SeekTo(ms) => playback::seek_preview(state, ms),
        Message::SeekCommit => playback::seek_commit(state),

        Message::SetVolume(v) => playback::set_volume(state, v),

        Message::CloseRequested => playback::shutdown(state),
    }
}
