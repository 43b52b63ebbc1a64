//! Aplay
//!
//! # What this program is
//! A small desktop FLAC player (built with the `iced` GUI library): open a file
//! or a folder, get a playlist, press play.
//!
//! # How Iced works
//! - `Aplay` = all of the app state
//! - `Message` = "something happened" (button clicked, dialog closed, engine tick)
//! - `update(state, message)` handles it and changes state
//! - `view(state)` draws the UI from the current state
//!
//! **Message happens -> update changes state -> view redraws**
//!
//! # Threads
//! - The GUI thread owns all state.
//! - Audio runs on a playback engine thread (rodio + symphonia). The GUI sends it
//!   `PlayerCommand`s and drains `PlayerEvent`s on a timer subscription.
//! - Folder scans run on a throwaway worker thread and come back as a Message.
//! - Closing the window sends the engine `Shutdown` before the app exits.
//!
//! # Startup
//! Settings (optional TOML file + `APLAY__` env) -> logger -> window.

mod config;
mod core;
mod error;
mod gui;
mod logging;

use crate::config::Settings;
use crate::error::Result;
use crate::gui::Aplay;

fn main() -> Result<()> {
    let settings = Settings::load()?;
    let _logger = logging::init(&settings.logging)?;

    log::info!(
        "starting aplay (config: {})",
        config::resolve_config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "none".into())
    );

    let window_size = (settings.ui.window_width, settings.ui.window_height);

    iced::application(move || Aplay::new(&settings), gui::update, gui::view)
        .title("Aplay")
        .subscription(gui::subscription)
        .window_size(window_size)
        .exit_on_close_request(false)
        .run()?;

    log::info!("bye");
    Ok(())
}
