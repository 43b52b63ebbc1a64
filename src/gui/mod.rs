//! gui/mod.rs
//!
//! The player window.
//!
//! - `state`: `Aplay` holds the playlist and a mirror of the engine
//! - `update/`: file dialogs and folder scans (`open`), transport and engine events (`playback`)
//! - `view/`: menu row, transport buttons, playlist, seek and volume sliders
//! - `subscription`: engine event tick and the close request
//! - `util`: playlist row and track info labels

pub(crate) mod state;
pub(crate) mod subscription;
pub(crate) mod update;
pub(crate) mod util;
pub(crate) mod view;

// Re-export the entry points main.rs needs.
pub(crate) use state::Aplay;
pub(crate) use subscription::subscription;
pub(crate) use update::update;
pub(crate) use view::view;
