//! core/mod.rs
//!
//! Everything that is not a widget:
//! - find FLAC files for a chosen file/folder (`library`)
//! - read artist/title tags (`tags`)
//! - hold the playlist order and cursor (`playlist`)
//! - decode + play audio on its own thread (`playback`)
//! - format times for display (`time`)
//!
//! No Iced imports live under here.

pub mod library;
pub mod playback;
pub mod playlist;
pub mod tags;
pub mod time;
