//! GUI renderer (reads state, produces widgets; no mutation).
//!
//! Layout, top to bottom:
//! - file menu row
//! - transport buttons
//! - playlist | info label
//! - seek slider
//! - volume slider
//! - status line

mod constants;
mod playlist;
mod widgets;

use iced::Length;
use iced::widget::{Column, column, row, text};

use super::state::{Aplay, Message};
use constants::{PADDING, SPACING, STATUS_TEXT};

pub(crate) fn view(state: &Aplay) -> Column<'_, Message> {
    let body = row![
        playlist::build_playlist(state).width(Length::Fill),
        widgets::info_label(state),
    ]
    .spacing(SPACING)
    .height(Length::Fill);

    column![
        widgets::file_menu(state),
        widgets::transport_row(state),
        body,
        widgets::seek_bar(state),
        widgets::volume_row(state),
        text(&state.status).size(STATUS_TEXT),
    ]
    .spacing(SPACING)
    .padding(PADDING)
}
