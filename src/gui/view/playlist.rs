//! Playlist list. Double-click a row to play it.

use iced::widget::{Column, column, container, mouse_area, row, scrollable, text};
use iced::{Alignment, Length};

use super::super::state::{Aplay, Message};
use super::super::util::entry_label;
use super::constants::{PLAYLIST_ROW_H, PLAYLIST_ROW_HPAD, PLAYLIST_ROW_VPAD, ROW_TEXT};

pub(crate) fn build_playlist(state: &Aplay) -> iced::widget::Scrollable<'_, Message> {
    let mut col: Column<'_, Message> = column![].spacing(1);

    for (i, path) in state.playlist.entries().iter().enumerate() {
        let marker = if state.playlist.current() == Some(i) {
            "▶"
        } else {
            ""
        };

        let cells = row![
            text(marker).size(ROW_TEXT).width(Length::Fixed(20.0)),
            text(entry_label(path)).size(ROW_TEXT),
        ]
        .spacing(6)
        .align_y(Alignment::Center);

        let row_widget = mouse_area(
            container(cells)
                .padding([PLAYLIST_ROW_VPAD, PLAYLIST_ROW_HPAD])
                .height(Length::Fixed(PLAYLIST_ROW_H))
                .width(Length::Fill),
        )
        .on_double_click(Message::PlayEntry(i));

        col = col.push(row_widget);
    }

    scrollable(col).height(Length::Fill)
}
