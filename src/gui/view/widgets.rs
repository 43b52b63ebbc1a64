//! Small widget builders used by the view.
//!
//! Emits only Messages (no rodio, no decoding).

use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Container, Row, button, container, row, slider, text};
use iced::{Alignment, Background, Length, Theme};

use super::super::state::{Aplay, Message};
use super::constants::{INFO_LABEL_W, ROW_TEXT, TRANSPORT_BTN_W, VOLUME_W};
use crate::core::time::format_time;

pub(crate) fn file_menu(state: &Aplay) -> Row<'_, Message> {
    let idle = !state.loading;

    row![
        button("Open File").on_press_maybe(idle.then_some(Message::OpenFile)),
        button("Open Folder").on_press_maybe(idle.then_some(Message::OpenFolder)),
    ]
    .spacing(8)
}

pub(crate) fn transport_row(state: &Aplay) -> Row<'_, Message> {
    let play_label = if state.is_playing() { "Pause" } else { "Play" };

    let btn = |label: &'static str, msg: Message| {
        button(label)
            .width(Length::Fixed(TRANSPORT_BTN_W))
            .on_press(msg)
    };

    row![
        btn("⏮", Message::Previous),
        btn(play_label, Message::TogglePlayPause),
        btn("Stop", Message::Stop),
        btn("⏭", Message::Next),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
}

/// Right-aligned "artist - title" / duration label.
pub(crate) fn info_label(state: &Aplay) -> Container<'_, Message> {
    container(text(&state.info_label).size(ROW_TEXT))
        .width(Length::Fixed(INFO_LABEL_W))
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Center)
}

pub(crate) fn seek_bar(state: &Aplay) -> Row<'_, Message> {
    let dur = state.duration_ms;
    let pos = state.position_ms.min(dur);

    let seek: iced::Element<'_, Message> = if state.can_seek() {
        slider(0.0..=dur as f32, pos as f32, Message::SeekTo)
            .on_release(Message::SeekCommit)
            .width(Length::Fill)
            .into()
    } else {
        // No length yet: pinned at 0, greyed out. SeekCommit without a preview is a no-op.
        slider(0.0..=1.0, 0.0, |_| Message::SeekCommit)
            .width(Length::Fill)
            .style(inert_slider)
            .into()
    };

    row![
        seek,
        text(format!("{} / {}", format_time(pos), format_time(dur))).size(12),
    ]
    .spacing(10)
    .align_y(Alignment::Center)
}

fn inert_slider(theme: &Theme, _status: slider::Status) -> slider::Style {
    let mut style = slider::default(theme, slider::Status::Active);
    let dim = Background::Color(theme.extended_palette().background.strong.color);

    style.rail.backgrounds = (dim, dim);
    style.handle.background = dim;
    style
}

pub(crate) fn volume_row(state: &Aplay) -> Row<'_, Message> {
    row![
        text("Vol").size(12),
        slider(0..=100u8, state.volume, Message::SetVolume)
            .width(Length::Fixed(VOLUME_W)),
        text(format!("{}", state.volume)).size(12),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
}
