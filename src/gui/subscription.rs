//! gui/subscription.rs
//! Poll playback events by emitting a periodic TickPlayback message.
//! Also routes the window close button through `update` so the engine is shut down.

use iced::{Subscription, time, window};
use std::time::Duration;

use super::state::{Aplay, Message};

pub(crate) fn subscription(state: &Aplay) -> Subscription<Message> {
    let close = window::close_requests().map(|_| Message::CloseRequested);

    if state.playback_events.is_none() {
        return close;
    }

    Subscription::batch([
        close,
        time::every(Duration::from_millis(state.tick_ms)).map(|_| Message::TickPlayback),
    ])
}
