//! View constants (layout/sizing).

pub(crate) const PADDING: f32 = 12.0;
pub(crate) const SPACING: f32 = 10.0;

pub(crate) const TRANSPORT_BTN_W: f32 = 72.0;
pub(crate) const INFO_LABEL_W: f32 = 160.0;
pub(crate) const VOLUME_W: f32 = 180.0;

pub(crate) const ROW_TEXT: f32 = 14.0;
pub(crate) const STATUS_TEXT: f32 = 12.0;

pub(crate) const PLAYLIST_ROW_H: f32 = 24.0;
pub(crate) const PLAYLIST_ROW_HPAD: f32 = 8.0;
pub(crate) const PLAYLIST_ROW_VPAD: f32 = 2.0;
