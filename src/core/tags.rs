//! FLAC tag reading.
//!
//! We use the `metaflac` crate to read the Vorbis comment block.
//! Only artist and title are surfaced; everything else stays on disk.

use std::path::Path;

use metaflac::Tag;

use crate::error::Result;

/// Artist/title pair read from a FLAC file.
///
/// Missing tags are empty strings, never `None`: the UI only ever joins them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackInfo {
    pub artist: String,
    pub title: String,
}

impl TrackInfo {
    /// True when neither tag carried any text.
    pub fn is_blank(&self) -> bool {
        self.artist.is_empty() && self.title.is_empty()
    }
}

/// Read artist/title from a FLAC file.
///
/// Vorbis comment keys are case-insensitive; for multi-valued fields the first
/// value wins. Unreadable or non-FLAC files are an error.
pub fn read_track_info(path: &Path) -> Result<TrackInfo> {
    let tag = Tag::read_from_path(path)?;

    Ok(TrackInfo {
        artist: first_value(&tag, "ARTIST"),
        title: first_value(&tag, "TITLE"),
    })
}

fn first_value(tag: &Tag, key: &str) -> String {
    tag.get_vorbis(key)
        .and_then(|mut values| values.next())
        .map(str::to_owned)
        .unwrap_or_default()
}

/// Test helper: write a tag-only FLAC stub carrying the given Vorbis comments.
#[cfg(test)]
pub(crate) fn write_fixture(path: &Path, comments: &[(&str, &[&str])]) {
    let mut tag = Tag::new();
    tag.vorbis_comments_mut();
    for (key, values) in comments {
        tag.set_vorbis(*key, values.to_vec());
    }
    let mut file = std::fs::File::create(path).unwrap();
    tag.write_to(&mut file).unwrap();
}
