//! Small pure helper functions used by the GUI.
//! - no UI widgets or state mutation

use std::path::Path;

use crate::core::tags::read_track_info;

/// Label shown when the first track has no usable artist/title.
pub(crate) const UNKNOWN_TRACK_LABEL: &str = "Track Info";

/// Playlist row text: the file name, or the full path if it has none.
pub(crate) fn entry_label(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// "artist - title" for a freshly queued track.
///
/// Falls back to [`UNKNOWN_TRACK_LABEL`] when both tags are empty or the tags
/// cannot be read at all.
pub(crate) fn track_label(path: &Path) -> String {
    match read_track_info(path) {
        Ok(info) if !info.is_blank() => format!("{} - {}", info.artist, info.title),
        Ok(_) => UNKNOWN_TRACK_LABEL.to_string(),
        Err(e) => {
            log::warn!("could not read tags from {}: {e}", path.display());
            UNKNOWN_TRACK_LABEL.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tags::write_fixture;

    #[test]
    fn label_joins_artist_and_title() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("song.flac");
        write_fixture(&path, &[("ARTIST", &["Low"]), ("TITLE", &["Words"])]);

        assert_eq!(track_label(&path), "Low - Words");
    }

    #[test]
    fn label_keeps_separator_when_only_artist_is_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("song.flac");
        write_fixture(&path, &[("ARTIST", &["Low"])]);

        assert_eq!(track_label(&path), "Low - ");
    }

    #[test]
    fn label_falls_back_for_untagged_or_unreadable_files() {
        let dir = tempfile::tempdir().unwrap();
        let untagged = dir.path().join("untagged.flac");
        write_fixture(&untagged, &[]);
        let broken = dir.path().join("broken.flac");
        std::fs::write(&broken, b"nope").unwrap();

        assert_eq!(track_label(&untagged), UNKNOWN_TRACK_LABEL);
        assert_eq!(track_label(&broken), UNKNOWN_TRACK_LABEL);
    }

    #[test]
    fn entry_label_is_the_file_name() {
        assert_eq!(entry_label(Path::new("/music/a.flac")), "a.flac");
    }
}
