//! core/playlist.rs
//! Ordered list of queued files plus a "current" cursor.
//!
//! Navigation is sequential: walking off either end clears the cursor, which
//! the GUI treats as "playlist finished, stop playback".

use std::path::{Path, PathBuf};

#[derive(Debug, Default, Clone)]
pub struct Playlist {
    entries: Vec<PathBuf>,
    current: Option<usize>,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry (insertion order is play order). Returns its index.
    pub fn add(&mut self, path: PathBuf) -> usize {
        self.entries.push(path);
        self.entries.len() - 1
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current
            .and_then(|i| self.entries.get(i))
            .map(PathBuf::as_path)
    }

    /// Point the cursor at `index`. Out-of-range indices are ignored.
    pub fn set_current(&mut self, index: usize) -> Option<usize> {
        if index < self.entries.len() {
            self.current = Some(index);
        }
        self.current
    }

    /// Advance one entry. From no selection this starts at the first entry;
    /// past the last entry the cursor is cleared.
    pub fn next(&mut self) -> Option<usize> {
        let next = match self.current {
            None => 0,
            Some(i) => i + 1,
        };
        self.current = (next < self.entries.len()).then_some(next);
        self.current
    }

    /// Step back one entry. From no selection this starts at the last entry;
    /// before the first entry the cursor is cleared.
    pub fn previous(&mut self) -> Option<usize> {
        self.current = match self.current {
            None => self.entries.len().checked_sub(1),
            Some(i) => i.checked_sub(1),
        };
        self.current
    }
}
