//! core/library.rs
//! Turn a user-chosen file or folder into playlist candidates.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Collect the FLAC files a path refers to.
///
/// - A file is returned as-is, whatever its extension.
/// - A directory is listed non-recursively; entries whose name ends in
///   `.flac` (any case) are kept in directory-listing order.
pub fn collect_flacs(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_dir() {
        scan_flacs(path)
    } else {
        Ok(vec![path.to_path_buf()])
    }
}

/// Non-recursive `.flac` listing of one directory. Order is whatever the OS returns.
pub fn scan_flacs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            continue;
        }
        if has_flac_name(&path) {
            out.push(path);
        }
    }

    log::debug!("{}: {} FLAC file(s)", dir.display(), out.len());
    Ok(out)
}

fn has_flac_name(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase().ends_with(".flac"))
        .unwrap_or(false)
}
