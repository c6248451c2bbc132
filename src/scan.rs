use std::path::PathBuf;

use log::warn;

use crate::Result;

/// Expand a glob and return the matched paths in sorted order.
///
/// An invalid pattern fails the pass; an unreadable directory entry is
/// logged and skipped so the remaining matches are still processed.
pub fn matched_paths(pattern: &str) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in glob::glob(pattern)? {
        match entry {
            Ok(path) => paths.push(path),
            Err(err) => warn!("skipping unreadable entry: {}", err),
        }
    }
    paths.sort();
    Ok(paths)
}
