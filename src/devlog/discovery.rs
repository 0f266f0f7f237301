//! Discovery of candidate tracker documents on disk
//!
//! Devlog documents accumulate in a directory, one markdown file per
//! report run; the freshest one is usually the interesting one. This module
//! is the only place the crate touches the file system, and it stays a thin
//! shim: listing, picking the latest, and a one-shot read. Everything else
//! in the crate operates on in-memory strings.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// All markdown files directly inside `dir`, most recently modified first.
///
/// A missing or non-directory `dir` yields an empty list, not an error;
/// having no candidate documents is a normal outcome.
pub fn markdown_files(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };
    let mut files: Vec<(PathBuf, SystemTime)> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "md"))
        .map(|path| {
            let modified = fs::metadata(&path)
                .and_then(|meta| meta.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            (path, modified)
        })
        .collect();
    files.sort_by(|a, b| b.1.cmp(&a.1));
    files.into_iter().map(|(path, _)| path).collect()
}

/// The most recently modified markdown file in `dir`, if any.
pub fn latest_markdown_file(dir: &Path) -> Option<PathBuf> {
    markdown_files(dir).into_iter().next()
}

/// Read a tracker document into memory.
///
/// The caller decides how to surface a failure; the library never reports
/// I/O problems on its own.
pub fn read_document(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}
