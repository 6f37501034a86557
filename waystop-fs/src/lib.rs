//! Capability-based filesystem helpers shared by the Waystop loader and CLI.
//!
//! Paths are UTF-8 (`camino`) and every access goes through `cap-std` using
//! ambient authority resolved from the path's parent directory.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, File};
use std::io;

/// Open a UTF-8 file path for reading.
///
/// # Errors
/// Propagates the underlying I/O error, including `NotFound`.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<File> {
    File::open_ambient(path, ambient_authority())
}

/// Open the parent directory of `path` and return it with the final
/// component.
///
/// # Errors
/// Fails when `path` has no file name or the parent cannot be opened.
pub fn open_dir_and_file(path: &Utf8Path) -> io::Result<(Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?
        .to_owned();
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Return whether `path` exists and is a regular file.
///
/// # Errors
/// Returns `NotFound` when the path or its parent is missing, and any other
/// I/O error raised while inspecting it.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Return whether `path` exists and is a directory.
///
/// # Errors
/// Same as [`file_is_file`].
pub fn dir_is_dir(path: &Utf8Path) -> io::Result<bool> {
    if path.file_name().is_none() {
        // `.`, `..` and the filesystem root have no final component to stat.
        let target = if path.as_str().is_empty() {
            Utf8Path::new(".")
        } else {
            path
        };
        return Dir::open_ambient_dir(target, ambient_authority()).map(|_| true);
    }
    let (dir, name) = open_dir_and_file(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_dir())
}
