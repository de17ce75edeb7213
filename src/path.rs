//! Pure path and filename manipulation.

use std::path::{Path, PathBuf};

/// Replace the extension of `filename` with `new_ext` (including its leading
/// dot).
///
/// The split happens at the last `.` in the name; a name without a dot gets
/// `new_ext` appended instead.
///
/// ```
/// use mdhtml::path::replace_extension;
///
/// assert_eq!(replace_extension("file.md", ".html"), "file.html");
/// assert_eq!(replace_extension("noext", ".html"), "noext.html");
/// ```
pub fn replace_extension(filename: &str, new_ext: &str) -> String {
    let base = match filename.rfind('.') {
        Some(idx) => &filename[..idx],
        None => filename,
    };
    format!("{base}{new_ext}")
}

/// Join a directory and an entry name with exactly one separator.
///
/// Paths are dynamically sized; there is no fixed length limit.
pub fn join_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(name)
}
