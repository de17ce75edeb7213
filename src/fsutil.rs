//! Filesystem helpers.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Create `path` and any missing parent directories, `mkdir -p` style.
///
/// Idempotent: an already-existing directory is success. Genuine I/O errors
/// (permission denied, a file occupying a path segment, disk full) are
/// propagated as [`Error::CreateDir`].
pub fn ensure_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| Error::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_missing_parents() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("a/b/c");

        ensure_directory(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_idempotent() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("out");

        ensure_directory(&dir).unwrap();
        ensure_directory(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_file_collision_is_error() {
        let root = TempDir::new().unwrap();
        let occupied = root.path().join("taken");
        fs::write(&occupied, b"not a directory").unwrap();

        let err = ensure_directory(&occupied).unwrap_err();
        assert!(matches!(err, Error::CreateDir { .. }));
    }
}
