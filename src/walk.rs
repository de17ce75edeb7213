//! Recursive directory traversal.
//!
//! Walks the input tree depth-first, mirrors subdirectories into the output
//! tree, and converts every regular file whose extension is exactly `.md`.
//! Per-file failures are logged and counted but never stop the walk.

use std::fs;
use std::path::Path;

use log::error;

use crate::convert::convert_file;
use crate::error::{Error, Result};
use crate::fsutil::ensure_directory;
use crate::path::{join_path, replace_extension};
use crate::render::Render;

/// Extension converted by the walker. The match is case-sensitive, so
/// `README.MD` is left alone.
const MARKDOWN_EXT: &str = ".md";

/// Counters accumulated over one walk.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkStats {
    pub files_converted: usize,
    pub errors: usize,
}

impl WalkStats {
    fn absorb(&mut self, other: WalkStats) {
        self.files_converted += other.files_converted;
        self.errors += other.errors;
    }
}

/// Depth-first walker that mirrors a Markdown tree into an HTML tree.
pub struct Walker<R> {
    renderer: R,
    quiet: bool,
}

impl<R: Render> Walker<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            quiet: false,
        }
    }

    /// Suppress per-file and per-directory progress lines.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Convert every `.md` file under `input_dir`, mirroring the directory
    /// structure under `output_dir` (which must already exist).
    ///
    /// Failing to open `input_dir` itself is an error for this call; below
    /// it, every failure is isolated per entry, logged, and counted in
    /// [`WalkStats::errors`] while the walk continues.
    pub fn walk(&self, input_dir: &Path, output_dir: &Path) -> Result<WalkStats> {
        self.walk_dir(input_dir, output_dir, 0)
    }

    fn walk_dir(&self, input_dir: &Path, output_dir: &Path, depth: usize) -> Result<WalkStats> {
        let read = fs::read_dir(input_dir).map_err(|source| Error::OpenDir {
            path: input_dir.to_path_buf(),
            source,
        })?;

        let mut stats = WalkStats::default();
        let mut converted_here = 0usize;

        // Sort by name so output and logs are deterministic across
        // filesystems.
        let mut entries = Vec::new();
        for entry in read {
            match entry {
                Ok(entry) => entries.push(entry),
                Err(source) => {
                    error!("failed to read entry in {}: {source}", input_dir.display());
                    stats.errors += 1;
                }
            }
        }
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                // Non-UTF-8 names cannot be mirrored portably.
                continue;
            };

            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(source) => {
                    error!("failed to stat {}: {source}", entry.path().display());
                    stats.errors += 1;
                    continue;
                }
            };

            if file_type.is_dir() {
                let output_subdir = join_path(output_dir, name);
                if let Err(e) = ensure_directory(&output_subdir) {
                    error!("{e}");
                    stats.errors += 1;
                    continue;
                }
                match self.walk_dir(&entry.path(), &output_subdir, depth + 1) {
                    Ok(sub) => stats.absorb(sub),
                    Err(e) => {
                        error!("{e}");
                        stats.errors += 1;
                    }
                }
            } else if file_type.is_file() && name.ends_with(MARKDOWN_EXT) {
                let input_path = entry.path();
                let output_path = join_path(output_dir, &replace_extension(name, ".html"));
                match convert_file(&self.renderer, &input_path, &output_path, depth) {
                    Ok(()) => {
                        stats.files_converted += 1;
                        converted_here += 1;
                        if !self.quiet {
                            println!(
                                "  \u{2713} {} -> {}",
                                input_path.display(),
                                output_path.display()
                            );
                        }
                    }
                    Err(e) => {
                        error!("{e}");
                        stats.errors += 1;
                    }
                }
            }
            // Symlinks and other entry kinds are silently ignored.
        }

        if converted_here > 0 && !self.quiet {
            println!(
                "  Processed {} file(s) from {}",
                converted_here,
                input_dir.display()
            );
        }

        Ok(stats)
    }
}
