//! # mdhtml
//!
//! A small library (plus CLI) that recursively converts a directory tree of
//! Markdown files into HTML files, mirroring the directory structure and
//! wrapping each page in a fixed shell with a stylesheet link.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use mdhtml::{GithubMarkdown, Walker};
//!
//! let walker = Walker::new(GithubMarkdown::new());
//! let stats = walker
//!     .walk(Path::new("./docs"), Path::new("./bin/public"))
//!     .unwrap();
//! println!("converted {} file(s)", stats.files_converted);
//! ```
//!
//! Markdown parsing is delegated to `pulldown-cmark` with GitHub-flavored
//! extensions enabled; this crate's own work is traversal, path mirroring,
//! and page assembly. Alternative engines can be plugged in through the
//! [`Render`] trait.

pub mod convert;
pub mod error;
pub mod fsutil;
pub mod html;
pub mod path;
pub mod render;
pub mod walk;

pub use convert::convert_file;
pub use error::{Error, Result};
pub use fsutil::ensure_directory;
pub use html::HtmlBuffer;
pub use render::{GithubMarkdown, Render};
pub use walk::{WalkStats, Walker};
