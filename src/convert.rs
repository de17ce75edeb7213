//! Single-file conversion: read, render, assemble, write.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::html::{HtmlBuffer, wrap_page};
use crate::render::Render;

/// Convert one Markdown file into a full HTML page at `output`.
///
/// `depth` is the number of directory levels between the output file and the
/// output root; it determines the stylesheet link in the page header.
///
/// The whole source is read up front, rendered into a fresh [`HtmlBuffer`],
/// wrapped in the page shell, and written in one operation. Every buffer is
/// scoped to this call and dropped on all exit paths.
pub fn convert_file<R: Render>(
    renderer: &R,
    input: &Path,
    output: &Path,
    depth: usize,
) -> Result<()> {
    let raw = fs::read(input).map_err(|source| Error::Read {
        path: input.to_path_buf(),
        source,
    })?;
    if raw.is_empty() {
        return Err(Error::EmptyFile(input.to_path_buf()));
    }

    let source = String::from_utf8_lossy(&raw);

    // HTML output usually runs larger than its Markdown source; growth
    // handles any underestimate.
    let mut fragment = HtmlBuffer::with_capacity(raw.len() * 2);
    renderer.render(&source, &mut fragment)?;

    let page = wrap_page(fragment.as_bytes(), depth);
    fs::write(output, &page).map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })
}
