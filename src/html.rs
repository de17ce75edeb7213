//! HTML page assembly.
//!
//! [`HtmlBuffer`] accumulates rendered HTML chunks with doubling growth;
//! [`wrap_page`] wraps the finished fragment in the fixed page shell
//! (doctype, charset meta, title, stylesheet link, `<body>`).

use std::io;

/// Title placed in every generated page's `<head>`.
const PAGE_TITLE: &str = "Converted Markdown";

/// Stylesheet filename expected at the output root.
const STYLESHEET_NAME: &str = "markdown.css";

const FOOTER: &str = "\n</body>\n</html>";

/// Growable byte buffer for rendered HTML.
///
/// Capacity doubles whenever an append would reach it, keeping the total
/// append cost amortized linear over a whole document. One buffer lives for
/// exactly one file conversion.
#[derive(Debug, Default)]
pub struct HtmlBuffer {
    data: Vec<u8>,
}

impl HtmlBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer with an initial capacity hint.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Append a chunk, doubling the capacity until it fits.
    pub fn append(&mut self, chunk: &[u8]) {
        let needed = self.data.len() + chunk.len();
        if needed >= self.data.capacity() {
            let mut cap = self.data.capacity().max(1);
            while cap <= needed {
                cap *= 2;
            }
            self.data.reserve(cap - self.data.len());
        }
        self.data.extend_from_slice(chunk);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl io::Write for HtmlBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Relative href from an output file `depth` levels below the output root to
/// the stylesheet at the root.
///
/// The link is recomputed per file so pages in nested subdirectories still
/// resolve `markdown.css` at the output root.
pub fn stylesheet_href(depth: usize) -> String {
    if depth == 0 {
        format!("./{STYLESHEET_NAME}")
    } else {
        format!("{}{STYLESHEET_NAME}", "../".repeat(depth))
    }
}

/// Wrap a rendered HTML fragment in the fixed page shell.
pub fn wrap_page(fragment: &[u8], depth: usize) -> Vec<u8> {
    let header = format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n\
         <title>{PAGE_TITLE}</title>\n\
         <link rel=\"stylesheet\" href=\"{}\" type=\"text/css\">\n\
         </head>\n<body>\n",
        stylesheet_href(depth)
    );

    let mut page = Vec::with_capacity(header.len() + fragment.len() + FOOTER.len());
    page.extend_from_slice(header.as_bytes());
    page.extend_from_slice(fragment);
    page.extend_from_slice(FOOTER.as_bytes());
    page
}
