//! Markdown rendering seam.
//!
//! [`Render`] keeps the walker and converter engine-agnostic; the production
//! implementation is [`GithubMarkdown`], which parses with `pulldown-cmark`
//! and streams the HTML fragment into an [`HtmlBuffer`] through its
//! `io::Write` impl.

use pulldown_cmark::{Options, Parser, html};

use crate::error::{Error, Result};
use crate::html::HtmlBuffer;

/// A Markdown-to-HTML renderer that appends its output to an [`HtmlBuffer`].
pub trait Render {
    /// Render `source` and append the resulting HTML fragment to `out`.
    ///
    /// On error the caller must discard whatever was partially appended.
    fn render(&self, source: &str, out: &mut HtmlBuffer) -> Result<()>;
}

/// GitHub-flavored Markdown renderer.
///
/// Enables the table, strikethrough, and task-list extensions on top of
/// CommonMark.
#[derive(Debug, Clone)]
pub struct GithubMarkdown {
    options: Options,
}

impl GithubMarkdown {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        Self { options }
    }
}

impl Default for GithubMarkdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for GithubMarkdown {
    fn render(&self, source: &str, out: &mut HtmlBuffer) -> Result<()> {
        let parser = Parser::new_ext(source, self.options);
        html::write_html_io(&mut *out, parser).map_err(|e| Error::Render(e.to_string()))
    }
}
