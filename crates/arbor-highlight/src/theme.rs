//! Switchable styling for dataset output.
//!
//! Every method returns its input unchanged when color is off, so callers never branch on
//! the color setting themselves.

use arbor_match::{Span, SpanKind};

use crate::{TomlHighlighter, ansi};

/// Styles dataset text, or leaves it plain when color is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Whether ANSI codes are emitted.
    color: bool,
}

impl Theme {
    /// Creates a theme.
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    /// A theme that never emits ANSI codes.
    pub const fn plain() -> Self {
        Self::new(false)
    }

    /// Returns true if ANSI codes are emitted.
    pub const fn is_color(&self) -> bool {
        self.color
    }

    /// Wraps `text` in the given codes when color is on.
    fn paint(&self, codes: &[&str], text: &str) -> String {
        if !self.color || text.is_empty() {
            return text.to_string();
        }
        let mut out = codes.concat();
        out.push_str(text);
        out.push_str(ansi::RESET);
        out
    }

    /// Bold cyan.
    pub fn header(&self, text: &str) -> String {
        self.paint(&[ansi::BOLD, ansi::CYAN], text)
    }

    /// Bold.
    pub fn subheader(&self, text: &str) -> String {
        self.paint(&[ansi::BOLD], text)
    }

    /// Dimmed.
    pub fn dim(&self, text: &str) -> String {
        self.paint(&[ansi::DIM], text)
    }

    /// Yellow.
    pub fn warning(&self, text: &str) -> String {
        self.paint(&[ansi::YELLOW], text)
    }

    /// Bold blue, for directory names.
    pub fn directory(&self, text: &str) -> String {
        self.paint(&[ansi::BOLD, ansi::BLUE], text)
    }

    /// Reverse video, for the selected row.
    pub fn selected(&self, text: &str) -> String {
        self.paint(&[ansi::REVERSE], text)
    }

    /// Bold yellow, for matched text.
    pub fn matched(&self, text: &str) -> String {
        self.paint(&[ansi::BOLD, ansi::YELLOW], text)
    }

    /// Syntax-highlights TOML source.
    pub fn toml(&self, source: &str) -> String {
        if self.color {
            TomlHighlighter::new().highlight(source)
        } else {
            source.to_string()
        }
    }

    /// Renders spans, styling the matched ones. Plain spans pass through `plain`.
    pub fn spans<'a>(
        &self,
        spans: impl IntoIterator<Item = Span<'a>>,
        plain: impl Fn(&str) -> String,
    ) -> String {
        spans
            .into_iter()
            .map(|span| match span.kind {
                SpanKind::Matched => self.matched(span.text),
                SpanKind::Plain => plain(span.text),
            })
            .collect()
    }
}
