//! Terminal styling for arbor.
//!
//! This crate turns the match spans computed by `arbor-match` into styled terminal text,
//! draws tree guide glyphs, and syntax-highlights TOML configuration for display.

#![warn(missing_docs)]

mod guides;
mod theme;
mod toml;

pub use guides::TreeGuides;
pub use theme::Theme;
pub use toml::TomlHighlighter;

/// Raw SGR escape sequences.
pub mod ansi {
    /// Bold.
    pub const BOLD: &str = "\x1b[1m";
    /// Dim.
    pub const DIM: &str = "\x1b[2m";
    /// Reverse video.
    pub const REVERSE: &str = "\x1b[7m";
    /// Yellow foreground.
    pub const YELLOW: &str = "\x1b[33m";
    /// Blue foreground.
    pub const BLUE: &str = "\x1b[34m";
    /// Cyan foreground.
    pub const CYAN: &str = "\x1b[36m";
    /// Clears all attributes.
    pub const RESET: &str = "\x1b[0m";
}

/// Prefixes each line of `content` with four spaces.
pub fn indent_content(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for (i, line) in content.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str("    ");
        out.push_str(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indents_every_line() {
        assert_eq!(indent_content("a\nb"), "    a\n    b");
        assert_eq!(indent_content(""), "");
    }
}
