//! TOML syntax highlighting for config previews.

use syntect::{
    easy::HighlightLines,
    highlighting::Style,
    parsing::{SyntaxReference, SyntaxSet},
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines,
    theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra},
};

use crate::ansi;

/// Colors TOML source with 24-bit terminal escapes.
pub struct TomlHighlighter {
    /// Grammars, including TOML.
    syntaxes: SyntaxSet,
    /// Embedded color themes.
    themes: EmbeddedLazyThemeSet,
}

impl Default for TomlHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl TomlHighlighter {
    /// Loads the embedded grammars and themes.
    pub fn new() -> Self {
        Self {
            syntaxes: extra_newlines(),
            themes: extra(),
        }
    }

    /// The TOML grammar, or plain text if the bundle lacks one.
    fn grammar(&self) -> &SyntaxReference {
        self.syntaxes
            .find_syntax_by_extension("toml")
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text())
    }

    /// Highlights `source`. Lines the grammar rejects are emitted unstyled.
    pub fn highlight(&self, source: &str) -> String {
        let theme = self.themes.get(EmbeddedThemeName::Dracula);
        let mut lines = HighlightLines::new(self.grammar(), theme);

        let mut out = String::with_capacity(source.len() * 2);
        for line in LinesWithEndings::from(source) {
            let styled: Vec<(Style, &str)> = lines
                .highlight_line(line, &self.syntaxes)
                .unwrap_or_else(|_| vec![(Style::default(), line)]);
            out.push_str(&as_24_bit_terminal_escaped(&styled, false));
        }
        out.push_str(ansi::RESET);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_config_sections() {
        let out = TomlHighlighter::new().highlight("[display]\nroot_label = \"linux\"\n");
        assert!(out.contains("\x1b[38;2;"));
        assert!(out.contains("root_label"));
        assert!(out.ends_with(ansi::RESET));
    }

    #[test]
    fn bundle_has_toml_grammar() {
        let hl = TomlHighlighter::new();
        assert_ne!(hl.grammar().name, "Plain Text");
    }
}
