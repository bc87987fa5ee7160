//! Splitting text into plain and matched spans.

use std::{borrow::Cow, iter::FusedIterator, ops::Range, str::Split};

use crate::Needle;

/// Whether a span is part of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Text outside any match.
    Plain,
    /// Text covered by an occurrence of the search term.
    Matched,
}

/// A contiguous run of text tagged by the highlighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    /// The covered text, borrowed from the input.
    pub text: &'a str,
    /// Whether the text is a match.
    pub kind: SpanKind,
}

impl<'a> Span<'a> {
    /// Creates a plain span.
    pub fn plain(text: &'a str) -> Self {
        Self {
            text,
            kind: SpanKind::Plain,
        }
    }

    /// Creates a matched span.
    pub fn matched(text: &'a str) -> Self {
        Self {
            text,
            kind: SpanKind::Matched,
        }
    }

    /// Returns true for matched spans.
    pub fn is_matched(&self) -> bool {
        self.kind == SpanKind::Matched
    }
}

/// Lazy iterator over the spans of a single text.
///
/// Concatenating the text of every yielded span reproduces the input exactly. With an
/// inactive search the whole input comes back as one plain span; with an active search,
/// plain and matched spans alternate and no span is empty.
#[derive(Debug, Clone)]
pub struct Spans<'a> {
    /// The text being split.
    text: &'a str,
    /// The search term, or `None` when search is inactive.
    needle: Option<Cow<'a, Needle>>,
    /// Byte offset of the first unconsumed character.
    pos: usize,
    /// A match located while emitting the plain text before it.
    pending: Option<Range<usize>>,
    /// Set once the inactive-search span has been emitted.
    done: bool,
}

impl<'a> Spans<'a> {
    /// Splits `text` using an already-normalized needle.
    pub fn new(text: &'a str, needle: Option<&'a Needle>) -> Self {
        Self::from_cow(text, needle.map(Cow::Borrowed))
    }

    /// Shared constructor for borrowed and owned needles.
    fn from_cow(text: &'a str, needle: Option<Cow<'a, Needle>>) -> Self {
        Self {
            text,
            needle,
            pos: 0,
            pending: None,
            done: false,
        }
    }

    /// Returns the full text being split.
    pub fn source(&self) -> &'a str {
        self.text
    }

    /// Returns true if at least one span of the text is a match.
    pub fn has_match(&self) -> bool {
        self.needle
            .as_deref()
            .is_some_and(|needle| needle.is_match(self.text))
    }
}

impl<'a> Iterator for Spans<'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.text;
        let Some(needle) = self.needle.as_deref() else {
            if self.done {
                return None;
            }
            self.done = true;
            return Some(Span::plain(text));
        };

        if let Some(range) = self.pending.take() {
            self.pos = range.end;
            return Some(Span::matched(&text[range]));
        }

        if self.pos >= text.len() {
            return None;
        }

        let start = self.pos;
        match needle.find_in(text, start) {
            Some(range) if range.start == start => {
                self.pos = range.end;
                Some(Span::matched(&text[range]))
            }
            Some(range) => {
                self.pos = range.start;
                let plain = &text[start..range.start];
                self.pending = Some(range);
                Some(Span::plain(plain))
            }
            None => {
                self.pos = text.len();
                Some(Span::plain(&text[start..]))
            }
        }
    }
}

impl FusedIterator for Spans<'_> {}

/// The spans of one line in multi-line mode.
pub type Line<'a> = Spans<'a>;

/// Lazy iterator over the lines of a text, each split into spans.
///
/// Lines are separated by `'\n'`, which is not part of any line; joining the lines'
/// [`Spans::source`] with `'\n'` reproduces the input. Matches never cross a line break.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    /// Remaining lines.
    lines: Split<'a, char>,
    /// The search term shared by every line.
    needle: Option<Cow<'a, Needle>>,
}

impl<'a> Lines<'a> {
    /// Splits `text` into lines using an already-normalized needle.
    pub fn new(text: &'a str, needle: Option<&'a Needle>) -> Self {
        Self {
            lines: text.split('\n'),
            needle: needle.map(Cow::Borrowed),
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        Some(Spans::from_cow(line, self.needle.clone()))
    }
}

impl FusedIterator for Lines<'_> {}

/// Splits `text` into plain and matched spans for the raw search `term`.
///
/// The term is trimmed first; a blank term yields one plain span covering all of `text`.
pub fn locate_matches<'a>(text: &'a str, term: &str) -> Spans<'a> {
    Spans::from_cow(text, Needle::new(term).map(Cow::Owned))
}

/// Splits `text` into lines, then each line into spans for the raw search `term`.
pub fn locate_matches_by_line<'a>(text: &'a str, term: &str) -> Lines<'a> {
    Lines {
        lines: text.split('\n'),
        needle: Needle::new(term).map(Cow::Owned),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    /// Collects spans as `(text, matched)` pairs.
    fn pairs(spans: Spans<'_>) -> Vec<(&str, bool)> {
        spans.map(|s| (s.text, s.is_matched())).collect()
    }

    #[test]
    fn scheduler_scenario() {
        assert_eq!(
            pairs(locate_matches("CPU scheduler", "sched")),
            vec![("CPU ", false), ("sched", true), ("uler", false)]
        );
    }

    #[test]
    fn blank_term_yields_single_plain_span() {
        assert_eq!(
            pairs(locate_matches("CPU scheduler", "  ")),
            vec![("CPU scheduler", false)]
        );
        assert_eq!(pairs(locate_matches("", "")), vec![("", false)]);
    }

    #[test]
    fn no_match_yields_whole_text_plain() {
        assert_eq!(
            pairs(locate_matches("memory", "sched")),
            vec![("memory", false)]
        );
    }

    #[test]
    fn active_term_on_empty_text_yields_nothing() {
        assert_eq!(locate_matches("", "x").count(), 0);
    }

    #[test]
    fn matches_at_edges_and_adjacent() {
        assert_eq!(
            pairs(locate_matches("abab", "ab")),
            vec![("ab", true), ("ab", true)]
        );
        assert_eq!(
            pairs(locate_matches("xab", "AB")),
            vec![("x", false), ("ab", true)]
        );
    }

    #[test]
    fn matches_do_not_overlap() {
        assert_eq!(
            pairs(locate_matches("aaa", "aa")),
            vec![("aa", true), ("a", false)]
        );
    }

    #[test]
    fn matched_spans_keep_original_case() {
        assert_eq!(
            pairs(locate_matches("Linux KERNEL", "kernel")),
            vec![("Linux ", false), ("KERNEL", true)]
        );
    }

    #[test]
    fn has_match_agrees_with_spans() {
        let spans = locate_matches("CPU scheduler", "SCHED");
        assert!(spans.has_match());
        assert!(spans.clone().any(|s| s.is_matched()));

        let spans = locate_matches("CPU scheduler", "mm");
        assert!(!spans.has_match());
        assert!(!spans.clone().any(|s| s.is_matched()));
    }

    #[test]
    fn lines_split_on_newline() {
        let lines: Vec<Vec<(&str, bool)>> =
            locate_matches_by_line("first line\nsecond\n", "").map(pairs).collect();
        assert_eq!(
            lines,
            vec![
                vec![("first line", false)],
                vec![("second", false)],
                vec![("", false)],
            ]
        );
    }

    #[test]
    fn matches_never_span_lines() {
        let lines: Vec<Vec<(&str, bool)>> =
            locate_matches_by_line("ab\ncd", "b\nc").map(pairs).collect();
        assert_eq!(lines, vec![vec![("ab", false)], vec![("cd", false)]]);

        let lines: Vec<Vec<(&str, bool)>> =
            locate_matches_by_line("CPU\nscheduler", "sched").map(pairs).collect();
        assert_eq!(
            lines,
            vec![vec![("CPU", false)], vec![("sched", true), ("uler", false)]]
        );
    }

    #[test]
    fn borrowed_needle_spans() {
        let needle = Needle::new("core").unwrap();
        let spans: Vec<_> = Spans::new("kernel core", Some(&needle)).collect();
        assert_eq!(spans, vec![Span::plain("kernel "), Span::matched("core")]);
    }

    #[test]
    fn borrowed_needle_lines() {
        let needle = Needle::new("core").unwrap();
        let lines: Vec<Vec<_>> = Lines::new("core\nidle", Some(&needle))
            .map(Iterator::collect)
            .collect();
        assert_eq!(
            lines,
            vec![vec![Span::matched("core")], vec![Span::plain("idle")]]
        );
    }

    proptest! {
        #[test]
        fn spans_reconstruct_text(text in "\\PC{0,40}", term in "\\PC{0,4}") {
            let joined: String = locate_matches(&text, &term).map(|s| s.text).collect();
            prop_assert_eq!(joined, text);
        }

        #[test]
        fn active_spans_are_never_empty(text in "[a-cA-C ]{0,30}", term in "[a-cA-C]{1,3}") {
            prop_assert!(locate_matches(&text, &term).all(|s| !s.text.is_empty()));
        }

        #[test]
        fn lines_reconstruct_text(text in "[a-c\\n]{0,30}", term in "[a-c]{0,2}") {
            let lines: Vec<String> = locate_matches_by_line(&text, &term)
                .map(|line| line.map(|s| s.text).collect())
                .collect();
            prop_assert_eq!(lines.join("\n"), text);
        }

        #[test]
        fn match_presence_agrees_with_needle(text in "[a-dA-D ]{0,30}", term in "[a-dA-D]{1,3}") {
            let needle = Needle::new(&term).unwrap();
            let any_matched = locate_matches(&text, &term).any(|s| s.is_matched());
            prop_assert_eq!(any_matched, needle.is_match(&text));
        }
    }
}
