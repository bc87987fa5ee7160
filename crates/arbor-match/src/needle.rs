//! Normalized search terms and the shared containment scan.

use std::ops::Range;

/// Trims surrounding whitespace from a raw search term.
///
/// A term that normalizes to the empty string means search is inactive.
pub fn normalize_term(term: &str) -> &str {
    term.trim()
}

/// A normalized, case-folded search term.
///
/// Matching is literal: characters such as `*`, `.` or `(` carry no special meaning.
/// Case folding is per character via [`char::to_lowercase`], so it is independent of
/// locale but does not implement full Unicode case folding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Needle {
    /// The trimmed term as the user typed it.
    term: String,
    /// Lowercased characters of `term`.
    folded: Vec<char>,
}

impl Needle {
    /// Builds a needle from a raw search term.
    ///
    /// Returns `None` when the term is empty after trimming.
    pub fn new(term: &str) -> Option<Self> {
        let term = normalize_term(term);
        if term.is_empty() {
            return None;
        }
        Some(Self {
            term: term.to_string(),
            folded: term.chars().flat_map(char::to_lowercase).collect(),
        })
    }

    /// Returns the trimmed term.
    pub fn as_str(&self) -> &str {
        &self.term
    }

    /// Returns true if `text` contains the term, ignoring case.
    pub fn is_match(&self, text: &str) -> bool {
        self.find_in(text, 0).is_some()
    }

    /// Returns true if any of the given texts contains the term.
    pub fn matches_any<'a>(&self, texts: impl IntoIterator<Item = &'a str>) -> bool {
        texts.into_iter().any(|text| self.is_match(text))
    }

    /// Finds the leftmost occurrence of the term in `text` at or after byte offset `from`.
    ///
    /// `from` must lie on a char boundary. The returned range always starts and ends on
    /// char boundaries of `text`.
    pub fn find_in(&self, text: &str, from: usize) -> Option<Range<usize>> {
        let rest = text.get(from..)?;
        rest.char_indices().find_map(|(offset, _)| {
            let start = from + offset;
            self.match_len_at(&text[start..]).map(|len| start..start + len)
        })
    }

    /// Returns the byte length of the match anchored at the start of `text`, if any.
    ///
    /// A match must end on a character boundary of `text`: a needle that runs out in the
    /// middle of a multi-character lowercase expansion does not match.
    fn match_len_at(&self, text: &str) -> Option<usize> {
        let mut matched = 0;
        for (offset, ch) in text.char_indices() {
            for folded in ch.to_lowercase() {
                if self.folded.get(matched) != Some(&folded) {
                    return None;
                }
                matched += 1;
            }
            if matched == self.folded.len() {
                return Some(offset + ch.len_utf8());
            }
        }
        None
    }
}
