//! Case-insensitive literal matching for arbor.
//!
//! A search term is normalized once into a [`Needle`], which is then used for two things:
//!
//! - **Filtering**: [`Needle::is_match`] decides whether a node's text contains the term.
//! - **Highlighting**: [`locate_matches`] splits text into alternating plain and matched
//!   [`Span`]s for display.
//!
//! Both go through the same scan, so a node kept by the filter always shows at least one
//! highlighted span, and vice versa.
//!
//! # Example
//!
//! ```
//! use arbor_match::{SpanKind, locate_matches};
//!
//! let spans: Vec<_> = locate_matches("CPU scheduler", "sched").collect();
//! assert_eq!(spans.len(), 3);
//! assert_eq!(spans[1].text, "sched");
//! assert_eq!(spans[1].kind, SpanKind::Matched);
//! ```

#![warn(missing_docs)]

mod needle;
mod spans;

pub use needle::{Needle, normalize_term};
pub use spans::{Line, Lines, Span, SpanKind, Spans, locate_matches, locate_matches_by_line};
