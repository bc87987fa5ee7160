//! Browsing state for arbor.
//!
//! The [`Browser`] controller owns everything that changes while a user explores a
//! dataset: the search term and its memoized filter result, per-node expansion state,
//! the current selection and its breadcrumb. The underlying [`Tree`](arbor_tree::Tree)
//! never changes.
//!
//! Presentation layers read [`Row`]s from [`Browser::rows`] and raise events back
//! through [`Browser::set_search_term`], [`Browser::select_node`],
//! [`Browser::toggle_expand`], [`Browser::activate`] and [`Browser::collapse_all`].

#![warn(missing_docs)]

mod controller;
mod expansion;
mod rows;

pub use controller::Browser;
pub use expansion::ExpansionState;
pub use rows::{Row, visible_rows};
