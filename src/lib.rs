//! # Trail Gallery
//!
//! Search, category filtering and sorting for a static photo gallery.
//!
//! The catalog is a fixed, ordered list of image records. Everything the
//! gallery shows is a *view* of that list: a new sequence of borrowed records
//! derived from the catalog and the user's query state. The catalog is never
//! reordered or edited.
//!
//! # Architecture: Two Facets, One View
//!
//! ```text
//! catalog ─┬─ search (query)                ─┐
//!          │                                 ├─ gallery::compose ─▶ GalleryView
//!          └─ filter_and_sort (filter, sort) ─┘
//! ```
//!
//! Search and filter/sort run independently against the whole catalog and are
//! intersected by id afterwards. Neither narrows the other's candidates, so
//! toggling one facet never changes what the other one matched.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | `ImageRecord` and `Author`, with zero-defaulted counters |
//! | [`dates`] | Calendar-date parsing for the `Newest` ordering |
//! | [`naming`] | Tag ↔ display-category conversion |
//! | [`catalog`] | Immutable catalog: JSON loading, id validation, lookup |
//! | [`search`] | Free-text search and popular tags |
//! | [`filter`] | Category filter, sort keys, category menu |
//! | [`gallery`] | Query state and view composition |
//! | [`detail`] | Detail-view addressing by id (`?modal=<id>`) |
//! | [`config`] | `config.toml` loading, merging and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Views Borrow, Never Copy
//!
//! Views are `Vec<&ImageRecord>` tied to the catalog's lifetime. Filtering a
//! thousand records allocates a thousand pointers, not a thousand records, and
//! the borrow checker guarantees no view outlives or mutates its catalog.
//!
//! ## Pure Recomputation
//!
//! [`gallery::compose`] is a pure function of `(records, QueryState)`. The
//! [`gallery::Gallery`] session owns the state and is the only place it
//! changes; every call to `view()` recomputes from scratch, so the view always
//! reflects the latest state.
//!
//! ## Invalid Dates Sort Last
//!
//! A date that does not parse never fails a query. Under `Newest` such records
//! go after every dated record, keeping their relative catalog order.

pub mod catalog;
pub mod config;
pub mod dates;
pub mod detail;
pub mod filter;
pub mod gallery;
pub mod naming;
pub mod output;
pub mod search;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
