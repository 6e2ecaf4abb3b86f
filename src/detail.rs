//! Detail-view addressing.
//!
//! The detail view (modal) is addressed solely by record id. The id travels in
//! the page URL as the `modal` query parameter, so an open detail view can be
//! shared, bookmarked and restored:
//!
//! ```text
//! /gallery?modal=7            → detail view of record "7"
//! /gallery?sort=new&modal=7   → other parameters are left alone
//! /gallery                    → closed
//! ```
//!
//! An id that is not in the catalog is a normal "not found" outcome:
//! [`DetailState::current`] returns `None` and the view simply stays closed.

use crate::catalog::Catalog;
use crate::types::ImageRecord;
use url::form_urlencoded;

/// Query parameter carrying the open record id.
pub const MODAL_PARAM: &str = "modal";

/// Which record, if any, the detail view shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailState {
    open_id: Option<String>,
}

impl DetailState {
    pub fn open(&mut self, id: impl Into<String>) {
        self.open_id = Some(id.into());
    }

    pub fn close(&mut self) {
        self.open_id = None;
    }

    pub fn open_id(&self) -> Option<&str> {
        self.open_id.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.open_id.is_some()
    }

    /// The open record, or `None` when closed or the id is unknown.
    pub fn current<'a>(&self, catalog: &'a Catalog) -> Option<&'a ImageRecord> {
        self.open_id().and_then(|id| catalog.find(id))
    }

    /// Restore state from a URL query string (leading `?` optional).
    ///
    /// The first `modal` parameter wins; an empty value means closed.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let open_id = form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == MODAL_PARAM)
            .map(|(_, value)| value.into_owned())
            .filter(|id| !id.is_empty());
        Self { open_id }
    }

    /// Encode as a query string: `modal=<id>` when open, empty when closed.
    pub fn to_query(&self) -> String {
        self.merge_into_query("")
    }

    /// Rewrite `existing` so its `modal` parameter reflects this state,
    /// preserving every other parameter in order.
    pub fn merge_into_query(&self, existing: &str) -> String {
        let existing = existing.strip_prefix('?').unwrap_or(existing);
        let mut out = form_urlencoded::Serializer::new(String::new());
        for (key, value) in form_urlencoded::parse(existing.as_bytes()) {
            if key != MODAL_PARAM {
                out.append_pair(&key, &value);
            }
        }
        if let Some(id) = &self.open_id {
            out.append_pair(MODAL_PARAM, id);
        }
        out.finish()
    }

    /// Id of the record after the open one in `view`, wrapping around.
    ///
    /// `None` when closed or when the open record is not part of `view`.
    pub fn next_in<'a>(&self, view: &[&'a ImageRecord]) -> Option<&'a str> {
        let pos = self.position_in(view)?;
        Some(view[(pos + 1) % view.len()].id.as_str())
    }

    /// Id of the record before the open one in `view`, wrapping around.
    pub fn previous_in<'a>(&self, view: &[&'a ImageRecord]) -> Option<&'a str> {
        let pos = self.position_in(view)?;
        Some(view[(pos + view.len() - 1) % view.len()].id.as_str())
    }

    fn position_in(&self, view: &[&ImageRecord]) -> Option<usize> {
        let id = self.open_id()?;
        view.iter().position(|r| r.id == id)
    }
}
