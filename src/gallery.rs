//! Query composition: search + category filter + sort into one gallery view.
//!
//! Search and filter/sort are orthogonal facets. Both run against the full
//! catalog and their results are combined afterwards:
//!
//! ```text
//!                ┌── search(catalog, query) ──────────────┐
//! QueryState ────┤                                        ├── combine ──▶ GalleryView
//!                └── filter_and_sort(catalog, filter, sort)┘
//! ```
//!
//! | search active | filter/sort active | result |
//! |---------------|--------------------|--------|
//! | yes | yes | filter/sort results whose id is in the search results, in filter/sort order |
//! | yes | no  | search results |
//! | no  | yes | filter/sort results |
//! | no  | no  | catalog order |
//!
//! A view is a pure function of `(catalog, QueryState)`: recomputing it with
//! the same inputs always yields the same view. [`Gallery`] owns the state and
//! is its only mutation surface.

use crate::catalog::Catalog;
use crate::filter::{self, CategoryFilter, SortKey};
use crate::search::{self, DEFAULT_POPULAR_TAGS};
use crate::types::ImageRecord;
use serde::Serialize;
use std::collections::HashSet;

/// The user-controlled inputs of a gallery view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct QueryState {
    pub search_query: String,
    pub active_filter: CategoryFilter,
    pub active_sort: SortKey,
}

impl QueryState {
    /// True when nothing has been searched, filtered or sorted.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Everything the presentation layer renders for one state of the gallery.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryView<'a> {
    pub available_categories: Vec<String>,
    pub popular_tags: Vec<String>,
    pub filtered_images: Vec<&'a ImageRecord>,
    pub results_count: usize,
    pub total_count: usize,
    pub has_search: bool,
    pub has_active_filter: bool,
    pub has_any_filter: bool,
}

/// Compose the view for `state` over `records`.
pub fn compose<'a>(records: &'a [ImageRecord], state: &QueryState, tag_limit: usize) -> GalleryView<'a> {
    let searched = search::search_with_limit(records, &state.search_query, tag_limit);
    let filtered = filter::filter_and_sort(records, &state.active_filter, &state.active_sort);

    let has_search = searched.has_search;
    let has_active_filter = filtered.has_active_filter;

    let filtered_images = match (has_search, has_active_filter) {
        (true, true) => {
            let search_ids: HashSet<&str> = searched.results.iter().map(|r| r.id.as_str()).collect();
            filtered
                .results
                .into_iter()
                .filter(|r| search_ids.contains(r.id.as_str()))
                .collect()
        }
        (true, false) => searched.results,
        (false, true) => filtered.results,
        (false, false) => records.iter().collect(),
    };

    log::debug!(
        "composed view: query={:?} filter={} sort={} -> {}/{}",
        state.search_query,
        state.active_filter,
        state.active_sort,
        filtered_images.len(),
        records.len()
    );

    GalleryView {
        available_categories: filtered.available_categories,
        popular_tags: searched.popular_tags,
        results_count: filtered_images.len(),
        total_count: searched.total_count,
        filtered_images,
        has_search,
        has_active_filter,
        has_any_filter: has_search || has_active_filter,
    }
}

/// A gallery session: a borrowed catalog plus the query state driving it.
///
/// Created when the gallery is shown and dropped when it is hidden; state
/// never outlives the session.
#[derive(Debug, Clone)]
pub struct Gallery<'a> {
    catalog: &'a Catalog,
    state: QueryState,
    popular_tag_limit: usize,
}

impl<'a> Gallery<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            state: QueryState::default(),
            popular_tag_limit: DEFAULT_POPULAR_TAGS,
        }
    }

    /// Surface at most `limit` popular tags instead of the default.
    #[must_use]
    pub fn with_popular_tag_limit(mut self, limit: usize) -> Self {
        self.popular_tag_limit = limit;
        self
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn search_query(&self) -> &str {
        &self.state.search_query
    }

    pub fn active_filter(&self) -> &CategoryFilter {
        &self.state.active_filter
    }

    pub fn active_sort(&self) -> &SortKey {
        &self.state.active_sort
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.state.search_query = query.into();
    }

    pub fn set_active_filter(&mut self, filter: CategoryFilter) {
        self.state.active_filter = filter;
    }

    pub fn set_active_sort(&mut self, sort: SortKey) {
        self.state.active_sort = sort;
    }

    pub fn clear_search(&mut self) {
        self.state.search_query.clear();
    }

    pub fn clear_filters(&mut self) {
        self.state.active_filter = CategoryFilter::All;
        self.state.active_sort = SortKey::Popular;
    }

    /// Reset search, filter and sort to their defaults.
    pub fn clear_all(&mut self) {
        self.clear_search();
        self.clear_filters();
    }

    /// Derive the view for the current state.
    pub fn view(&self) -> GalleryView<'a> {
        compose(self.catalog.records(), &self.state, self.popular_tag_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    fn gallery_ids<'a>(view: &GalleryView<'a>) -> Vec<&'a str> {
        ids(view.filtered_images.iter().copied())
    }

    // =========================================================================
    // Documented scenarios
    // =========================================================================

    #[test]
    fn search_only_scenario() {
        let catalog = scenario_catalog();
        let mut gallery = Gallery::new(&catalog);
        gallery.set_search_query("sunrise");
        let view = gallery.view();
        assert_eq!(gallery_ids(&view), vec!["1"]);
        assert_eq!(view.results_count, 1);
        assert_eq!(view.total_count, 2);
        assert!(view.has_search);
        assert!(!view.has_active_filter);
        assert!(view.has_any_filter);
    }

    #[test]
    fn newest_sort_scenario() {
        let catalog = scenario_catalog();
        let mut gallery = Gallery::new(&catalog);
        gallery.set_active_sort(SortKey::Newest);
        let view = gallery.view();
        assert_eq!(gallery_ids(&view), vec!["2", "1"]);
        assert!(view.has_active_filter);
    }

    #[test]
    fn disjoint_search_and_filter_scenario() {
        let catalog = scenario_catalog();
        let mut gallery = Gallery::new(&catalog);
        gallery.set_search_query("forest");
        gallery.set_active_filter(CategoryFilter::from_label("Mountains"));
        let view = gallery.view();
        assert!(view.filtered_images.is_empty());
        assert_eq!(view.results_count, 0);
        assert_eq!(view.total_count, 2);
    }

    #[test]
    fn empty_catalog_scenario() {
        let catalog = Catalog::default();
        let mut gallery = Gallery::new(&catalog);
        gallery.set_search_query("peak");
        gallery.set_active_filter(CategoryFilter::from_label("Forest"));
        gallery.set_active_sort(SortKey::MostLiked);
        let view = gallery.view();
        assert!(view.filtered_images.is_empty());
        assert!(view.popular_tags.is_empty());
        assert_eq!(view.available_categories, vec!["All Images"]);
        assert_eq!(view.results_count, 0);
        assert_eq!(view.total_count, 0);
    }

    // =========================================================================
    // Combination rules
    // =========================================================================

    #[test]
    fn neither_active_is_catalog_order() {
        let catalog = trail_catalog();
        let view = Gallery::new(&catalog).view();
        assert_eq!(gallery_ids(&view), vec!["1", "2", "3", "4", "5", "6"]);
        assert!(!view.has_any_filter);
        assert_eq!(view.results_count, 6);
    }

    #[test]
    fn intersection_follows_filter_order() {
        let catalog = trail_catalog();
        let mut gallery = Gallery::new(&catalog);
        gallery.set_search_query("landscape");
        gallery.set_active_sort(SortKey::MostDownloaded);
        let view = gallery.view();
        assert_eq!(gallery_ids(&view), vec!["5", "1", "4"]);
    }

    #[test]
    fn filter_does_not_narrow_search_candidates() {
        let catalog = trail_catalog();
        let mut gallery = Gallery::new(&catalog);
        gallery.set_search_query("water");
        gallery.set_active_filter(CategoryFilter::from_label("Forest"));
        let view = gallery.view();
        assert_eq!(gallery_ids(&view), vec!["6"]);
    }

    #[test]
    fn filter_only_uses_filter_results() {
        let catalog = trail_catalog();
        let mut gallery = Gallery::new(&catalog);
        gallery.set_active_filter(CategoryFilter::from_label("Landscape"));
        gallery.set_active_sort(SortKey::MostLiked);
        assert_eq!(gallery_ids(&gallery.view()), vec!["1", "4", "5"]);
    }

    #[test]
    fn whitespace_query_is_not_a_search() {
        let catalog = trail_catalog();
        let mut gallery = Gallery::new(&catalog);
        gallery.set_search_query("   ");
        let view = gallery.view();
        assert!(!view.has_search);
        assert_eq!(view.results_count, 6);
    }

    // =========================================================================
    // State lifecycle
    // =========================================================================

    #[test]
    fn new_gallery_has_default_state() {
        let catalog = trail_catalog();
        let gallery = Gallery::new(&catalog);
        assert!(gallery.state().is_default());
        assert_eq!(gallery.search_query(), "");
        assert_eq!(gallery.active_filter().label(), "All Images");
        assert_eq!(gallery.active_sort().label(), "Popular");
    }

    #[test]
    fn clear_search_keeps_filters() {
        let catalog = trail_catalog();
        let mut gallery = Gallery::new(&catalog);
        gallery.set_search_query("forest");
        gallery.set_active_sort(SortKey::Newest);
        gallery.clear_search();
        gallery.clear_search();
        assert_eq!(gallery.search_query(), "");
        assert_eq!(gallery.active_sort(), &SortKey::Newest);
    }

    #[test]
    fn clear_filters_keeps_search() {
        let catalog = trail_catalog();
        let mut gallery = Gallery::new(&catalog);
        gallery.set_search_query("forest");
        gallery.set_active_filter(CategoryFilter::from_label("Water"));
        gallery.set_active_sort(SortKey::MostLiked);
        gallery.clear_filters();
        assert_eq!(gallery.active_filter(), &CategoryFilter::All);
        assert_eq!(gallery.active_sort(), &SortKey::Popular);
        assert_eq!(gallery.search_query(), "forest");
    }

    #[test]
    fn clear_all_matches_pristine_view() {
        let catalog = trail_catalog();
        let pristine = Gallery::new(&catalog).view();

        let mut gallery = Gallery::new(&catalog);
        gallery.set_search_query("peak");
        gallery.set_active_filter(CategoryFilter::from_label("Mountains"));
        gallery.set_active_sort(SortKey::Other("Random".into()));
        gallery.clear_all();

        assert!(gallery.state().is_default());
        assert_eq!(gallery.view(), pristine);
    }

    #[test]
    fn view_is_idempotent() {
        let catalog = trail_catalog();
        let mut gallery = Gallery::new(&catalog);
        gallery.set_search_query("a");
        gallery.set_active_sort(SortKey::Newest);
        assert_eq!(gallery.view(), gallery.view());
    }

    #[test]
    fn views_borrow_catalog_records() {
        let catalog = trail_catalog();
        let view = Gallery::new(&catalog).view();
        for (viewed, original) in view.filtered_images.iter().zip(catalog.iter()) {
            assert!(std::ptr::eq(*viewed, original));
        }
    }

    #[test]
    fn popular_tag_limit_applies() {
        let catalog = trail_catalog();
        let view = Gallery::new(&catalog).with_popular_tag_limit(2).view();
        assert_eq!(view.popular_tags, vec!["landscape", "sunrise"]);
    }
}
