//! Free-text search over the catalog.
//!
//! A query is trimmed and lower-cased, then matched as a case-insensitive
//! substring against each record's title, location, description and tags
//! (any one match is enough). Results keep catalog order.
//!
//! The popular-tags summary is computed from the whole catalog, not from the
//! search results, so it stays stable while the user types.

use crate::types::ImageRecord;
use serde::Serialize;
use std::collections::HashMap;

/// Number of popular tags surfaced under the search bar.
pub const DEFAULT_POPULAR_TAGS: usize = 8;

/// Everything the search bar needs to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome<'a> {
    /// Matching records in catalog order; the full catalog when no search is active.
    pub results: Vec<&'a ImageRecord>,
    pub popular_tags: Vec<String>,
    pub has_search: bool,
    pub results_count: usize,
    pub total_count: usize,
}

/// Trim and lower-case a raw query. An empty result means "no search".
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Whether a record matches an already-normalized, non-empty query.
pub fn matches_query(record: &ImageRecord, normalized: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(normalized);
    contains(record.title.as_str())
        || contains(record.location.as_str())
        || contains(record.description.as_str())
        || record.tags.iter().any(|tag| contains(tag.as_str()))
}

/// Run a search with the default popular-tag count.
pub fn search<'a>(records: &'a [ImageRecord], query: &str) -> SearchOutcome<'a> {
    search_with_limit(records, query, DEFAULT_POPULAR_TAGS)
}

/// Run a search, surfacing at most `tag_limit` popular tags.
pub fn search_with_limit<'a>(
    records: &'a [ImageRecord],
    query: &str,
    tag_limit: usize,
) -> SearchOutcome<'a> {
    let normalized = normalize_query(query);
    let has_search = !normalized.is_empty();

    let results: Vec<&ImageRecord> = if has_search {
        records
            .iter()
            .filter(|r| matches_query(r, &normalized))
            .collect()
    } else {
        records.iter().collect()
    };

    SearchOutcome {
        results_count: results.len(),
        total_count: records.len(),
        popular_tags: popular_tags(records, tag_limit),
        has_search,
        results,
    }
}

/// The `limit` most frequent tags across `records`, most frequent first.
///
/// Tags are counted exactly as authored (case-sensitive). Equal counts keep
/// first-encountered order.
pub fn popular_tags(records: &[ImageRecord], limit: usize) -> Vec<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for tag in records.iter().flat_map(|r| r.tags.iter()) {
        match index.get(tag.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(tag.as_str(), counts.len());
                counts.push((tag.as_str(), 1));
            }
        }
    }

    // Stable: ties stay in first-encountered order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(limit)
        .map(|(tag, _)| tag.to_string())
        .collect()
}
