//! CLI output formatting.
//!
//! # Entity Display Contract
//!
//! Every record follows the same two-level pattern wherever it is shown:
//!
//! 1. **Header line**: positional index + title + `[id]`
//! 2. **Context lines**: indented `Location:`, `Date:`, `Tags:`, counters
//!
//! # Output Format
//!
//! ## Browse
//!
//! ```text
//! Showing 2 of 6 images
//!     Search: "forest"
//!     Sort: Most Liked
//! 001 Forest Trail [2]
//!     Location: Black Forest, Germany
//!     Date: 2024-06-01
//!     Tags: forest, trail
//!     Likes: 80  Downloads: -
//! ```
//!
//! ## Categories
//!
//! ```text
//! Filter by:
//!   * All Images
//!     Landscape
//! More:
//!     Alpine Lake
//! Sort by: Popular | Newest | Most Downloaded | Most Liked
//! ```
//!
//! # Architecture
//!
//! Each view has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure.

use crate::catalog::Catalog;
use crate::filter::{CategoryFilter, CategoryMenu, SortKey};
use crate::gallery::{GalleryView, QueryState};
use crate::types::ImageRecord;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn format_count(count: Option<u64>) -> String {
    count.map_or_else(|| "-".to_string(), |n| n.to_string())
}

/// Header plus context lines for one record in a list.
fn record_lines(index: usize, record: &ImageRecord) -> Vec<String> {
    let mut lines = vec![format!(
        "{} {} [{}]",
        format_index(index),
        record.title,
        record.id
    )];
    let ctx = indent(1);
    if !record.location.is_empty() {
        lines.push(format!("{ctx}Location: {}", record.location));
    }
    if !record.date.is_empty() {
        lines.push(format!("{ctx}Date: {}", record.date));
    }
    if !record.tags.is_empty() {
        lines.push(format!("{ctx}Tags: {}", record.tags.join(", ")));
    }
    lines.push(format!(
        "{ctx}Likes: {}  Downloads: {}",
        format_count(record.likes),
        format_count(record.downloads)
    ));
    lines
}

// ============================================================================
// Browse
// ============================================================================

pub fn format_view(view: &GalleryView<'_>, state: &QueryState) -> Vec<String> {
    let mut lines = Vec::new();
    if view.has_any_filter {
        lines.push(format!(
            "Showing {} of {} images",
            view.results_count, view.total_count
        ));
    } else {
        lines.push(format!("All {} images", view.total_count));
    }

    let ctx = indent(1);
    if view.has_search {
        lines.push(format!("{ctx}Search: {:?}", state.search_query.trim()));
    }
    if state.active_filter.is_active() {
        lines.push(format!("{ctx}Filter: {}", state.active_filter));
    }
    if !state.active_sort.is_default() {
        lines.push(format!("{ctx}Sort: {}", state.active_sort));
    }

    if view.filtered_images.is_empty() {
        lines.push("No images match.".to_string());
        if view.has_any_filter {
            lines.push(format!("{ctx}Clear the search and filters to see every image."));
        }
        return lines;
    }

    for (i, record) in view.filtered_images.iter().enumerate() {
        lines.extend(record_lines(i + 1, record));
    }
    lines
}

pub fn print_view(view: &GalleryView<'_>, state: &QueryState) {
    for line in format_view(view, state) {
        println!("{}", line);
    }
}

// ============================================================================
// Categories and tags
// ============================================================================

pub fn format_menu(menu: &CategoryMenu, active: &CategoryFilter) -> Vec<String> {
    let entry = |label: &str| {
        if label == active.label() {
            format!("  * {label}")
        } else {
            format!("{}{label}", indent(1))
        }
    };

    let mut lines = vec!["Filter by:".to_string()];
    lines.extend(menu.main.iter().map(|c| entry(c.as_str())));
    if !menu.more.is_empty() {
        lines.push("More:".to_string());
        lines.extend(menu.more.iter().map(|c| entry(c.as_str())));
    }
    lines.push(format!("Sort by: {}", SortKey::ALL_LABELS.join(" | ")));
    lines
}

pub fn print_menu(menu: &CategoryMenu, active: &CategoryFilter) {
    for line in format_menu(menu, active) {
        println!("{}", line);
    }
}

pub fn format_popular_tags(tags: &[String]) -> Vec<String> {
    if tags.is_empty() {
        return vec!["No tags".to_string()];
    }
    let mut lines = vec!["Popular tags".to_string()];
    lines.extend(
        tags.iter()
            .enumerate()
            .map(|(i, tag)| format!("{} {}", format_index(i + 1), tag)),
    );
    lines
}

pub fn print_popular_tags(tags: &[String]) {
    for line in format_popular_tags(tags) {
        println!("{}", line);
    }
}

// ============================================================================
// Detail
// ============================================================================

pub fn format_detail(record: &ImageRecord) -> Vec<String> {
    let ctx = indent(1);
    let mut lines = vec![format!("{} [{}]", record.title, record.id)];
    if !record.description.is_empty() {
        lines.push(format!("{ctx}{}", record.description));
    }
    match (record.location.is_empty(), record.date.is_empty()) {
        (false, false) => lines.push(format!("{ctx}{} • {}", record.location, record.date)),
        (false, true) => lines.push(format!("{ctx}{}", record.location)),
        (true, false) => lines.push(format!("{ctx}{}", record.date)),
        (true, true) => {}
    }
    if !record.tags.is_empty() {
        lines.push(format!("{ctx}Tags: {}", record.tags.join(", ")));
    }
    if let Some(author) = &record.author {
        lines.push(format!("{ctx}By: @{}", author.username));
    }
    if let Some(resolution) = &record.resolution {
        lines.push(format!("{ctx}Resolution: {resolution}"));
    }
    lines.push(format!(
        "{ctx}Likes: {}  Downloads: {}",
        format_count(record.likes),
        format_count(record.downloads)
    ));
    lines.push(format!("{ctx}Full: {}", record.full));
    lines
}

pub fn print_detail(record: &ImageRecord) {
    for line in format_detail(record) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

pub fn format_check(catalog: &Catalog, categories: usize) -> Vec<String> {
    let mut lines = vec![format!(
        "Catalog: {} images, {} categories",
        catalog.len(),
        categories
    )];
    let undated = catalog.undated();
    if !undated.is_empty() {
        lines.push(format!(
            "Unparseable dates ({}), sorted last under Newest:",
            undated.len()
        ));
        for record in undated {
            lines.push(format!("{}{} [{}]: {:?}", indent(1), record.title, record.id, record.date));
        }
    }
    lines
}

pub fn print_check(catalog: &Catalog, categories: usize) {
    for line in format_check(catalog, categories) {
        println!("{}", line);
    }
}
