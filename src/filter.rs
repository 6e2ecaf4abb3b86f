//! Category filtering and sorting.
//!
//! Runs independently of [`search`](crate::search): it always starts from the
//! full catalog. Filtering keeps catalog order; sorting then produces a new,
//! stably ordered view. Nothing here reorders or mutates the catalog itself.
//!
//! ## Category matching
//!
//! A category label like `"Alpine Lake"` matches a record when any of:
//!
//! - a tag contains the tag form `alpine-lake` (case-insensitive)
//! - the title contains `alpine lake` (case-insensitive)
//! - the location contains `alpine lake` (case-insensitive)
//!
//! The sentinel [`ALL_IMAGES`] disables filtering.
//!
//! ## Sort keys
//!
//! | Key | Order |
//! |-----|-------|
//! | `Popular` | catalog order (default) |
//! | `Newest` | date descending, unparseable dates last |
//! | `Most Downloaded` | downloads descending, unknown = 0 |
//! | `Most Liked` | likes descending, unknown = 0 |
//! | anything else | catalog order |
//!
//! All sorts are stable, so ties keep their filtered order.

use crate::naming::{category_to_tag_form, tag_to_category};
use crate::types::ImageRecord;
use serde::{Serialize, Serializer};
use std::cmp::Reverse;
use std::collections::BTreeSet;
use std::fmt;

/// The "no category filter" label, always first in the category list.
pub const ALL_IMAGES: &str = "All Images";

/// Active category filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Parse a filter-bar label. [`ALL_IMAGES`] means no filter.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_IMAGES {
            Self::All
        } else {
            Self::Category(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_IMAGES,
            Self::Category(label) => label.as_str(),
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }

    /// Whether `record` belongs to this category.
    pub fn matches(&self, record: &ImageRecord) -> bool {
        let Self::Category(label) = self else {
            return true;
        };
        let tag_form = category_to_tag_form(label);
        let lower = label.to_lowercase();
        record
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&tag_form))
            || record.title.to_lowercase().contains(&lower)
            || record.location.to_lowercase().contains(&lower)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Active sort order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Popular,
    Newest,
    MostDownloaded,
    MostLiked,
    /// Unrecognised label: keeps catalog order but still counts as a non-default sort.
    Other(String),
}

impl SortKey {
    /// Selectable sorts, in menu order.
    pub const ALL_LABELS: [&'static str; 4] = ["Popular", "Newest", "Most Downloaded", "Most Liked"];

    pub fn from_label(label: &str) -> Self {
        match label {
            "Popular" => Self::Popular,
            "Newest" => Self::Newest,
            "Most Downloaded" => Self::MostDownloaded,
            "Most Liked" => Self::MostLiked,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Popular => "Popular",
            Self::Newest => "Newest",
            Self::MostDownloaded => "Most Downloaded",
            Self::MostLiked => "Most Liked",
            Self::Other(label) => label.as_str(),
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Self::Popular)
    }

    /// Return `records` in this sort's order. The input order is the tie-break.
    pub fn apply<'a>(&self, mut records: Vec<&'a ImageRecord>) -> Vec<&'a ImageRecord> {
        match self {
            Self::Newest => records.sort_by_cached_key(|r| {
                let date = r.parsed_date();
                (date.is_none(), Reverse(date))
            }),
            Self::MostDownloaded => records.sort_by_key(|r| Reverse(r.download_count())),
            Self::MostLiked => records.sort_by_key(|r| Reverse(r.like_count())),
            Self::Popular | Self::Other(_) => {}
        }
        records
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for SortKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Output of [`filter_and_sort`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOutcome<'a> {
    pub results: Vec<&'a ImageRecord>,
    pub available_categories: Vec<String>,
    /// True when the filter is not [`ALL_IMAGES`] or the sort is not `Popular`.
    pub has_active_filter: bool,
}

/// Filter `records` by category, then order by `sort`.
pub fn filter_and_sort<'a>(
    records: &'a [ImageRecord],
    filter: &CategoryFilter,
    sort: &SortKey,
) -> FilterOutcome<'a> {
    let filtered: Vec<&ImageRecord> = records.iter().filter(|r| filter.matches(r)).collect();

    FilterOutcome {
        results: sort.apply(filtered),
        available_categories: available_categories(records),
        has_active_filter: filter.is_active() || !sort.is_default(),
    }
}

/// Every tag as a display category, de-duplicated and sorted, after [`ALL_IMAGES`].
pub fn available_categories(records: &[ImageRecord]) -> Vec<String> {
    let categories: BTreeSet<String> = records
        .iter()
        .flat_map(|r| r.tags.iter())
        .map(|tag| tag_to_category(tag))
        .collect();

    std::iter::once(ALL_IMAGES.to_string())
        .chain(categories)
        .collect()
}

/// Filter-bar layout: curated chips plus an overflow "More" list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryMenu {
    /// Curated categories, shown whether or not the catalog uses them.
    pub main: Vec<String>,
    /// Available categories that are not curated, in available order.
    pub more: Vec<String>,
}

/// Split `available` into curated chips and the overflow list.
pub fn category_menu(available: &[String], main_categories: &[String]) -> CategoryMenu {
    let more = available
        .iter()
        .filter(|c| c.as_str() != ALL_IMAGES && !main_categories.contains(*c))
        .cloned()
        .collect();
    CategoryMenu {
        main: main_categories.to_vec(),
        more,
    }
}
