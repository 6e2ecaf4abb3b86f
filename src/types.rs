//! Catalog record types shared by every query stage.
//!
//! Records are supplied externally (a static JSON file in practice) and are
//! never mutated: search, filtering and sorting all produce views of
//! `&ImageRecord` borrowed from the [`Catalog`](crate::catalog::Catalog).

use serde::{Deserialize, Serialize};

/// A single photo in the gallery catalog.
///
/// `id` is the only key used for lookups, intersections and detail-view
/// addressing. `thumb` and `full` are opaque asset references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    /// Calendar date, e.g. `2024-06-01`. See [`crate::dates`] for accepted forms.
    #[serde(default)]
    pub date: String,
    /// Free-text labels in authoring order, usually kebab-case (`alpine-lake`).
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub thumb: String,
    #[serde(default)]
    pub full: String,
    /// Like count. `None` means unknown and orders as 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<u64>,
    /// Download count. `None` means unknown and orders as 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downloads: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    /// Display-only resolution label such as `"4K"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
}

/// Photographer credit shown in the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl ImageRecord {
    /// Likes with unknown read as 0.
    pub fn like_count(&self) -> u64 {
        self.likes.unwrap_or(0)
    }

    /// Downloads with unknown read as 0.
    pub fn download_count(&self) -> u64 {
        self.downloads.unwrap_or(0)
    }

    /// The record's date as a timestamp, or `None` when it does not parse.
    pub fn parsed_date(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        crate::dates::parse_date(&self.date)
    }
}
