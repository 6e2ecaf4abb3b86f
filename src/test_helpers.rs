//! Shared test utilities for the trail-gallery test suite.
//!
//! Provides record builders, the small two-image scenario catalog, a larger
//! hiking catalog with counters and awkward dates, and id extractors for
//! asserting on views.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let catalog = scenario_catalog();
//! let outcome = search(catalog.records(), "sunrise");
//! assert_eq!(ids(outcome.results), vec!["1"]);
//! ```

use crate::catalog::Catalog;
use crate::types::ImageRecord;

// =========================================================================
// Record builders
// =========================================================================

/// Minimal record with id, title, tags and date; every other field empty.
pub fn record(id: &str, title: &str, tags: &[&str], date: &str) -> ImageRecord {
    ImageRecord {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        location: String::new(),
        date: date.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        thumb: format!("/images/thumb/{id}.jpg"),
        full: format!("/images/full/{id}.jpg"),
        likes: None,
        downloads: None,
        author: None,
        resolution: None,
    }
}

/// Record with location, description and counters filled in.
#[allow(clippy::too_many_arguments)]
pub fn full_record(
    id: &str,
    title: &str,
    location: &str,
    description: &str,
    tags: &[&str],
    date: &str,
    likes: Option<u64>,
    downloads: Option<u64>,
) -> ImageRecord {
    ImageRecord {
        location: location.to_string(),
        description: description.to_string(),
        likes,
        downloads,
        ..record(id, title, tags, date)
    }
}

// =========================================================================
// Catalogs
// =========================================================================

/// The two-record catalog used by the documented query scenarios.
pub fn scenario_catalog() -> Catalog {
    Catalog::new(vec![
        record("1", "Sunrise Peak", &["sunrise", "mountains"], "2024-01-01"),
        record("2", "Forest Trail", &["forest"], "2024-06-01"),
    ])
    .unwrap()
}

/// A six-record hiking catalog with counters, locations and one bad date.
pub fn trail_catalog() -> Catalog {
    Catalog::new(vec![
        full_record(
            "1",
            "Sunrise Peak",
            "Rocky Mountains, Colorado",
            "First light over the summit ridge",
            &["sunrise", "mountains", "landscape"],
            "2024-01-01",
            Some(120),
            Some(30),
        ),
        full_record(
            "2",
            "Forest Trail",
            "Black Forest, Germany",
            "Moss and ferns along a quiet path",
            &["forest", "trail"],
            "2024-06-01",
            Some(80),
            None,
        ),
        full_record(
            "3",
            "Alpine Lake",
            "Banff, Canada",
            "Turquoise water below the glacier",
            &["alpine-lake", "mountains", "water"],
            "2023-08-15",
            None,
            Some(55),
        ),
        full_record(
            "4",
            "Valley Mist",
            "Yosemite",
            "Fog rolling through the valley at dawn",
            &["landscape", "sunrise"],
            "sometime in spring",
            Some(120),
            Some(12),
        ),
        full_record(
            "5",
            "Canyon Edge",
            "Grand Canyon, Arizona",
            "Standing at the rim",
            &["adventure", "landscape"],
            "2024-03-10",
            Some(15),
            Some(55),
        ),
        full_record(
            "6",
            "Waterfall Run",
            "Olympic National Park",
            "Spray from the falls after the rain",
            &["water", "forest"],
            "2022-11-30",
            Some(64),
            Some(40),
        ),
    ])
    .unwrap()
}

// =========================================================================
// Extractors
// =========================================================================

/// Ids of a sequence of records, in order.
pub fn ids<'a>(records: impl IntoIterator<Item = &'a ImageRecord>) -> Vec<&'a str> {
    records.into_iter().map(|r| r.id.as_str()).collect()
}
