//! The immutable image catalog.
//!
//! A catalog is an ordered list of [`ImageRecord`]s fixed for the lifetime of
//! the process. Catalog order is meaningful: it is the order of every
//! unfiltered view and the tie-break for every sort.
//!
//! ## File format
//!
//! JSON, either a bare array of records or an object with an `images` array:
//!
//! ```json
//! [
//!   { "id": "1", "title": "Sunrise Peak", "location": "Rockies",
//!     "date": "2024-01-01", "tags": ["sunrise", "mountains"],
//!     "thumb": "/images/thumb/1.jpg", "full": "/images/full/1.jpg",
//!     "likes": 120 }
//! ]
//! ```
//!
//! ## Validation
//!
//! - `id` must be unique across the catalog.
//! - Unparseable dates are accepted (logged at `warn`); they only affect the
//!   `Newest` ordering.

use crate::types::ImageRecord;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Duplicate image id: {0}")]
    DuplicateId(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<ImageRecord>),
    Wrapped { images: Vec<ImageRecord> },
}

/// Ordered, immutable collection of image records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<ImageRecord>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(records: Vec<ImageRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(CatalogError::DuplicateId(record.id.clone()));
            }
        }
        for record in records.iter().filter(|r| r.parsed_date().is_none()) {
            log::warn!(
                "image {} has unparseable date {:?}; it sorts last under Newest",
                record.id,
                record.date
            );
        }
        log::debug!("catalog built with {} records", records.len());
        Ok(Self { records })
    }

    /// Parse a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records = match serde_json::from_str(json)? {
            CatalogFile::List(records) => records,
            CatalogFile::Wrapped { images } => images,
        };
        Self::new(records)
    }

    /// Read and parse a catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        log::debug!("loading catalog from {}", path.display());
        Self::from_json(&content)
    }

    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageRecord> {
        self.records.iter()
    }

    /// Look up a record by id. Unknown ids yield `None`.
    pub fn find(&self, id: &str) -> Option<&ImageRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records whose date does not parse, in catalog order.
    pub fn undated(&self) -> Vec<&ImageRecord> {
        self.records
            .iter()
            .filter(|r| r.parsed_date().is_none())
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ImageRecord;
    type IntoIter = std::slice::Iter<'a, ImageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
