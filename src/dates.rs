//! Calendar-date parsing for chronological ordering.
//!
//! Catalog dates are display strings authored by hand, so several common
//! shapes are accepted. Anything else is "invalid": it never fails a query,
//! it only loses its place in the `Newest` ordering (invalid dates sort last).
//!
//! Accepted forms, tried in order:
//!
//! | Form | Example | Interpretation |
//! |------|---------|----------------|
//! | ISO date | `2024-06-01` | midnight UTC |
//! | RFC 3339 | `2024-06-01T07:30:00+02:00` | as given |
//! | ISO date-time, no offset | `2024-06-01T07:30:00` | UTC |
//! | Long form | `June 1, 2024` / `Jun 1, 2024` | midnight UTC |

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y"];
const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parse a catalog date string. Returns `None` for empty or unrecognised input.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            let midnight = date.and_hms_opt(0, 0, 0)?;
            return Some(Utc.from_utc_datetime(&midnight));
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
}
