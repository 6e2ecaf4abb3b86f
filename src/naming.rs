//! Conversions between catalog tags and display categories.
//!
//! Tags are authored kebab-case (`alpine-lake`), categories are what the filter
//! bar shows (`Alpine Lake`). The two directions are not inverses of each
//! other: category → tag form only lower-cases and hyphenates, so it is used
//! for substring matching against tags rather than exact lookup.
//!
//! - `alpine-lake` → "Alpine Lake"
//! - `sunrise` → "Sunrise"
//! - "Alpine Lake" → `alpine-lake`
//! - "Sunrise/Sunset" → `sunrise/sunset`

/// Convert a tag into its display category.
///
/// Splits on `-`, upper-cases the first character of each word (the rest is
/// left as authored), and joins with spaces. Empty segments survive as empty
/// words, so `a--b` becomes `"A  B"`.
pub fn tag_to_category(tag: &str) -> String {
    tag.split('-').map(capitalize).collect::<Vec<_>>().join(" ")
}

/// Convert a category label into the form matched against tags.
pub fn category_to_tag_form(category: &str) -> String {
    category.to_lowercase().replace(' ', "-")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
