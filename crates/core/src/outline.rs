//! Splitting generated outline text into section items.
//!
//! Each non-blank line becomes an item. Lines whose trimmed text is longer
//! than [`MIN_SELECTABLE_LEN`] characters can be selected for drafting;
//! shorter lines (stray numerals, separators) are kept for display only.

use serde::Serialize;

/// Trimmed lines must be longer than this to be selectable. Length is
/// counted in UTF-16 code units, matching the browser front end.
pub const MIN_SELECTABLE_LEN: usize = 3;

/// One line of a rendered outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineItem {
    /// The trimmed line, used as the section title when drafting.
    pub title: String,
    pub selectable: bool,
}

/// Render outline text into items, dropping blank lines.
pub fn outline_items(outline: &str) -> Vec<OutlineItem> {
    outline
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| OutlineItem {
            title: line.to_string(),
            selectable: line.encode_utf16().count() > MIN_SELECTABLE_LEN,
        })
        .collect()
}

/// Titles of the selectable items, in outline order.
pub fn section_titles(outline: &str) -> Vec<String> {
    outline_items(outline)
        .into_iter()
        .filter(|item| item.selectable)
        .map(|item| item.title)
        .collect()
}
