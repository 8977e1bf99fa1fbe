//! Case-insensitive row filtering for search boxes.

/// Whether a row stays visible for a search term.
///
/// Matching is case-insensitive substring containment; an empty term keeps
/// every row visible.
#[must_use]
pub fn row_matches(row_text: &str, search_term: &str) -> bool {
    if search_term.is_empty() {
        return true;
    }
    row_text
        .to_lowercase()
        .contains(&search_term.to_lowercase())
}

/// Filter rows against a search term, preserving order.
pub fn visible_rows<'a, S: AsRef<str>>(rows: &'a [S], search_term: &str) -> Vec<&'a str> {
    rows.iter()
        .map(AsRef::as_ref)
        .filter(|row| row_matches(row, search_term))
        .collect()
}
