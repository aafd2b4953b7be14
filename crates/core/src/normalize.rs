//! Whitespace normalization for bookmark and folder titles.

/// Collapses the whitespace of a title into single spaces.
///
/// Newlines are deleted, tabs become spaces, the ends are trimmed and runs of
/// spaces collapse to one. The result is stable under repeated application.
///
/// # Example
///
/// ```rust
/// use yambook_core::normalize;
///
/// assert_eq!(normalize("\n  Rust\tLang   Book \n"), "Rust Lang Book");
/// ```
pub fn normalize(text: &str) -> String {
    let cleaned = text.replace('\n', "").replace('\t', " ");

    cleaned
        .trim()
        .split(' ')
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
