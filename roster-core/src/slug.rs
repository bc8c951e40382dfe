//! Slug derivation and slug-based display names.

use std::path::Path;

/// Derive a profile slug from its source path (the file name without extension).
///
/// # Examples
///
/// ```
/// use roster_core::slug::slug_from_path;
/// use std::path::Path;
///
/// assert_eq!(slug_from_path(Path::new("profiles/jean-dupont.md")), Some("jean-dupont".to_string()));
/// ```
pub fn slug_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Turn a slug into a display name
///
/// Rules:
/// - Hyphens become spaces
/// - A letter following a non-letter is upper-cased
/// - Any other letter is lower-cased
///
/// # Examples
///
/// ```
/// use roster_core::slug::title_from_slug;
///
/// assert_eq!(title_from_slug("jean-dupont"), "Jean Dupont");
/// assert_eq!(title_from_slug("ADA-lovelace"), "Ada Lovelace");
/// ```
pub fn title_from_slug(slug: &str) -> String {
    let mut title = String::with_capacity(slug.len());
    let mut previous_is_letter = false;

    for c in slug.chars() {
        let c = if c == '-' { ' ' } else { c };
        if c.is_alphabetic() {
            if previous_is_letter {
                title.extend(c.to_lowercase());
            } else {
                title.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            title.push(c);
            previous_is_letter = false;
        }
    }

    title
}
