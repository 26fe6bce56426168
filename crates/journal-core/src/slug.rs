//! URL slug utilities.
//!
//! Slugs are derived from article titles at intake time and double as
//! human-readable lookup keys for the public catalog. All three functions
//! are pure and total.

/// Generate a URL-friendly slug from arbitrary text.
///
/// Lowercases and trims the input, strips characters other than ASCII
/// alphanumerics, underscores, hyphens, and whitespace, then collapses any
/// run of separators into a single hyphen. Leading and trailing hyphens are
/// removed. Empty input yields an empty string.
pub fn generate_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for ch in text.trim().to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_separator = true;
        }
        // Anything else (punctuation, symbols, non-ASCII letters) is stripped
        // without introducing a separator.
    }

    slug
}

/// Check whether a string is a valid slug.
///
/// A valid slug is one or more groups of lowercase ASCII alphanumerics
/// joined by single hyphens: `^[a-z0-9]+(-[a-z0-9]+)*$`.
pub fn is_valid_slug(slug: &str) -> bool {
    if slug.is_empty() {
        return false;
    }

    let mut prev_was_hyphen = true; // rejects a leading hyphen
    for ch in slug.chars() {
        match ch {
            'a'..='z' | '0'..='9' => prev_was_hyphen = false,
            '-' if !prev_was_hyphen => prev_was_hyphen = true,
            _ => return false,
        }
    }

    !prev_was_hyphen // rejects a trailing hyphen
}

/// Convert a slug back to a readable title.
///
/// Splits on hyphens, uppercases the first character of each segment, and
/// joins the segments with spaces.
pub fn slug_to_title(slug: &str) -> String {
    slug.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
