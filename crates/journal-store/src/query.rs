//! Translation of [`SubmissionFilter`] into the data API's query syntax.
//!
//! The hosted store exposes PostgREST-style operators in the query string:
//! `status=eq.pending`, `featured=is.true`, and an `or=(...)` group of
//! `ilike` patterns for substring search.

use journal_entity::submission::SubmissionFilter;

/// Columns covered by the substring search.
const SEARCH_COLUMNS: [&str; 4] = ["title", "author_name", "abstract", "area"];

/// Build the query-string pairs for a filtered submission listing.
///
/// Ordering is always `created_at.desc`, matching the façade contract that
/// reads default to newest first.
pub fn filter_query_pairs(filter: &SubmissionFilter) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    if let Some(status) = filter.status {
        pairs.push(("status".to_string(), format!("eq.{status}")));
    }
    if let Some(area) = filter.area {
        pairs.push(("area".to_string(), format!("eq.{area}")));
    }
    if let Some(featured) = filter.featured {
        pairs.push(("featured".to_string(), format!("is.{featured}")));
    }
    if let Some(term) = filter.search.as_deref() {
        let pattern = ilike_pattern(term);
        let clauses: Vec<String> = SEARCH_COLUMNS
            .iter()
            .map(|column| format!("{column}.ilike.{pattern}"))
            .collect();
        pairs.push(("or".to_string(), format!("({})", clauses.join(","))));
    }

    pairs.push(("order".to_string(), "created_at.desc".to_string()));

    if let Some(limit) = filter.limit {
        pairs.push(("limit".to_string(), limit.to_string()));
    }

    pairs
}

/// Build a `*term*` pattern, neutralizing characters that are structural in
/// the query grammar (`,`, `(`, `)`) or wildcards (`*`, `%`).
fn ilike_pattern(term: &str) -> String {
    let cleaned: String = term
        .chars()
        .map(|ch| match ch {
            ',' | '(' | ')' | '*' | '%' => ' ',
            other => other,
        })
        .collect();
    format!("*{}*", cleaned.trim())
}
