//! Free-text filtering over a loaded paper set.
//!
//! Matching is case-insensitive substring containment against the record's
//! searchable text. No tokenization, no stemming, no ranking. Output order
//! is input order; ordering is the sort engine's job.

use crate::model::{LoadedPaper, Paper};

/// The text a query is matched against: title, authors, abstract, and
/// keywords, space-joined and lower-cased.
pub fn searchable_text(paper: &Paper) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(3 + paper.keywords.len());
    parts.push(&paper.title);
    parts.extend(paper.authors.iter().map(String::as_str));
    parts.push(&paper.abstract_text);
    parts.extend(paper.keywords.iter().map(String::as_str));
    parts.join(" ").to_lowercase()
}

/// Returns the subset of `papers` whose searchable text contains `query`.
///
/// The query is trimmed and lower-cased first; an empty query after trimming
/// is the identity filter. Records keep their load-time `original_index`.
pub fn search_papers(papers: &[LoadedPaper], query: &str) -> Vec<LoadedPaper> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return papers.to_vec();
    }
    papers
        .iter()
        .filter(|lp| searchable_text(&lp.paper).contains(&query))
        .cloned()
        .collect()
}
