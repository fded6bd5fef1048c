//! Aggregate counts over a loaded set, shown on the archive's front page.

use crate::model::LoadedPaper;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveStats {
    pub papers: usize,
    /// Unique authors, trimmed. "Jane Doe" and " Jane Doe " count once.
    pub authors: usize,
    /// Unique keywords, case-folded.
    pub fields: usize,
}

pub fn archive_stats(papers: &[LoadedPaper]) -> ArchiveStats {
    let mut authors = HashSet::new();
    let mut fields = HashSet::new();
    for lp in papers {
        for author in &lp.paper.authors {
            authors.insert(author.trim().to_string());
        }
        for keyword in &lp.paper.keywords {
            fields.insert(keyword.to_lowercase());
        }
    }
    ArchiveStats {
        papers: papers.len(),
        authors: authors.len(),
        fields: fields.len(),
    }
}
