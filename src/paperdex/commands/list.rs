use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::search_papers;
use crate::model::{PaperSet, SortKey};
use crate::sort::sort_papers;

/// The filter-then-sort pipeline: derive the subset matching `query`, order
/// it by `key`, and hand the result to the presentation layer. Re-derived
/// from the full set on every call; nothing is retained between calls.
pub fn run(set: &PaperSet, query: &str, key: SortKey) -> Result<CmdResult> {
    let mut papers = search_papers(set.papers(), query);
    sort_papers(&mut papers, key);
    Ok(CmdResult::default().with_listed_papers(papers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Paper;

    fn paper(id: &str, title: &str, date: &str, abstract_text: &str) -> Paper {
        Paper {
            id: id.into(),
            title: title.into(),
            authors: vec![],
            abstract_text: abstract_text.into(),
            keywords: vec![],
            date_modified: date.into(),
            pdf_url: String::new(),
        }
    }

    fn set() -> PaperSet {
        PaperSet::from_papers(vec![
            paper("1", "B", "2023-01-01", "older paper"),
            paper("2", "A", "2024-01-01", "newer paper"),
            paper("3", "C", "2022-06-01", "unrelated"),
        ])
    }

    #[test]
    fn default_listing_is_newest_first() {
        let result = run(&set(), "", SortKey::DateDesc).unwrap();
        let ids: Vec<&str> = result
            .listed_papers
            .iter()
            .map(|lp| lp.paper.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2", "1", "3"]);
    }

    #[test]
    fn query_filters_before_sorting() {
        let result = run(&set(), "paper", SortKey::TitleAsc).unwrap();
        let ids: Vec<&str> = result
            .listed_papers
            .iter()
            .map(|lp| lp.paper.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn reset_is_empty_query_with_default_key() {
        // The reset operation re-derives from the full set
        let filtered = run(&set(), "unrelated", SortKey::TitleDesc).unwrap();
        assert_eq!(filtered.listed_papers.len(), 1);

        let reset = run(&set(), "", SortKey::default()).unwrap();
        assert_eq!(reset.listed_papers.len(), 3);
        assert_eq!(reset.listed_papers[0].paper.id, "2");
    }

    #[test]
    fn empty_set_lists_nothing() {
        let empty = PaperSet::default();
        let result = run(&empty, "anything", SortKey::DateDesc).unwrap();
        assert!(result.listed_papers.is_empty());
    }
}
