//! Ordering of paper sequences by a selected key.
//!
//! Every key yields a strict total order: ties on the primary key fall back
//! to ascending `original_index`, which is unique within a loaded set. A
//! record whose `date_modified` failed to parse sorts after every record
//! with a valid date, for both date directions.

use crate::model::{LoadedPaper, SortKey};
use std::cmp::Ordering;

pub fn sort_papers(papers: &mut [LoadedPaper], key: SortKey) {
    papers.sort_by(|a, b| compare(a, b, key));
}

fn compare(a: &LoadedPaper, b: &LoadedPaper, key: SortKey) -> Ordering {
    let primary = match key {
        SortKey::DateDesc => compare_timestamps(a.sort_timestamp, b.sort_timestamp, true),
        SortKey::DateAsc => compare_timestamps(a.sort_timestamp, b.sort_timestamp, false),
        SortKey::TitleAsc => compare_titles(&a.paper.title, &b.paper.title),
        SortKey::TitleDesc => compare_titles(&b.paper.title, &a.paper.title),
    };
    primary.then_with(|| a.original_index.cmp(&b.original_index))
}

fn compare_timestamps(a: Option<i64>, b: Option<i64>, newest_first: bool) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => {
            if newest_first {
                y.cmp(&x)
            } else {
                x.cmp(&y)
            }
        }
        // Unparseable dates sort last regardless of direction
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Case-insensitive comparison of trimmed titles, with embedded digit runs
/// compared numerically so "Paper 2" orders before "Paper 10".
fn compare_titles(a: &str, b: &str) -> Ordering {
    let mut ca = a.trim().chars().peekable();
    let mut cb = b.trim().chars().peekable();

    loop {
        match (ca.peek().copied(), cb.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if x.is_ascii_digit() && y.is_ascii_digit() {
                    let run_a = take_digit_run(&mut ca);
                    let run_b = take_digit_run(&mut cb);
                    let ord = compare_digit_runs(&run_a, &run_b);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                } else {
                    let ord = x.to_lowercase().cmp(y.to_lowercase());
                    if ord != Ordering::Equal {
                        return ord;
                    }
                    ca.next();
                    cb.next();
                }
            }
        }
    }
}

fn take_digit_run(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    // A longer run of significant digits is a larger number
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Paper, PaperSet};

    fn paper(id: &str, title: &str, date: &str) -> Paper {
        Paper {
            id: id.into(),
            title: title.into(),
            authors: vec![],
            abstract_text: String::new(),
            keywords: vec![],
            date_modified: date.into(),
            pdf_url: String::new(),
        }
    }

    fn load(papers: Vec<Paper>) -> Vec<LoadedPaper> {
        PaperSet::from_papers(papers).papers().to_vec()
    }

    fn ids(papers: &[LoadedPaper]) -> Vec<&str> {
        papers.iter().map(|lp| lp.paper.id.as_str()).collect()
    }

    #[test]
    fn date_desc_puts_newest_first() {
        let mut papers = load(vec![
            paper("1", "B", "2023-01-01"),
            paper("2", "A", "2024-01-01"),
        ]);
        sort_papers(&mut papers, SortKey::DateDesc);
        assert_eq!(ids(&papers), vec!["2", "1"]);
    }

    #[test]
    fn title_asc_is_lexicographic() {
        let mut papers = load(vec![
            paper("1", "B", "2023-01-01"),
            paper("2", "A", "2024-01-01"),
        ]);
        sort_papers(&mut papers, SortKey::TitleAsc);
        assert_eq!(ids(&papers), vec!["2", "1"]);
    }

    #[test]
    fn invalid_date_sorts_last_in_both_directions() {
        let source = vec![
            paper("bad", "X", "not-a-date"),
            paper("old", "Y", "2020-01-01"),
            paper("new", "Z", "2024-06-01"),
        ];

        let mut asc = load(source.clone());
        sort_papers(&mut asc, SortKey::DateAsc);
        assert_eq!(ids(&asc), vec!["old", "new", "bad"]);

        let mut desc = load(source);
        sort_papers(&mut desc, SortKey::DateDesc);
        assert_eq!(ids(&desc), vec!["new", "old", "bad"]);
    }

    #[test]
    fn ties_break_on_original_index_for_every_key() {
        let source = vec![
            paper("first", "Same Title", "2023-03-03"),
            paper("second", "Same Title", "2023-03-03"),
            paper("third", "Same Title", "2023-03-03"),
        ];
        for key in [
            SortKey::DateDesc,
            SortKey::DateAsc,
            SortKey::TitleAsc,
            SortKey::TitleDesc,
        ] {
            let mut papers = load(source.clone());
            sort_papers(&mut papers, key);
            assert_eq!(ids(&papers), vec!["first", "second", "third"], "{}", key);
        }
    }

    #[test]
    fn sort_is_idempotent() {
        let mut papers = load(vec![
            paper("1", "Gamma", "2021-01-01"),
            paper("2", "alpha", "2023-01-01"),
            paper("3", "Beta", "invalid"),
        ]);
        sort_papers(&mut papers, SortKey::TitleAsc);
        let once = ids(&papers).join(",");
        sort_papers(&mut papers, SortKey::TitleAsc);
        assert_eq!(ids(&papers).join(","), once);
    }

    #[test]
    fn date_directions_reverse_each_other_when_all_dates_valid() {
        let source = vec![
            paper("1", "A", "2022-05-01"),
            paper("2", "B", "2021-01-15"),
            paper("3", "C", "2024-11-30"),
        ];
        let mut asc = load(source.clone());
        sort_papers(&mut asc, SortKey::DateAsc);
        let mut desc = load(source);
        sort_papers(&mut desc, SortKey::DateDesc);

        let mut reversed = ids(&desc);
        reversed.reverse();
        assert_eq!(ids(&asc), reversed);
    }

    #[test]
    fn numeric_title_runs_compare_numerically() {
        let mut papers = load(vec![
            paper("ten", "Paper 10", ""),
            paper("two", "Paper 2", ""),
        ]);
        sort_papers(&mut papers, SortKey::TitleAsc);
        assert_eq!(ids(&papers), vec!["two", "ten"]);
    }

    #[test]
    fn title_comparison_ignores_case_and_outer_whitespace() {
        assert_eq!(compare_titles("apple", "APPLE"), Ordering::Equal);
        assert_eq!(compare_titles("  banana", "banana  "), Ordering::Equal);
        assert_eq!(compare_titles("apple", "Banana"), Ordering::Less);
    }

    #[test]
    fn leading_zeros_do_not_inflate_numbers() {
        assert_eq!(compare_titles("Part 007", "Part 7"), Ordering::Equal);
        assert_eq!(compare_titles("Part 007", "Part 8"), Ordering::Less);
    }

    #[test]
    fn empty_and_single_sequences_are_untouched() {
        let mut empty: Vec<LoadedPaper> = vec![];
        sort_papers(&mut empty, SortKey::DateDesc);
        assert!(empty.is_empty());

        let mut one = load(vec![paper("only", "Solo", "2023-01-01")]);
        sort_papers(&mut one, SortKey::TitleDesc);
        assert_eq!(ids(&one), vec!["only"]);
    }

    #[test]
    fn date_and_title_orders_can_agree() {
        // Two records where date-desc and title-asc produce the same order
        let source = vec![
            paper("1", "B", "2023-01-01"),
            paper("2", "A", "2024-01-01"),
        ];
        let mut by_date = load(source.clone());
        sort_papers(&mut by_date, SortKey::DateDesc);
        assert_eq!(ids(&by_date), vec!["2", "1"]);

        let mut by_title = load(source);
        sort_papers(&mut by_title, SortKey::TitleAsc);
        assert_eq!(ids(&by_title), vec!["2", "1"]);
    }
}
