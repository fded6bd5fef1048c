use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One paper's metadata as it appears in the papers document.
///
/// Only `id` and `title` are required in practice; everything else defaults
/// to empty so a sparse record never fails deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paper {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "string_or_list")]
    pub authors: Vec<String>,
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub date_modified: String,
    #[serde(default)]
    pub pdf_url: String,
}

impl Paper {
    /// First `max_words` words of the abstract, plus whether it was truncated.
    pub fn abstract_preview(&self, max_words: usize) -> (String, bool) {
        let words: Vec<&str> = self.abstract_text.split_whitespace().collect();
        if words.len() <= max_words {
            (words.join(" "), false)
        } else {
            (words[..max_words].join(" "), true)
        }
    }

    /// Authors as a single comma-separated display string.
    pub fn authors_line(&self) -> String {
        self.authors.join(", ")
    }
}

/// A paper as held in a loaded set, carrying the load-time derived fields.
///
/// `original_index` is assigned exactly once when the set is built and never
/// recomputed; it is the deterministic tie-breaker for every sort key.
/// `sort_timestamp` is the parsed `date_modified` as epoch seconds, or `None`
/// when the source value is unparseable.
#[derive(Debug, Clone)]
pub struct LoadedPaper {
    pub paper: Paper,
    pub original_index: usize,
    pub sort_timestamp: Option<i64>,
}

/// The full record set, created by a single load and replaced wholesale on
/// reload. There is no partial update.
#[derive(Debug, Clone, Default)]
pub struct PaperSet {
    papers: Vec<LoadedPaper>,
}

impl PaperSet {
    pub fn from_papers(papers: Vec<Paper>) -> Self {
        let papers = papers
            .into_iter()
            .enumerate()
            .map(|(i, paper)| LoadedPaper {
                sort_timestamp: parse_timestamp(&paper.date_modified),
                original_index: i,
                paper,
            })
            .collect();
        Self { papers }
    }

    pub fn papers(&self) -> &[LoadedPaper] {
        &self.papers
    }

    pub fn len(&self) -> usize {
        self.papers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&LoadedPaper> {
        self.papers.iter().find(|lp| lp.paper.id == id)
    }
}

/// Parses `date_modified` into epoch seconds.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS`, and bare `YYYY-MM-DD`. Anything
/// else yields `None`, which the sort layer treats as "orders last".
pub fn parse_timestamp(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc().timestamp());
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d.and_hms_opt(0, 0, 0)?.and_utc().timestamp());
    }
    None
}

/// Sort keys understood by the sort engine, in the wire spelling of the
/// original archive ("date-desc", "title-asc", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    DateDesc,
    DateAsc,
    TitleAsc,
    TitleDesc,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::DateDesc => "date-desc",
            SortKey::DateAsc => "date-asc",
            SortKey::TitleAsc => "title-asc",
            SortKey::TitleDesc => "title-desc",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date-desc" => Ok(SortKey::DateDesc),
            "date-asc" => Ok(SortKey::DateAsc),
            "title-asc" => Ok(SortKey::TitleAsc),
            "title-desc" => Ok(SortKey::TitleDesc),
            _ => Err(format!("Invalid sort key: {}", s)),
        }
    }
}

// Source data is loose about scalar types: ids may be numbers, authors may be
// a single string instead of a list. Normalize both at the boundary.

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string or number id")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct AuthorsVisitor;

    impl<'de> Visitor<'de> for AuthorsVisitor {
        type Value = Vec<String>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string or a list of strings")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Vec<String>, E> {
            Ok(vec![v.to_string()])
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Vec<String>, A::Error> {
            let mut authors = Vec::new();
            while let Some(author) = seq.next_element::<String>()? {
                authors.push(author);
            }
            Ok(authors)
        }
    }

    deserializer.deserialize_any(AuthorsVisitor)
}
