//! # Source Layer
//!
//! Fetching and decoding of the papers document. The [`PaperSource`] trait
//! abstracts where the document comes from:
//!
//! - [`FileSource`]: a local path (direct hosting)
//! - [`HttpSource`]: a remote URL, fetched once with a blocking client
//! - [`StaticSource`]: an in-memory document for tests
//!
//! The document shape is `{ "papers": [ ... ] }`. A missing `papers` field
//! is an empty set, not an error. Each record's `pdf_url` is resolved
//! through [`resolve_pdf_url`] exactly once, here, so the rest of the crate
//! only ever sees final URLs.

use crate::error::{PaperdexError, Result};
use crate::model::{Paper, PaperSet};
use crate::resolve::{resolve_pdf_url, LinkConfig};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Abstract origin of the papers document. Fetched exactly once per load;
/// there is no retry policy.
pub trait PaperSource {
    fn fetch_document(&self) -> Result<String>;

    /// Human-readable origin for diagnostics.
    fn describe(&self) -> String;
}

impl<T: PaperSource + ?Sized> PaperSource for Box<T> {
    fn fetch_document(&self) -> Result<String> {
        (**self).fetch_document()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PaperSource for FileSource {
    fn fetch_document(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(PaperdexError::Io)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

pub struct HttpSource {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl PaperSource for HttpSource {
    fn fetch_document(&self) -> Result<String> {
        let response = self.client.get(&self.url).send()?.error_for_status()?;
        Ok(response.text()?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// In-memory document, for tests and embedding.
pub struct StaticSource {
    document: String,
}

impl StaticSource {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }
}

impl PaperSource for StaticSource {
    fn fetch_document(&self) -> Result<String> {
        Ok(self.document.clone())
    }

    fn describe(&self) -> String {
        "<static>".to_string()
    }
}

#[derive(Debug, Deserialize)]
struct PapersDocument {
    #[serde(default)]
    papers: Vec<Paper>,
}

/// Fetches, decodes, and indexes the full record set.
pub fn load_papers<S: PaperSource>(source: &S, links: &LinkConfig) -> Result<PaperSet> {
    let raw = source.fetch_document()?;
    let doc: PapersDocument = serde_json::from_str(&raw).map_err(PaperdexError::Serialization)?;
    let papers = doc
        .papers
        .into_iter()
        .map(|mut paper| {
            paper.pdf_url = resolve_pdf_url(links, &paper.pdf_url);
            paper
        })
        .collect();
    Ok(PaperSet::from_papers(papers))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_and_indexes_papers() {
        let source = StaticSource::new(
            r#"{"papers": [
                {"id": "1", "title": "First", "date_modified": "2023-01-01", "pdf_url": "a.pdf"},
                {"id": "2", "title": "Second", "date_modified": "garbled", "pdf_url": "b.pdf"}
            ]}"#,
        );
        let set = load_papers(&source, &LinkConfig::default()).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.papers()[0].original_index, 0);
        assert!(set.papers()[0].sort_timestamp.is_some());
        assert!(set.papers()[1].sort_timestamp.is_none());
        assert_eq!(set.papers()[0].paper.pdf_url, "./papers/a.pdf");
    }

    #[test]
    fn missing_papers_field_is_empty_set() {
        let source = StaticSource::new(r#"{}"#);
        let set = load_papers(&source, &LinkConfig::default()).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn malformed_document_is_an_error() {
        let source = StaticSource::new("not json");
        assert!(load_papers(&source, &LinkConfig::default()).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(temp_dir.path().join("absent.json"));
        assert!(load_papers(&source, &LinkConfig::default()).is_err());
    }

    #[test]
    fn file_source_reads_document() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("papers.json");
        fs::write(&path, r#"{"papers": [{"id": "x", "title": "X"}]}"#).unwrap();
        let source = FileSource::new(&path);
        let set = load_papers(&source, &LinkConfig::default()).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.papers()[0].paper.id, "x");
    }
}
