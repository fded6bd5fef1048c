//! # API Facade
//!
//! The single entry point for all paperdex operations, regardless of the UI
//! in front of it. The facade owns the loaded [`PaperSet`] and dispatches to
//! `commands/*`. State is held here and passed into the pure command
//! functions, never kept in module globals.
//!
//! ## Generic Over PaperSource
//!
//! `PaperdexApi<S: PaperSource>` is generic over the document origin:
//! - Production: `PaperdexApi<FileSource>` or `PaperdexApi<HttpSource>`
//! - Testing: `PaperdexApi<StaticSource>`
//!
//! ## Load Semantics
//!
//! `load` is attempted once per call and replaces the set wholesale. A fetch
//! or parse failure leaves an empty set and surfaces a warning message; it
//! is not an `Err`, so the caller can still present the empty state.

use crate::commands;
use crate::error::Result;
use crate::model::{PaperSet, SortKey};
use crate::resolve::LinkConfig;
use crate::source::{self, PaperSource};

pub struct PaperdexApi<S: PaperSource> {
    source: S,
    links: LinkConfig,
    set: PaperSet,
}

impl<S: PaperSource> PaperdexApi<S> {
    pub fn new(source: S, links: LinkConfig) -> Self {
        Self {
            source,
            links,
            set: PaperSet::default(),
        }
    }

    /// Fetch and replace the full record set. On failure the set becomes
    /// empty and the result carries a warning.
    pub fn load(&mut self) -> CmdResult {
        let mut result = CmdResult::default();
        match source::load_papers(&self.source, &self.links) {
            Ok(set) => {
                result.add_message(CmdMessage::info(format!(
                    "Loaded {} papers from {}",
                    set.len(),
                    self.source.describe()
                )));
                self.set = set;
            }
            Err(e) => {
                self.set = PaperSet::default();
                result.add_message(CmdMessage::warning(format!(
                    "Could not load papers from {}: {}",
                    self.source.describe(),
                    e
                )));
            }
        }
        result
    }

    pub fn list_papers(&self, query: &str, key: SortKey) -> Result<CmdResult> {
        commands::list::run(&self.set, query, key)
    }

    pub fn view_paper(&self, id: &str) -> Result<CmdResult> {
        commands::view::run(&self.set, id)
    }

    pub fn stats(&self) -> Result<CmdResult> {
        commands::stats::run(&self.set)
    }

    pub fn paper_count(&self) -> usize {
        self.set.len()
    }

    pub fn paper_set(&self) -> &PaperSet {
        &self.set
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
