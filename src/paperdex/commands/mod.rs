use crate::config::PaperdexConfig;
use crate::model::LoadedPaper;
use crate::stats::ArchiveStats;

pub mod config;
pub mod list;
pub mod stats;
pub mod view;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_papers: Vec<LoadedPaper>,
    pub stats: Option<ArchiveStats>,
    pub config: Option<PaperdexConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_papers(mut self, papers: Vec<LoadedPaper>) -> Self {
        self.listed_papers = papers;
        self
    }

    pub fn with_stats(mut self, stats: ArchiveStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_config(mut self, config: PaperdexConfig) -> Self {
        self.config = Some(config);
        self
    }
}
