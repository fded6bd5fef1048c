use crate::error::{PaperdexError, Result};
use crate::resolve::{GithubRaw, LinkConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PAPERS_URL: &str = "./papers/papers.json";
const DEFAULT_PDF_BASE: &str = "./papers/";
const DEFAULT_BRANCH: &str = "main";

/// Configuration for paperdex, stored in .paperdex/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaperdexConfig {
    /// Location of the papers document (path or http(s) URL)
    #[serde(default = "default_papers_url")]
    pub papers_json_url: String,

    /// Base URL prepended to bare PDF filenames
    #[serde(default = "default_pdf_base")]
    pub pdf_base_url: String,

    /// Fetch the document and PDFs from raw.githubusercontent.com instead
    #[serde(default)]
    pub use_github_raw: bool,

    #[serde(default)]
    pub github_user: String,

    #[serde(default)]
    pub github_repo: String,

    #[serde(default = "default_branch")]
    pub github_branch: String,
}

fn default_papers_url() -> String {
    DEFAULT_PAPERS_URL.to_string()
}

fn default_pdf_base() -> String {
    DEFAULT_PDF_BASE.to_string()
}

fn default_branch() -> String {
    DEFAULT_BRANCH.to_string()
}

impl Default for PaperdexConfig {
    fn default() -> Self {
        Self {
            papers_json_url: default_papers_url(),
            pdf_base_url: default_pdf_base(),
            use_github_raw: false,
            github_user: String::new(),
            github_repo: String::new(),
            github_branch: default_branch(),
        }
    }
}

impl PaperdexConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PaperdexError::Io)?;
        let config: PaperdexConfig =
            serde_json::from_str(&content).map_err(PaperdexError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PaperdexError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PaperdexError::Serialization)?;
        fs::write(config_path, content).map_err(PaperdexError::Io)?;
        Ok(())
    }

    /// Where the papers document is fetched from, honoring the GitHub-raw
    /// mirror toggle.
    pub fn papers_url(&self) -> String {
        if self.use_github_raw {
            format!(
                "https://raw.githubusercontent.com/{}/{}/{}/papers/papers.json",
                self.github_user, self.github_repo, self.github_branch
            )
        } else {
            self.papers_json_url.clone()
        }
    }

    pub fn link_config(&self) -> LinkConfig {
        LinkConfig {
            pdf_base_url: self.pdf_base_url.clone(),
            github_raw: if self.use_github_raw {
                Some(GithubRaw {
                    user: self.github_user.clone(),
                    repo: self.github_repo.clone(),
                    branch: self.github_branch.clone(),
                })
            } else {
                None
            },
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "papers-url" => Some(self.papers_json_url.clone()),
            "pdf-base" => Some(self.pdf_base_url.clone()),
            "github-raw" => Some(self.use_github_raw.to_string()),
            "github-user" => Some(self.github_user.clone()),
            "github-repo" => Some(self.github_repo.clone()),
            "github-branch" => Some(self.github_branch.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "papers-url" => self.papers_json_url = value.to_string(),
            "pdf-base" => self.pdf_base_url = value.to_string(),
            "github-raw" => {
                self.use_github_raw = value
                    .parse()
                    .map_err(|_| format!("Invalid boolean for github-raw: {}", value))?;
            }
            "github-user" => self.github_user = value.to_string(),
            "github-repo" => self.github_repo = value.to_string(),
            "github-branch" => self.github_branch = value.to_string(),
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }
}
