//! PDF locator resolution.
//!
//! Maps the raw `pdf_url` stored in a record to a final fetchable URL, given
//! where the archive is hosted. Pure string mapping; applied once per record
//! at load time.

/// Where PDF links should point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkConfig {
    /// Base URL prepended to bare filenames when not using GitHub raw.
    pub pdf_base_url: String,
    /// When set, links are rewritten to raw.githubusercontent.com.
    pub github_raw: Option<GithubRaw>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubRaw {
    pub user: String,
    pub repo: String,
    pub branch: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            pdf_base_url: "./papers/".to_string(),
            github_raw: None,
        }
    }
}

/// Resolves a raw locator to a final URL.
///
/// Absolute http(s) URLs pass through unchanged. With a GitHub-raw mirror
/// configured, the path is normalized (leading slash and `papers/` prefix
/// stripped) and pointed at the mirror. Otherwise `/papers/...` passes
/// through, `papers/...` becomes explicitly relative, and a bare filename
/// gets the base URL prepended.
pub fn resolve_pdf_url(config: &LinkConfig, raw: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        return raw.to_string();
    }

    if let Some(gh) = &config.github_raw {
        let clean = raw.strip_prefix('/').unwrap_or(raw);
        let clean = clean.strip_prefix("papers/").unwrap_or(clean);
        return format!(
            "https://raw.githubusercontent.com/{}/{}/{}/papers/{}",
            gh.user, gh.repo, gh.branch, clean
        );
    }

    if raw.starts_with("/papers/") {
        raw.to_string()
    } else if raw.starts_with("papers/") {
        format!("./{}", raw)
    } else {
        format!("{}{}", config.pdf_base_url, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn github_config() -> LinkConfig {
        LinkConfig {
            pdf_base_url: "./papers/".into(),
            github_raw: Some(GithubRaw {
                user: "cgew92".into(),
                repo: "armpub".into(),
                branch: "main".into(),
            }),
        }
    }

    #[test]
    fn absolute_urls_pass_through() {
        let config = github_config();
        assert_eq!(
            resolve_pdf_url(&config, "https://example.org/x.pdf"),
            "https://example.org/x.pdf"
        );
        assert_eq!(
            resolve_pdf_url(&LinkConfig::default(), "http://example.org/x.pdf"),
            "http://example.org/x.pdf"
        );
    }

    #[test]
    fn github_raw_strips_prefixes() {
        let config = github_config();
        let expected = "https://raw.githubusercontent.com/cgew92/armpub/main/papers/x.pdf";
        assert_eq!(resolve_pdf_url(&config, "x.pdf"), expected);
        assert_eq!(resolve_pdf_url(&config, "papers/x.pdf"), expected);
        assert_eq!(resolve_pdf_url(&config, "/papers/x.pdf"), expected);
    }

    #[test]
    fn local_paths_follow_hosting_rules() {
        let config = LinkConfig::default();
        assert_eq!(resolve_pdf_url(&config, "/papers/x.pdf"), "/papers/x.pdf");
        assert_eq!(resolve_pdf_url(&config, "papers/x.pdf"), "./papers/x.pdf");
        assert_eq!(resolve_pdf_url(&config, "x.pdf"), "./papers/x.pdf");
    }

    #[test]
    fn custom_base_url_is_prepended_to_bare_filenames() {
        let config = LinkConfig {
            pdf_base_url: "https://cdn.example.org/pdfs/".into(),
            github_raw: None,
        };
        assert_eq!(
            resolve_pdf_url(&config, "x.pdf"),
            "https://cdn.example.org/pdfs/x.pdf"
        );
    }
}
