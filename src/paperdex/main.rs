use chrono::Utc;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use paperdex::api::{ConfigAction, PaperdexApi};
use paperdex::commands::{CmdMessage, MessageLevel};
use paperdex::config::PaperdexConfig;
use paperdex::error::{PaperdexError, Result};
use paperdex::model::{LoadedPaper, SortKey};
use paperdex::source::{FileSource, HttpSource, PaperSource};
use std::path::PathBuf;
use std::str::FromStr;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

mod args;
use args::{Cli, Commands};

const TIME_WIDTH: usize = 14;
const PREVIEW_WORDS: usize = 50;

const CONFIG_KEYS: &[&str] = &[
    "papers-url",
    "pdf-base",
    "github-raw",
    "github-user",
    "github-repo",
    "github-branch",
];

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: PaperdexApi<Box<dyn PaperSource>>,
    config_dir: PathBuf,
    verbose: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { search, sort, peek }) => handle_list(&mut ctx, search, sort, peek),
        Some(Commands::View { ids }) => handle_view(&mut ctx, ids),
        Some(Commands::Stats) => handle_stats(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&mut ctx, None, None, false),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let project_dir = cwd.join(".paperdex");

    let config_dir = if project_dir.exists() {
        project_dir
    } else {
        let proj_dirs = ProjectDirs::from("com", "paperdex", "paperdex")
            .ok_or_else(|| PaperdexError::Api("Could not determine config dir".to_string()))?;
        proj_dirs.config_dir().to_path_buf()
    };

    let config = PaperdexConfig::load(&config_dir).unwrap_or_default();
    let location = cli
        .papers
        .clone()
        .unwrap_or_else(|| config.papers_url());

    let source: Box<dyn PaperSource> =
        if location.starts_with("http://") || location.starts_with("https://") {
            Box::new(HttpSource::new(location))
        } else {
            Box::new(FileSource::new(location))
        };

    let api = PaperdexApi::new(source, config.link_config());

    Ok(AppContext {
        api,
        config_dir,
        verbose: cli.verbose,
    })
}

fn load_and_report(ctx: &mut AppContext) {
    let result = ctx.api.load();
    print_messages(&result.messages, ctx.verbose);
}

fn handle_list(
    ctx: &mut AppContext,
    search: Option<String>,
    sort: Option<String>,
    peek: bool,
) -> Result<()> {
    let key = match sort {
        Some(raw) => SortKey::from_str(&raw).map_err(PaperdexError::Api)?,
        None => SortKey::default(),
    };
    load_and_report(ctx);

    let query = search.unwrap_or_default();
    let result = ctx.api.list_papers(&query, key)?;
    print_papers(&result.listed_papers, peek);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    load_and_report(ctx);

    let mut papers = Vec::with_capacity(ids.len());
    for id in &ids {
        let result = ctx.api.view_paper(id)?;
        papers.extend(result.listed_papers);
    }
    print_full_papers(&papers);
    Ok(())
}

fn handle_stats(ctx: &mut AppContext) -> Result<()> {
    load_and_report(ctx);

    let result = ctx.api.stats()?;
    if let Some(stats) = result.stats {
        println!("Papers:  {}", stats.papers.to_string().bold());
        println!("Authors: {}", stats.authors.to_string().bold());
        println!("Fields:  {}", stats.fields.to_string().bold());
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = paperdex::commands::config::run(&ctx.config_dir, action)?;
    if let Some(config) = &result.config {
        for &key in CONFIG_KEYS {
            if let Some(value) = config.get(key) {
                println!("{}: {}", key.dimmed(), value);
            }
        }
    }
    print_messages(&result.messages, true);
    Ok(())
}

fn print_messages(messages: &[CmdMessage], verbose: bool) {
    for message in messages {
        match message.level {
            MessageLevel::Info => {
                if verbose {
                    println!("{}", message.content.dimmed())
                }
            }
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_papers(papers: &[LoadedPaper], peek: bool) {
    if papers.is_empty() {
        println!("No papers found.");
        return;
    }

    let line_width = terminal_width();

    for (i, lp) in papers.iter().enumerate() {
        let idx_str = format!("{}. ", i + 1);

        let authors = lp.paper.authors_line();
        let heading = if authors.is_empty() {
            lp.paper.title.clone()
        } else {
            format!("{} ({})", lp.paper.title, authors)
        };

        let fixed_width = idx_str.width() + TIME_WIDTH + 2;
        let available = line_width.saturating_sub(fixed_width);
        let heading_display = truncate_to_width(&heading, available);
        let padding = available.saturating_sub(heading_display.width());

        println!(
            "{}{}{}  {}",
            idx_str,
            heading_display,
            " ".repeat(padding),
            format_date(lp).dimmed()
        );

        if peek {
            let (preview, truncated) = lp.paper.abstract_preview(PREVIEW_WORDS);
            if !preview.is_empty() {
                let suffix = if truncated { "…" } else { "" };
                println!("   {}{}", preview.dimmed(), suffix);
            }
        }
    }
}

fn print_full_papers(papers: &[LoadedPaper]) {
    for (i, lp) in papers.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!("{} {}", lp.paper.id.yellow(), lp.paper.title.bold());
        let authors = lp.paper.authors_line();
        if !authors.is_empty() {
            println!("By: {}", authors);
        }
        println!("Last modified: {}", format_date(lp));
        if !lp.paper.keywords.is_empty() {
            println!("Keywords: {}", lp.paper.keywords.join(", "));
        }
        println!("--------------------------------");
        println!("{}", lp.paper.abstract_text);
        if !lp.paper.pdf_url.is_empty() {
            println!();
            println!("PDF: {}", lp.paper.pdf_url.underline());
        }
    }
}

fn terminal_width() -> usize {
    let (_, cols) = console::Term::stdout().size();
    (cols as usize).clamp(60, 120)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

/// Relative time for parseable dates, the raw source string otherwise.
fn format_date(lp: &LoadedPaper) -> String {
    match lp.sort_timestamp {
        Some(ts) => {
            let elapsed = (Utc::now().timestamp() - ts).max(0) as u64;
            let formatter = timeago::Formatter::new();
            let time_str = formatter.convert(std::time::Duration::from_secs(elapsed));
            format!("{:>width$}", time_str, width = TIME_WIDTH)
        }
        None => {
            let raw = lp.paper.date_modified.trim();
            let fallback = if raw.is_empty() { "undated" } else { raw };
            format!("{:>width$}", fallback, width = TIME_WIDTH)
        }
    }
}
