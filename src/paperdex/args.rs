use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "paperdex")]
#[command(about = "Terminal browser for static paper archives", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Override the papers document location (path or http(s) URL)
    #[arg(long, global = true)]
    pub papers: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List papers
    #[command(alias = "ls")]
    List {
        /// Free-text search query
        #[arg(short, long)]
        search: Option<String>,

        /// Sort key: date-desc, date-asc, title-asc, title-desc
        #[arg(short = 'S', long)]
        sort: Option<String>,

        /// Show an abstract preview under each entry
        #[arg(long)]
        peek: bool,
    },

    /// View full records
    #[command(alias = "v")]
    View {
        /// Paper ids (e.g. 2024-03-doe-graphs)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Archive statistics
    Stats,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., papers-url)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
