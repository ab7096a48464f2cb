use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "moodlog")]
#[command(about = "Personal emotion diary from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Optional path to the local cache file
    #[arg(long, global = true, value_name = "PATH")]
    pub cache_path: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a new diary entry
    #[command(alias = "new")]
    Add {
        /// Entry date (YYYY-MM-DD, defaults to today)
        #[arg(long, value_name = "DATE")]
        date: Option<String>,
        /// Emotion on the 1-5 scale (1 = wonderful, 5 = awful)
        #[arg(short, long, default_value = "3")]
        emotion: u8,
        /// Entry content
        content: Vec<String>,
    },
    /// List entries, newest first
    List {
        /// Restrict to one month (YYYY-MM)
        #[arg(long, value_name = "MONTH")]
        month: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a single entry
    Show {
        /// Entry ID
        id: String,
    },
    /// Edit an existing entry
    Edit {
        /// Entry ID
        id: String,
        /// New entry date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        date: Option<String>,
        /// New emotion on the 1-5 scale
        #[arg(short, long)]
        emotion: Option<u8>,
        /// New entry content
        #[arg(long)]
        content: Option<String>,
    },
    /// Delete an entry
    Delete {
        /// Entry ID
        id: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
