//! Command line argument parsing for the Lectern CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::document::{DocumentId, DocumentStatus};
use crate::execution::ExecutionMode;

/// Lectern - an in-memory TF-IDF search engine
#[derive(Parser, Debug, Clone)]
#[command(name = "lectern")]
#[command(about = "Rank documents from a JSON-lines file against free-text queries")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LecternArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LecternArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Find the top documents for a query
    Search(SearchArgs),

    /// Show which query words a document contains
    Match(MatchArgs),

    /// Remove documents whose word sets duplicate an earlier document
    Dedup(DedupArgs),

    /// Run every query of a file (one per line)
    Batch(BatchArgs),
}

/// Options for building the engine, shared by every command
#[derive(Args, Debug, Clone)]
pub struct EngineArgs {
    /// Document file (JSON lines: {"id", "text", "status", "ratings"})
    #[arg(value_name = "DOCUMENT_FILE")]
    pub document_file: PathBuf,

    /// Space-separated stop words
    #[arg(short, long, default_value = "")]
    pub stop_words: String,

    /// Engine configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Use the parallel execution path
    #[arg(short, long)]
    pub parallel: bool,
}

impl EngineArgs {
    pub fn execution_mode(&self) -> ExecutionMode {
        if self.parallel {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Sequential
        }
    }
}

/// Arguments for searching
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub engine: EngineArgs,

    /// Query text
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Only return documents with this status
    #[arg(long, default_value = "active")]
    pub status: StatusArg,

    /// Print results in pages of this size
    #[arg(long)]
    pub page_size: Option<usize>,
}

/// Arguments for matching a single document
#[derive(Args, Debug, Clone)]
pub struct MatchArgs {
    #[command(flatten)]
    pub engine: EngineArgs,

    /// Query text
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Document id
    #[arg(value_name = "ID", allow_negative_numbers = true)]
    pub id: DocumentId,
}

/// Arguments for duplicate removal
#[derive(Args, Debug, Clone)]
pub struct DedupArgs {
    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Arguments for batch queries
#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub engine: EngineArgs,

    /// File with one query per line
    #[arg(value_name = "QUERY_FILE")]
    pub query_file: PathBuf,

    /// Print all results as a single list
    #[arg(long)]
    pub joined: bool,

    /// Print results in pages of this size
    #[arg(long)]
    pub page_size: Option<usize>,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Document status filter
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusArg {
    Active,
    Irrelevant,
    Banned,
    Removed,
}

impl From<StatusArg> for DocumentStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Active => DocumentStatus::Active,
            StatusArg::Irrelevant => DocumentStatus::Irrelevant,
            StatusArg::Banned => DocumentStatus::Banned,
            StatusArg::Removed => DocumentStatus::Removed,
        }
    }
}
