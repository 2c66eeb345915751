//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::Serialize;

use crate::cli::args::{LecternArgs, OutputFormat};
use crate::document::{Document, DocumentId, DocumentStatus};
use crate::error::Result;

/// Results of a single search.
#[derive(Debug, Serialize)]
pub struct SearchOutput {
    pub query: String,
    pub documents: Vec<Document>,
    pub duration_ms: u64,
    #[serde(skip)]
    pub page_size: Option<usize>,
}

/// Results of matching one document.
#[derive(Debug, Serialize)]
pub struct MatchOutput {
    pub id: DocumentId,
    pub words: Vec<String>,
    pub status: DocumentStatus,
}

/// Results of duplicate removal.
#[derive(Debug, Serialize)]
pub struct DedupOutput {
    pub removed: Vec<DocumentId>,
    pub remaining: usize,
}

/// Results of a batch of searches.
#[derive(Debug, Serialize)]
pub struct BatchOutput {
    pub results: Vec<SearchOutput>,
}

/// Plain-text rendering of a command result.
pub trait HumanOutput: Serialize {
    fn render_human(&self) -> String;
}

impl HumanOutput for SearchOutput {
    fn render_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Results for \"{}\":", self.query);
        if self.documents.is_empty() {
            let _ = writeln!(out, "  no documents found");
            return out;
        }
        match self.page_size {
            Some(page_size) if page_size > 0 => {
                for (number, page) in self.documents.chunks(page_size).enumerate() {
                    let _ = writeln!(out, "Page {}", number + 1);
                    for document in page {
                        let _ = writeln!(out, "  {document}");
                    }
                }
            }
            _ => {
                for document in &self.documents {
                    let _ = writeln!(out, "  {document}");
                }
            }
        }
        out
    }
}

impl HumanOutput for MatchOutput {
    fn render_human(&self) -> String {
        format!(
            "{{ document_id = {}, status = {}, words = [{}] }}\n",
            self.id,
            self.status,
            self.words.join(", ")
        )
    }
}

impl HumanOutput for DedupOutput {
    fn render_human(&self) -> String {
        let mut out = String::new();
        for id in &self.removed {
            let _ = writeln!(out, "Found duplicate document id {id}");
        }
        let _ = writeln!(
            out,
            "Removed {} documents, {} remaining",
            self.removed.len(),
            self.remaining
        );
        out
    }
}

impl HumanOutput for BatchOutput {
    fn render_human(&self) -> String {
        self.results.iter().map(HumanOutput::render_human).collect()
    }
}

/// Render a result in the requested format.
pub fn format_result<T: HumanOutput>(result: &T, args: &LecternArgs) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => Ok(result.render_human()),
        OutputFormat::Json if args.pretty => Ok(serde_json::to_string_pretty(result)? + "\n"),
        OutputFormat::Json => Ok(serde_json::to_string(result)? + "\n"),
    }
}

/// Print a result in the requested format.
pub fn output_result<T: HumanOutput>(
    message: &str,
    result: &T,
    args: &LecternArgs,
) -> Result<()> {
    if args.output_format == OutputFormat::Human && args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    print!("{}", format_result(result, args)?);
    Ok(())
}
