//! Command implementations for the Lectern CLI.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use log::{debug, info};
use serde::Deserialize;

use crate::analysis::stop::StopWords;
use crate::batch::{process_queries, process_queries_joined};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::EngineConfig;
use crate::dedup::remove_duplicates;
use crate::document::{DocumentId, DocumentStatus};
use crate::engine::SearchEngine;
use crate::error::{LecternError, Result};

/// One line of a document file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DocumentRecord {
    pub id: DocumentId,
    pub text: String,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default)]
    pub ratings: Vec<i32>,
}

/// Execute a CLI command.
pub fn execute_command(args: LecternArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => search(search_args, &args),
        Command::Match(match_args) => match_document(match_args, &args),
        Command::Dedup(dedup_args) => dedup(dedup_args, &args),
        Command::Batch(batch_args) => batch(batch_args, &args),
    }
}

/// Read a JSON-lines document file. Blank lines are skipped.
pub fn load_documents(path: &Path) -> Result<Vec<DocumentRecord>> {
    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: DocumentRecord = serde_json::from_str(&line).map_err(|e| {
            LecternError::invalid_argument(format!(
                "{}:{}: invalid document record: {e}",
                path.display(),
                number + 1
            ))
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Read an engine configuration file.
pub fn load_config(path: &Path) -> Result<EngineConfig> {
    let config: EngineConfig = serde_json::from_str(&fs::read_to_string(path)?)?;
    config.validate()?;
    Ok(config)
}

/// Build an engine and index every document of the document file.
pub fn build_engine(args: &EngineArgs) -> Result<SearchEngine> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => EngineConfig::default(),
    };
    let mut engine = SearchEngine::with_config(config, StopWords::from_text(&args.stop_words)?)?;

    let records = load_documents(&args.document_file)?;
    for record in &records {
        engine.add_document(record.id, &record.text, record.status, &record.ratings)?;
    }
    info!(
        "Indexed {} documents from {}",
        engine.document_count(),
        args.document_file.display()
    );
    Ok(engine)
}

fn search(args: &SearchArgs, cli_args: &LecternArgs) -> Result<()> {
    let engine = build_engine(&args.engine)?;
    let status = DocumentStatus::from(args.status);

    let start_time = Instant::now();
    let documents =
        engine.find_top_documents_in(args.engine.execution_mode(), &args.query, status)?;
    let duration = start_time.elapsed();
    debug!("Search took {duration:?}");

    output_result(
        "Search completed",
        &SearchOutput {
            query: args.query.clone(),
            documents,
            duration_ms: duration.as_millis() as u64,
            page_size: args.page_size,
        },
        cli_args,
    )
}

fn match_document(args: &MatchArgs, cli_args: &LecternArgs) -> Result<()> {
    let engine = build_engine(&args.engine)?;
    let (words, status) =
        engine.match_document_in(args.engine.execution_mode(), &args.query, args.id)?;

    output_result(
        "Match completed",
        &MatchOutput {
            id: args.id,
            words: words.iter().map(|word| word.to_string()).collect(),
            status,
        },
        cli_args,
    )
}

fn dedup(args: &DedupArgs, cli_args: &LecternArgs) -> Result<()> {
    let mut engine = build_engine(&args.engine)?;
    let removed = remove_duplicates(&mut engine);

    output_result(
        "Duplicate removal completed",
        &DedupOutput {
            removed,
            remaining: engine.document_count(),
        },
        cli_args,
    )
}

fn batch(args: &BatchArgs, cli_args: &LecternArgs) -> Result<()> {
    let engine = build_engine(&args.engine)?;
    let queries: Vec<String> = fs::read_to_string(&args.query_file)?
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect();

    let start_time = Instant::now();
    let results = if args.joined {
        vec![SearchOutput {
            query: queries.join(" | "),
            documents: process_queries_joined(&engine, &queries)?,
            duration_ms: 0,
            page_size: args.page_size,
        }]
    } else {
        process_queries(&engine, &queries)?
            .into_iter()
            .zip(&queries)
            .map(|(documents, query)| SearchOutput {
                query: query.clone(),
                documents,
                duration_ms: 0,
                page_size: args.page_size,
            })
            .collect()
    };
    debug!("Batch of {} queries took {:?}", queries.len(), start_time.elapsed());

    output_result("Batch completed", &BatchOutput { results }, cli_args)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use tempfile::NamedTempFile;

    fn document_file(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file
    }

    #[test]
    fn test_load_documents_defaults() {
        let file = document_file(&[
            r#"{"id": 1, "text": "funny pet", "status": "banned", "ratings": [1, 2]}"#,
            "",
            r#"{"id": 2, "text": "curly hair"}"#,
        ]);
        let records = load_documents(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].status, DocumentStatus::Banned);
        assert_eq!(records[1].status, DocumentStatus::Active);
        assert!(records[1].ratings.is_empty());
    }

    #[test]
    fn test_load_documents_reports_line() {
        let file = document_file(&[r#"{"id": 1, "text": "ok"}"#, "not json"]);
        let err = load_documents(file.path()).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains(":2:"));
    }

    #[test]
    fn test_build_engine_with_config() {
        let documents = document_file(&[
            r#"{"id": 1, "text": "funny pet and nasty rat", "ratings": [1, 2]}"#,
            r#"{"id": 2, "text": "funny pet with curly hair", "ratings": [1, 2]}"#,
        ]);
        let mut config = NamedTempFile::new().unwrap();
        write!(config, r#"{{"max_result_document_count": 1, "thread_pool_size": 1}}"#).unwrap();

        let args = EngineArgs {
            document_file: documents.path().to_path_buf(),
            stop_words: "and with".to_string(),
            config: Some(config.path().to_path_buf()),
            parallel: false,
        };
        let engine = build_engine(&args).unwrap();
        assert_eq!(engine.document_count(), 2);
        assert_eq!(engine.config().max_result_document_count, 1);
        assert_eq!(engine.find_top_documents("funny pet").unwrap().len(), 1);
    }

    #[test]
    fn test_build_engine_rejects_duplicate_ids() {
        let documents = document_file(&[
            r#"{"id": 1, "text": "cat"}"#,
            r#"{"id": 1, "text": "dog"}"#,
        ]);
        let args = EngineArgs {
            document_file: documents.path().to_path_buf(),
            stop_words: String::new(),
            config: None,
            parallel: false,
        };
        assert!(build_engine(&args).unwrap_err().is_invalid_argument());
    }
}
