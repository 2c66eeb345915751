//! The search engine: indexing, ranking, matching and removal.
//!
//! # Examples
//!
//! ```
//! use lectern::document::DocumentStatus;
//! use lectern::engine::SearchEngine;
//!
//! let mut engine = SearchEngine::new("and with").unwrap();
//! engine
//!     .add_document(1, "funny pet and nasty rat", DocumentStatus::Active, &[7, 2, 7])
//!     .unwrap();
//! engine
//!     .add_document(2, "funny pet with curly hair", DocumentStatus::Active, &[1, 2])
//!     .unwrap();
//!
//! let hits = engine.find_top_documents("curly -rat").unwrap();
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].id, 2);
//! ```

pub mod ranking;

use std::iter::Copied;
use std::slice;
use std::sync::Arc;

use log::debug;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::analysis::stop::StopWords;
use crate::analysis::tokenizer::{is_valid_word, split_into_words};
use crate::config::EngineConfig;
use crate::document::{Document, DocumentData, DocumentId, DocumentStatus, average_rating};
use crate::error::{LecternError, Result};
use crate::execution::ExecutionMode;
use crate::index::inverted::{InvertedIndex, WordFrequencies};
use crate::index::word_store::Word;
use crate::query::QueryParser;

pub use ranking::{DocumentPredicate, sort_by_relevance};

/// Iterator over document ids in insertion order.
pub type DocumentIds<'a> = Copied<slice::Iter<'a, DocumentId>>;

/// In-memory TF-IDF search engine.
///
/// Mutation takes `&mut self`; searching and matching take `&self` and may
/// run concurrently with each other.
#[derive(Debug)]
pub struct SearchEngine {
    config: EngineConfig,
    stop_words: StopWords,
    index: InvertedIndex,
    thread_pool: Arc<ThreadPool>,
}

impl SearchEngine {
    /// Create an engine with default configuration and space-separated stop words.
    pub fn new(stop_words: &str) -> Result<Self> {
        Self::with_config(EngineConfig::default(), StopWords::from_text(stop_words)?)
    }

    /// Create an engine with default configuration from a collection of stop words.
    pub fn with_stop_words<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(EngineConfig::default(), StopWords::from_words(stop_words)?)
    }

    /// Create an engine with an explicit configuration.
    pub fn with_config(config: EngineConfig, stop_words: StopWords) -> Result<Self> {
        config.validate()?;

        let thread_pool_size = config.thread_pool_size.unwrap_or_else(num_cpus::get);
        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(thread_pool_size)
            .thread_name(|i| format!("lectern-worker-{i}"))
            .build()
            .map_err(|e| LecternError::internal(format!("Failed to create thread pool: {e}")))?;
        debug!("Created thread pool with {thread_pool_size} threads");

        Ok(SearchEngine {
            config,
            stop_words,
            index: InvertedIndex::new(),
            thread_pool: Arc::new(thread_pool),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// The pool that runs [`ExecutionMode::Parallel`] work.
    pub fn thread_pool(&self) -> &ThreadPool {
        &self.thread_pool
    }

    /// Add space-separated stop words. Already indexed documents are not re-indexed.
    pub fn set_stop_words(&mut self, text: &str) -> Result<()> {
        self.stop_words.extend_from_text(text)
    }

    /// Index a document.
    ///
    /// Fails with [`LecternError::InvalidArgument`] if `id` is negative or
    /// already indexed, or if a word contains a control character. Nothing is
    /// written to the index when validation fails.
    pub fn add_document(
        &mut self,
        id: DocumentId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        if id < 0 {
            return Err(LecternError::invalid_argument(format!(
                "document id {id} is negative"
            )));
        }
        if self.index.contains(id) {
            return Err(LecternError::invalid_argument(format!(
                "document id {id} already exists"
            )));
        }

        let words = self.split_into_words_no_stop(id, text)?;
        let data = DocumentData {
            rating: average_rating(ratings),
            status,
        };
        self.index.insert(id, &words, data);
        debug!("Indexed document {id} with {} words", words.len());
        Ok(())
    }

    fn split_into_words_no_stop<'t>(&self, id: DocumentId, text: &'t str) -> Result<Vec<&'t str>> {
        let mut words = Vec::new();
        for word in split_into_words(text) {
            if !is_valid_word(word) {
                return Err(LecternError::invalid_argument(format!(
                    "document {id}: control character in word \"{}\"",
                    word.escape_debug()
                )));
            }
            if !self.stop_words.is_stop_word(word) {
                words.push(word);
            }
        }
        Ok(words)
    }

    /// Top documents with [`DocumentStatus::Active`].
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_with(raw_query, DocumentStatus::Active)
    }

    /// Top documents accepted by `predicate`; pass a [`DocumentStatus`] to
    /// filter by exact status.
    pub fn find_top_documents_with<P>(&self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: DocumentPredicate,
    {
        self.find_top_documents_in(ExecutionMode::Sequential, raw_query, predicate)
    }

    /// Top documents accepted by `predicate`, computed in the given mode.
    ///
    /// Results are sorted by relevance descending (ties within the configured
    /// threshold by rating descending) and truncated to the configured count.
    pub fn find_top_documents_in<P>(
        &self,
        mode: ExecutionMode,
        raw_query: &str,
        predicate: P,
    ) -> Result<Vec<Document>>
    where
        P: DocumentPredicate,
    {
        let parser = QueryParser::new(&self.stop_words);
        let relevance = match mode {
            ExecutionMode::Sequential => {
                let query = parser.parse(raw_query)?;
                ranking::relevance_sequential(&self.index, &query, &predicate)
            }
            ExecutionMode::Parallel => {
                let query = parser.parse_parallel(raw_query)?;
                let shard_count = self.config.shard_count;
                self.thread_pool.install(|| {
                    ranking::relevance_parallel(&self.index, &query, &predicate, shard_count)
                })
            }
        };

        let mut documents: Vec<Document> = relevance
            .into_iter()
            .filter_map(|(id, relevance)| {
                self.index
                    .document(id)
                    .map(|data| Document::new(id, relevance, data.rating))
            })
            .collect();
        sort_by_relevance(&mut documents, self.config.relevance_threshold);
        documents.truncate(self.config.max_result_document_count);
        Ok(documents)
    }

    /// Plus-words of the query found in document `id`, plus its status.
    ///
    /// The word list is empty if the document contains any minus-word.
    /// Fails with [`LecternError::NotFound`] for an unknown id.
    pub fn match_document(
        &self,
        raw_query: &str,
        id: DocumentId,
    ) -> Result<(Vec<Word>, DocumentStatus)> {
        self.match_document_in(ExecutionMode::Sequential, raw_query, id)
    }

    /// [`match_document`](Self::match_document) in the given mode.
    pub fn match_document_in(
        &self,
        mode: ExecutionMode,
        raw_query: &str,
        id: DocumentId,
    ) -> Result<(Vec<Word>, DocumentStatus)> {
        let parser = QueryParser::new(&self.stop_words);
        match mode {
            ExecutionMode::Sequential => {
                let query = parser.parse(raw_query)?;
                let status = self.status_of(id)?;
                let freqs = self.index.word_frequencies(id);

                if query.minus_words.iter().any(|word| freqs.contains_key(*word)) {
                    return Ok((Vec::new(), status));
                }
                let words: Vec<Word> = query
                    .plus_words
                    .iter()
                    .filter_map(|word| freqs.get_key_value(*word).map(|(w, _)| Arc::clone(w)))
                    .collect();
                Ok((words, status))
            }
            ExecutionMode::Parallel => {
                let query = parser.parse_parallel(raw_query)?;
                let status = self.status_of(id)?;
                let freqs = self.index.word_frequencies(id);

                let words = self.thread_pool.install(|| {
                    if query
                        .minus_words
                        .par_iter()
                        .any(|word| freqs.contains_key(*word))
                    {
                        return Vec::new();
                    }
                    let mut words: Vec<Word> = query
                        .plus_words
                        .par_iter()
                        .filter_map(|word| freqs.get_key_value(*word).map(|(w, _)| Arc::clone(w)))
                        .collect();
                    words.par_sort_unstable();
                    words.dedup();
                    words
                });
                Ok((words, status))
            }
        }
    }

    fn status_of(&self, id: DocumentId) -> Result<DocumentStatus> {
        self.index
            .document(id)
            .map(|data| data.status)
            .ok_or_else(|| LecternError::not_found(format!("document {id}")))
    }

    /// Remove a document. Unknown ids are ignored.
    ///
    /// Returns true if a document was removed.
    pub fn remove_document(&mut self, id: DocumentId) -> bool {
        self.remove_document_in(ExecutionMode::Sequential, id)
    }

    /// [`remove_document`](Self::remove_document) in the given mode.
    pub fn remove_document_in(&mut self, mode: ExecutionMode, id: DocumentId) -> bool {
        let removed = match mode {
            ExecutionMode::Sequential => self.index.remove(id),
            ExecutionMode::Parallel => {
                let index = &mut self.index;
                self.thread_pool.install(|| index.remove_parallel(id))
            }
        };
        if removed {
            debug!("Removed document {id}");
        }
        removed
    }

    /// Word frequencies of a document; empty for an unknown id.
    pub fn word_frequencies(&self, id: DocumentId) -> &WordFrequencies {
        self.index.word_frequencies(id)
    }

    pub fn document_count(&self) -> usize {
        self.index.document_count()
    }

    /// Number of distinct indexed words.
    pub fn word_count(&self) -> usize {
        self.index.word_count()
    }

    /// Document ids in insertion order.
    pub fn document_ids(&self) -> DocumentIds<'_> {
        self.index.document_ids().iter().copied()
    }
}

impl<'a> IntoIterator for &'a SearchEngine {
    type Item = DocumentId;
    type IntoIter = DocumentIds<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.document_ids()
    }
}
