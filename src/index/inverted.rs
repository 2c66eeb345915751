//! Forward and reverse inverted index.
//!
//! The forward map answers "which documents contain this word, and with what
//! term frequency"; the reverse map answers the same per document. Both are
//! written only by [`InvertedIndex::insert`] and the two removal methods, so
//! for every `(word, document)` pair the two maps always agree on presence
//! and frequency.

use std::collections::BTreeMap;
use std::sync::Arc;

use rayon::prelude::*;

use crate::document::{DocumentData, DocumentId};
use crate::index::word_store::{Word, WordStore};

/// Term frequency per document for a single word.
pub type Postings = BTreeMap<DocumentId, f64>;

/// Term frequency per word for a single document.
pub type WordFrequencies = BTreeMap<Word, f64>;

static EMPTY_WORD_FREQUENCIES: WordFrequencies = BTreeMap::new();

/// In-memory inverted index with document metadata.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    words: WordStore,
    word_to_document_freqs: BTreeMap<Word, Postings>,
    document_to_word_freqs: BTreeMap<DocumentId, WordFrequencies>,
    documents: BTreeMap<DocumentId, DocumentData>,
    /// Document ids in insertion order.
    document_ids: Vec<DocumentId>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a document whose words are already validated and stop-word free.
    ///
    /// Each occurrence adds `1 / words.len()` to the word's term frequency.
    /// The caller guarantees `id` is not indexed yet.
    pub(crate) fn insert(&mut self, id: DocumentId, words: &[&str], data: DocumentData) {
        debug_assert!(!self.documents.contains_key(&id));

        let inv_word_count = 1.0 / words.len() as f64;
        let doc_freqs = self.document_to_word_freqs.entry(id).or_default();
        for &text in words {
            let word = self.words.intern(text);
            *self
                .word_to_document_freqs
                .entry(Arc::clone(&word))
                .or_default()
                .entry(id)
                .or_insert(0.0) += inv_word_count;
            *doc_freqs.entry(word).or_insert(0.0) += inv_word_count;
        }

        self.documents.insert(id, data);
        self.document_ids.push(id);
    }

    /// Remove a document, erasing its postings one word at a time.
    ///
    /// Returns false if the document was not indexed.
    pub(crate) fn remove(&mut self, id: DocumentId) -> bool {
        let Some(doc_freqs) = self.document_to_word_freqs.remove(&id) else {
            return false;
        };

        for word in doc_freqs.keys() {
            if let Some(postings) = self.word_to_document_freqs.get_mut(word) {
                postings.remove(&id);
            }
        }

        self.finish_removal(id, doc_freqs);
        true
    }

    /// Remove a document, splitting its word list across tasks on the current
    /// rayon pool.
    ///
    /// The postings of the document's words are detached from the forward map,
    /// so each task owns the postings it edits and no locking is needed. The
    /// cost depends on the document's word count, not the vocabulary size.
    pub(crate) fn remove_parallel(&mut self, id: DocumentId) -> bool {
        let Some(doc_freqs) = self.document_to_word_freqs.remove(&id) else {
            return false;
        };

        let mut detached: Vec<(Word, Postings)> = doc_freqs
            .keys()
            .filter_map(|word| self.word_to_document_freqs.remove_entry(word))
            .collect();
        detached.par_iter_mut().for_each(|(_, postings)| {
            postings.remove(&id);
        });
        self.word_to_document_freqs.extend(detached);

        self.finish_removal(id, doc_freqs);
        true
    }

    fn finish_removal(&mut self, id: DocumentId, doc_freqs: WordFrequencies) {
        for word in doc_freqs.keys() {
            if self
                .word_to_document_freqs
                .get(word)
                .is_some_and(|postings| postings.is_empty())
            {
                self.word_to_document_freqs.remove(word);
            }
            if !self.word_to_document_freqs.contains_key(word) {
                self.words.release(word);
            }
        }

        self.documents.remove(&id);
        if let Some(position) = self.document_ids.iter().position(|&doc_id| doc_id == id) {
            self.document_ids.remove(position);
        }
    }

    pub fn contains(&self, id: DocumentId) -> bool {
        self.documents.contains_key(&id)
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Number of distinct indexed words.
    pub fn word_count(&self) -> usize {
        self.word_to_document_freqs.len()
    }

    /// Number of canonical words held by the word store.
    pub fn stored_word_count(&self) -> usize {
        self.words.len()
    }

    pub(crate) fn document(&self, id: DocumentId) -> Option<&DocumentData> {
        self.documents.get(&id)
    }

    /// Document ids in insertion order.
    pub fn document_ids(&self) -> &[DocumentId] {
        &self.document_ids
    }

    /// Postings for `word`, if any document contains it.
    pub fn postings(&self, word: &str) -> Option<&Postings> {
        self.word_to_document_freqs.get(word)
    }

    /// Canonical handle for `word`, if it is indexed.
    pub fn word(&self, word: &str) -> Option<&Word> {
        self.word_to_document_freqs
            .get_key_value(word)
            .map(|(word, _)| word)
    }

    /// Word frequencies of a document; empty for an unknown id.
    pub fn word_frequencies(&self, id: DocumentId) -> &WordFrequencies {
        self.document_to_word_freqs
            .get(&id)
            .unwrap_or(&EMPTY_WORD_FREQUENCIES)
    }

    /// Whether document `id` contains `word`.
    pub fn document_contains(&self, id: DocumentId, word: &str) -> bool {
        self.document_to_word_freqs
            .get(&id)
            .is_some_and(|freqs| freqs.contains_key(word))
    }

    /// `ln(document_count / documents_containing(word))`, or None for an
    /// unindexed word.
    pub fn inverse_document_frequency(&self, word: &str) -> Option<f64> {
        let postings = self.postings(word)?;
        Some((self.document_count() as f64 / postings.len() as f64).ln())
    }

    /// Check that the forward and reverse maps mirror each other.
    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        let forward_pairs: usize = self.word_to_document_freqs.values().map(|p| p.len()).sum();
        let reverse_pairs: usize = self.document_to_word_freqs.values().map(|f| f.len()).sum();
        forward_pairs == reverse_pairs
            && self.document_to_word_freqs.iter().all(|(id, freqs)| {
                freqs.iter().all(|(word, freq)| {
                    self.word_to_document_freqs
                        .get(word)
                        .and_then(|postings| postings.get(id))
                        == Some(freq)
                })
            })
            && self.word_to_document_freqs.values().all(|p| !p.is_empty())
            && self.documents.len() == self.document_ids.len()
    }
}
