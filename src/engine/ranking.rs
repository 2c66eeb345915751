//! TF-IDF relevance accumulation and result ordering.

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::concurrent::ShardedMap;
use crate::document::{Document, DocumentId, DocumentStatus};
use crate::index::inverted::InvertedIndex;
use crate::query::{ParallelQuery, Query};

/// Caller-supplied filter over candidate documents.
///
/// Implemented for any `Fn(DocumentId, DocumentStatus, i32) -> bool` and for
/// [`DocumentStatus`], which keeps only documents with exactly that status.
///
/// # Examples
///
/// ```
/// use lectern::document::DocumentStatus;
/// use lectern::engine::DocumentPredicate;
///
/// let even = |id: i32, _status: DocumentStatus, _rating: i32| id % 2 == 0;
/// assert!(even.matches(2, DocumentStatus::Banned, 0));
/// assert!(DocumentStatus::Banned.matches(3, DocumentStatus::Banned, 0));
/// assert!(!DocumentStatus::Active.matches(3, DocumentStatus::Banned, 0));
/// ```
pub trait DocumentPredicate: Sync {
    fn matches(&self, id: DocumentId, status: DocumentStatus, rating: i32) -> bool;
}

impl<F> DocumentPredicate for F
where
    F: Fn(DocumentId, DocumentStatus, i32) -> bool + Sync,
{
    fn matches(&self, id: DocumentId, status: DocumentStatus, rating: i32) -> bool {
        self(id, status, rating)
    }
}

impl DocumentPredicate for DocumentStatus {
    fn matches(&self, _id: DocumentId, status: DocumentStatus, _rating: i32) -> bool {
        status == *self
    }
}

/// Whether a posting for `id` may contribute relevance: no minus-word in the
/// document and the predicate accepts it.
fn admits<'q, P>(
    index: &InvertedIndex,
    id: DocumentId,
    mut minus_words: impl Iterator<Item = &'q str>,
    predicate: &P,
) -> bool
where
    P: DocumentPredicate + ?Sized,
{
    if minus_words.any(|word| index.document_contains(id, word)) {
        return false;
    }
    index
        .document(id)
        .is_some_and(|data| predicate.matches(id, data.status, data.rating))
}

/// Accumulate relevance on the calling thread.
pub(crate) fn relevance_sequential<P>(
    index: &InvertedIndex,
    query: &Query<'_>,
    predicate: &P,
) -> BTreeMap<DocumentId, f64>
where
    P: DocumentPredicate + ?Sized,
{
    let mut relevance = BTreeMap::new();
    for &word in &query.plus_words {
        let Some(postings) = index.postings(word) else {
            continue;
        };
        let Some(idf) = index.inverse_document_frequency(word) else {
            continue;
        };
        for (&id, &term_freq) in postings {
            if admits(index, id, query.minus_words.iter().copied(), predicate) {
                *relevance.entry(id).or_insert(0.0) += term_freq * idf;
            }
        }
    }
    relevance
}

/// Accumulate relevance with one task per plus-word on the current rayon pool.
pub(crate) fn relevance_parallel<P>(
    index: &InvertedIndex,
    query: &ParallelQuery<'_>,
    predicate: &P,
    shard_count: usize,
) -> BTreeMap<DocumentId, f64>
where
    P: DocumentPredicate + ?Sized,
{
    let relevance: ShardedMap<DocumentId, f64> = ShardedMap::new(shard_count);
    query.plus_words.par_iter().for_each(|&word| {
        let Some(postings) = index.postings(word) else {
            return;
        };
        let Some(idf) = index.inverse_document_frequency(word) else {
            return;
        };
        for (&id, &term_freq) in postings {
            if admits(index, id, query.minus_words.iter().copied(), predicate) {
                *relevance.access(id) += term_freq * idf;
            }
        }
    });
    relevance.into_ordinary_map()
}

/// Sort by relevance descending; relevances within `threshold` of each other
/// are ordered by rating descending instead.
///
/// Entries are first put in total relevance order, then each run of entries
/// lying within `threshold` of the run's first entry is reordered by rating.
pub fn sort_by_relevance(documents: &mut [Document], threshold: f64) {
    documents.sort_by(|lhs, rhs| {
        rhs.relevance
            .total_cmp(&lhs.relevance)
            .then_with(|| rhs.rating.cmp(&lhs.rating))
    });

    let mut start = 0;
    while start < documents.len() {
        let leader = documents[start].relevance;
        let run = documents[start..]
            .iter()
            .take_while(|doc| leader - doc.relevance < threshold)
            .count();
        let end = start + run;
        documents[start..end].sort_by(|lhs, rhs| rhs.rating.cmp(&lhs.rating));
        start = end;
    }
}
