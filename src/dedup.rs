//! Duplicate document detection.
//!
//! Two documents are duplicates when their sets of indexed words are equal.
//! Term frequencies, word order, repetition and stop words play no part. The
//! first document in insertion order is kept; later copies are removed.

use std::collections::BTreeSet;

use ahash::AHashSet;
use log::info;

use crate::document::DocumentId;
use crate::engine::SearchEngine;

/// Ids of documents whose word set already appeared earlier in insertion order.
pub fn find_duplicates(engine: &SearchEngine) -> Vec<DocumentId> {
    let mut seen: AHashSet<BTreeSet<&str>> = AHashSet::new();
    let mut duplicates = Vec::new();
    for id in engine {
        let words: BTreeSet<&str> = engine
            .word_frequencies(id)
            .keys()
            .map(|word| &**word)
            .collect();
        if !seen.insert(words) {
            duplicates.push(id);
        }
    }
    duplicates
}

/// Remove every duplicate document and return the removed ids in insertion order.
pub fn remove_duplicates(engine: &mut SearchEngine) -> Vec<DocumentId> {
    let duplicates = find_duplicates(engine);
    for &id in &duplicates {
        info!("Found duplicate document id {id}");
        engine.remove_document(id);
    }
    duplicates
}
