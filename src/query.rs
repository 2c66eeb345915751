//! Parsed search queries.
//!
//! A query is a set of plus-words (terms a hit should contain) and a set of
//! minus-words (terms that exclude a document outright). Words are borrowed
//! from the raw query text.

pub mod parser;

use std::collections::BTreeSet;

pub use parser::QueryParser;

/// One classified query token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryWord<'a> {
    /// Word text with any leading '-' stripped.
    pub text: &'a str,
    pub is_minus: bool,
    pub is_stop: bool,
}

/// Query in set form, used by the sequential code paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query<'a> {
    pub plus_words: BTreeSet<&'a str>,
    pub minus_words: BTreeSet<&'a str>,
}

/// Query in vector form for the parallel code paths, which need random access.
///
/// After [`normalize`](Self::normalize) both vectors are sorted and free of
/// duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParallelQuery<'a> {
    pub plus_words: Vec<&'a str>,
    pub minus_words: Vec<&'a str>,
}

impl<'a> ParallelQuery<'a> {
    /// Sort and deduplicate both word lists.
    pub fn normalize(&mut self) {
        for words in [&mut self.plus_words, &mut self.minus_words] {
            words.sort_unstable();
            words.dedup();
        }
    }
}
