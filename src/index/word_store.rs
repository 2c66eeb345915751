//! Canonical storage of indexed word text.
//!
//! Each distinct word is allocated once. The forward and reverse index hold
//! cheap [`Word`] handles to the same allocation instead of their own copies.

use std::sync::Arc;

use ahash::AHashSet;

/// Shared handle to a canonical word.
pub type Word = Arc<str>;

/// Deduplicated word storage.
#[derive(Debug, Default)]
pub struct WordStore {
    words: AHashSet<Word>,
}

impl WordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the canonical handle for `word`, allocating it on first use.
    pub fn intern(&mut self, word: &str) -> Word {
        if let Some(existing) = self.words.get(word) {
            return Arc::clone(existing);
        }
        let canonical: Word = Arc::from(word);
        self.words.insert(Arc::clone(&canonical));
        canonical
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Drop a word the index no longer refers to.
    ///
    /// Handles held outside the index stay valid, but a later [`intern`](Self::intern)
    /// of the same text allocates a new canonical word. Returns true if the
    /// word was stored.
    pub fn release(&mut self, word: &str) -> bool {
        self.words.remove(word)
    }
}
