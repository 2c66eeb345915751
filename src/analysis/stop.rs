//! Stop-word set.
//!
//! Stop words are dropped from documents before indexing and from queries
//! before classification. Every stop word must itself be a valid word, so a
//! control character anywhere in the configured list is rejected.
//!
//! # Examples
//!
//! ```
//! use lectern::analysis::stop::StopWords;
//!
//! let mut stop_words = StopWords::from_text("and  with").unwrap();
//! assert!(stop_words.is_stop_word("and"));
//! assert!(!stop_words.is_stop_word("cat"));
//!
//! stop_words.extend_from_text("in").unwrap();
//! assert_eq!(stop_words.len(), 3);
//! ```

use ahash::AHashSet;

use crate::analysis::tokenizer::{is_valid_word, split_into_words};
use crate::error::{LecternError, Result};

/// A normalized set of words excluded from indexing and querying.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: AHashSet<String>,
}

impl StopWords {
    /// Create an empty stop-word set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a stop-word set from space-separated text.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_words(split_into_words(text))
    }

    /// Build a stop-word set from any collection of words.
    ///
    /// Empty entries are skipped. Fails if any word contains a control character.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stop_words = Self::new();
        stop_words.extend(words)?;
        Ok(stop_words)
    }

    /// Add the space-separated words of `text` to the set.
    pub fn extend_from_text(&mut self, text: &str) -> Result<()> {
        self.extend(split_into_words(text))
    }

    /// Add words to the set.
    ///
    /// Validation runs over the whole input first; on failure the set is unchanged.
    pub fn extend<I, S>(&mut self, words: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut accepted = Vec::new();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            if !is_valid_word(word) {
                return Err(LecternError::invalid_argument(format!(
                    "control character in stop word \"{}\"",
                    word.escape_debug()
                )));
            }
            accepted.push(word.to_string());
        }
        self.words.extend(accepted);
        Ok(())
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_deduplicates() {
        let stop_words = StopWords::from_text("in the in  the").unwrap();
        assert_eq!(stop_words.len(), 2);
        assert!(stop_words.is_stop_word("in"));
        assert!(stop_words.is_stop_word("the"));
    }

    #[test]
    fn test_from_words_skips_empty() {
        let stop_words = StopWords::from_words(vec!["", "and", ""]).unwrap();
        assert_eq!(stop_words.len(), 1);
        assert!(!stop_words.is_stop_word(""));
    }

    #[test]
    fn test_control_character_rejected() {
        let err = StopWords::from_words(["in", "th\u{2}e"]).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_failed_extend_leaves_set_unchanged() {
        let mut stop_words = StopWords::from_text("a").unwrap();
        assert!(stop_words.extend(["b", "c\u{7}"]).is_err());
        assert_eq!(stop_words.len(), 1);
        assert!(!stop_words.is_stop_word("b"));
    }

    #[test]
    fn test_empty_set() {
        let stop_words = StopWords::new();
        assert!(stop_words.is_empty());
        assert!(!stop_words.is_stop_word("and"));
    }
}
