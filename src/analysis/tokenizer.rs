//! Space tokenizer.
//!
//! Words are contiguous runs of characters other than the ASCII space.
//! Tabs, newlines and other control characters are not separators: they stay
//! inside the word and make it invalid (see [`is_valid_word`]).
//!
//! # Examples
//!
//! ```
//! use lectern::analysis::tokenizer::{is_valid_word, split_into_words};
//!
//! let words: Vec<&str> = split_into_words("  funny  pet ").collect();
//! assert_eq!(words, vec!["funny", "pet"]);
//!
//! assert!(is_valid_word("pet"));
//! assert!(!is_valid_word("p\u{12}et"));
//! ```

/// The only character that separates words.
pub const WORD_SEPARATOR: char = ' ';

/// Split text into non-empty words, borrowing from the input.
pub fn split_into_words(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split(WORD_SEPARATOR).filter(|word| !word.is_empty())
}

/// A word is valid when it has no control characters (code points below 0x20).
pub fn is_valid_word(word: &str) -> bool {
    !word.chars().any(|c| c < '\u{20}')
}
