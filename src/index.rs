//! Indexing structures: the word store and the inverted index.

pub mod inverted;
pub mod word_store;

pub use inverted::{InvertedIndex, Postings, WordFrequencies};
pub use word_store::{Word, WordStore};
