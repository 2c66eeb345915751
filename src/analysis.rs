//! Text analysis for Lectern.
//!
//! Splitting raw text into words, checking word validity, and holding the
//! stop-word set that both indexing and query parsing consult.

pub mod stop;
pub mod tokenizer;
