//! # Lectern
//!
//! An in-memory text search engine that ranks short documents against
//! free-text queries by TF-IDF relevance.
//!
//! ## Features
//!
//! - Forward and reverse inverted index kept in lock-step
//! - Query syntax with plus-words, `-minus-words` and stop words
//! - Top-K ranking with caller-supplied document predicates
//! - Optional parallel scoring over a sharded concurrent map
//! - Sequential and parallel document removal, duplicate detection
//!
//! ## Example
//!
//! ```
//! use lectern::prelude::*;
//!
//! let mut engine = SearchEngine::new("and with").unwrap();
//! engine.add_document(1, "funny pet and nasty rat", DocumentStatus::Active, &[1, 2]).unwrap();
//! engine.add_document(2, "funny pet with curly hair", DocumentStatus::Active, &[1, 2]).unwrap();
//!
//! let hits = engine
//!     .find_top_documents_in(ExecutionMode::Parallel, "curly pet", DocumentStatus::Active)
//!     .unwrap();
//! assert_eq!(hits[0].id, 2);
//! ```

pub mod analysis;
pub mod batch;
pub mod cli;
pub mod concurrent;
pub mod config;
pub mod dedup;
pub mod document;
pub mod engine;
pub mod error;
pub mod execution;
pub mod index;
pub mod query;
pub mod request_queue;

pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::document::{Document, DocumentId, DocumentStatus};
    pub use crate::engine::{DocumentPredicate, SearchEngine};
    pub use crate::error::{LecternError, Result};
    pub use crate::execution::ExecutionMode;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
