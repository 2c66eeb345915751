//! Document identity, status and search hits.
//!
//! A document is identified by a non-negative [`DocumentId`]. The engine keeps
//! only its average rating and [`DocumentStatus`] next to the indexed words;
//! the original text is not retained.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of an indexed document. Negative values are rejected on insert.
pub type DocumentId = i32;

/// Caller-assigned document status. Ranking treats it only as a filter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    #[default]
    Active,
    Irrelevant,
    Banned,
    Removed,
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentStatus::Active => "active",
            DocumentStatus::Irrelevant => "irrelevant",
            DocumentStatus::Banned => "banned",
            DocumentStatus::Removed => "removed",
        };
        f.write_str(name)
    }
}

/// A ranked search hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub relevance: f64,
    pub rating: i32,
}

impl Document {
    pub fn new(id: DocumentId, relevance: f64, rating: i32) -> Self {
        Document {
            id,
            relevance,
            rating,
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            self.id, self.relevance, self.rating
        )
    }
}

/// Per-document metadata stored by the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DocumentData {
    pub rating: i32,
    pub status: DocumentStatus,
}

/// Mean of the ratings, truncated toward zero; 0 for an empty list.
pub fn average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    // The mean of i32 values always fits back into i32.
    (sum / ratings.len() as i64) as i32
}
