//! Tracking searches that found nothing.
//!
//! [`RequestQueue`] forwards searches to an engine and remembers the result
//! count of the most recent [`REQUEST_WINDOW`] requests (one per minute of a
//! day), so callers can see how many recent searches came back empty.

use std::collections::VecDeque;

use crate::document::{Document, DocumentStatus};
use crate::engine::{DocumentPredicate, SearchEngine};
use crate::error::Result;

/// Number of most recent requests remembered.
pub const REQUEST_WINDOW: usize = 1440;

/// Sliding window of search result counts.
#[derive(Debug)]
pub struct RequestQueue<'e> {
    engine: &'e SearchEngine,
    /// Result counts, oldest first.
    requests: VecDeque<usize>,
}

impl<'e> RequestQueue<'e> {
    pub fn new(engine: &'e SearchEngine) -> Self {
        RequestQueue {
            engine,
            requests: VecDeque::with_capacity(REQUEST_WINDOW),
        }
    }

    /// Search for active documents and record the outcome.
    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<Document>> {
        self.add_find_request_with(raw_query, DocumentStatus::Active)
    }

    /// Search with a predicate and record the outcome.
    ///
    /// Malformed queries are not recorded.
    pub fn add_find_request_with<P>(
        &mut self,
        raw_query: &str,
        predicate: P,
    ) -> Result<Vec<Document>>
    where
        P: DocumentPredicate,
    {
        let documents = self.engine.find_top_documents_with(raw_query, predicate)?;
        self.record(documents.len());
        Ok(documents)
    }

    fn record(&mut self, results: usize) {
        if self.requests.len() == REQUEST_WINDOW {
            self.requests.pop_front();
        }
        self.requests.push_back(results);
    }

    /// Number of requests in the window that returned no documents.
    pub fn no_result_requests(&self) -> usize {
        self.requests.iter().filter(|&&results| results == 0).count()
    }

    /// Number of requests currently in the window.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}
