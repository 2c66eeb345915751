//! Running many queries at once.

use rayon::prelude::*;

use crate::document::Document;
use crate::engine::SearchEngine;
use crate::error::Result;

/// Run every query on the engine's thread pool.
///
/// Returns one result list per query, in query order. If any query is
/// malformed, one of the errors is returned.
pub fn process_queries<S>(engine: &SearchEngine, queries: &[S]) -> Result<Vec<Vec<Document>>>
where
    S: AsRef<str> + Sync,
{
    engine.thread_pool().install(|| {
        queries
            .par_iter()
            .map(|query| engine.find_top_documents(query.as_ref()))
            .collect()
    })
}

/// Like [`process_queries`], flattened into a single list in query order.
pub fn process_queries_joined<S>(engine: &SearchEngine, queries: &[S]) -> Result<Vec<Document>>
where
    S: AsRef<str> + Sync,
{
    Ok(process_queries(engine, queries)?
        .into_iter()
        .flatten()
        .collect())
}
