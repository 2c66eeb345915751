//! Configuration for the search engine.

use serde::{Deserialize, Serialize};

use crate::error::{LecternError, Result};

/// Number of results returned by a search unless configured otherwise.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// Relevances closer than this are considered equal when ranking.
pub const RELEVANCE_THRESHOLD: f64 = 1e-6;

/// Default shard count for parallel relevance accumulation.
pub const DEFAULT_SHARD_COUNT: usize = 8;

/// Configuration for [`SearchEngine`](crate::engine::SearchEngine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum number of documents returned by a search.
    pub max_result_document_count: usize,

    /// Relevance difference below which ties are broken by rating.
    pub relevance_threshold: f64,

    /// Number of shards used by parallel relevance accumulation.
    pub shard_count: usize,

    /// Thread pool size for parallel execution.
    /// If None, uses the number of CPU cores.
    pub thread_pool_size: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_result_document_count: MAX_RESULT_DOCUMENT_COUNT,
            relevance_threshold: RELEVANCE_THRESHOLD,
            shard_count: DEFAULT_SHARD_COUNT,
            thread_pool_size: None,
        }
    }
}

impl EngineConfig {
    /// Set the maximum number of results per search.
    pub fn with_max_result_document_count(mut self, count: usize) -> Self {
        self.max_result_document_count = count;
        self
    }

    /// Set the relevance equality threshold.
    pub fn with_relevance_threshold(mut self, threshold: f64) -> Self {
        self.relevance_threshold = threshold;
        self
    }

    /// Set the shard count for parallel accumulation.
    pub fn with_shard_count(mut self, shard_count: usize) -> Self {
        self.shard_count = shard_count;
        self
    }

    /// Set the thread pool size.
    pub fn with_thread_pool_size(mut self, size: usize) -> Self {
        self.thread_pool_size = Some(size);
        self
    }

    /// Check that every setting is usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_result_document_count == 0 {
            return Err(LecternError::invalid_argument(
                "max_result_document_count must be greater than zero",
            ));
        }
        if self.relevance_threshold.is_nan() || self.relevance_threshold <= 0.0 {
            return Err(LecternError::invalid_argument(format!(
                "relevance_threshold must be positive, got {}",
                self.relevance_threshold
            )));
        }
        if self.shard_count == 0 {
            return Err(LecternError::invalid_argument(
                "shard_count must be greater than zero",
            ));
        }
        if self.thread_pool_size == Some(0) {
            return Err(LecternError::invalid_argument(
                "thread_pool_size must be greater than zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.max_result_document_count, 5);
        assert_eq!(config.relevance_threshold, 1e-6);
        assert_eq!(config.shard_count, 8);
        assert!(config.thread_pool_size.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = EngineConfig::default()
            .with_max_result_document_count(10)
            .with_shard_count(16)
            .with_thread_pool_size(2);
        assert_eq!(config.max_result_document_count, 10);
        assert_eq!(config.shard_count, 16);
        assert_eq!(config.thread_pool_size, Some(2));
    }

    #[test]
    fn test_validate_rejects_zeroes() {
        assert!(
            EngineConfig::default()
                .with_max_result_document_count(0)
                .validate()
                .is_err()
        );
        assert!(EngineConfig::default().with_shard_count(0).validate().is_err());
        assert!(
            EngineConfig::default()
                .with_thread_pool_size(0)
                .validate()
                .is_err()
        );
        assert!(
            EngineConfig::default()
                .with_relevance_threshold(f64::NAN)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"shard_count": 4}"#).unwrap();
        assert_eq!(config.shard_count, 4);
        assert_eq!(config.max_result_document_count, 5);
    }
}
