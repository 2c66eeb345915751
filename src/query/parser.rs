//! Query parser and validator.
//!
//! Supported syntax is a space-separated list of words. A word prefixed with
//! a single `-` is a minus-word. Stop words are dropped from both lists.
//!
//! Rejected tokens:
//! - empty tokens
//! - tokens with control characters
//! - a bare `-`
//! - a minus-word starting with a second `-` (`--word`)

use crate::analysis::stop::StopWords;
use crate::analysis::tokenizer::{is_valid_word, split_into_words};
use crate::error::{LecternError, Result};
use crate::query::{ParallelQuery, Query, QueryWord};

/// Parses raw query text against a stop-word set.
#[derive(Debug, Clone, Copy)]
pub struct QueryParser<'s> {
    stop_words: &'s StopWords,
}

impl<'s> QueryParser<'s> {
    pub fn new(stop_words: &'s StopWords) -> Self {
        QueryParser { stop_words }
    }

    /// Validate and classify a single token.
    pub fn parse_word<'a>(&self, token: &'a str) -> Result<QueryWord<'a>> {
        if token.is_empty() {
            return Err(LecternError::invalid_argument("empty word in query"));
        }
        if !is_valid_word(token) {
            return Err(LecternError::invalid_argument(format!(
                "control character in query word \"{}\"",
                token.escape_debug()
            )));
        }

        let (text, is_minus) = match token.strip_prefix('-') {
            Some("") => {
                return Err(LecternError::invalid_argument(
                    "no characters after \"-\" in query",
                ));
            }
            Some(rest) if rest.starts_with('-') => {
                return Err(LecternError::invalid_argument(format!(
                    "double \"-\" in query minus-word \"{token}\""
                )));
            }
            Some(rest) => (rest, true),
            None => (token, false),
        };

        Ok(QueryWord {
            text,
            is_minus,
            is_stop: self.stop_words.is_stop_word(text),
        })
    }

    /// Parse into set form. Duplicates collapse.
    pub fn parse<'a>(&self, text: &'a str) -> Result<Query<'a>> {
        let mut query = Query::default();
        for token in split_into_words(text) {
            let word = self.parse_word(token)?;
            if word.is_stop {
                continue;
            }
            if word.is_minus {
                query.minus_words.insert(word.text);
            } else {
                query.plus_words.insert(word.text);
            }
        }
        Ok(query)
    }

    /// Parse into sorted, deduplicated vector form.
    pub fn parse_parallel<'a>(&self, text: &'a str) -> Result<ParallelQuery<'a>> {
        let mut query = ParallelQuery::default();
        for token in split_into_words(text) {
            let word = self.parse_word(token)?;
            if word.is_stop {
                continue;
            }
            if word.is_minus {
                query.minus_words.push(word.text);
            } else {
                query.plus_words.push(word.text);
            }
        }
        query.normalize();
        Ok(query)
    }
}
