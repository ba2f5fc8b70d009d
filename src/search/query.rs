use std::collections::BTreeSet;

use crate::error::{Error, Result};

/// Prefix that turns a query word into a negative term.
pub const NEGATION_MARKER: char = '-';

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Query {
    pub positive_words: BTreeSet<String>,
    pub negative_words: BTreeSet<String>,
}

impl Query {
    /// Builds a query from words that have already been stop-word filtered.
    ///
    /// A bare `-` is rejected with [`Error::InvalidQueryTerm`].
    pub fn parse<I>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut query = Self::default();

        for word in words {
            match word.strip_prefix(NEGATION_MARKER) {
                Some("") => return Err(Error::InvalidQueryTerm(word)),
                Some(negative) => {
                    query.negative_words.insert(negative.to_string());
                }
                None => {
                    query.positive_words.insert(word);
                }
            }
        }

        Ok(query)
    }

    pub fn is_empty(&self) -> bool {
        self.positive_words.is_empty() && self.negative_words.is_empty()
    }
}
