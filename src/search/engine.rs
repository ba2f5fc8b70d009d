use crate::{
    error::Result,
    inverted_index::{DocID, InvertedIndex},
    tokenizer::Tokenizer,
};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

use super::{
    query::Query,
    search_result::{Document, Relevance},
};

pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// How negative query terms restrict the result set.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExclusionPolicy {
    /// A positive term contributes nothing when it is also listed as negative.
    /// Documents containing a negative-only term are still returned.
    #[default]
    PerTerm,
    /// Any document containing any negative term is dropped.
    ExcludeDocuments,
}

/// TF-IDF search over an in-memory inverted index.
///
/// Stop words are expected to be set before the first document is added;
/// documents already in the index are not filtered again.
#[derive(Debug, Default)]
pub struct SearchServer {
    tokenizer: Tokenizer,
    stop_words: HashSet<String>,
    index: InvertedIndex,
    document_ids: HashSet<DocID>,
    exclusion_policy: ExclusionPolicy,
}

impl SearchServer {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_exclusion_policy(mut self, exclusion_policy: ExclusionPolicy) -> Self {
        self.exclusion_policy = exclusion_policy;
        self
    }

    pub fn set_stop_words(&mut self, text: &str) {
        if self.index.document_count() > 0 {
            warn!(
                document_count = self.index.document_count(),
                "stop words changed after ingestion, existing documents are not re-filtered"
            );
        }

        self.stop_words.extend(self.tokenizer.tokenize(text));
    }

    /// Indexes `document` under `document_id`.
    ///
    /// Ids must be unique. A repeated id is logged and its frequencies are
    /// added to the ones already stored.
    pub fn add_document(&mut self, document_id: DocID, document: &str) {
        if !self.document_ids.insert(document_id) {
            warn!(document_id, "duplicate document id, frequencies will accumulate");
        }

        let words = self.split_into_words_no_stop(document);
        debug!(document_id, words = words.len(), "adding document");

        self.index.add_document(document_id, &words);
    }

    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        let query = self.parse_query(raw_query)?;

        if query.is_empty() {
            return Ok(Vec::new());
        }

        let mut matched_documents = self.find_all_documents(&query);

        matched_documents.sort_by(|lhs, rhs| {
            rhs.relevance
                .total_cmp(&lhs.relevance)
                .then_with(|| lhs.id.cmp(&rhs.id))
        });
        matched_documents.truncate(MAX_RESULT_DOCUMENT_COUNT);

        debug!(
            positive = query.positive_words.len(),
            negative = query.negative_words.len(),
            results = matched_documents.len(),
            "query answered"
        );

        Ok(matched_documents)
    }

    pub const fn document_count(&self) -> usize {
        self.index.document_count()
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn stop_words(&self) -> impl Iterator<Item = &str> {
        self.stop_words.iter().map(String::as_str)
    }

    pub const fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub const fn exclusion_policy(&self) -> ExclusionPolicy {
        self.exclusion_policy
    }

    fn split_into_words_no_stop(&self, text: &str) -> Vec<String> {
        self.tokenizer
            .tokenize(text)
            .into_iter()
            .filter(|word| !self.is_stop_word(word))
            .collect()
    }

    fn parse_query(&self, text: &str) -> Result<Query> {
        Query::parse(self.split_into_words_no_stop(text))
    }

    fn find_all_documents(&self, query: &Query) -> Vec<Document> {
        let mut document_to_relevance: HashMap<DocID, Relevance> = HashMap::new();

        for word in &query.positive_words {
            if self.exclusion_policy == ExclusionPolicy::PerTerm
                && query.negative_words.contains(word)
            {
                continue;
            }

            let (Some(term_freqs), Some(idf)) =
                (self.index.term_frequencies(word), self.index.idf(word))
            else {
                continue;
            };

            for (&document_id, &term_freq) in term_freqs {
                *document_to_relevance.entry(document_id).or_insert(0.0) += term_freq * idf;
            }
        }

        if self.exclusion_policy == ExclusionPolicy::ExcludeDocuments {
            for word in &query.negative_words {
                if let Some(term_freqs) = self.index.term_frequencies(word) {
                    for document_id in term_freqs.keys() {
                        document_to_relevance.remove(document_id);
                    }
                }
            }
        }

        document_to_relevance
            .into_iter()
            .map(|(document_id, relevance)| Document::new(document_id, relevance))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use super::*;
    use crate::error::Error;

    const EPSILON: f64 = 1e-9;

    fn server(stop_words: &str, documents: &[&str]) -> SearchServer {
        let mut server = SearchServer::new();
        server.set_stop_words(stop_words);

        for (document_id, document) in (0..).zip(documents) {
            server.add_document(document_id, document);
        }

        server
    }

    fn ids(documents: &[Document]) -> Vec<DocID> {
        documents.iter().map(|document| document.id).collect()
    }

    #[test]
    fn two_documents_tie() {
        let server = server("a the", &["a cat sat", "the dog ran"]);

        let documents = server
            .find_top_documents("cat dog")
            .expect("Failed to search");

        let expected = 0.5 * 2.0_f64.ln();
        assert_eq!(ids(&documents), vec![0, 1]);
        for document in documents {
            assert!((document.relevance - expected).abs() < EPSILON);
        }
    }

    #[test]
    fn ranked_by_relevance() {
        let server = server(
            "in the",
            &[
                "white cat and fashionable collar",
                "fluffy cat fluffy tail",
                "groomed dog expressive eyes",
            ],
        );

        let documents = server
            .find_top_documents("fluffy groomed cat")
            .expect("Failed to search");

        assert_eq!(ids(&documents), vec![1, 2, 0]);
        for pair in documents.windows(2) {
            assert!(pair[0].relevance >= pair[1].relevance);
        }
    }

    #[test]
    fn stop_words_never_indexed() {
        let server = server("a the", &["a the a cat", "the the the"]);

        assert!(!server.index().contains_term("a"));
        assert!(!server.index().contains_term("the"));
        assert!(server.index().contains_term("cat"));
        assert!(server.is_stop_word("the"));
        assert_eq!(server.stop_words().count(), 2);
    }

    #[test]
    fn stop_word_query_is_empty() {
        let server = server("a the", &["a cat", "the dog"]);

        assert!(server
            .find_top_documents("a the")
            .expect("Failed to search")
            .is_empty());
        assert!(server
            .find_top_documents("   ")
            .expect("Failed to search")
            .is_empty());
    }

    #[test]
    fn stop_word_only_document_never_found() {
        let server = server("a the", &["a the", "cat"]);

        assert_eq!(server.document_count(), 2);
        assert_eq!(
            ids(&server.find_top_documents("a the cat").expect("Failed to search")),
            vec![1]
        );
    }

    #[test]
    fn result_cap() {
        let mut documents = vec!["cat"; 8];
        documents.push("dog");
        let server = server("", &documents);

        let found = server.find_top_documents("cat").expect("Failed to search");

        assert_eq!(found.len(), MAX_RESULT_DOCUMENT_COUNT);
        assert_eq!(ids(&found), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn term_in_every_document_has_no_weight() {
        let server = server("", &["x", "x", "x"]);

        let documents = server.find_top_documents("x").expect("Failed to search");

        assert_eq!(ids(&documents), vec![0, 1, 2]);
        assert!(documents.iter().all(|document| document.relevance.abs() < EPSILON));
    }

    #[test]
    fn unknown_term_contributes_nothing() {
        let server = server("", &["cat", "dog"]);

        assert!(server
            .find_top_documents("bird")
            .expect("Failed to search")
            .is_empty());
        assert_eq!(
            ids(&server.find_top_documents("bird dog").expect("Failed to search")),
            vec![1]
        );
    }

    #[test]
    fn negative_term_gates_only_same_positive_term() {
        let server = server("", &["cat collar", "dog collar", "cat tail"]);

        let documents = server
            .find_top_documents("cat -collar")
            .expect("Failed to search");
        assert_eq!(ids(&documents), vec![0, 2]);

        let documents = server
            .find_top_documents("cat tail -cat")
            .expect("Failed to search");
        assert_eq!(ids(&documents), vec![2]);
    }

    #[test]
    fn negative_term_excludes_documents() {
        let server = server("", &["cat collar", "dog collar", "cat tail"])
            .with_exclusion_policy(ExclusionPolicy::ExcludeDocuments);

        let documents = server
            .find_top_documents("cat -collar")
            .expect("Failed to search");

        assert_eq!(ids(&documents), vec![2]);
        assert_eq!(server.exclusion_policy(), ExclusionPolicy::ExcludeDocuments);
    }

    #[test]
    fn negative_only_query() {
        let server = server("", &["cat", "dog"]);

        assert!(server
            .find_top_documents("-cat")
            .expect("Failed to search")
            .is_empty());
    }

    #[test]
    fn bare_negation_marker() {
        let server = server("", &["cat"]);

        let err = server
            .find_top_documents("cat -")
            .expect_err("Bare marker must be rejected");

        assert!(matches!(err, Error::InvalidQueryTerm(_)));
    }

    #[test]
    fn negated_stop_word_is_not_filtered() {
        let server = server("the", &["the cat"]);

        let query = server.parse_query("the -the").expect("Failed to parse query");

        assert!(query.positive_words.is_empty());
        assert!(query.negative_words.contains("the"));
    }

    #[test]
    fn late_stop_words_do_not_refilter() {
        let mut server = server("", &["a cat"]);
        server.set_stop_words("a");
        server.add_document(1, "a dog");

        assert!(server.index().contains_term("a"));
        let a = server.index().term_frequencies("a").expect("a is indexed");
        assert!(a.contains_key(&0));
        assert!(!a.contains_key(&1));
    }

    #[test]
    fn duplicate_document_id_accumulates() {
        let mut server = server("", &["cat dog"]);
        server.add_document(0, "cat");

        let cat = server.index().term_frequencies("cat").expect("cat is indexed");

        assert!((cat[&0] - 1.5).abs() < EPSILON);
        assert_eq!(server.document_count(), 2);
    }

    #[test]
    fn shared_across_threads() {
        let server = Arc::new(server("a", &["a cat", "a dog", "bird"]));

        let handles: Vec<_> = ["cat", "dog", "bird"]
            .into_iter()
            .map(|query| {
                let server = Arc::clone(&server);
                thread::spawn(move || server.find_top_documents(query).map(|docs| ids(&docs)))
            })
            .collect();

        let results: Vec<_> = handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .expect("Search thread panicked")
                    .expect("Failed to search")
            })
            .collect();

        assert_eq!(results, vec![vec![0], vec![1], vec![2]]);
    }
}
