use super::doc_map::{DocID, DocMap, IDF, TF};
use std::collections::HashMap;

/// In-memory inverted index from term to per-document term frequency.
///
/// Every document added bumps the document count, including documents
/// without any words. Such documents have no index entries, so they can
/// never be matched.
#[derive(Debug, Default, Clone)]
pub struct InvertedIndex {
    word_to_document_freqs: HashMap<String, DocMap>,
    document_count: usize,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the already filtered `words` of document `doc_id`.
    ///
    /// Frequencies are added to whatever the index already holds for
    /// `doc_id`, so adding the same id twice accumulates.
    pub fn add_document(&mut self, doc_id: DocID, words: &[String]) {
        let mut word_count: HashMap<&str, u32> = HashMap::new();

        for word in words {
            *word_count.entry(word.as_str()).or_insert(0) += 1;
        }

        for (word, count) in word_count {
            let tf = calculate_tf(count, words.len());

            *self
                .word_to_document_freqs
                .entry(word.to_string())
                .or_default()
                .entry(doc_id)
                .or_insert(0.0) += tf;
        }

        self.document_count += 1;
    }

    pub const fn document_count(&self) -> usize {
        self.document_count
    }

    pub fn term_count(&self) -> usize {
        self.word_to_document_freqs.len()
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.word_to_document_freqs.contains_key(term)
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.word_to_document_freqs.keys().map(String::as_str)
    }

    pub fn term_frequencies(&self, term: &str) -> Option<&DocMap> {
        self.word_to_document_freqs.get(term)
    }

    /// `ln(N / df)`, or `None` when no document contains `term`.
    pub fn idf(&self, term: &str) -> Option<IDF> {
        self.term_frequencies(term)
            .map(|docs| calculate_idf(docs.len(), self.document_count))
    }
}

#[allow(clippy::cast_precision_loss)]
fn calculate_tf(count: u32, total: usize) -> TF {
    f64::from(count) / total as f64
}

#[allow(clippy::cast_precision_loss)]
fn calculate_idf(df: usize, n: usize) -> IDF {
    (n as f64 / df as f64).ln()
}
