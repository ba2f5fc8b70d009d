use std::fmt::{self, Display};

use serde::Serialize;

use crate::inverted_index::DocID;

pub type Relevance = f64;

/// A matched document and its TF-IDF relevance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Document {
    #[serde(rename = "document_id")]
    pub id: DocID,
    pub relevance: Relevance,
}

impl Document {
    pub const fn new(id: DocID, relevance: Relevance) -> Self {
        Self { id, relevance }
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {} }}",
            self.id, self.relevance
        )
    }
}
