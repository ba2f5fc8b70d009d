mod engine;
mod query;
mod search_result;

pub use self::{
    engine::{ExclusionPolicy, SearchServer, MAX_RESULT_DOCUMENT_COUNT},
    query::{Query, NEGATION_MARKER},
    search_result::{Document, Relevance},
};
