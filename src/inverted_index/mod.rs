mod doc_map;
mod memory_inverted_index;

pub use self::{
    doc_map::{DocID, DocMap, IDF, TF},
    memory_inverted_index::InvertedIndex,
};
