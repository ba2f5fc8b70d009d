pub mod error;
pub mod inverted_index;
pub mod search;
pub mod server_input;
pub mod tokenizer;
