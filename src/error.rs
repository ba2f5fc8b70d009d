#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid query term '{0}': negation marker without a word")]
    InvalidQueryTerm(String),

    #[error("Invalid document count '{0}'")]
    InvalidDocumentCount(String),

    #[error("Input ended before the {0} line")]
    MissingLine(&'static str),

    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
