use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PoemError>;

#[derive(Debug, Error)]
pub enum PoemError {
    #[error("could not retrieve {source_name}: {reason}")]
    Retrieval { source_name: String, reason: String },

    #[error("invalid poem spec: {0}")]
    InvalidSpec(&'static str),

    #[error("not a valid word: {0:?}")]
    InvalidWord(String),

    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("text file not found: {0}")]
    TextNotFound(PathBuf),

    #[error("file already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("invalid file name: {0:?}")]
    InvalidName(String),

    #[error("no saved poems in {0}")]
    NoPoems(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PoemError {
    pub(crate) fn retrieval(source_name: impl Into<String>, reason: impl ToString) -> Self {
        Self::Retrieval {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }
}
