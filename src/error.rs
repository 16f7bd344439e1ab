use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Collection error: {0}")]
    Collection(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
