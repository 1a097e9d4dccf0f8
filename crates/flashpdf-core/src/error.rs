use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid word list: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("entry {index} has an empty word")]
    EmptyWord { index: usize },
}
