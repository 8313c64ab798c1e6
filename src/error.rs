use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalorieError {
    #[error("Input file not found: {0}")]
    InputNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Index {index} out of range for list of {len} foods")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, CalorieError>;
