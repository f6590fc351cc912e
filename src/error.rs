use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Authorization failed: {0}")]
    AuthError(String),

    #[error("Data parsing error: {0}")]
    ParseError(String),

    #[error("Missing expected data: {0}")]
    MissingData(String),

    #[error("Search worker failed: {0}")]
    WorkerError(String),
}

pub type Result<T> = std::result::Result<T, Error>;
