use thiserror::Error;

/// Errors surfaced by a scraping client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("service unavailable: {0}")]
    Unavailable(String),
}

/// Errors emitted while turning records into tables.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv output is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
