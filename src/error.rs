use thiserror::Error;

/// Main error type for Mediagraph
#[derive(Error, Debug)]
pub enum MediagraphError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TSV decoding errors
    #[error("TSV error: {0}")]
    Tsv(#[from] csv::Error),

    /// HTTP transport errors while fetching upstream sources
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream source returned a non-success response
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Snapshot errors (missing or inconsistent enriched output)
    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

/// Convenient Result type using MediagraphError
pub type Result<T> = std::result::Result<T, MediagraphError>;
