use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Font error: {0}")]
    FontError(String),

    #[error("Compression error: {0}")]
    CompressionError(String),

    #[error("Invalid CMYK color: {0}")]
    InvalidColor(String),

    #[error("Invalid deviation: {0} (must be a positive integer)")]
    InvalidDeviation(u32),

    #[error("Invalid reference table: {0}")]
    ReferenceTable(String),

    #[error("Unknown reference color: {0}")]
    UnknownReference(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SwatchError>;
