//! Error types for netsearch.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Cannot submit: a source or a target is required")]
    CannotSubmit,

    #[error("Length mismatch: {source_len} source rows vs {target_len} target rows")]
    LengthMismatch { source_len: usize, target_len: usize },

    #[error("Malformed result: {0}")]
    Shape(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Backend returned {status}: {body}")]
    Backend { status: u16, body: String },

    #[error("A search is already in progress")]
    Busy,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether the error was raised before anything was sent to the backend.
    pub fn is_client_side(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::CannotSubmit | Self::Busy)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
