//! Error types for the YouTube search scraper
//!
//! Provides a single error enum with human-readable messages
//! and string serialization for JSON boundaries.

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::types::TransportResult;

/// Error type for all search operations
///
/// Individual result entries that are not videos never produce an error;
/// they are dropped by the extractor.
#[derive(Error, Debug)]
pub enum LibreSearchError {
    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Server answered with a 4xx status
    #[error("Request rejected with HTTP status {}", .0.status_code)]
    ClientError(TransportResult),

    /// Connection or response stream failed before completion
    #[error("Request could not complete")]
    TransportError(TransportResult),

    /// The embedded data block is missing or is not valid JSON
    #[error("Failed to parse search page: {0}")]
    ParseError(String),

    /// The data block does not have the expected results path
    #[error("Missing key in search data: {0}")]
    MissingKey(String),
}

impl LibreSearchError {
    /// Status code carried by transport-level failures
    ///
    /// Returns `-1` for stream/connection failures, the real HTTP status for
    /// 4xx rejections, and `None` for every other variant.
    pub fn status_code(&self) -> Option<i32> {
        match self {
            Self::ClientError(result) | Self::TransportError(result) => Some(result.status_code),
            _ => None,
        }
    }
}

impl Serialize for LibreSearchError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for search operations
pub type Result<T> = std::result::Result<T, LibreSearchError>;
