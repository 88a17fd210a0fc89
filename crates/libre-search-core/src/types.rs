//! Core data types for the YouTube search scraper
//!
//! Contains the output record handed to callers and the raw transport
//! outcome passed from the HTTP client to the extractor.

use serde::{Deserialize, Serialize};

/// Status code used when no HTTP status is available (connection or stream failure)
pub const TRANSPORT_FAILURE_STATUS: i32 = -1;

/// Represents a single video result from a YouTube search page
///
/// All fields are opaque display strings copied from the upstream payload.
/// Serialized field names match the camelCase names used by the page data
/// (`videoID`, `videoName`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoInformation {
    /// Video ID (e.g., "dQw4w9WgXcQ")
    #[serde(rename = "videoID")]
    pub video_id: String,

    /// Video title
    pub video_name: String,

    /// Channel name of the uploader
    pub video_owner: String,

    /// Pre-formatted length as shown on the page (e.g., "12:34")
    pub video_length: String,

    /// Thumbnail URL
    pub video_thumbnail: String,
}

/// Outcome of a single HTTP request
///
/// `status_code` is [`TRANSPORT_FAILURE_STATUS`] when the request never
/// produced a usable status. `body` is empty unless the response stream
/// completed normally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportResult {
    pub status_code: i32,
    pub body: String,
}

impl TransportResult {
    /// A completed response with its full body
    pub fn completed(status_code: i32, body: String) -> Self {
        Self { status_code, body }
    }

    /// A 4xx response; the body is never read
    pub fn rejected(status_code: i32) -> Self {
        Self {
            status_code,
            body: String::new(),
        }
    }

    /// A connection or stream failure
    pub fn failed() -> Self {
        Self {
            status_code: TRANSPORT_FAILURE_STATUS,
            body: String::new(),
        }
    }

    /// Whether this result carries the transport failure sentinel
    pub fn is_transport_failure(&self) -> bool {
        self.status_code == TRANSPORT_FAILURE_STATUS
    }
}
