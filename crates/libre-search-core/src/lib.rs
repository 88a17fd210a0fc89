//! YouTube Search Scraper Core Library
//!
//! Provides an async API that turns a YouTube search query into a list of
//! video metadata records, without an API key.
//!
//! # Overview
//!
//! A search is one HTTP GET to `/results?search_query=<query>&hl=en`,
//! followed by extraction of the `ytInitialData` JSON blob embedded in the
//! returned page. Result entries that are not videos (channels, shelves,
//! ads) are skipped silently.
//!
//! # Example
//!
//! ```no_run
//! use libre_search_core::{LibreSearch, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let searcher = LibreSearch::new()?;
//!
//!     let results = searcher.search("lofi hip hop").await?;
//!
//!     for video in &results {
//!         println!("{} [{}] {}", video.video_id, video.video_length, video.video_name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Upstream format
//!
//! The page layout is undocumented and may change without notice. All code
//! depending on it lives in [`parser`]; by default the data block is located
//! by a fixed offset from the `var ytInitialData` marker, and
//! [`ExtractionStrategy::BalancedBraces`] is available as a more tolerant
//! alternative.

mod client;
mod error;
pub mod parser;
mod scraper;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, YoutubeClient};

// Re-export error types
pub use error::{LibreSearchError, Result};

// Re-export parser functions
pub use parser::{
    ExtractionStrategy, locate_initial_data, parse_search_results, parse_search_results_with,
    parse_video_entry,
};

// Re-export main search API
pub use scraper::{LibreSearch, search};

// Re-export data types
pub use types::{TRANSPORT_FAILURE_STATUS, TransportResult, VideoInformation};

// Re-export URL helper functions for convenience
pub use url::{build_search_path, build_search_url, build_video_url, encode_query};
