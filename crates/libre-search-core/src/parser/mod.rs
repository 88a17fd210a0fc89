//! Parsers for YouTube search pages
//!
//! Contains the data block locator and the search results extractor.

pub mod initial_data;
pub mod search;

pub use initial_data::{ExtractionStrategy, locate_initial_data};
pub use search::{parse_search_results, parse_search_results_with, parse_video_entry};
