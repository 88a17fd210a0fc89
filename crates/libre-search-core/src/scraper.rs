//! Main search API for YouTube
//!
//! Composes the query encoder, HTTP client and results parser.

use tracing::{debug, instrument};

use crate::client::{ClientConfig, YoutubeClient};
use crate::error::Result;
use crate::parser::{ExtractionStrategy, parse_search_results_with};
use crate::types::VideoInformation;
use crate::url::build_search_path_with_language;

/// Main search API
///
/// Every call to [`LibreSearch::search`] is independent: one request, one
/// pass over the returned page, no state kept between calls.
pub struct LibreSearch {
    client: YoutubeClient,
    strategy: ExtractionStrategy,
}

impl LibreSearch {
    /// Create a new searcher with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new searcher with custom client configuration
    ///
    /// # Arguments
    /// * `config` - Custom client configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = YoutubeClient::with_config(config)?;
        Ok(Self {
            client,
            strategy: ExtractionStrategy::default(),
        })
    }

    /// Use a different strategy to cut the data block out of the page
    pub fn with_strategy(mut self, strategy: ExtractionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Search for videos by query
    ///
    /// # Arguments
    /// * `query` - Free-text search query; surrounding whitespace is trimmed
    ///
    /// # Returns
    /// Videos in page order, empty if the page lists no videos
    ///
    /// # Errors
    /// - `ClientError` if the server answers 4xx
    /// - `TransportError` if the request or response stream fails
    /// - `ParseError` / `MissingKey` if the page does not contain the expected data
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> libre_search_core::Result<()> {
    /// use libre_search_core::LibreSearch;
    /// let searcher = LibreSearch::new()?;
    /// let results = searcher.search("cats").await?;
    /// for video in results {
    ///     println!("{} ({}) by {}", video.video_name, video.video_length, video.video_owner);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<VideoInformation>> {
        let path = build_search_path_with_language(query.trim(), self.client.language());

        let response = self.client.fetch(&path).await?;
        let videos = parse_search_results_with(&response.body, self.strategy)?;

        debug!(count = videos.len(), "search complete");
        Ok(videos)
    }
}

/// Search YouTube with a default [`LibreSearch`]
///
/// # Example
/// ```no_run
/// # async fn example() -> libre_search_core::Result<()> {
/// let results = libre_search_core::search("rust programming").await?;
/// println!("{} videos", results.len());
/// # Ok(())
/// # }
/// ```
pub async fn search(query: &str) -> Result<Vec<VideoInformation>> {
    LibreSearch::new()?.search(query).await
}
