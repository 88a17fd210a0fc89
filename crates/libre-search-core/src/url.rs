//! URL helper functions for YouTube search
//!
//! Provides the query encoder and builders for search and watch URLs.

use regex::{Captures, Regex};

pub const BASE_URL: &str = "https://www.youtube.com";

/// Interface language requested from the search page
pub const DEFAULT_LANGUAGE: &str = "en";

/// Percent-encodes a search query for use in a URL query component
///
/// Applies RFC 3986 encoding, then escapes `!`, `'`, `(`, `)` and `*`,
/// which the search endpoint does not accept literally.
///
/// # Arguments
/// * `text` - Query text, already trimmed by the caller
///
/// # Returns
/// The encoded query
///
/// # Example
/// ```
/// use libre_search_core::url::encode_query;
/// assert_eq!(encode_query("don't (stop)!"), "don%27t%20%28stop%29%21");
/// ```
pub fn encode_query(text: &str) -> String {
    let encoded = urlencoding::encode(text);

    let Ok(re) = Regex::new(r"[!'()*]") else {
        return encoded.into_owned();
    };

    re.replace_all(&encoded, |caps: &Captures| {
        format!("%{:02X}", caps[0].as_bytes()[0])
    })
    .into_owned()
}

/// Builds the search results path for a query
///
/// # Arguments
/// * `query` - Search query string (not yet encoded)
///
/// # Returns
/// Path in the form `/results?search_query=<encoded>&hl=en`
///
/// # Example
/// ```
/// use libre_search_core::url::build_search_path;
/// let path = build_search_path("cats");
/// assert_eq!(path, "/results?search_query=cats&hl=en");
/// ```
pub fn build_search_path(query: &str) -> String {
    build_search_path_with_language(query, DEFAULT_LANGUAGE)
}

/// Builds the search results path with an explicit `hl` language
pub fn build_search_path_with_language(query: &str, language: &str) -> String {
    format!(
        "/results?search_query={}&hl={}",
        encode_query(query),
        encode_query(language)
    )
}

/// Builds the full search URL for a query
///
/// # Example
/// ```
/// use libre_search_core::url::{build_search_url, BASE_URL};
/// let url = build_search_url(BASE_URL, "a b");
/// assert_eq!(url, "https://www.youtube.com/results?search_query=a%20b&hl=en");
/// ```
pub fn build_search_url(base_url: &str, query: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), build_search_path(query))
}

/// Builds the watch page URL for a video ID
///
/// # Example
/// ```
/// use libre_search_core::url::build_video_url;
/// let url = build_video_url("dQw4w9WgXcQ");
/// assert_eq!(url, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
/// ```
pub fn build_video_url(video_id: &str) -> String {
    format!("{}/watch?v={}", BASE_URL, encode_query(video_id))
}
