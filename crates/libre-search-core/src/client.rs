//! HTTP client for YouTube search pages
//!
//! Performs a single GET per call, streams the body to completion and
//! classifies the outcome as success, client error (4xx) or transport error.

use std::fmt::Display;

use tracing::{debug, warn};

use crate::error::{LibreSearchError, Result};
use crate::types::TransportResult;
use crate::url::{BASE_URL, DEFAULT_LANGUAGE};

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host requests are sent to (default: "https://www.youtube.com")
    pub base_url: String,
    /// Value of the `hl` query parameter (default: "en")
    pub language: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// HTTP client wrapper for the search endpoint
///
/// Sends requests without custom headers, cookies or timeouts and never
/// follows redirects. Each call owns its own response buffer, so the client
/// can be shared between concurrent searches.
pub struct YoutubeClient {
    client: reqwest::Client,
    base_url: String,
    language: String,
}

impl YoutubeClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(LibreSearchError::HttpError)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            language: config.language,
        })
    }

    /// Fetch a path and collect the full response body
    ///
    /// A 4xx status fails as soon as the headers arrive; the body is dropped
    /// unread. Any other status is returned with the complete body once the
    /// stream ends.
    ///
    /// # Arguments
    /// * `path` - The path to fetch (e.g., "/results?search_query=cats&hl=en")
    ///
    /// # Errors
    /// - `ClientError` - Server answered 4xx; carries the status and an empty body
    /// - `TransportError` - Connection failed, the stream broke off, or the
    ///   body was not valid UTF-8; carries status `-1` and an empty body
    pub async fn fetch(&self, path: &str) -> Result<TransportResult> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "fetching");

        let mut response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => return Err(transport_failure(e)),
        };

        let status = response.status();
        let status_code = i32::from(status.as_u16());

        if status.is_client_error() {
            debug!(status_code, "client error, body not read");
            return Err(LibreSearchError::ClientError(TransportResult::rejected(
                status_code,
            )));
        }

        let mut buffer: Vec<u8> = Vec::new();
        loop {
            match response.chunk().await {
                Ok(Some(chunk)) => buffer.extend_from_slice(&chunk),
                Ok(None) => break,
                Err(e) => return Err(transport_failure(e)),
            }
        }

        let body = String::from_utf8(buffer).map_err(transport_failure)?;
        debug!(status_code, bytes = body.len(), "response complete");

        Ok(TransportResult::completed(status_code, body))
    }

    /// Value sent as the `hl` query parameter
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Scheme and host requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn transport_failure(reason: impl Display) -> LibreSearchError {
    warn!(%reason, "request could not complete");
    LibreSearchError::TransportError(TransportResult::failed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(base_url: String) -> YoutubeClient {
        YoutubeClient::with_config(ClientConfig {
            base_url,
            ..ClientConfig::default()
        })
        .unwrap()
    }

    /// Serves one connection with a hand-written response
    async fn serve_raw(response: &'static [u8], hold_open: bool) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;
            let _ = socket.write_all(response).await;
            let _ = socket.flush().await;
            if hold_open {
                tokio::time::sleep(Duration::from_secs(30)).await;
            }
        });

        format!("http://{}", addr)
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://www.youtube.com");
        assert_eq!(config.language, "en");
    }

    #[test]
    fn test_client_creation() {
        let client = YoutubeClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = client_for("http://localhost:1234/".to_string());
        assert_eq!(client.base_url(), "http://localhost:1234");
        assert_eq!(client.language(), "en");
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/results"))
            .respond_with(ResponseTemplate::new(200).set_body_string("X"))
            .mount(&server)
            .await;

        let client = client_for(server.uri());
        let result = client.fetch("/results?search_query=cats&hl=en").await.unwrap();

        assert_eq!(result, TransportResult::completed(200, "X".to_string()));
    }

    #[tokio::test]
    async fn test_fetch_large_body_is_concatenated() {
        let body = "ytInitialData ".repeat(100_000);
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body.clone()))
            .mount(&server)
            .await;

        let client = client_for(server.uri());
        let result = client.fetch("/results").await.unwrap();

        assert_eq!(result.status_code, 200);
        assert_eq!(result.body, body);
    }

    #[tokio::test]
    async fn test_fetch_client_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found page"))
            .mount(&server)
            .await;

        let client = client_for(server.uri());
        let result = client.fetch("/results").await;

        match result {
            Err(LibreSearchError::ClientError(transport)) => {
                assert_eq!(transport.status_code, 404);
                assert!(transport.body.is_empty());
            }
            other => panic!("Expected ClientError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_server_error_resolves_with_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .mount(&server)
            .await;

        let client = client_for(server.uri());
        let result = client.fetch("/results").await.unwrap();

        assert_eq!(result.status_code, 503);
        assert_eq!(result.body, "unavailable");
    }

    #[tokio::test]
    async fn test_fetch_does_not_follow_redirects() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/results"))
            .respond_with(
                ResponseTemplate::new(302)
                    .insert_header("Location", format!("{}/elsewhere", server.uri()).as_str()),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/elsewhere"))
            .respond_with(ResponseTemplate::new(200).set_body_string("moved"))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(server.uri());
        let result = client.fetch("/results").await.unwrap();

        assert_eq!(result.status_code, 302);
        assert!(result.body.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_client_error_does_not_wait_for_body() {
        let base_url = serve_raw(
            b"HTTP/1.1 404 Not Found\r\nContent-Length: 100000\r\n\r\npartial",
            true,
        )
        .await;

        let client = client_for(base_url);
        let result = tokio::time::timeout(Duration::from_secs(5), client.fetch("/results"))
            .await
            .expect("4xx should resolve before the body finishes");

        match result {
            Err(LibreSearchError::ClientError(transport)) => {
                assert_eq!(transport.status_code, 404);
                assert!(transport.body.is_empty());
            }
            other => panic!("Expected ClientError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_truncated_stream_is_transport_error() {
        let base_url = serve_raw(
            b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\nshort",
            false,
        )
        .await;

        let client = client_for(base_url);
        let result = client.fetch("/results").await;

        match result {
            Err(LibreSearchError::TransportError(transport)) => {
                assert_eq!(transport, TransportResult::failed());
            }
            other => panic!("Expected TransportError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_invalid_utf8_is_transport_error() {
        let base_url = serve_raw(
            b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\n\xff\xfe",
            false,
        )
        .await;

        let client = client_for(base_url);
        let result = client.fetch("/results").await;

        assert_eq!(result.unwrap_err().status_code(), Some(-1));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{}", addr));
        let result = client.fetch("/results").await;

        match result {
            Err(LibreSearchError::TransportError(transport)) => {
                assert_eq!(transport.status_code, -1);
                assert!(transport.body.is_empty());
            }
            other => panic!("Expected TransportError, got {:?}", other),
        }
    }
}
