//! Main Tracklist client.

use crate::error::{ClientError, Result};
use crate::tracks::TracksClient;
use crate::types::{ClientConfig, ErrorBody, HealthResponse};
use crate::upload::UploadClient;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Client for a Tracklist server.
///
/// Track operations live on [`TracksClient`] (`client.tracks()`), file
/// uploads on [`UploadClient`] (`client.upload()`).
///
/// # Example
///
/// ```ignore
/// use tracklist_client::{ClientConfig, TracklistClient};
/// use tracklist_core::TrackQuery;
///
/// let client = TracklistClient::new(ClientConfig::new("http://localhost:8000"))?;
/// let page = client.tracks().list(&TrackQuery::default()).await?;
/// println!("{} tracks", page.meta.total);
/// ```
#[derive(Debug, Clone)]
pub struct TracklistClient {
    http: Client,
    base_url: String,
}

impl TracklistClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let parsed = Url::parse(&config.url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Tracklist/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without trailing slash.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Base URL extended by `segments`, each percent-encoded as one path segment
    pub(crate) fn endpoint_segments(&self, segments: &[&str]) -> Result<Url> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Check that the server is up. Does not touch the track store.
    pub async fn health(&self) -> Result<HealthResponse> {
        let url = self.endpoint("/health");
        debug!(url = %url, "Checking server health");

        let response = self.http.get(&url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ClientError::ServerUnreachable(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })?;

        let health: HealthResponse = parse_json(response, "health").await?;
        info!(status = %health.status, version = %health.version, "Server reachable");
        Ok(health)
    }

    /// All genre names known to the server.
    pub async fn genres(&self) -> Result<Vec<String>> {
        let url = self.endpoint("/api/genres");
        debug!(url = %url, "Fetching genres");

        let response = self.http.get(&url).send().await?;
        parse_json(response, "genres").await
    }

    /// Track operations.
    pub fn tracks(&self) -> TracksClient<'_> {
        TracksClient::new(self)
    }

    /// File upload operations.
    pub fn upload(&self) -> UploadClient<'_> {
        UploadClient::new(self)
    }
}

/// Turn a non-success response into an error, preferring the server's
/// `{"error": ...}` message over the raw body.
pub(crate) async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|b| b.error)
        .unwrap_or(body);

    if status == StatusCode::NOT_FOUND {
        Err(ClientError::NotFound(message))
    } else {
        Err(ClientError::ServerError {
            status: status.as_u16(),
            message,
        })
    }
}

pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    check_status(response)
        .await?
        .json()
        .await
        .map_err(|e| ClientError::ParseError(format!("Failed to parse {} response: {}", what, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        assert!(TracklistClient::new(ClientConfig::new("https://example.com")).is_ok());
        assert!(TracklistClient::new(ClientConfig::new("http://localhost:8000")).is_ok());

        assert!(TracklistClient::new(ClientConfig::new("")).is_err());
        assert!(TracklistClient::new(ClientConfig::new("not-a-url")).is_err());
        assert!(TracklistClient::new(ClientConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn test_url_normalization() {
        let client = TracklistClient::new(ClientConfig::new("https://example.com/")).unwrap();
        assert_eq!(client.url(), "https://example.com");
        assert_eq!(client.endpoint("/api/genres"), "https://example.com/api/genres");
    }

    #[test]
    fn test_segments_are_encoded() {
        let client = TracklistClient::new(ClientConfig::new("https://example.com/base/")).unwrap();
        let url = client
            .endpoint_segments(&["api", "tracks", "a/b?c#d"])
            .unwrap();
        assert_eq!(url.as_str(), "https://example.com/base/api/tracks/a%2Fb%3Fc%23d");
    }
}
