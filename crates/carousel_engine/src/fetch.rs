use std::time::Duration;

use carousel_core::FeedEntry;
use carousel_logging::carousel_debug;
use futures_util::StreamExt;

use crate::{parse_feed, FailureKind, FeedError, FeedRequest, FetchError};

pub const DEFAULT_FEED_BASE_URL: &str = "https://itunes.apple.com";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_FEED_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(10),
            redirect_limit: 5,
            max_bytes: 2 * 1024 * 1024,
        }
    }
}

/// Produces the most recent page of reviews for an app.
#[async_trait::async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch_entries(&self, request: &FeedRequest) -> Result<Vec<FeedEntry>, FeedError>;
}

/// Builds `{base}/{locale}/rss/customerreviews/id={app_id}/sortBy=mostRecent/json`.
pub fn feed_url(base_url: &str, request: &FeedRequest) -> Result<url::Url, FetchError> {
    let mut url = url::Url::parse(base_url)
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
    let id_segment = format!("id={}", request.app_id);
    url.path_segments_mut()
        .map_err(|()| FetchError::new(FailureKind::InvalidUrl, "base url cannot hold a path"))?
        .pop_if_empty()
        .extend([
            request.locale.as_str(),
            "rss",
            "customerreviews",
            id_segment.as_str(),
            "sortBy=mostRecent",
            "json",
        ]);
    Ok(url)
}

#[derive(Debug, Clone)]
pub struct ReqwestFeedSource {
    settings: FetchSettings,
}

impl ReqwestFeedSource {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(self.settings.redirect_limit))
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    async fn download(&self, url: url::Url) -> Result<Vec<u8>, FetchError> {
        let client = self.build_client()?;
        let response = client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }

    fn too_large(&self, actual: u64) -> FetchError {
        FetchError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl FeedSource for ReqwestFeedSource {
    async fn fetch_entries(&self, request: &FeedRequest) -> Result<Vec<FeedEntry>, FeedError> {
        let url = feed_url(&self.settings.base_url, request)?;
        carousel_debug!("Fetching review feed {}", url);
        let bytes = self.download(url).await?;
        Ok(parse_feed(&bytes)?)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_builder() {
        return FetchError::new(FailureKind::InvalidUrl, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
