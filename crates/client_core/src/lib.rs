use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use shared::{
    domain::Ticker,
    error::PressReleaseError,
    protocol::{ApiErrorBody, PressRelease, PressReleasesResponse},
};
use tracing::{debug, info, warn};

pub mod catalog;
pub mod config;
pub mod view;

pub use catalog::{
    load_catalog, parse_catalog, parse_catalog_detailed, CatalogParse, CatalogSource, RowIssue,
};
pub use config::{load_settings, Settings};
pub use reqwest::Client as HttpClient;
pub use view::{format_long_date, release_count_line, ReleaseView};

/// Anything that can produce press releases for a ticker.
#[async_trait]
pub trait PressReleaseSource: Send + Sync {
    async fn fetch(&self, ticker: &Ticker) -> Result<Vec<PressRelease>, PressReleaseError>;
}

/// HTTP client for `GET {base}/press-releases?ticker=...`.
///
/// One request per call; no retries, timeout, or caching.
#[derive(Debug, Clone)]
pub struct PressReleaseClient {
    http: Client,
    api_base_url: String,
}

impl PressReleaseClient {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self::with_http_client(Client::new(), api_base_url)
    }

    pub fn with_http_client(http: Client, api_base_url: impl Into<String>) -> Self {
        let api_base_url = api_base_url.into().trim_end_matches('/').to_string();
        Self { http, api_base_url }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn press_releases_url(&self, ticker: &Ticker) -> String {
        format!(
            "{}/press-releases?ticker={}",
            self.api_base_url,
            urlencoding::encode(ticker.as_str())
        )
    }

    pub async fn fetch_press_releases(
        &self,
        ticker: &Ticker,
    ) -> Result<Vec<PressRelease>, PressReleaseError> {
        let url = self.press_releases_url(ticker);
        debug!(ticker = %ticker, %url, "press releases: requesting");

        let response = self
            .http
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| PressReleaseError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let server_message = read_error_message(response).await;
            warn!(
                ticker = %ticker,
                status = status.as_u16(),
                message = server_message.as_deref().unwrap_or(""),
                "press releases: request rejected"
            );
            return Err(PressReleaseError::api(status.as_u16(), server_message));
        }

        let body: PressReleasesResponse = response
            .json()
            .await
            .map_err(|e| PressReleaseError::Decode(e.to_string()))?;
        let releases = body.into_releases();
        info!(ticker = %ticker, count = releases.len(), "press releases: loaded");
        Ok(releases)
    }
}

#[async_trait]
impl PressReleaseSource for PressReleaseClient {
    async fn fetch(&self, ticker: &Ticker) -> Result<Vec<PressRelease>, PressReleaseError> {
        self.fetch_press_releases(ticker).await
    }
}

async fn read_error_message(response: reqwest::Response) -> Option<String> {
    let status: StatusCode = response.status();
    let bytes = match response.bytes().await {
        Ok(bytes) => bytes,
        Err(err) => {
            debug!(status = status.as_u16(), "press releases: error body unreadable: {err}");
            return None;
        }
    };
    match serde_json::from_slice::<ApiErrorBody>(&bytes) {
        Ok(body) => body.error,
        Err(err) => {
            debug!(status = status.as_u16(), "press releases: error body is not JSON: {err}");
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
