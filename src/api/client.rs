//! HTTP client for the PokeAPI.
//!
//! Two call sites exist in the whole application: list pages and detail
//! resources. Both are plain GETs; the server drives pagination by handing
//! back absolute `next` links that are followed verbatim.

use std::fmt;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::types::{PageResponse, PokemonResponse};

/// Errors that can occur while talking to the API.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// API returned a non-success status.
    Api { status: u16, message: String },
    /// Failed to decode the response body.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Read seam for the PokeAPI.
///
/// The event loop holds an `Arc<dyn PokeApi>` so tests can substitute a
/// stub that serves canned responses without any I/O.
#[async_trait]
pub trait PokeApi: Send + Sync {
    /// Fetches one list page. `url` is either the constructed first-page
    /// URL or a server-supplied `next` link, used verbatim.
    async fn fetch_page(&self, url: &str) -> Result<PageResponse, ApiError>;

    /// Fetches the detail resource behind a list entry's locator.
    async fn fetch_profile(&self, url: &str) -> Result<PokemonResponse, ApiError>;
}

/// Production client backed by `reqwest`.
pub struct PokeApiClient {
    client: reqwest::Client,
}

impl PokeApiClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// GETs `url` and decodes the body as `T`.
    ///
    /// The body is read as text first so a decode failure maps to
    /// `ApiError::Parse` rather than being lumped in with transport errors.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        debug!("GET {} -> {}", url, status);

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("PokeAPI error: {} - {}", status.as_u16(), message);
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PokeApi for PokeApiClient {
    async fn fetch_page(&self, url: &str) -> Result<PageResponse, ApiError> {
        let page: PageResponse = self.get_json(url).await?;
        info!(
            "Fetched page: {} entries, next={:?}",
            page.results.len(),
            page.next
        );
        Ok(page)
    }

    async fn fetch_profile(&self, url: &str) -> Result<PokemonResponse, ApiError> {
        let body: PokemonResponse = self.get_json(url).await?;
        info!("Fetched profile: {} ({} stats)", body.name, body.stats.len());
        Ok(body)
    }
}

/// Builds the first-page URL from the configured base and cursor position.
/// Every later page uses the envelope's `next` link instead.
pub fn page_url(base_url: &str, offset: u32, limit: u32) -> String {
    format!(
        "{}/pokemon?offset={}&limit={}",
        base_url.trim_end_matches('/'),
        offset,
        limit
    )
}
