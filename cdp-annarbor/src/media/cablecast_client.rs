//! Cablecast video catalog client
//!
//! Endpoints used (relative to the configured API root):
//! - `shows/search/advanced/{id}`: saved search, list of show ids
//! - `shows/{id}`: show metadata including its `vods`
//! - `vods/{id}`: VOD metadata including the playable `url`

use async_trait::async_trait;
use cdp_common::config::CablecastConfig;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

const USER_AGENT: &str = concat!("cdp-annarbor/", env!("CARGO_PKG_VERSION"));

/// Cablecast client errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid media URL: {0}")]
    InvalidUrl(String),

    #[error("Missing {0}")]
    Missing(&'static str),
}

#[derive(Debug, Clone, Deserialize)]
struct SavedSearchResponse {
    #[serde(rename = "savedShowSearch")]
    saved_show_search: SavedShowSearch,
}

#[derive(Debug, Clone, Deserialize)]
struct SavedShowSearch {
    results: Vec<u64>,
}

#[derive(Debug, Clone, Deserialize)]
struct ShowResponse {
    show: Show,
}

/// Cablecast show
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Show {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    /// VOD ids; empty until the recording has been published
    pub vods: Vec<u64>,
}

#[derive(Debug, Clone, Deserialize)]
struct VodResponse {
    vod: Vod,
}

/// Cablecast video-on-demand record
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Vod {
    #[serde(default)]
    pub id: Option<u64>,
    pub url: String,
}

/// Video catalog lookups used by the media locator
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Show ids returned by a saved search
    async fn saved_search_results(&self, search_id: u64) -> Result<Vec<u64>, CatalogError>;

    /// Show metadata by id
    async fn show(&self, show_id: &str) -> Result<Show, CatalogError>;

    /// VOD metadata by id
    async fn vod(&self, vod_id: u64) -> Result<Vod, CatalogError>;
}

/// Cablecast HTTP client
pub struct CablecastClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl CablecastClient {
    pub fn new(config: &CablecastConfig) -> Result<Self, CatalogError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(url = %url, "Querying Cablecast API");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }
}

#[async_trait]
impl CatalogApi for CablecastClient {
    async fn saved_search_results(&self, search_id: u64) -> Result<Vec<u64>, CatalogError> {
        let response: SavedSearchResponse = self
            .get_json(&format!("shows/search/advanced/{}", search_id))
            .await?;
        Ok(response.saved_show_search.results)
    }

    async fn show(&self, show_id: &str) -> Result<Show, CatalogError> {
        let response: ShowResponse = self.get_json(&format!("shows/{}", show_id)).await?;
        Ok(response.show)
    }

    async fn vod(&self, vod_id: u64) -> Result<Vod, CatalogError> {
        let response: VodResponse = self.get_json(&format!("vods/{}", vod_id)).await?;
        if response.vod.url.trim().is_empty() {
            return Err(CatalogError::Missing("vod url"));
        }
        Ok(response.vod)
    }
}
