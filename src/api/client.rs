//! PokeAPI Client
//!
//! Typed, cache-first access to the remote API.

use std::sync::Arc;

use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

/// Client for the PokeAPI that consults a shared [`Cache`] before the network.
///
/// Cache keys are full request URLs. Values are the canonical JSON encoding of
/// the decoded response, so a hit decodes to exactly what the original miss
/// returned.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: Client,
    cache: Arc<Cache>,
    base_url: String,
}

impl PokeApiClient {
    /// Creates a client with default HTTP settings.
    pub fn new(cache: Arc<Cache>, base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            cache,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Creates a client honouring the configured base URL and request timeout.
    pub fn from_config(config: &Config, cache: Arc<Cache>) -> Result<Self> {
        let http = Client::builder().timeout(config.http_timeout()).build()?;

        Ok(Self {
            http,
            cache,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The cache this client reads through.
    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// URL of the first location-area page.
    pub fn first_page_url(&self) -> String {
        format!("{}/location-area", self.base_url)
    }

    /// URL of a single location area.
    pub fn location_area_url(&self, name: &str) -> String {
        format!("{}/location-area/{}", self.base_url, name)
    }

    /// URL of a single pokemon.
    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, name)
    }

    /// Fetches `url` and decodes it as `T`, serving from the cache when possible.
    ///
    /// On a miss the response must carry a 2xx status. The decoded value is
    /// re-encoded and stored under `url` before it is returned.
    pub async fn fetch<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned + Serialize,
    {
        if let Some(bytes) = self.cache.get(url).await {
            debug!(url, "Cache hit");
            return Ok(serde_json::from_slice(&bytes)?);
        }

        debug!(url, "Cache miss, fetching");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let value: T = serde_json::from_slice(&body)?;

        let canonical = serde_json::to_vec(&value)?;
        self.cache.add(url, canonical).await;

        Ok(value)
    }

    /// Fetches one page of the location-area listing.
    pub async fn location_areas(&self, url: &str) -> Result<LocationAreaPage> {
        self.fetch(url).await
    }

    /// Fetches a location area and its encounters by name.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        self.fetch(&self.location_area_url(name)).await
    }

    /// Fetches a pokemon's detail record by name.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        self.fetch(&self.pokemon_url(name)).await
    }
}
