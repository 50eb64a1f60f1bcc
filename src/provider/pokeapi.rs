//! Sprite faces from the public PokeAPI.
//!
//! One listing request, a random sample of entries, then one detail request
//! per sampled entry. Detail requests run concurrently and are joined before
//! the catalog is returned; any failure fails the whole fetch.

use async_trait::async_trait;
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{sample_with_replacement, FaceCatalogProvider};
use crate::core::GameRng;
use crate::error::{Error, Result};
use crate::game::Face;

/// PokeAPI provider configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokeApiConfig {
    /// API root, without trailing slash.
    pub base_url: String,

    /// How many species to list before sampling.
    pub list_limit: usize,

    /// How many species to turn into faces.
    pub sample_size: usize,
}

impl Default for PokeApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://pokeapi.co/api/v2".to_string(),
            list_limit: 1000,
            sample_size: 6,
        }
    }
}

impl PokeApiConfig {
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_sample_size(mut self, size: usize) -> Self {
        self.sample_size = size;
        self
    }
}

#[derive(Debug, Deserialize)]
struct Listing {
    results: Vec<ListEntry>,
}

#[derive(Clone, Debug, Deserialize)]
struct ListEntry {
    url: String,
}

#[derive(Debug, Deserialize)]
struct Detail {
    sprites: Sprites,
}

#[derive(Debug, Deserialize)]
struct Sprites {
    front_default: Option<String>,
}

/// Fetches sprite URLs over HTTP.
#[derive(Clone, Debug)]
pub struct PokeApiProvider {
    client: reqwest::Client,
    config: PokeApiConfig,
}

impl PokeApiProvider {
    #[must_use]
    pub fn new(config: PokeApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.json::<T>().await?)
    }

    async fn fetch_face(&self, entry: &ListEntry) -> Result<Face> {
        let detail: Detail = self.get_json(&entry.url).await?;
        detail
            .sprites
            .front_default
            .map(Face::from)
            .ok_or_else(|| Error::source_unavailable(format!("no sprite at {}", entry.url)))
    }

    async fn fetch(&self) -> Result<Vec<Face>> {
        let list_url = format!(
            "{}/pokemon?limit={}&offset=0",
            self.config.base_url, self.config.list_limit
        );
        let listing: Listing = self.get_json(&list_url).await?;
        if listing.results.is_empty() {
            return Err(Error::source_unavailable("species listing is empty"));
        }

        let picked = {
            let mut rng = GameRng::from_entropy();
            sample_with_replacement(&listing.results, self.config.sample_size, &mut rng)
        };
        debug!(listed = listing.results.len(), picked = picked.len(), "fetching sprites");

        try_join_all(picked.iter().map(|entry| self.fetch_face(entry))).await
    }
}

impl Default for PokeApiProvider {
    fn default() -> Self {
        Self::new(PokeApiConfig::default())
    }
}

#[async_trait]
impl FaceCatalogProvider for PokeApiProvider {
    async fn fetch_catalog(&self) -> Result<Vec<Face>> {
        self.fetch().await.inspect_err(|err| {
            warn!(error = %err, base_url = %self.config.base_url, "face catalog fetch failed");
        })
    }
}
