//! Catalog API client
//!
//! Fetches PokeAPI resources through the response cache. The cache key is the
//! exact request URL; cached bodies are decoded exactly like fresh ones.

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationAreaDetail, LocationAreaPage, Pokemon};

/// Location areas listed per `map` page.
pub const PAGE_SIZE: u32 = 20;

/// Where a fetched value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Cache,
    Network,
}

/// A decoded response plus its origin.
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    pub value: T,
    pub source: Source,
}

// == PokeAPI Client ==
/// HTTP client for the catalog API, backed by a shared [`Cache`].
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: Client,
    cache: Cache,
    base: Url,
}

impl PokeApiClient {
    // == Constructor ==
    /// Builds a client for `config.api_base` that caches through `cache`.
    pub fn new(config: &Config, cache: Cache) -> Result<Self> {
        let base = Url::parse(&config.api_base)
            .map_err(|_| PokedexError::InvalidBaseUrl(config.api_base.clone()))?;
        if base.cannot_be_a_base() {
            return Err(PokedexError::InvalidBaseUrl(config.api_base.clone()));
        }

        let http = Client::builder()
            .timeout(config.http_timeout())
            .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, cache, base })
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    // == URL Builders ==
    /// Appends path segments to the base URL; segments are percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// URL of the first page of location areas.
    pub fn first_location_page_url(&self) -> String {
        let mut url = self.endpoint(&["location-area"]);
        url.query_pairs_mut()
            .append_pair("offset", "0")
            .append_pair("limit", &PAGE_SIZE.to_string());
        url.to_string()
    }

    pub fn location_area_url(&self, name: &str) -> String {
        self.endpoint(&["location-area", name]).to_string()
    }

    pub fn pokemon_url(&self, name: &str) -> String {
        self.endpoint(&["pokemon", name]).to_string()
    }

    // == Resource Fetchers ==
    /// Fetches a page of location areas. `None` means the first page.
    pub async fn location_page(&self, url: Option<&str>) -> Result<Fetched<LocationAreaPage>> {
        match url {
            Some(url) => self.fetch(url).await,
            None => self.fetch(&self.first_location_page_url()).await,
        }
    }

    pub async fn location_area(&self, name: &str) -> Result<Fetched<LocationAreaDetail>> {
        self.fetch(&self.location_area_url(name)).await
    }

    pub async fn pokemon(&self, name: &str) -> Result<Fetched<Pokemon>> {
        self.fetch(&self.pokemon_url(name)).await
    }

    // == Fetch ==
    /// Returns the resource at `url`, from the cache when possible.
    ///
    /// On a miss the body is fetched, stored under `url`, then decoded. Only
    /// successful responses are cached. A cached body that fails to decode is
    /// reported as an error and left in place.
    pub async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<Fetched<T>> {
        if let Some(body) = self.cache.get(url) {
            let value = serde_json::from_slice(&body)?;
            return Ok(Fetched {
                value,
                source: Source::Cache,
            });
        }

        debug!(url = %url, "fetching from API");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await?;
        self.cache.add(url, body.to_vec());

        let value = serde_json::from_slice(&body)?;
        Ok(Fetched {
            value,
            source: Source::Network,
        })
    }
}
