//! Configuration Module
//!
//! Handles loading the Pokedex configuration from environment variables, with
//! command-line overrides applied on top.

use std::env;
use std::time::Duration;

use crate::cli::Cli;

/// Default catalog endpoint.
pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";

/// Pokedex configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Response cache TTL in seconds (also the cleanup period)
    pub cache_ttl: u64,
    /// Catalog base URL, without trailing slash
    pub api_base: String,
    /// HTTP request timeout in seconds
    pub http_timeout: u64,
    /// Seed for catch rolls; `None` draws from OS entropy
    pub rng_seed: Option<u64>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_CACHE_TTL_SECS` - Cache TTL in seconds (default: 10)
    /// - `POKEDEX_API_BASE` - Catalog base URL (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_HTTP_TIMEOUT_SECS` - Request timeout in seconds (default: 10)
    /// - `POKEDEX_RNG_SEED` - Fixed seed for catch rolls (default: unset)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_ttl: env::var("POKEDEX_CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_ttl),
            api_base: env::var("POKEDEX_API_BASE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(|v| normalize_base(&v))
                .unwrap_or(defaults.api_base),
            http_timeout: env::var("POKEDEX_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.http_timeout),
            rng_seed: env::var("POKEDEX_RNG_SEED")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }

    /// Applies command-line flags over this configuration.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(ttl) = cli.ttl {
            self.cache_ttl = ttl;
        }
        if let Some(base) = &cli.api_base {
            self.api_base = normalize_base(base);
        }
        if let Some(seed) = cli.seed {
            self.rng_seed = Some(seed);
        }
        self
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: 10,
            api_base: DEFAULT_API_BASE.to_string(),
            http_timeout: 10,
            rng_seed: None,
        }
    }
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}
