//! Error types for the Pokedex
//!
//! Provides unified error handling using thiserror. The response cache itself
//! never returns these from `add`/`get`; they cover construction and the
//! catalog client.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Cache TTL must be strictly positive
    #[error("Invalid cache TTL: must be greater than zero")]
    InvalidTtl,

    /// The cache was constructed outside of a tokio runtime
    #[error("No tokio runtime available to run the cache cleanup task")]
    NoRuntime,

    /// Catalog base URL could not be used to build request URLs
    #[error("Invalid API base URL '{0}'")]
    InvalidBaseUrl(String),

    /// HTTP transport failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog answered with a non-success status
    #[error("Request to {url} failed with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Response body was not the expected JSON
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Terminal I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex.
pub type Result<T> = std::result::Result<T, PokedexError>;
