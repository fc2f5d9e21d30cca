//! Pokedex - an interactive PokeAPI explorer
//!
//! Pages through location areas, explores them and catches Pokémon. Every
//! catalog request goes through a time-expiring in-memory response cache.

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
mod tasks;

pub use api::PokeApiClient;
pub use cache::{Cache, CacheStats};
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::Session;
