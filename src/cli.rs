//! Command-line interface parsing for the Pokedex
//!
//! Flags override the corresponding environment variables.

use clap::Parser;

/// Pokedex - explore the PokeAPI catalog from your terminal
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Interactive PokeAPI explorer with a response cache")]
#[command(version)]
pub struct Cli {
    /// Response cache TTL in seconds (must be greater than zero)
    #[arg(long, value_name = "SECS")]
    pub ttl: Option<u64>,

    /// Catalog base URL, e.g. https://pokeapi.co/api/v2
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,

    /// Seed for catch rolls, for reproducible sessions
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}
