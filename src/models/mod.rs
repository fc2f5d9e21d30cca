//! Catalog API models
//!
//! Serde DTOs for the PokeAPI resources the REPL reads. The cache never sees
//! these; it stores the raw response bodies they are decoded from.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{Encounter, LocationAreaDetail, LocationAreaPage, NamedResource};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
