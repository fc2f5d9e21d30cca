//! Location-area DTOs
//!
//! Shapes of `GET /location-area` (paged list) and
//! `GET /location-area/{name}` (area detail).

use serde::{Deserialize, Serialize};

/// A `{ "name": ..., "url": ... }` reference to another resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One page of location areas.
///
/// `next` and `previous` are absolute URLs, `null` at either end of the list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationAreaPage {
    #[serde(default)]
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// A single location area and the pokemon that can be met there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationAreaDetail {
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<Encounter>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Encounter {
    pub pokemon: NamedResource,
}

impl LocationAreaDetail {
    /// Names of the pokemon encountered in this area, in API order.
    pub fn pokemon_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.as_str())
    }
}
