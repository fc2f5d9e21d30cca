//! Caught Pokémon collection
//!
//! Session-local; nothing here outlives the process.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::models::Pokemon;

/// A Pokémon record and when it was caught.
#[derive(Debug, Clone)]
pub struct CaughtPokemon {
    pub pokemon: Pokemon,
    pub caught_at: DateTime<Utc>,
}

/// Caught Pokémon keyed by lowercase name, iterated in name order.
#[derive(Debug, Default)]
pub struct Pokedex {
    caught: BTreeMap<String, CaughtPokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a catch under `name`. Catching the same name again replaces
    /// the earlier record.
    pub fn insert(&mut self, name: impl Into<String>, pokemon: Pokemon) {
        let caught = CaughtPokemon {
            pokemon,
            caught_at: Utc::now(),
        };
        self.caught.insert(name.into(), caught);
    }

    pub fn get(&self, name: &str) -> Option<&CaughtPokemon> {
        self.caught.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.caught.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.caught.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }
}
