//! Pokemon DTO
//!
//! The subset of `GET /pokemon/{name}` used for catching and inspecting.

use serde::{Deserialize, Serialize};

use super::NamedResource;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// Some forms have no base experience in the catalog.
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonType {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

impl Pokemon {
    // == Catch Chance ==
    /// Percent chance (0-100) of a catch succeeding.
    ///
    /// Stronger pokemon (higher base experience) are harder to catch; anything
    /// at 100 base experience or above cannot be caught.
    pub fn catch_chance(&self) -> u32 {
        100u32.saturating_sub(self.base_experience.unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pokemon_with_experience(base_experience: Option<u32>) -> Pokemon {
        Pokemon {
            name: "test".to_string(),
            base_experience,
            height: 0,
            weight: 0,
            stats: Vec::new(),
            types: Vec::new(),
        }
    }

    #[test]
    fn test_pokemon_deserialize() {
        let json = r#"{
            "name": "pikachu",
            "base_experience": 112,
            "height": 4,
            "weight": 60,
            "stats": [
                {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": ""}},
                {"base_stat": 55, "effort": 0, "stat": {"name": "attack", "url": ""}}
            ],
            "types": [
                {"slot": 1, "type": {"name": "electric", "url": ""}}
            ]
        }"#;
        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.name, "pikachu");
        assert_eq!(pokemon.base_experience, Some(112));
        assert_eq!(pokemon.height, 4);
        assert_eq!(pokemon.weight, 60);
        assert_eq!(pokemon.stats[1].stat.name, "attack");
        assert_eq!(pokemon.stats[1].base_stat, 55);
        assert_eq!(pokemon.types[0].kind.name, "electric");
    }

    #[test]
    fn test_null_base_experience() {
        let json = r#"{"name": "missingno", "base_experience": null}"#;
        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        assert!(pokemon.base_experience.is_none());
        assert_eq!(pokemon.catch_chance(), 100);
    }

    #[test]
    fn test_catch_chance() {
        assert_eq!(pokemon_with_experience(Some(36)).catch_chance(), 64);
        assert_eq!(pokemon_with_experience(Some(100)).catch_chance(), 0);
        assert_eq!(pokemon_with_experience(Some(608)).catch_chance(), 0);
    }
}
