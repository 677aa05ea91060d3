// model.rs
// View models handed to the presentation layer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::config::ImageConfig;

/// One gallery entry of the roster.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RosterEntry {
    pub id: u32,
    pub name: String,
    pub img: String,
    pub gif: String,
    /// Type labels in type-category order, never repeated.
    pub types: Vec<String>,
    /// Union of the double-damage-from sets of every type above; `None`
    /// until the entry has been seen in at least one type category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weaknesses: Option<BTreeSet<String>>,
}

impl RosterEntry {
    pub fn new(id: u32, name: impl Into<String>, sprites: &Sprites) -> Self {
        let (img, gif) = sprites.urls(id);
        Self {
            id,
            name: name.into(),
            img,
            gif,
            types: Vec::new(),
            weaknesses: None,
        }
    }

    /// Records membership in a type category. Returns false when the entry
    /// already carried that type.
    pub fn add_type(&mut self, type_name: &str, weak_against: &BTreeSet<String>) -> bool {
        if self.types.iter().any(|t| t == type_name) {
            return false;
        }
        self.types.push(type_name.to_string());
        self.weaknesses
            .get_or_insert_with(BTreeSet::new)
            .extend(weak_against.iter().cloned());
        true
    }

    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.iter().any(|t| t == type_name)
    }

    pub fn has_weakness(&self, type_name: &str) -> bool {
        self.weaknesses
            .as_ref()
            .is_some_and(|w| w.contains(type_name))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Stat {
    pub code: String,
    pub name: String,
    pub color: String,
    pub value: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Weakness {
    pub name: String,
    pub background: String,
    pub icon: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EvolutionStage {
    pub id: u32,
    pub name: String,
    pub img: String,
    pub gif: String,
    /// Minimum level that evolves the previous stage into this one.
    pub level_up: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DetailRecord {
    pub id: u32,
    pub name: String,
    /// Decimetres, as reported upstream.
    pub height: u32,
    /// Hectograms, as reported upstream.
    pub weight: u32,
    pub abilities: Vec<String>,
    /// The base stats in upstream order followed by the `TOT` aggregate.
    pub stats: Vec<Stat>,
    pub types: Vec<String>,
    pub img: String,
    pub gif: String,
    pub weaknesses: Vec<Weakness>,
    pub base_experience: u32,
    pub genus: String,
    pub evolution_chain: Vec<EvolutionStage>,
    pub pokedex_entry: String,
}

impl DetailRecord {
    pub fn total(&self) -> Option<&Stat> {
        self.stats.last().filter(|s| s.name == crate::styles::TOTAL_NAME)
    }
}

/// Image URL construction from the configured templates.
#[derive(Debug, Clone)]
pub struct Sprites {
    static_template: String,
    animated_template: String,
}

impl Sprites {
    pub const PLACEHOLDER: &'static str = "{id}";

    pub fn new(config: &ImageConfig) -> Self {
        Self {
            static_template: config.static_template.clone(),
            animated_template: config.animated_template.clone(),
        }
    }

    pub fn image(&self, id: u32) -> String {
        self.static_template.replace(Self::PLACEHOLDER, &id.to_string())
    }

    pub fn animated(&self, id: u32) -> String {
        self.animated_template.replace(Self::PLACEHOLDER, &id.to_string())
    }

    pub fn urls(&self, id: u32) -> (String, String) {
        (self.image(id), self.animated(id))
    }
}

/// Extracts the positive numeric identifier from the last path segment of a
/// resource URL such as `https://pokeapi.co/api/v2/pokemon/25/`.
pub fn resource_id(url: &str) -> Option<u32> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse::<u32>().ok())
        .filter(|id| *id > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprites() -> Sprites {
        Sprites::new(&ImageConfig {
            static_template: "https://img.example/{id}.png".to_string(),
            animated_template: "https://img.example/animated/{id}.gif".to_string(),
        })
    }

    #[test]
    fn test_resource_id_reads_trailing_segment() {
        assert_eq!(resource_id("https://pokeapi.co/api/v2/pokemon/25/"), Some(25));
        assert_eq!(resource_id("https://pokeapi.co/api/v2/pokemon/898"), Some(898));
        assert_eq!(resource_id("https://pokeapi.co/api/v2/pokemon/10034/"), Some(10034));
    }

    #[test]
    fn test_resource_id_rejects_non_numeric_and_zero() {
        assert_eq!(resource_id("https://pokeapi.co/api/v2/pokemon/pikachu/"), None);
        assert_eq!(resource_id("https://pokeapi.co/api/v2/pokemon/0/"), None);
        assert_eq!(resource_id(""), None);
    }

    #[test]
    fn test_sprites_substitute_identifier() {
        let (img, gif) = sprites().urls(7);
        assert_eq!(img, "https://img.example/7.png");
        assert_eq!(gif, "https://img.example/animated/7.gif");
    }

    #[test]
    fn test_add_type_is_idempotent_and_unions_weaknesses() {
        let mut entry = RosterEntry::new(1, "bulbasaur", &sprites());
        assert!(entry.weaknesses.is_none());

        let grass: BTreeSet<String> = ["fire", "ice", "flying", "bug", "poison"]
            .into_iter()
            .map(String::from)
            .collect();
        let poison: BTreeSet<String> = ["ground", "psychic"].into_iter().map(String::from).collect();

        assert!(entry.add_type("grass", &grass));
        assert!(entry.add_type("poison", &poison));
        assert!(!entry.add_type("grass", &grass));

        assert_eq!(entry.types, vec!["grass", "poison"]);
        assert_eq!(entry.weaknesses.as_ref().map(|w| w.len()), Some(7));
        assert!(entry.has_weakness("psychic"));
        assert!(!entry.has_weakness("water"));
    }
}
