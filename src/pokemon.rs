// pokemon.rs
// Wire shapes of the upstream PokéAPI resources. Only the fields the
// aggregator and composer read are modeled; everything else is ignored.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NamedAPIResource {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NamedAPIResourceList {
    #[serde(default)]
    pub count: u32,
    pub results: Vec<NamedAPIResource>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub base_experience: Option<u32>,
    pub height: u32,
    pub weight: u32,
    pub abilities: Vec<PokemonAbility>,
    pub species: NamedAPIResource,
    pub stats: Vec<PokemonStat>,
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonAbility {
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: u32,
    pub ability: NamedAPIResource,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonStat {
    pub base_stat: Option<u32>,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedAPIResource,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonType {
    pub slot: u32,
    pub r#type: NamedAPIResource,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonSpecies {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub genera: Vec<Genus>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorText>,
    pub evolution_chain: Option<APIResource>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct APIResource {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Genus {
    pub genus: String,
    pub language: NamedAPIResource,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FlavorText {
    pub flavor_text: String,
    pub language: NamedAPIResource,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EvolutionChain {
    pub id: u32,
    pub chain: ChainLink,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChainLink {
    pub species: NamedAPIResource,
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EvolutionDetail {
    pub min_level: Option<u32>,
    pub trigger: Option<NamedAPIResource>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Type {
    pub id: u32,
    pub name: String,
    pub damage_relations: TypeRelations,
    #[serde(default)]
    pub pokemon: Vec<TypePokemon>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct TypeRelations {
    #[serde(default)]
    pub double_damage_from: Vec<NamedAPIResource>,
    #[serde(default)]
    pub double_damage_to: Vec<NamedAPIResource>,
    #[serde(default)]
    pub half_damage_from: Vec<NamedAPIResource>,
    #[serde(default)]
    pub no_damage_from: Vec<NamedAPIResource>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TypePokemon {
    #[serde(default)]
    pub slot: u32,
    pub pokemon: NamedAPIResource,
}

/// Language code upstream uses for English entries.
pub const ENGLISH: &str = "en";
