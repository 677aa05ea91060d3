// detail.rs
// Composes one denormalized detail record from the pokemon, species,
// evolution-chain and type resources of a single Pokémon.

use futures::future::try_join_all;

use crate::config::{DetailConfig, PokemonConfig, WeaknessPolicy};
use crate::error::PokedexError;
use crate::evolution::EvolutionNode;
use crate::model::{DetailRecord, EvolutionStage, Sprites, Stat, Weakness};
use crate::pokemon::{ENGLISH, EvolutionChain, FlavorText, Genus, Pokemon, PokemonSpecies, PokemonStat, Type};
use crate::session::{DetailSession, Selection};
use crate::styles::StyleTables;
use crate::upstream::Upstream;

pub const NO_ENTRY: &str = "No entry available.";

pub struct DetailComposer<U> {
    upstream: U,
    config: PokemonConfig,
    policy: DetailConfig,
    sprites: Sprites,
    styles: StyleTables,
}

impl<U: Upstream> DetailComposer<U> {
    pub fn new(
        upstream: U,
        config: PokemonConfig,
        policy: DetailConfig,
        sprites: Sprites,
        styles: StyleTables,
    ) -> Self {
        Self {
            upstream,
            config,
            policy,
            sprites,
            styles,
        }
    }

    pub fn upstream(&self) -> &U {
        &self.upstream
    }

    pub async fn build_detail(&self, id: u32) -> Result<DetailRecord, PokedexError> {
        if id == 0 {
            return Err(PokedexError::InvalidId(id));
        }

        let pokemon: Pokemon = self.upstream.fetch(&self.config.pokemon_url(id)).await?;
        let species: PokemonSpecies = self.upstream.fetch(&pokemon.species.url).await?;
        let chain_url = species
            .evolution_chain
            .as_ref()
            .map(|c| c.url.clone())
            .ok_or_else(|| {
                PokedexError::MissingData(format!("species {} has no evolution chain", species.name))
            })?;
        let chain: EvolutionChain = self.upstream.fetch(&chain_url).await?;

        let weaknesses = self.weaknesses(&pokemon).await?;
        let stats = self.stats(&pokemon.stats);
        let genus = english_genus(&species.genera).ok_or_else(|| {
            tracing::error!("Species {} has no English genus", species.name);
            PokedexError::MissingData(format!("no English genus for species {}", species.name))
        })?;
        let pokedex_entry = pokedex_entry(&species.flavor_text_entries);
        let evolution_chain = self
            .evolution_stages(&EvolutionNode::from(&chain.chain))
            .await?;

        let (img, gif) = self.sprites.urls(pokemon.id);
        tracing::debug!("Composed detail for {} (ID: {})", pokemon.name, pokemon.id);

        Ok(DetailRecord {
            id: pokemon.id,
            name: pokemon.name,
            height: pokemon.height,
            weight: pokemon.weight,
            abilities: pokemon
                .abilities
                .into_iter()
                .map(|a| a.ability.name)
                .collect(),
            stats,
            types: pokemon.types.into_iter().map(|t| t.r#type.name).collect(),
            img,
            gif,
            weaknesses,
            base_experience: pokemon.base_experience.unwrap_or_default(),
            genus,
            evolution_chain,
            pokedex_entry,
        })
    }

    /// Builds a detail record and commits it to `session` unless a newer
    /// request was started meanwhile.
    pub async fn select(&self, session: &DetailSession, id: u32) -> Result<Selection, PokedexError> {
        // An invalid identifier must not supersede a request in flight.
        if id == 0 {
            return Err(PokedexError::InvalidId(id));
        }
        let token = session.begin();
        let record = self.build_detail(id).await?;
        Ok(session.commit(token, record))
    }

    /// Fetches every own type concurrently; results keep the type order.
    async fn weaknesses(&self, pokemon: &Pokemon) -> Result<Vec<Weakness>, PokedexError> {
        let lookups = pokemon
            .types
            .iter()
            .map(|slot| self.upstream.fetch::<Type>(&slot.r#type.url));
        let types = try_join_all(lookups).await?;

        let weaknesses = types
            .iter()
            .flat_map(|t| t.damage_relations.double_damage_from.iter())
            .map(|relation| self.styles.weakness(&relation.name))
            .collect();
        Ok(apply_policy(weaknesses, self.policy.weakness_policy))
    }

    fn stats(&self, raw: &[PokemonStat]) -> Vec<Stat> {
        let mut stats: Vec<Stat> = raw
            .iter()
            .map(|s| self.styles.stat(&s.stat.name, s.base_stat.unwrap_or_default()))
            .collect();
        let total = stats.iter().map(|s| s.value).sum();
        stats.push(self.styles.total(total));
        stats
    }

    async fn evolution_stages(&self, root: &EvolutionNode) -> Result<Vec<EvolutionStage>, PokedexError> {
        let mut stages = Vec::new();
        for node in root.linearize(self.policy.branch_policy) {
            let species: PokemonSpecies = self.upstream.fetch(&node.species_url).await?;
            let (img, gif) = self.sprites.urls(species.id);
            stages.push(EvolutionStage {
                id: species.id,
                name: node.species_name.clone(),
                img,
                gif,
                level_up: node.min_level,
            });
        }
        Ok(stages)
    }
}

pub fn apply_policy(weaknesses: Vec<Weakness>, policy: WeaknessPolicy) -> Vec<Weakness> {
    match policy {
        WeaknessPolicy::KeepAll => weaknesses,
        WeaknessPolicy::Distinct => {
            let mut distinct: Vec<Weakness> = Vec::with_capacity(weaknesses.len());
            for weakness in weaknesses {
                if !distinct.iter().any(|w| w.name == weakness.name) {
                    distinct.push(weakness);
                }
            }
            distinct
        }
    }
}

pub fn english_genus(genera: &[Genus]) -> Option<String> {
    genera
        .iter()
        .find(|g| g.language.name == ENGLISH)
        .map(|g| g.genus.clone())
}

/// First English flavor text with form feeds and line breaks turned into
/// spaces, or [`NO_ENTRY`].
pub fn pokedex_entry(entries: &[FlavorText]) -> String {
    match entries.iter().find(|e| e.language.name == ENGLISH) {
        Some(entry) => entry
            .flavor_text
            .chars()
            .map(|c| match c {
                '\u{000C}' | '\n' | '\r' => ' ',
                other => other,
            })
            .collect(),
        None => {
            tracing::warn!("No English flavor text, using placeholder");
            NO_ENTRY.to_string()
        }
    }
}
