// roster.rs
// Builds the full gallery roster: the listing page plus type and weakness
// labels gathered from every type category.

use std::collections::{BTreeSet, HashMap};

use crate::config::PokemonConfig;
use crate::error::PokedexError;
use crate::model::{RosterEntry, Sprites, resource_id};
use crate::pokemon::{NamedAPIResourceList, Type};
use crate::upstream::Upstream;

pub struct RosterAggregator<U> {
    upstream: U,
    config: PokemonConfig,
    sprites: Sprites,
}

impl<U: Upstream> RosterAggregator<U> {
    pub fn new(upstream: U, config: PokemonConfig, sprites: Sprites) -> Self {
        Self {
            upstream,
            config,
            sprites,
        }
    }

    pub fn upstream(&self) -> &U {
        &self.upstream
    }

    /// Fetches the listing and every type category. Any failed call aborts
    /// the whole build; no partial roster is returned.
    pub async fn build_roster(&self) -> Result<Vec<RosterEntry>, PokedexError> {
        let url = self.config.roster_url();
        let listing: NamedAPIResourceList = self.upstream.fetch(&url).await?;

        let mut roster = Vec::with_capacity(listing.results.len());
        let mut positions: HashMap<u32, usize> = HashMap::with_capacity(listing.results.len());
        for item in listing.results {
            let id = resource_id(&item.url).ok_or_else(|| {
                PokedexError::MissingData(format!("no identifier in roster URL {}", item.url))
            })?;
            if positions.contains_key(&id) {
                tracing::warn!("Duplicate roster identifier {} ({}), keeping first", id, item.name);
                continue;
            }
            positions.insert(id, roster.len());
            roster.push(RosterEntry::new(id, item.name, &self.sprites));
        }
        tracing::info!("Fetched roster listing with {} entries", roster.len());

        for index in 1..=self.config.type_count {
            let category: Type = self.upstream.fetch(&self.config.type_url(index)).await?;
            let assigned = assign_category(&mut roster, &positions, &category);
            tracing::debug!(
                "Type {} ({}) assigned to {} roster entries",
                category.name,
                index,
                assigned
            );
        }

        tracing::info!(
            "Roster built: {} entries across {} type categories",
            roster.len(),
            self.config.type_count
        );
        Ok(roster)
    }
}

/// The type names a category takes double damage from.
pub fn weak_against(category: &Type) -> BTreeSet<String> {
    category
        .damage_relations
        .double_damage_from
        .iter()
        .map(|t| t.name.clone())
        .collect()
}

/// Adds `category` to every roster entry listed among its members. Members
/// whose identifier is not in the roster are skipped. Returns how many
/// entries gained the type.
pub fn assign_category(
    roster: &mut [RosterEntry],
    positions: &HashMap<u32, usize>,
    category: &Type,
) -> usize {
    let weaknesses = weak_against(category);
    let mut assigned = 0;
    let mut skipped = 0;

    for member in &category.pokemon {
        let Some(position) = resource_id(&member.pokemon.url).and_then(|id| positions.get(&id)) else {
            skipped += 1;
            continue;
        };
        if let Some(entry) = roster.get_mut(*position) {
            if entry.add_type(&category.name, &weaknesses) {
                assigned += 1;
            }
        }
    }

    if skipped > 0 {
        tracing::warn!(
            "Skipped {} members of type {} not present in the roster",
            skipped,
            category.name
        );
    }
    assigned
}
