// browse.rs
// Client-side search, type/weakness filters and pagination over the roster.

use serde::{Deserialize, Serialize};

use crate::model::RosterEntry;

/// Gallery filter. Empty selections match everything; within one selection
/// any single match is enough.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RosterFilter {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
}

impl RosterFilter {
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.types.is_empty() && self.weaknesses.is_empty()
    }

    pub fn matches(&self, entry: &RosterEntry) -> bool {
        let matches_query = entry
            .name
            .to_lowercase()
            .contains(&self.query.to_lowercase());
        let matches_type = self.types.is_empty() || self.types.iter().any(|t| entry.has_type(t));
        let matches_weakness = self.weaknesses.is_empty()
            || self.weaknesses.iter().any(|w| entry.has_weakness(w));
        matches_query && matches_type && matches_weakness
    }

    pub fn apply<'a>(&self, roster: &'a [RosterEntry]) -> Vec<&'a RosterEntry> {
        roster.iter().filter(|entry| self.matches(entry)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub has_more: bool,
    pub items: Vec<T>,
}

/// Slices page `page` (1-based, 0 treated as 1) out of `items`. Pages past
/// the end are empty.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    Page {
        page,
        page_size,
        total: items.len(),
        has_more: end < items.len(),
        items: items[start..end].to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ImageConfig;
    use crate::model::Sprites;
    use std::collections::BTreeSet;

    fn roster() -> Vec<RosterEntry> {
        let sprites = Sprites::new(&ImageConfig {
            static_template: "{id}.png".to_string(),
            animated_template: "{id}.gif".to_string(),
        });
        let weak = |names: &[&str]| names.iter().map(|n| n.to_string()).collect::<BTreeSet<_>>();

        let mut bulbasaur = RosterEntry::new(1, "bulbasaur", &sprites);
        bulbasaur.add_type("grass", &weak(&["fire", "ice", "flying", "psychic"]));
        bulbasaur.add_type("poison", &weak(&["ground", "psychic"]));
        let mut charmander = RosterEntry::new(4, "charmander", &sprites);
        charmander.add_type("fire", &weak(&["water", "ground", "rock"]));
        let mut squirtle = RosterEntry::new(7, "squirtle", &sprites);
        squirtle.add_type("water", &weak(&["grass", "electric"]));
        let untyped = RosterEntry::new(9, "Blastoise", &sprites);

        vec![bulbasaur, charmander, squirtle, untyped]
    }

    fn ids(entries: &[&RosterEntry]) -> Vec<u32> {
        entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let roster = roster();
        let filter = RosterFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&roster).len(), 4);
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let roster = roster();
        let filter = RosterFilter {
            query: "BLAST".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&roster)), vec![9]);
    }

    #[test]
    fn test_any_selected_type_matches() {
        let roster = roster();
        let filter = RosterFilter {
            types: vec!["fire".to_string(), "water".to_string()],
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&roster)), vec![4, 7]);
    }

    #[test]
    fn test_weakness_filter_skips_entries_without_weaknesses() {
        let roster = roster();
        let filter = RosterFilter {
            weaknesses: vec!["ground".to_string()],
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&roster)), vec![1, 4]);
    }

    #[test]
    fn test_all_criteria_must_hold() {
        let roster = roster();
        let filter = RosterFilter {
            query: "char".to_string(),
            types: vec!["fire".to_string()],
            weaknesses: vec!["psychic".to_string()],
        };
        assert!(filter.apply(&roster).is_empty());
    }

    #[test]
    fn test_paginate_slices_and_reports_more() {
        let items: Vec<u32> = (1..=50).collect();

        let first = paginate(&items, 1, 24);
        assert_eq!(first.items, (1..=24).collect::<Vec<_>>());
        assert!(first.has_more);
        assert_eq!(first.total, 50);

        let last = paginate(&items, 3, 24);
        assert_eq!(last.items, vec![49, 50]);
        assert!(!last.has_more);

        let beyond = paginate(&items, 9, 24);
        assert!(beyond.items.is_empty());
        assert!(!beyond.has_more);
    }

    #[test]
    fn test_page_zero_is_first_page() {
        let items = vec!['a', 'b', 'c'];
        let page = paginate(&items, 0, 2);
        assert_eq!(page.page, 1);
        assert_eq!(page.items, vec!['a', 'b']);
        assert!(page.has_more);
    }
}
