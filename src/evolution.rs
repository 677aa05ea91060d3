// evolution.rs
// Evolution chains as an explicit tree, and the policy that flattens a tree
// into the linear sequence shown in the detail view.

use std::collections::HashSet;

use crate::config::BranchPolicy;
use crate::pokemon::ChainLink;

#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionNode {
    pub species_name: String,
    pub species_url: String,
    /// Minimum level of the first evolution condition leading here, if that
    /// condition is level based.
    pub min_level: Option<u32>,
    pub children: Vec<EvolutionNode>,
}

impl From<&ChainLink> for EvolutionNode {
    fn from(link: &ChainLink) -> Self {
        let min_level = link
            .evolution_details
            .first()
            .and_then(|detail| detail.min_level)
            .filter(|level| *level > 0);
        Self {
            species_name: link.species.name.clone(),
            species_url: link.species.url.clone(),
            min_level,
            children: link.evolves_to.iter().map(EvolutionNode::from).collect(),
        }
    }
}

impl EvolutionNode {
    pub fn is_branching(&self) -> bool {
        self.children.len() > 1 || self.children.iter().any(EvolutionNode::is_branching)
    }

    /// Total number of stages in the tree, all branches included.
    pub fn stage_count(&self) -> usize {
        1 + self.children.iter().map(EvolutionNode::stage_count).sum::<usize>()
    }

    /// Flattens the tree from this node following `policy`. A species that
    /// was already emitted ends the walk.
    pub fn linearize(&self, policy: BranchPolicy) -> Vec<&EvolutionNode> {
        let mut stages = Vec::new();
        let mut seen = HashSet::new();
        let mut current = Some(self);

        while let Some(node) = current {
            if !seen.insert(node.species_url.as_str()) {
                tracing::warn!(
                    "Evolution chain revisits {}, stopping walk",
                    node.species_name
                );
                break;
            }
            stages.push(node);
            current = match policy {
                BranchPolicy::FirstListed => node.children.first(),
            };
        }

        if self.is_branching() {
            tracing::debug!(
                "Evolution tree rooted at {} branches; kept {} of {} stages",
                self.species_name,
                stages.len(),
                self.stage_count()
            );
        }
        stages
    }
}
