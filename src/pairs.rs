use rand::Rng;
use rand::RngCore;

use crate::adjacency::AdjacencyGraph;
use crate::model::ValidPair;
use crate::registry::{CountryRegistry, fold_name};

/// Curated Country Path puzzles with random generation as a fallback.
#[derive(Debug, Clone, Default)]
pub struct PairCatalog {
    pairs: Vec<ValidPair>,
}

impl PairCatalog {
    pub fn new(pairs: Vec<ValidPair>) -> Self {
        Self { pairs }
    }

    pub fn pairs(&self) -> &[ValidPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Curated pairs whose ends both resolve, rewritten to canonical names.
    pub fn playable(&self, registry: &CountryRegistry) -> Vec<ValidPair> {
        self.pairs
            .iter()
            .filter_map(|pair| {
                let start = registry.canonical_name(pair.start.trim());
                let end = registry.canonical_name(pair.end.trim());
                match (start, end) {
                    (Some(s), Some(e)) if s != e => Some(ValidPair::new(s, e)),
                    _ => {
                        tracing::debug!("skipping unplayable pair {} -> {}", pair.start, pair.end);
                        None
                    }
                }
            })
            .collect()
    }

    /// Pick a curated pair at random, or generate one when none are playable.
    pub fn random_pair(
        &self,
        registry: &CountryRegistry,
        graph: &AdjacencyGraph,
        attempts: usize,
        rng: &mut dyn RngCore,
    ) -> Option<ValidPair> {
        let playable = self.playable(registry);
        if !playable.is_empty() {
            let idx = rng.random_range(0..playable.len());
            return Some(playable[idx].clone());
        }
        generate_pair(registry, graph, attempts, rng)
    }
}

/// Random start; the end is a reachable country of the same classification
/// that is not already a neighbor, else any direct neighbor.
pub fn generate_pair(
    registry: &CountryRegistry,
    graph: &AdjacencyGraph,
    attempts: usize,
    rng: &mut dyn RngCore,
) -> Option<ValidPair> {
    let countries: Vec<_> = registry.iter().collect();
    if countries.len() < 2 {
        return None;
    }

    for _ in 0..attempts {
        let start = countries[rng.random_range(0..countries.len())];
        let tag = fold_name(&start.classification);

        let same_class: Vec<&str> = if tag.is_empty() {
            Vec::new()
        } else {
            countries
                .iter()
                .filter(|c| c.name != start.name && fold_name(&c.classification) == tag)
                .filter(|c| !graph.is_adjacent(&start.name, &c.name))
                .filter(|c| graph.shortest_path(&start.name, &c.name).is_some())
                .map(|c| c.name.as_str())
                .collect()
        };
        if !same_class.is_empty() {
            let end = same_class[rng.random_range(0..same_class.len())];
            return Some(ValidPair::new(&start.name, end));
        }

        let neighbors: Vec<&str> = graph
            .neighbors(&start.name)
            .into_iter()
            .filter_map(|n| registry.canonical_name(n))
            .filter(|n| *n != start.name)
            .collect();
        if !neighbors.is_empty() {
            let end = neighbors[rng.random_range(0..neighbors.len())];
            return Some(ValidPair::new(&start.name, end));
        }
    }

    tracing::warn!("no pair found after {attempts} attempts");
    None
}
