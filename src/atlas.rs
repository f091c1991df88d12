use rand::RngCore;

use crate::adjacency::AdjacencyGraph;
use crate::config::QuizConfig;
use crate::model::{Country, Place, RenderCountry, ValidPair};
use crate::pairs::PairCatalog;
use crate::projection::CoordinateProjector;
use crate::region::RegionIndex;
use crate::registry::CountryRegistry;
use crate::resolver::NameResolver;

/// Everything built once at load, plus the per-session flags and named set
/// that live on the registry and region index.
#[derive(Debug, Clone)]
pub struct Atlas {
    pub config: QuizConfig,
    pub registry: CountryRegistry,
    pub resolver: NameResolver,
    pub adjacency: AdjacencyGraph,
    pub regions: RegionIndex,
    pub pairs: PairCatalog,
    pub places: Vec<Place>,
    pub projector: CoordinateProjector,
}

impl Atlas {
    /// Resolve free text to a country: registry, then aliases, then region scan.
    pub fn resolve(&self, input: &str) -> Option<&Country> {
        self.resolver.resolve(input, &self.registry, &self.regions)
    }

    pub fn resolve_name(&self, input: &str) -> Option<&str> {
        self.resolve(input).map(|c| c.name.as_str())
    }

    pub fn is_adjacent(&self, a: &str, b: &str) -> bool {
        self.adjacency.is_adjacent(a, b)
    }

    pub fn snapshot_for_render(&self) -> Vec<RenderCountry> {
        self.registry.snapshot_for_render()
    }

    pub fn random_pair(&self, rng: &mut dyn RngCore) -> Option<ValidPair> {
        self.pairs.random_pair(
            &self.registry,
            &self.adjacency,
            self.config.pair_attempts,
            rng,
        )
    }
}
