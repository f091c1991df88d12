use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::adjacency::AdjacencyGraph;
use crate::atlas::Atlas;
use crate::config::QuizConfig;
use crate::error::DataError;
use crate::model::{CountryFragment, Place, PlaceLocation, PlaceRecord, ValidPair};
use crate::pairs::PairCatalog;
use crate::projection::CoordinateProjector;
use crate::region::RegionIndex;
use crate::registry::CountryRegistry;
use crate::resolver::NameResolver;

pub const GEOMETRY_FILE: &str = "countries.json";
pub const ADJACENCY_FILE: &str = "adjacency.json";
pub const REGIONS_FILE: &str = "regions.json";
pub const PAIRS_FILE: &str = "pairs.json";
pub const PLACES_FILE: &str = "places.json";
pub const CONFIG_FILE: &str = "quiz.json";

// ---------------------------------------------------------------------------
// Side-table wire shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct AdjacencyFile {
    adjacency: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RegionsFile {
    regions: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PairsFile {
    valid_pairs: Vec<ValidPair>,
}

#[derive(Debug, Deserialize)]
struct PlacesFile {
    places: Vec<PlaceRecord>,
}

// ---------------------------------------------------------------------------
// Load report
// ---------------------------------------------------------------------------

/// A load step that can fail without aborting the load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadStep {
    Adjacency,
    Regions,
    Pairs,
    Places,
}

string_enum!(LoadStep {
    Adjacency => "adjacency",
    Regions => "regions",
    Pairs => "pairs",
    Places => "places",
});

/// Which side tables fell back during a load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub degraded: Vec<LoadStep>,
}

impl LoadReport {
    pub fn is_degraded(&self, step: LoadStep) -> bool {
        self.degraded.contains(&step)
    }

    pub fn is_clean(&self) -> bool {
        self.degraded.is_empty()
    }
}

/// Raw text of each input. `None` means the fetch failed or the file is absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sources<'a> {
    pub geometry: &'a str,
    pub adjacency: Option<&'a str>,
    pub regions: Option<&'a str>,
    pub pairs: Option<&'a str>,
    pub places: Option<&'a str>,
}

// ---------------------------------------------------------------------------
// Load sequence
// ---------------------------------------------------------------------------

impl Atlas {
    /// Build the atlas from already-fetched text. Only the geometry step is
    /// fatal; each side table degrades on its own.
    pub fn from_sources(
        sources: &Sources<'_>,
        config: QuizConfig,
    ) -> Result<(Atlas, LoadReport), DataError> {
        if !config.has_valid_raster() {
            return Err(DataError::InvalidRaster {
                width: config.map_width,
                height: config.map_height,
            });
        }
        let fragments: Vec<CountryFragment> =
            serde_json::from_str(sources.geometry).map_err(|source| DataError::Parse {
                what: "geometry source".to_string(),
                source,
            })?;
        let registry = CountryRegistry::load(fragments)?;
        let projector = CoordinateProjector::from_config(&config);
        let mut report = LoadReport::default();
        let mut rng = SmallRng::seed_from_u64(config.seed);

        let adjacency_file =
            parse_side::<AdjacencyFile>(LoadStep::Adjacency, sources.adjacency, &mut report);
        let mut adjacency = match adjacency_file {
            Some(file) => AdjacencyGraph::build(file.adjacency),
            None => AdjacencyGraph::build_fallback(
                &registry,
                config.fallback_link_probability,
                &mut rng,
            ),
        };
        adjacency.canonicalize(&registry);

        let regions_file =
            parse_side::<RegionsFile>(LoadStep::Regions, sources.regions, &mut report);
        let regions = match regions_file {
            Some(file) => RegionIndex::build(file.regions, &registry),
            None => RegionIndex::build_fallback(&registry),
        };

        let pairs = parse_side::<PairsFile>(LoadStep::Pairs, sources.pairs, &mut report)
            .map(|file| PairCatalog::new(file.valid_pairs))
            .unwrap_or_default();

        let places = parse_side::<PlacesFile>(LoadStep::Places, sources.places, &mut report)
            .map(|file| normalize_places(file.places, &projector))
            .unwrap_or_default();

        tracing::info!(
            "atlas ready: {} countries, {} adjacency entries, {} regions, {} pairs, {} places",
            registry.len(),
            adjacency.len(),
            regions.available_regions().len(),
            pairs.len(),
            places.len()
        );

        let atlas = Atlas {
            config,
            registry,
            resolver: NameResolver::new(),
            adjacency,
            regions,
            pairs,
            places,
            projector,
        };
        Ok((atlas, report))
    }

    /// Load from a data directory. `countries.json` is required; the side
    /// tables and `quiz.json` are optional.
    pub fn load_dir(dir: &Path) -> Result<(Atlas, LoadReport), DataError> {
        let config: QuizConfig = match read_optional(&dir.join(CONFIG_FILE)) {
            Some(text) => match serde_json::from_str::<QuizConfig>(&text) {
                Ok(config) if config.has_valid_raster() => config,
                Ok(config) => {
                    tracing::warn!(
                        "ignoring {CONFIG_FILE}: unusable map size {}x{}",
                        config.map_width,
                        config.map_height
                    );
                    QuizConfig::default()
                }
                Err(e) => {
                    tracing::warn!("ignoring malformed {CONFIG_FILE}: {e}");
                    QuizConfig::default()
                }
            },
            None => QuizConfig::default(),
        };
        Self::load_dir_with(dir, config)
    }

    pub fn load_dir_with(
        dir: &Path,
        config: QuizConfig,
    ) -> Result<(Atlas, LoadReport), DataError> {
        let geometry_path = dir.join(GEOMETRY_FILE);
        let geometry = fs::read_to_string(&geometry_path).map_err(|source| DataError::Io {
            path: geometry_path,
            source,
        })?;
        let adjacency = read_optional(&dir.join(ADJACENCY_FILE));
        let regions = read_optional(&dir.join(REGIONS_FILE));
        let pairs = read_optional(&dir.join(PAIRS_FILE));
        let places = read_optional(&dir.join(PLACES_FILE));

        let sources = Sources {
            geometry: &geometry,
            adjacency: adjacency.as_deref(),
            regions: regions.as_deref(),
            pairs: pairs.as_deref(),
            places: places.as_deref(),
        };
        Self::from_sources(&sources, config)
    }
}

/// Parse one side table, recording the step as degraded on any failure.
fn parse_side<T: DeserializeOwned>(
    step: LoadStep,
    text: Option<&str>,
    report: &mut LoadReport,
) -> Option<T> {
    let Some(text) = text else {
        tracing::warn!("{step} data unavailable, falling back");
        report.degraded.push(step);
        return None;
    };
    match serde_json::from_str(text) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::warn!("{step} data malformed ({e}), falling back");
            report.degraded.push(step);
            None
        }
    }
}

fn read_optional(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::debug!("could not read {}: {e}", path.display());
            None
        }
    }
}

/// Convert every place to geographic coordinates.
fn normalize_places(records: Vec<PlaceRecord>, projector: &CoordinateProjector) -> Vec<Place> {
    records
        .into_iter()
        .map(|rec| {
            let location = match rec.coordinates {
                PlaceLocation::Geo(geo) => geo,
                PlaceLocation::Map(point) => projector.to_coordinates(point),
            };
            Place {
                name: rec.name,
                description: rec.description,
                image: rec.image,
                location,
            }
        })
        .collect()
}
