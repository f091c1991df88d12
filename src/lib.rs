#[macro_use]
mod macros;

pub mod adjacency;
pub mod atlas;
pub mod config;
pub mod error;
pub mod game;
pub mod loader;
pub mod model;
pub mod pairs;
pub mod projection;
pub mod region;
pub mod registry;
pub mod resolver;

pub use adjacency::AdjacencyGraph;
pub use atlas::Atlas;
pub use config::QuizConfig;
pub use error::DataError;
pub use loader::{LoadReport, LoadStep, Sources};
pub use model::{
    Country, CountryFragment, Endpoint, GeoPoint, MapPoint, Place, RenderCountry, ValidPair,
};
pub use pairs::PairCatalog;
pub use projection::{CoordinateProjector, haversine_km};
pub use region::{RegionIndex, WORLD};
pub use registry::CountryRegistry;
pub use resolver::NameResolver;
