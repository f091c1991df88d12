use std::path::PathBuf;

use thiserror::Error;

/// Fatal load failure. Side-table problems never surface here; they degrade
/// to fallbacks inside the loader.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("geometry source yielded no countries")]
    NoCountries,

    #[error("map raster must have a finite, positive size, got {width}x{height}")]
    InvalidRaster { width: f64, height: f64 },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {what}: {source}")]
    Parse {
        what: String,
        #[source]
        source: serde_json::Error,
    },
}
