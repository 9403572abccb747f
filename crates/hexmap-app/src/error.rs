//! Top-level error for the viewer binary.

use hexmap_config::ConfigError;
use hexmap_terrain::TerrainError;
use hexmap_view::ViewError;

/// Anything that can stop a viewer run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("terrain generation failed: {0}")]
    Terrain(#[from] TerrainError),

    #[error(transparent)]
    View(#[from] ViewError),

    /// A debug image buffer did not match its stated size.
    #[error("debug image {width}x{height} has a malformed pixel buffer")]
    MalformedDebugImage { width: u32, height: u32 },
}
