//! View error types.

use hexmap_terrain::Biome;

/// Errors raised while building or rendering the hex view.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    /// The terrain holds a biome the table has no colors for.
    #[error("no render attributes for biome {0}")]
    MissingBiome(Biome),

    /// Screen dimensions are zero.
    #[error("invalid screen size {width}x{height}")]
    InvalidScreen {
        /// Screen width.
        width: u32,
        /// Screen height.
        height: u32,
    },

    /// The label font could not be parsed.
    #[error("invalid label font: {0}")]
    Font(#[from] ab_glyph::InvalidFont),

    /// Encoding or writing the image failed.
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),

    /// Creating the output directory failed.
    #[error("failed to create output directory: {0}")]
    Io(#[from] std::io::Error),
}
