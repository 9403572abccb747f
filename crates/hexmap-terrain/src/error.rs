//! Terrain generation error types.

use crate::biome::Biome;

/// Errors raised while validating inputs or generating a map.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TerrainError {
    /// Grid width or height is zero.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// The biome table has no entries.
    #[error("biome table is empty")]
    EmptyBiomeTable,

    /// A threshold lies outside `(0.0, 1.0]`.
    #[error("threshold {threshold} for {biome} is outside (0, 1]")]
    ThresholdOutOfRange {
        /// Offending biome.
        biome: Biome,
        /// Its threshold.
        threshold: f64,
    },

    /// Thresholds do not strictly increase in table order.
    #[error("threshold for {biome} ({threshold}) does not exceed the previous one ({previous})")]
    NonMonotonicThresholds {
        /// Offending biome.
        biome: Biome,
        /// Its threshold.
        threshold: f64,
        /// Threshold of the entry before it.
        previous: f64,
    },

    /// An elevation range has `min > max`.
    #[error("elevation range for {biome} is empty ({min}..={max})")]
    InvalidElevationRange {
        /// Offending biome.
        biome: Biome,
        /// Lower bound.
        min: u32,
        /// Upper bound.
        max: u32,
    },

    /// The table has no water entry, so rivers have nothing to grow from.
    #[error("biome table has no {0} entry")]
    MissingWaterBiome(Biome),

    /// A noise value is not below any threshold and the policy forbids a fallback.
    #[error("no biome rule matches noise value {value} at ({x}, {y})")]
    Unclassified {
        /// Cell column.
        x: u32,
        /// Cell row.
        y: u32,
        /// Noise value at the cell.
        value: f64,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TerrainError>;
