//! Normalized coherent-noise field sampled over the map grid.
//!
//! Each cell samples 2D OpenSimplex noise at coordinates centered on the
//! origin and scaled by the field frequency, so larger frequencies produce
//! smaller, more clustered terrain features independent of grid size.

use std::ops::Range;

use noise::{NoiseFn, OpenSimplex};
use rand::Rng;

use crate::error::{Result, TerrainError};
use crate::grid::{Grid, GridPos};

/// Range the per-map frequency is drawn from.
pub const FREQUENCY_RANGE: Range<u32> = 5..10;

/// Draws a frequency uniformly from [`FREQUENCY_RANGE`].
pub fn random_frequency<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.random_range(FREQUENCY_RANGE.start..FREQUENCY_RANGE.end)
}

/// Per-cell noise values in `[0.0, 1.0]`. Immutable once generated.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseField {
    seed: u32,
    frequency: u32,
    values: Grid<f64>,
}

impl NoiseField {
    /// Samples the field for a `width x height` grid.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::InvalidDimensions`] if either dimension is zero.
    pub fn generate(width: u32, height: u32, seed: u32, frequency: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(TerrainError::InvalidDimensions { width, height });
        }

        let noise = OpenSimplex::new(seed);
        let freq = f64::from(frequency);
        let values = Grid::from_fn(width, height, |pos| {
            let nx = f64::from(pos.x) / f64::from(width) - 0.5;
            let ny = f64::from(pos.y) / f64::from(height) - 0.5;
            let raw = noise.get([freq * nx, freq * ny]);
            // Rescale from [-1, 1]; clamp since OpenSimplex can overshoot slightly.
            (raw / 2.0 + 0.5).clamp(0.0, 1.0)
        });

        tracing::debug!(width, height, seed, frequency, "sampled noise field");
        Ok(Self {
            seed,
            frequency,
            values,
        })
    }

    /// Builds a field from precomputed values, clamping each into `[0, 1]`.
    ///
    /// Useful for driving the classifier with hand-written inputs.
    pub fn from_values(values: Grid<f64>, seed: u32, frequency: u32) -> Self {
        let values = Grid::from_fn(values.width(), values.height(), |pos| {
            values.get(pos).clamp(0.0, 1.0)
        });
        Self {
            seed,
            frequency,
            values,
        }
    }

    /// Seed the noise function was built with.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Sampling frequency.
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Grid width.
    pub fn width(&self) -> u32 {
        self.values.width()
    }

    /// Grid height.
    pub fn height(&self) -> u32 {
        self.values.height()
    }

    /// Number of sampled cells (`width * height`).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no cells were sampled.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Noise value at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    pub fn value(&self, pos: GridPos) -> f64 {
        *self.values.get(pos)
    }

    /// Iterates `(pos, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (GridPos, f64)> + '_ {
        self.values.iter().map(|(p, v)| (p, *v))
    }

    /// Underlying value grid.
    pub fn values(&self) -> &Grid<f64> {
        &self.values
    }
}
