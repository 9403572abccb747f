//! One map session: seeds, noise field and terrain, generated in one shot.

use crate::biome::BiomeTable;
use crate::classifier::{TerrainClassifier, UnclassifiedPolicy};
use crate::error::{Result, TerrainError};
use crate::generator::{TerrainGenerator, TerrainGrid};
use crate::noise_field::{NoiseField, random_frequency};
use crate::river::{RiverWalker, StepSelection};
use crate::seed::MapSeeds;

/// Inputs for a map session.
#[derive(Clone, Debug)]
pub struct MapParams {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// Master seed. `None` draws one from the OS RNG.
    pub master_seed: Option<u64>,
    /// Noise frequency. `None` draws one from the river stream.
    pub frequency: Option<u32>,
    /// River step selection.
    pub selection: StepSelection,
    /// Handling of cells above every threshold.
    pub policy: UnclassifiedPolicy,
    /// Classification rules.
    pub table: BiomeTable,
}

impl Default for MapParams {
    fn default() -> Self {
        Self {
            width: 16,
            height: 16,
            master_seed: None,
            frequency: None,
            selection: StepSelection::default(),
            policy: UnclassifiedPolicy::default(),
            table: BiomeTable::default(),
        }
    }
}

/// A generated map. Nothing in it changes after [`MapSession::generate`];
/// a new map needs a new session.
#[derive(Clone, Debug)]
pub struct MapSession {
    seeds: MapSeeds,
    frequency: u32,
    field: NoiseField,
    terrain: TerrainGrid,
    table: BiomeTable,
}

impl MapSession {
    /// Runs the whole pipeline: seeds, frequency, noise, classification and
    /// rivers.
    ///
    /// # Errors
    ///
    /// Fails fast on zero dimensions or classification errors.
    pub fn generate(params: MapParams) -> Result<Self> {
        if params.width == 0 || params.height == 0 {
            return Err(TerrainError::InvalidDimensions {
                width: params.width,
                height: params.height,
            });
        }

        let master = params.master_seed.unwrap_or_else(rand::random);
        let seeds = MapSeeds::from_master(master);
        let mut rng = seeds.river_rng();
        let frequency = params
            .frequency
            .unwrap_or_else(|| random_frequency(&mut rng));

        tracing::info!(
            master_seed = master,
            noise_seed = seeds.noise,
            frequency,
            width = params.width,
            height = params.height,
            selection = ?params.selection,
            "generating map"
        );

        let field = NoiseField::generate(params.width, params.height, seeds.noise, frequency)?;
        let generator = TerrainGenerator::new(
            TerrainClassifier::new(params.table.clone(), params.policy),
            RiverWalker::new(params.width, params.height, params.selection),
        );
        let terrain = generator.generate(&field, &mut rng)?;

        Ok(Self {
            seeds,
            frequency,
            field,
            terrain,
            table: params.table,
        })
    }

    /// Seeds used by this session.
    pub fn seeds(&self) -> &MapSeeds {
        &self.seeds
    }

    /// Noise frequency used by this session.
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Sampled noise.
    pub fn noise(&self) -> &NoiseField {
        &self.field
    }

    /// Final terrain.
    pub fn terrain(&self) -> &TerrainGrid {
        &self.terrain
    }

    /// Biome table the terrain was classified with.
    pub fn table(&self) -> &BiomeTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_master_seed_reproduces_map() {
        let params = MapParams {
            master_seed: Some(2024),
            ..Default::default()
        };
        let a = MapSession::generate(params.clone()).unwrap();
        let b = MapSession::generate(params).unwrap();
        assert_eq!(a.frequency(), b.frequency());
        assert_eq!(a.noise().values(), b.noise().values());
        assert_eq!(a.terrain(), b.terrain());
    }

    #[test]
    fn test_drawn_frequency_in_range() {
        for seed in 0..32 {
            let session = MapSession::generate(MapParams {
                master_seed: Some(seed),
                ..Default::default()
            })
            .unwrap();
            assert!(crate::noise_field::FREQUENCY_RANGE.contains(&session.frequency()));
        }
    }

    #[test]
    fn test_fixed_frequency_respected() {
        let session = MapSession::generate(MapParams {
            master_seed: Some(1),
            frequency: Some(3),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(session.frequency(), 3);
        assert_eq!(session.noise().frequency(), 3);
    }

    #[test]
    fn test_zero_width_fails_fast() {
        let err = MapSession::generate(MapParams {
            width: 0,
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, TerrainError::InvalidDimensions { width: 0, .. }));
    }

    #[test]
    fn test_unseeded_sessions_still_generate() {
        let session = MapSession::generate(MapParams::default()).unwrap();
        assert_eq!(session.terrain().width(), 16);
        assert_eq!(session.terrain().height(), 16);
    }
}
