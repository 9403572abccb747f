//! Procedural hex-map terrain: coherent-noise sampling, threshold biome
//! classification, and seeded river tracing.

mod classifier;
mod error;
mod generator;
mod grid;
mod noise_field;
mod river;
mod session;

pub mod biome;
pub mod debug_viz;
pub mod seed;

pub use biome::{Biome, BiomeDef, BiomeTable};
pub use classifier::{TerrainClassifier, UnclassifiedPolicy};
pub use error::{Result, TerrainError};
pub use generator::{TerrainGenerator, TerrainGrid, TerrainStats};
pub use grid::{Grid, GridPos};
pub use noise_field::{FREQUENCY_RANGE, NoiseField, random_frequency};
pub use river::{MAX_STEP_SCORE, River, RiverWalker, StepSelection};
pub use seed::MapSeeds;
pub use session::{MapParams, MapSession};
