//! Terrain generation pipeline: classification, river tracing, and the
//! final immutable [`TerrainGrid`].

use std::fmt;

use hashbrown::HashSet;
use rand::Rng;

use crate::biome::Biome;
use crate::classifier::TerrainClassifier;
use crate::error::Result;
use crate::grid::{Grid, GridPos};
use crate::noise_field::NoiseField;
use crate::river::{River, RiverWalker};

/// Final biome per cell plus the rivers that shaped it. Immutable.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainGrid {
    biomes: Grid<Biome>,
    rivers: Vec<River>,
}

impl TerrainGrid {
    /// Grid width.
    pub fn width(&self) -> u32 {
        self.biomes.width()
    }

    /// Grid height.
    pub fn height(&self) -> u32 {
        self.biomes.height()
    }

    /// Biome at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    pub fn biome_at(&self, pos: GridPos) -> Biome {
        *self.biomes.get(pos)
    }

    /// The biome grid.
    pub fn biomes(&self) -> &Grid<Biome> {
        &self.biomes
    }

    /// Rivers in generation order.
    pub fn rivers(&self) -> &[River] {
        &self.rivers
    }

    /// Every distinct cell covered by a river.
    pub fn river_cells(&self) -> HashSet<GridPos> {
        self.rivers
            .iter()
            .flat_map(|r| r.path().iter().copied())
            .collect()
    }

    /// Rows of biome names, `rows()[y][x]`.
    pub fn rows(&self) -> Vec<Vec<&'static str>> {
        self.biomes
            .rows()
            .map(|row| row.iter().map(|b| b.name()).collect())
            .collect()
    }

    /// Per-biome counts and river figures.
    pub fn stats(&self) -> TerrainStats {
        let mut counts = [0usize; Biome::ALL.len()];
        for (_, biome) in self.biomes.iter() {
            counts[*biome as usize] += 1;
        }
        TerrainStats {
            counts,
            rivers: self.rivers.len(),
            longest_river: self.rivers.iter().map(River::len).max().unwrap_or(0),
        }
    }
}

/// One glyph per cell, row `y = 0` first.
impl fmt::Display for TerrainGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.biomes.rows() {
            for biome in row {
                write!(f, "{}", biome.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Summary figures for a generated map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerrainStats {
    counts: [usize; Biome::ALL.len()],
    /// Number of rivers walked.
    pub rivers: usize,
    /// Longest river path.
    pub longest_river: usize,
}

impl TerrainStats {
    /// Cells assigned to `biome`.
    pub fn count(&self, biome: Biome) -> usize {
        self.counts[biome as usize]
    }
}

/// Runs classification then river tracing over a noise field.
#[derive(Clone, Debug)]
pub struct TerrainGenerator {
    classifier: TerrainClassifier,
    walker: RiverWalker,
}

impl TerrainGenerator {
    /// Creates a generator.
    pub fn new(classifier: TerrainClassifier, walker: RiverWalker) -> Self {
        Self { classifier, walker }
    }

    /// The classifier.
    pub fn classifier(&self) -> &TerrainClassifier {
        &self.classifier
    }

    /// Builds the terrain grid for `field`.
    ///
    /// Cells are scanned row-major (`y` outer, `x` inner) and a river is
    /// walked from every water-classified cell, drawing from `rng` in that
    /// order. River cells are forced to water only after the scan.
    ///
    /// # Errors
    ///
    /// Propagates classification errors.
    pub fn generate<R: Rng + ?Sized>(&self, field: &NoiseField, rng: &mut R) -> Result<TerrainGrid> {
        let mut biomes = self.classifier.classify(field)?;
        let water = self.classifier.table().water();

        let sources: Vec<GridPos> = biomes
            .iter()
            .filter(|(_, biome)| **biome == water)
            .map(|(pos, _)| pos)
            .collect();
        let rivers: Vec<River> = sources
            .into_iter()
            .map(|source| self.walker.walk(source, rng))
            .collect();

        let mut overridden = 0usize;
        for river in &rivers {
            for &pos in river.path() {
                if *biomes.get(pos) != water {
                    overridden += 1;
                    biomes.set(pos, water);
                }
            }
        }

        let terrain = TerrainGrid { biomes, rivers };
        let stats = terrain.stats();
        tracing::info!(
            width = terrain.width(),
            height = terrain.height(),
            rivers = stats.rivers,
            longest_river = stats.longest_river,
            overridden,
            "terrain generated"
        );
        for biome in Biome::ALL {
            let count = stats.count(biome);
            if count > 0 {
                tracing::debug!(%biome, count, "biome coverage");
            }
        }
        Ok(terrain)
    }
}
