//! Biome table: ordered threshold rules with per-biome attribute lookup.

use hashbrown::HashMap;

use super::{Biome, BiomeDef};
use crate::error::{Result, TerrainError};

/// Ordered classification rules. The first rule whose threshold strictly
/// exceeds a noise value wins, so rule order is part of the contract.
#[derive(Clone, Debug)]
pub struct BiomeTable {
    rules: Vec<BiomeDef>,
    by_biome: HashMap<Biome, usize>,
}

impl BiomeTable {
    /// Validates and builds a table.
    ///
    /// # Errors
    ///
    /// Fails if the list is empty, a threshold is outside `(0, 1]`, thresholds
    /// do not strictly increase, an elevation range is empty, or there is no
    /// [`Biome::Water`] rule.
    pub fn new(rules: Vec<BiomeDef>) -> Result<Self> {
        if rules.is_empty() {
            return Err(TerrainError::EmptyBiomeTable);
        }

        let mut previous: Option<f64> = None;
        for def in &rules {
            if !(def.threshold > 0.0 && def.threshold <= 1.0) {
                return Err(TerrainError::ThresholdOutOfRange {
                    biome: def.biome,
                    threshold: def.threshold,
                });
            }
            if let Some(prev) = previous
                && def.threshold <= prev
            {
                return Err(TerrainError::NonMonotonicThresholds {
                    biome: def.biome,
                    threshold: def.threshold,
                    previous: prev,
                });
            }
            if def.elevation.is_empty() {
                return Err(TerrainError::InvalidElevationRange {
                    biome: def.biome,
                    min: *def.elevation.start(),
                    max: *def.elevation.end(),
                });
            }
            previous = Some(def.threshold);
        }

        let mut by_biome = HashMap::with_capacity(rules.len());
        for (i, def) in rules.iter().enumerate() {
            // A repeated biome keeps the attributes of its first rule.
            by_biome.entry(def.biome).or_insert(i);
        }
        if !by_biome.contains_key(&Biome::Water) {
            return Err(TerrainError::MissingWaterBiome(Biome::Water));
        }

        Ok(Self { rules, by_biome })
    }

    /// Returns the first biome whose threshold strictly exceeds `value`.
    pub fn lookup(&self, value: f64) -> Option<Biome> {
        self.rules
            .iter()
            .find(|def| value < def.threshold)
            .map(|def| def.biome)
    }

    /// The last rule's biome, used as the classification fallback.
    pub fn last(&self) -> Biome {
        // Non-empty by construction.
        self.rules[self.rules.len() - 1].biome
    }

    /// The biome rivers are written as.
    pub fn water(&self) -> Biome {
        Biome::Water
    }

    /// Attributes for `biome`, if the table has a rule for it.
    pub fn def(&self, biome: Biome) -> Option<&BiomeDef> {
        self.by_biome.get(&biome).map(|&i| &self.rules[i])
    }

    /// Rules in classification order.
    pub fn rules(&self) -> &[BiomeDef] {
        &self.rules
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for BiomeTable {
    /// The built-in seven-biome table, from water up to snow.
    fn default() -> Self {
        let rules = vec![
            BiomeDef::new(Biome::Water, 0.30, [40, 90, 200], 2..=4),
            BiomeDef::new(Biome::Beach, 0.36, [230, 210, 140], 4..=6),
            BiomeDef::new(Biome::Plains, 0.55, [110, 180, 70], 6..=10),
            BiomeDef::new(Biome::Forest, 0.68, [35, 120, 45], 8..=14),
            BiomeDef::new(Biome::Hills, 0.78, [140, 150, 80], 12..=20),
            BiomeDef::new(Biome::Mountain, 0.90, [130, 110, 90], 20..=32),
            BiomeDef::new(Biome::Snow, 1.00, [235, 240, 245], 30..=40),
        ];
        let by_biome = rules.iter().enumerate().map(|(i, d)| (d.biome, i)).collect();
        Self { rules, by_biome }
    }
}
