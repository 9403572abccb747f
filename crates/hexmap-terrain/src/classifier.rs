//! Threshold classification of a noise field into biomes.

use crate::biome::{Biome, BiomeTable};
use crate::error::{Result, TerrainError};
use crate::grid::Grid;
use crate::noise_field::NoiseField;

/// What to do with a cell whose value is not below any threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnclassifiedPolicy {
    /// Assign the last rule's biome.
    #[default]
    FallbackToLast,
    /// Fail with [`TerrainError::Unclassified`].
    Error,
}

/// Maps each noise value to the first biome rule whose threshold exceeds it.
#[derive(Clone, Debug)]
pub struct TerrainClassifier {
    table: BiomeTable,
    policy: UnclassifiedPolicy,
}

impl TerrainClassifier {
    /// Creates a classifier over a validated table.
    pub fn new(table: BiomeTable, policy: UnclassifiedPolicy) -> Self {
        Self { table, policy }
    }

    /// The rule table.
    pub fn table(&self) -> &BiomeTable {
        &self.table
    }

    /// The unclassified-cell policy.
    pub fn policy(&self) -> UnclassifiedPolicy {
        self.policy
    }

    /// Classifies a single value.
    pub fn classify_value(&self, value: f64) -> Option<Biome> {
        match self.table.lookup(value) {
            Some(biome) => Some(biome),
            None => match self.policy {
                UnclassifiedPolicy::FallbackToLast => Some(self.table.last()),
                UnclassifiedPolicy::Error => None,
            },
        }
    }

    /// Classifies every cell of `field`. Each cell is independent, so the
    /// result does not depend on scan order.
    ///
    /// # Errors
    ///
    /// With [`UnclassifiedPolicy::Error`], returns [`TerrainError::Unclassified`]
    /// for the first unmatched cell in row-major order.
    pub fn classify(&self, field: &NoiseField) -> Result<Grid<Biome>> {
        let mut out = Grid::filled(field.width(), field.height(), self.table.last());
        let mut fallbacks = 0usize;
        for (pos, value) in field.iter() {
            let biome = match self.table.lookup(value) {
                Some(biome) => biome,
                None => match self.policy {
                    UnclassifiedPolicy::FallbackToLast => {
                        fallbacks += 1;
                        self.table.last()
                    }
                    UnclassifiedPolicy::Error => {
                        return Err(TerrainError::Unclassified {
                            x: pos.x,
                            y: pos.y,
                            value,
                        });
                    }
                },
            };
            out.set(pos, biome);
        }
        if fallbacks > 0 {
            tracing::debug!(fallbacks, biome = %self.table.last(), "unmatched cells used fallback biome");
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biome::BiomeDef;
    use crate::grid::GridPos;

    fn table() -> BiomeTable {
        BiomeTable::new(vec![
            BiomeDef::new(Biome::Water, 0.3, [0, 0, 255], 2..=4),
            BiomeDef::new(Biome::Plains, 0.7, [0, 255, 0], 6..=10),
            BiomeDef::new(Biome::Mountain, 0.9, [128, 128, 128], 20..=30),
        ])
        .unwrap()
    }

    fn field(values: &[f64], width: u32) -> NoiseField {
        let height = values.len() as u32 / width;
        let grid = Grid::from_fn(width, height, |p| values[(p.y * width + p.x) as usize]);
        NoiseField::from_values(grid, 0, 1)
    }

    #[test]
    fn test_each_cell_gets_first_matching_rule() {
        let classifier = TerrainClassifier::new(table(), UnclassifiedPolicy::FallbackToLast);
        let f = field(&[0.1, 0.3, 0.5, 0.85], 2);
        let grid = classifier.classify(&f).unwrap();
        assert_eq!(*grid.get(GridPos::new(0, 0)), Biome::Water);
        assert_eq!(*grid.get(GridPos::new(1, 0)), Biome::Plains);
        assert_eq!(*grid.get(GridPos::new(0, 1)), Biome::Plains);
        assert_eq!(*grid.get(GridPos::new(1, 1)), Biome::Mountain);
    }

    #[test]
    fn test_unmatched_falls_back_to_last_rule() {
        let classifier = TerrainClassifier::new(table(), UnclassifiedPolicy::FallbackToLast);
        let grid = classifier.classify(&field(&[0.95, 1.0], 2)).unwrap();
        assert!(grid.iter().all(|(_, b)| *b == Biome::Mountain));
        assert_eq!(classifier.classify_value(0.99), Some(Biome::Mountain));
    }

    #[test]
    fn test_unmatched_errors_under_strict_policy() {
        let classifier = TerrainClassifier::new(table(), UnclassifiedPolicy::Error);
        let err = classifier.classify(&field(&[0.1, 0.2, 0.95, 0.1], 2)).unwrap_err();
        assert_eq!(
            err,
            TerrainError::Unclassified {
                x: 0,
                y: 1,
                value: 0.95
            }
        );
        assert_eq!(classifier.classify_value(0.95), None);
    }

    #[test]
    fn test_classification_is_repeatable() {
        let classifier = TerrainClassifier::new(table(), UnclassifiedPolicy::FallbackToLast);
        let f = NoiseField::generate(16, 16, 77, 8).unwrap();
        assert_eq!(classifier.classify(&f).unwrap(), classifier.classify(&f).unwrap());
    }
}
