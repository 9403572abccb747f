//! Biome definition: the enumerated biome type and its per-variant attributes.

use std::fmt;
use std::ops::RangeInclusive;

/// Terrain category assigned to each grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Biome {
    /// Open water. Rivers are always written as this biome.
    Water,
    /// Sandy shoreline.
    Beach,
    /// Low grassland.
    Plains,
    /// Wooded lowland.
    Forest,
    /// Rolling upland.
    Hills,
    /// Rocky high ground.
    Mountain,
    /// Snow-capped peaks.
    Snow,
}

impl Biome {
    /// Every variant, lowest terrain first.
    pub const ALL: [Biome; 7] = [
        Biome::Water,
        Biome::Beach,
        Biome::Plains,
        Biome::Forest,
        Biome::Hills,
        Biome::Mountain,
        Biome::Snow,
    ];

    /// Display name shown on hover labels.
    pub fn name(self) -> &'static str {
        match self {
            Biome::Water => "Water",
            Biome::Beach => "Beach",
            Biome::Plains => "Plains",
            Biome::Forest => "Forest",
            Biome::Hills => "Hills",
            Biome::Mountain => "Mountain",
            Biome::Snow => "Snow",
        }
    }

    /// Single-character glyph for text dumps.
    pub fn glyph(self) -> char {
        match self {
            Biome::Water => '~',
            Biome::Beach => '.',
            Biome::Plains => '"',
            Biome::Forest => 'T',
            Biome::Hills => 'n',
            Biome::Mountain => '^',
            Biome::Snow => '*',
        }
    }

    /// Parses a display name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Biome> {
        Biome::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One classification rule plus the attributes the renderer needs.
#[derive(Clone, Debug, PartialEq)]
pub struct BiomeDef {
    /// Biome assigned when this rule matches.
    pub biome: Biome,
    /// Cells whose noise value is strictly below this threshold match,
    /// unless an earlier rule matched first. In `(0.0, 1.0]`.
    pub threshold: f64,
    /// Top-face render color (RGB).
    pub color: [u8; 3],
    /// Pseudo-3D tile elevation in pixels, drawn uniformly per tile.
    pub elevation: RangeInclusive<u32>,
}

impl BiomeDef {
    /// Creates a rule.
    pub fn new(biome: Biome, threshold: f64, color: [u8; 3], elevation: RangeInclusive<u32>) -> Self {
        Self {
            biome,
            threshold,
            color,
            elevation,
        }
    }
}
