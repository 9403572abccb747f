//! Biome system: the fixed biome enumeration and the ordered threshold table
//! that maps normalized noise values to biomes.

mod def;
mod table;

pub use def::{Biome, BiomeDef};
pub use table::BiomeTable;
