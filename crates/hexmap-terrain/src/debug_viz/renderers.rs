//! Top-down debug renderers for the noise field and the biome grid.

use super::image::DebugImage;
use crate::biome::{Biome, BiomeTable};
use crate::generator::TerrainGrid;
use crate::noise_field::NoiseField;

/// Color for cells whose biome has no table entry.
const MISSING_COLOR: [u8; 3] = [255, 0, 255];

/// River overlay color, slightly brighter than the default water tint.
const RIVER_COLOR: [u8; 3] = [90, 160, 255];

/// Map a normalized value to a grey level.
pub fn noise_to_grey(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Return the table color for `biome`, or magenta if the table lacks it.
pub fn biome_color(biome: Biome, table: &BiomeTable) -> [u8; 3] {
    table.def(biome).map_or(MISSING_COLOR, |def| def.color)
}

/// Render the noise field as a grey ramp, `scale` pixels per cell.
pub fn render_noise_debug(field: &NoiseField, scale: u32) -> DebugImage {
    let scale = scale.max(1);
    let mut image = DebugImage::new(field.width() * scale, field.height() * scale);
    for (pos, value) in field.iter() {
        let g = noise_to_grey(value);
        image.fill_cell(pos.x, pos.y, scale, [g, g, g, 255]);
    }
    image
}

/// Render the biome grid, `scale` pixels per cell. With `highlight_rivers`,
/// river cells are drawn in a distinct tint.
pub fn render_biome_debug(
    terrain: &TerrainGrid,
    table: &BiomeTable,
    scale: u32,
    highlight_rivers: bool,
) -> DebugImage {
    let scale = scale.max(1);
    let mut image = DebugImage::new(terrain.width() * scale, terrain.height() * scale);

    for (pos, biome) in terrain.biomes().iter() {
        let [r, g, b] = biome_color(*biome, table);
        image.fill_cell(pos.x, pos.y, scale, [r, g, b, 255]);
    }

    if highlight_rivers {
        let [r, g, b] = RIVER_COLOR;
        for pos in terrain.river_cells() {
            image.fill_cell(pos.x, pos.y, scale, [r, g, b, 255]);
        }
    }

    image
}
