//! A single pseudo-3D hex tile.

use glam::IVec2;
use hexmap_terrain::{Biome, BiomeDef, GridPos};
use rand::Rng;

use crate::footprint::{FOOTPRINT_POINTS, FOOTPRINT_SIZE, point_in_polygon};
use crate::rect::ScreenRect;

/// One drawn cell: biome, color, elevation, and screen placement.
#[derive(Clone, Debug, PartialEq)]
pub struct HexTile {
    /// Grid cell the tile shows.
    pub cell: GridPos,
    /// Biome shown on hover.
    pub biome: Biome,
    /// Top-face color.
    pub color: [u8; 3],
    /// Side-face height in pixels.
    pub elevation: u32,
    /// Bounding box of top and side faces.
    pub rect: ScreenRect,
}

impl HexTile {
    /// Creates a tile whose bounding box has its bottom-left corner at
    /// `bottom_left`, drawing the elevation uniformly from `def.elevation`.
    pub fn new<R: Rng + ?Sized>(
        bottom_left: IVec2,
        cell: GridPos,
        def: &BiomeDef,
        rng: &mut R,
    ) -> Self {
        let elevation = rng.random_range(def.elevation.clone());
        let size = IVec2::new(FOOTPRINT_SIZE.x, FOOTPRINT_SIZE.y + elevation as i32);
        Self {
            cell,
            biome: def.biome,
            color: def.color,
            elevation,
            rect: ScreenRect::from_bottom_left(bottom_left, size),
        }
    }

    /// Side-face color: the top color at half intensity.
    pub fn side_color(&self) -> [u8; 3] {
        self.color.map(|c| c / 2)
    }

    /// Returns `true` if `point` falls on the tile's top face.
    pub fn hit(&self, point: IVec2) -> bool {
        if !self.rect.contains(point) {
            return false;
        }
        let local = point - self.rect.top_left();
        point_in_polygon(local.x as f32 + 0.5, local.y as f32 + 0.5, &FOOTPRINT_POINTS)
    }
}
