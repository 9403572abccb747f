//! Screen layout of a whole terrain grid as overlapping hex tiles.

use glam::IVec2;
use hexmap_terrain::{BiomeTable, GridPos, TerrainGrid};
use rand::Rng;

use crate::error::ViewError;
use crate::rect::ScreenRect;
use crate::tile::HexTile;

/// Screen step per grid row.
pub const ROW_OFFSET: IVec2 = IVec2::new(-45, 22);

/// Screen step per grid column.
pub const COL_OFFSET: IVec2 = IVec2::new(57, 5);

/// Shift of the first tile from the screen's mid-top point.
pub const ORIGIN_OFFSET: IVec2 = IVec2::new(-100, 100);

/// All tiles of a map in painter's order (ascending rect bottom).
#[derive(Clone, Debug)]
pub struct HexMap {
    tiles: Vec<HexTile>,
    screen: ScreenRect,
}

impl HexMap {
    /// Lays out one tile per cell. Elevations are drawn from `rng` in
    /// row-major order, so the same stream reproduces the same scene.
    ///
    /// # Errors
    ///
    /// Fails on a zero-sized screen or a biome the table cannot color.
    pub fn build<R: Rng + ?Sized>(
        terrain: &TerrainGrid,
        table: &BiomeTable,
        screen_size: (u32, u32),
        rng: &mut R,
    ) -> Result<Self, ViewError> {
        let (width, height) = screen_size;
        if width == 0 || height == 0 {
            return Err(ViewError::InvalidScreen { width, height });
        }
        let screen = ScreenRect::new(0, 0, width as i32, height as i32);
        let origin = IVec2::new(screen.w / 2, 0) + ORIGIN_OFFSET;

        let mut tiles = Vec::with_capacity(terrain.biomes().len());
        for (cell, biome) in terrain.biomes().iter() {
            let def = table.def(*biome).ok_or(ViewError::MissingBiome(*biome))?;
            tiles.push(HexTile::new(Self::anchor(origin, cell), cell, def, rng));
        }
        // Stable: equal bottoms keep row-major order.
        tiles.sort_by_key(|t| t.rect.bottom());

        tracing::debug!(tiles = tiles.len(), width, height, "hex map laid out");
        Ok(Self { tiles, screen })
    }

    /// Bottom-left anchor of the tile for `cell`.
    pub fn anchor(origin: IVec2, cell: GridPos) -> IVec2 {
        origin + ROW_OFFSET * cell.y as i32 + COL_OFFSET * cell.x as i32
    }

    /// Tiles in draw order.
    pub fn tiles(&self) -> &[HexTile] {
        &self.tiles
    }

    /// Screen bounds.
    pub fn screen(&self) -> ScreenRect {
        self.screen
    }

    /// Tile for a grid cell.
    pub fn tile(&self, cell: GridPos) -> Option<&HexTile> {
        self.tiles.iter().find(|t| t.cell == cell)
    }

    /// The frontmost tile whose top face contains `point`: among all hits,
    /// the one with the largest rect bottom.
    pub fn tile_at(&self, point: IVec2) -> Option<&HexTile> {
        self.tiles
            .iter()
            .filter(|t| t.hit(point))
            .max_by_key(|t| t.rect.bottom())
    }
}
