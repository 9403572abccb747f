//! Hover highlight and biome label for the tile under the cursor.

use glam::IVec2;
use hexmap_terrain::{Biome, GridPos};

use crate::font::LabelFont;
use crate::layout::HexMap;
use crate::rect::ScreenRect;

/// Translucent fill drawn over the hovered tile's top face.
pub const HIGHLIGHT_COLOR: [u8; 4] = [50, 50, 200, 150];

/// A biome label anchored at the cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Label {
    /// Text shown.
    pub text: String,
    /// Text height in pixels.
    pub size: u32,
    /// Screen placement, already clamped to the screen.
    pub rect: ScreenRect,
}

/// Tracks which tile the cursor is over.
#[derive(Clone, Debug)]
pub struct CursorHighlight {
    font: LabelFont,
    label_size: u32,
    target: Option<GridPos>,
    label: Option<Label>,
}

impl CursorHighlight {
    /// Creates a highlight whose labels are measured with `font` at
    /// `label_size` pixels.
    pub fn new(font: LabelFont, label_size: u32) -> Self {
        Self {
            font,
            label_size,
            target: None,
            label: None,
        }
    }

    /// Re-evaluates the hover for cursor position `pos`. Returns the hovered
    /// tile's biome, or `None` (clearing target and label) over empty space.
    pub fn update(&mut self, pos: IVec2, map: &HexMap) -> Option<Biome> {
        let Some(tile) = map.tile_at(pos) else {
            self.target = None;
            self.label = None;
            return None;
        };

        let text = tile.biome.name().to_string();
        let extent = self.font.label_extent(&text, self.label_size);
        let rect = ScreenRect::from_mid_bottom(pos, extent).clamped_within(&map.screen());
        tracing::debug!(cell = %tile.cell, biome = %tile.biome, "hover");

        self.target = Some(tile.cell);
        self.label = Some(Label {
            text,
            size: self.label_size,
            rect,
        });
        Some(tile.biome)
    }

    /// Cell under the cursor.
    pub fn target(&self) -> Option<GridPos> {
        self.target
    }

    /// Current label, if hovering a tile.
    pub fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }
}
