//! Isometric hex view of a generated terrain grid.
//!
//! Lays out one pseudo-3D hex tile per cell, resolves which tile a screen
//! point hovers, and rasterizes the scene (with highlight and outlined label)
//! into an RGBA image. Nothing here writes back into terrain data.

mod cursor;
mod error;
mod font;
mod footprint;
mod layout;
mod raster;
mod rect;
mod tile;

pub use cursor::{CursorHighlight, HIGHLIGHT_COLOR, Label};
pub use error::ViewError;
pub use font::{LABEL_OUTLINE, LabelFont};
pub use footprint::{FOOTPRINT_POINTS, FOOTPRINT_SIZE, point_in_polygon, side_polygon};
pub use layout::{COL_OFFSET, HexMap, ORIGIN_OFFSET, ROW_OFFSET};
pub use raster::{Rasterizer, save_png};
pub use rect::ScreenRect;
pub use tile::HexTile;
