//! Software rasterizer for the hex view.

use std::path::Path;

use glam::IVec2;
use image::{ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::{Blend, Canvas, draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point;

use crate::cursor::{CursorHighlight, HIGHLIGHT_COLOR};
use crate::error::ViewError;
use crate::font::LabelFont;
use crate::footprint::{FOOTPRINT_POINTS, side_polygon};
use crate::layout::HexMap;
use crate::tile::HexTile;

const OUTLINE: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Draws a [`HexMap`] into an RGBA image.
#[derive(Clone, Debug)]
pub struct Rasterizer {
    background: [u8; 3],
    font: LabelFont,
}

impl Rasterizer {
    /// Creates a rasterizer that clears to `background` and draws labels
    /// with `font`.
    pub fn new(background: [u8; 3], font: LabelFont) -> Self {
        Self { background, font }
    }

    /// Renders every tile in painter's order, then the hover highlight and
    /// the outlined biome label if `cursor` is over a tile.
    pub fn render(&self, map: &HexMap, cursor: Option<&CursorHighlight>) -> RgbaImage {
        let screen = map.screen();
        let [r, g, b] = self.background;
        let mut img = RgbaImage::from_pixel(screen.w as u32, screen.h as u32, Rgba([r, g, b, 255]));

        let target = cursor.and_then(CursorHighlight::target);
        for tile in map.tiles() {
            draw_tile(&mut img, tile);
            if target == Some(tile.cell) {
                // Blend composites the translucent overlay onto the face.
                let mut canvas = Blend(std::mem::take(&mut img));
                let face = to_points(tile.rect.top_left(), &FOOTPRINT_POINTS);
                draw_polygon_mut(&mut canvas, &face, Rgba(HIGHLIGHT_COLOR));
                img = canvas.0;
            }
        }

        if let Some(label) = cursor.and_then(CursorHighlight::label) {
            self.font
                .draw_outlined(&mut img, &label.text, label.rect.top_left(), label.size);
        }
        img
    }
}

/// Writes `img` as PNG, creating parent directories as needed.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<(), ViewError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    img.save_with_format(path, ImageFormat::Png)?;
    tracing::info!(path = %path.display(), width = img.width(), height = img.height(), "image written");
    Ok(())
}

fn draw_tile(img: &mut RgbaImage, tile: &HexTile) {
    let origin = tile.rect.top_left();
    let [r, g, b] = tile.color;
    let [sr, sg, sb] = tile.side_color();
    let side = side_polygon(tile.elevation);

    draw_polygon_mut(img, &to_points(origin, &side), Rgba([sr, sg, sb, 255]));
    draw_polygon_mut(img, &to_points(origin, &FOOTPRINT_POINTS), Rgba([r, g, b, 255]));
    draw_polyline(img, origin, &FOOTPRINT_POINTS, true, 2);
    for (top, bottom) in FOOTPRINT_POINTS[2..].iter().zip(&side[2..]) {
        draw_thick_line(img, origin + *top, origin + *bottom, 1);
    }
    draw_polyline(img, origin, &side[2..], false, 2);
}

fn to_points(origin: IVec2, polygon: &[IVec2]) -> Vec<Point<i32>> {
    polygon
        .iter()
        .map(|p| Point::new(origin.x + p.x, origin.y + p.y))
        .collect()
}

fn draw_polyline(img: &mut RgbaImage, origin: IVec2, points: &[IVec2], closed: bool, width: i32) {
    for pair in points.windows(2) {
        draw_thick_line(img, origin + pair[0], origin + pair[1], width);
    }
    if closed && let (Some(first), Some(last)) = (points.first(), points.last()) {
        draw_thick_line(img, origin + *last, origin + *first, width);
    }
}

/// Black segment stamped `width` times along each axis.
fn draw_thick_line<C: Canvas<Pixel = Rgba<u8>>>(canvas: &mut C, a: IVec2, b: IVec2, width: i32) {
    for dy in 0..width {
        for dx in 0..width {
            draw_line_segment_mut(
                canvas,
                ((a.x + dx) as f32, (a.y + dy) as f32),
                ((b.x + dx) as f32, (b.y + dy) as f32),
                OUTLINE,
            );
        }
    }
}
