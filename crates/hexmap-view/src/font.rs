//! Label font: metrics and outlined text drawing.

use std::fmt;

use ab_glyph::{FontRef, PxScale};
use glam::IVec2;
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};

use crate::error::ViewError;

static DEJAVU_SANS_BOLD: &[u8] = include_bytes!("../assets/DejaVuSans-Bold.ttf");

/// Outline width around label text, in pixels.
pub const LABEL_OUTLINE: i32 = 2;

const TEXT_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
const OUTLINE_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Font used for hover labels.
#[derive(Clone)]
pub struct LabelFont {
    font: FontRef<'static>,
}

impl LabelFont {
    /// DejaVu Sans Bold, compiled into the crate.
    pub fn bundled() -> Result<Self, ViewError> {
        Ok(Self {
            font: FontRef::try_from_slice(DEJAVU_SANS_BOLD)?,
        })
    }

    /// Size of `text` at `size` pixels as laid out by `imageproc`.
    pub fn text_extent(&self, text: &str, size: u32) -> IVec2 {
        let (w, h) = text_size(PxScale::from(size as f32), &self.font, text);
        IVec2::new(w as i32, h as i32)
    }

    /// Size of an outlined label: the text grown by the outline on every side.
    pub fn label_extent(&self, text: &str, size: u32) -> IVec2 {
        self.text_extent(text, size) + IVec2::splat(LABEL_OUTLINE * 2)
    }

    /// Draws white `text` with a black outline into the box whose top-left
    /// corner is `top_left`. The outline is the text stamped at every offset
    /// within [`LABEL_OUTLINE`], with the white pass on top.
    pub fn draw_outlined(&self, img: &mut RgbaImage, text: &str, top_left: IVec2, size: u32) {
        let scale = PxScale::from(size as f32);
        let origin = top_left + IVec2::splat(LABEL_OUTLINE);
        for dy in -LABEL_OUTLINE..=LABEL_OUTLINE {
            for dx in -LABEL_OUTLINE..=LABEL_OUTLINE {
                draw_text_mut(img, OUTLINE_COLOR, origin.x + dx, origin.y + dy, scale, &self.font, text);
            }
        }
        draw_text_mut(img, TEXT_COLOR, origin.x, origin.y, scale, &self.font, text);
    }
}

impl fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabelFont").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_font_parses() {
        assert!(LabelFont::bundled().is_ok());
    }

    #[test]
    fn test_extent_grows_with_text_and_size() {
        let font = LabelFont::bundled().unwrap();
        let short = font.text_extent("Snow", 32);
        let long = font.text_extent("Mountain", 32);
        assert!(short.x > 0 && short.y > 0);
        assert!(long.x > short.x);
        assert!(font.text_extent("Snow", 64).x > short.x);
    }

    #[test]
    fn test_label_extent_adds_outline() {
        let font = LabelFont::bundled().unwrap();
        assert_eq!(
            font.label_extent("Forest", 24),
            font.text_extent("Forest", 24) + IVec2::splat(4)
        );
    }

    #[test]
    fn test_outlined_text_is_white_over_black() {
        let font = LabelFont::bundled().unwrap();
        let extent = font.label_extent("Water", 32);
        let mut img = RgbaImage::from_pixel(extent.x as u32, extent.y as u32, Rgba([0, 0, 255, 255]));
        font.draw_outlined(&mut img, "Water", IVec2::ZERO, 32);

        let white = img.pixels().filter(|p| p.0[..3].iter().all(|&c| c >= 250)).count();
        let black = img.pixels().filter(|p| p.0[..3].iter().all(|&c| c <= 5)).count();
        assert!(white > 0);
        assert!(black > 0);
    }
}
