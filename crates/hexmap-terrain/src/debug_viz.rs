//! Terrain debug visualization: top-down 2D images of generation data.
//!
//! Provides [`DebugImage`] and renderers for the noise field and the biome
//! grid, one block of pixels per cell. Used to inspect a map without the
//! isometric hex view.

mod image;
mod renderers;

pub use self::image::DebugImage;
pub use renderers::{biome_color, noise_to_grey, render_biome_debug, render_noise_debug};
