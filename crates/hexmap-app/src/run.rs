//! One viewer run: generate, lay out, hover, render, write.

use std::path::{Path, PathBuf};

use glam::IVec2;
use hexmap_config::{Config, RiverScoring};
use hexmap_terrain::debug_viz::{DebugImage, render_biome_debug, render_noise_debug};
use hexmap_terrain::{MapParams, MapSession, StepSelection, UnclassifiedPolicy};
use hexmap_view::{CursorHighlight, HexMap, LabelFont, Rasterizer, save_png};
use image::RgbaImage;

use crate::error::AppError;

/// What a run produced, for the caller to report.
#[derive(Debug)]
pub struct RunReport {
    /// Master seed actually used.
    pub master_seed: u64,
    /// Noise frequency actually used.
    pub frequency: u32,
    /// Every file written.
    pub written: Vec<PathBuf>,
    /// Biome name under the hover point, if any.
    pub hovered: Option<String>,
    /// Text dump of the biome grid when requested.
    pub dump: Option<String>,
}

/// Map generation inputs from the loaded config.
pub fn map_params(config: &Config) -> MapParams {
    let map = &config.map;
    MapParams {
        width: map.width,
        height: map.height,
        master_seed: map.seed,
        frequency: map.frequency,
        selection: match map.river_scoring {
            RiverScoring::LowestCoordinate => StepSelection::LowestCoordinate,
            RiverScoring::LowestScore => StepSelection::LowestScore,
        },
        policy: if map.strict_classification {
            UnclassifiedPolicy::Error
        } else {
            UnclassifiedPolicy::FallbackToLast
        },
        ..Default::default()
    }
}

/// Runs the whole viewer once.
pub fn run(config: &Config, hover: Option<(i32, i32)>) -> Result<RunReport, AppError> {
    let session = MapSession::generate(map_params(config))?;
    let window = &config.window;
    let map = HexMap::build(
        session.terrain(),
        session.table(),
        (window.width, window.height),
        &mut session.seeds().elevation_rng(),
    )?;

    let font = LabelFont::bundled()?;
    let mut cursor = CursorHighlight::new(font.clone(), window.label_size);
    let hovered = hover
        .and_then(|(x, y)| cursor.update(IVec2::new(x, y), &map))
        .map(|biome| biome.name().to_string());

    let img = Rasterizer::new(window.background, font).render(&map, Some(&cursor));
    let output = &config.output;
    save_png(&img, &output.image_path)?;
    let mut written = vec![output.image_path.clone()];

    if output.debug_images {
        let noise = render_noise_debug(session.noise(), output.debug_scale);
        let biomes = render_biome_debug(session.terrain(), session.table(), output.debug_scale, true);
        for (suffix, debug) in [("noise", noise), ("biomes", biomes)] {
            let path = sibling_path(&output.image_path, suffix);
            save_png(&to_rgba(debug)?, &path)?;
            written.push(path);
        }
    }

    let stats = session.terrain().stats();
    tracing::info!(
        rivers = stats.rivers,
        longest_river = stats.longest_river,
        files = written.len(),
        "run complete"
    );

    Ok(RunReport {
        master_seed: session.seeds().master,
        frequency: session.frequency(),
        written,
        hovered,
        dump: output.dump_text.then(|| session.terrain().to_string()),
    })
}

/// `dir/map.png` with suffix `noise` becomes `dir/map_noise.png`.
fn sibling_path(image_path: &Path, suffix: &str) -> PathBuf {
    let stem = image_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "hexmap".to_string());
    image_path.with_file_name(format!("{stem}_{suffix}.png"))
}

fn to_rgba(debug: DebugImage) -> Result<RgbaImage, AppError> {
    let (width, height) = debug.dimensions();
    RgbaImage::from_raw(width, height, debug.pixels)
        .ok_or(AppError::MalformedDebugImage { width, height })
}
