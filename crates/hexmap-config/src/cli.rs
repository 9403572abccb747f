//! Command-line argument parsing for the hex map viewer.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, ConfigError, RiverScoring};

/// Hex map viewer command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "hexmap", about = "Generate and render a procedural hex biome map")]
pub struct CliArgs {
    /// Map width in cells.
    #[arg(long)]
    pub width: Option<u32>,

    /// Map height in cells.
    #[arg(long)]
    pub height: Option<u32>,

    /// Master seed; the same seed reproduces the same map.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Noise frequency (random in [5, 10) when omitted).
    #[arg(short, long)]
    pub frequency: Option<u32>,

    /// River step selection.
    #[arg(long, value_enum)]
    pub scoring: Option<RiverScoring>,

    /// Fail when a cell matches no biome rule.
    #[arg(long)]
    pub strict: bool,

    /// Screen point to hover, as `X,Y` in pixels.
    #[arg(long)]
    pub hover: Option<String>,

    /// Output PNG path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write top-down noise and biome images.
    #[arg(long)]
    pub debug_images: bool,

    /// Print the biome grid as text.
    #[arg(long)]
    pub dump: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// Parses `--hover X,Y`.
    pub fn hover_point(&self) -> Result<Option<(i32, i32)>, ConfigError> {
        let Some(raw) = self.hover.as_deref() else {
            return Ok(None);
        };
        let invalid = || ConfigError::InvalidArgument {
            flag: "hover",
            value: raw.to_string(),
        };
        let (x, y) = raw.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse().map_err(|_| invalid())?;
        let y = y.trim().parse().map_err(|_| invalid())?;
        Ok(Some((x, y)))
    }
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.map.width = w;
        }
        if let Some(h) = args.height {
            self.map.height = h;
        }
        if args.seed.is_some() {
            self.map.seed = args.seed;
        }
        if args.frequency.is_some() {
            self.map.frequency = args.frequency;
        }
        if let Some(scoring) = args.scoring {
            self.map.river_scoring = scoring;
        }
        if args.strict {
            self.map.strict_classification = true;
        }
        if let Some(ref path) = args.output {
            self.output.image_path = path.clone();
        }
        if args.debug_images {
            self.output.debug_images = true;
        }
        if args.dump {
            self.output.dump_text = true;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
