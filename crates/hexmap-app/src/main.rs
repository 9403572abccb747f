//! `hexmap`: generate a procedural hex biome map and render it to PNG.

mod error;
mod run;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hexmap_config::{CliArgs, Config, default_config_dir};

use crate::error::AppError;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Resolve config directory; without one, run on defaults and skip the log file.
    let config_dir: Option<PathBuf> = args.config.clone().or_else(|| default_config_dir().ok());

    let mut config = match config_dir.as_deref() {
        Some(dir) => Config::load_or_create(dir).unwrap_or_else(|e| {
            eprintln!("Failed to load config: {e}, using defaults");
            Config::default()
        }),
        None => Config::default(),
    };
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.as_ref().map(|dir| dir.join("logs"));
    hexmap_log::init_logging(log_dir.as_deref(), cfg!(debug_assertions), Some(&config));

    match start(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "hexmap failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn start(args: &CliArgs, config: &Config) -> Result<(), AppError> {
    let hover = args.hover_point()?;
    let report = run::run(config, hover)?;

    println!(
        "seed {} frequency {} ({}x{})",
        report.master_seed, report.frequency, config.map.width, config.map.height
    );
    if let Some(biome) = &report.hovered {
        println!("hover: {biome}");
    }
    for path in &report.written {
        println!("wrote {}", path.display());
    }
    if let Some(dump) = &report.dump {
        print!("{dump}");
    }
    Ok(())
}
