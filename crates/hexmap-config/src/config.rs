//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const APP_NAME: &str = "hexmap";
const CONFIG_FILE: &str = "config.ron";

/// Top-level viewer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Map generation settings.
    pub map: MapConfig,
    /// Screen settings for the hex view.
    pub window: WindowConfig,
    /// Output files.
    pub output: OutputConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// How river steps pick their next cell.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
pub enum RiverScoring {
    /// Smallest coordinate wins; rivers run straight toward the origin.
    #[default]
    LowestCoordinate,
    /// Smallest random score wins; rivers meander.
    LowestScore,
}

/// Map generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MapConfig {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// Master seed. `None` picks a fresh one each run.
    pub seed: Option<u64>,
    /// Noise frequency. `None` draws one per map from `[5, 10)`.
    pub frequency: Option<u32>,
    /// River step selection.
    pub river_scoring: RiverScoring,
    /// Fail instead of falling back when a cell matches no biome rule.
    pub strict_classification: bool,
}

/// Screen configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Screen width in pixels.
    pub width: u32,
    /// Screen height in pixels.
    pub height: u32,
    /// Background color (RGB).
    pub background: [u8; 3],
    /// Label text height in pixels.
    pub label_size: u32,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Where the rendered hex map is written.
    pub image_path: PathBuf,
    /// Also write top-down noise and biome images next to it.
    pub debug_images: bool,
    /// Pixels per cell in the top-down images.
    pub debug_scale: u32,
    /// Print the biome grid to stdout as text.
    pub dump_text: bool,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 16,
            height: 16,
            seed: None,
            frequency: None,
            river_scoring: RiverScoring::default(),
            strict_classification: false,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1800,
            height: 780,
            background: [47, 79, 79],
            label_size: 32,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            image_path: PathBuf::from("hexmap.png"),
            debug_images: false,
            debug_scale: 8,
            dump_text: false,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Platform config directory for the viewer (`<config dir>/hexmap`).
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|base| base.join(APP_NAME))
        .ok_or(ConfigError::NoConfigDir)
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Re-read the file: returns `Some(new_config)` if it changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("width: 16"));
        assert!(ron_str.contains("width: 1800"));
        assert!(ron_str.contains("river_scoring: LowestCoordinate"));
    }

    #[test]
    fn test_missing_section_uses_default() {
        let ron_str = "(map: (width: 24), debug: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.map.width, 24);
        assert_eq!(config.map.height, 16);
        assert_eq!(config.window, WindowConfig::default());
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_optional_seed_parses() {
        let config: Config = ron::from_str("(map: (seed: Some(42), frequency: Some(7)))").unwrap();
        assert_eq!(config.map.seed, Some(42));
        assert_eq!(config.map.frequency, Some(7));
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.map.width = 32;
        config.map.seed = Some(7);
        config.map.river_scoring = RiverScoring::LowestScore;
        config.output.image_path = PathBuf::from("out/map.png");

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.map.height = 20;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert_eq!(result.map(|c| c.map.height), Some(20));
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();
        assert!(config.reload(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{{not valid}}").unwrap();
        let result = Config::load_or_create(dir.path());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
