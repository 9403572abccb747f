//! Configuration for the hex map viewer.
//!
//! Settings persist to disk as `config.ron`, can be overridden from the
//! command line via clap, and tolerate missing or unknown fields so old
//! config files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    Config, DebugConfig, MapConfig, OutputConfig, RiverScoring, WindowConfig, default_config_dir,
};
pub use error::ConfigError;
