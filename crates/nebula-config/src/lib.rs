//! Configuration system for the Nebula effects runtime.
//!
//! Settings persist to disk as a RON file, can be overridden from the command
//! line via clap, and are compared on reload so callers can react to edits.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    Config, DebugConfig, EffectsConfig, InputConfig, LightningSettings, SimulationConfig,
    TIME_SCALE_DOWN_ACTION, TIME_SCALE_UP_ACTION, default_config_dir,
};
pub use error::ConfigError;
