//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Command-line arguments for the headless effects runner.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "nebula-demo", about = "Nebula lightning and time scale demo")]
pub struct CliArgs {
    /// Number of frames to simulate.
    #[arg(long)]
    pub frames: Option<u32>,

    /// Wall-clock seconds per frame.
    #[arg(long)]
    pub frame_dt: Option<f32>,

    /// Initial simulation speed (0.0 - 1.0).
    #[arg(long)]
    pub speed: Option<f32>,

    /// Seed for random effect pauses.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(frames) = args.frames {
            self.simulation.frames = frames;
        }
        if let Some(dt) = args.frame_dt {
            self.simulation.frame_dt = dt;
        }
        if let Some(speed) = args.speed {
            self.simulation.initial_speed = speed.clamp(0.0, 1.0);
        }
        if let Some(seed) = args.seed {
            self.simulation.seed = Some(seed);
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
