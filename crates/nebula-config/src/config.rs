//! Configuration structs with sensible defaults and RON persistence.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Action name bound to the "speed up simulation" key.
pub const TIME_SCALE_UP_ACTION: &str = "time_scale_up";
/// Action name bound to the "slow down simulation" key.
pub const TIME_SCALE_DOWN_ACTION: &str = "time_scale_down";

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Input settings.
    pub input: InputConfig,
    /// Frame driver settings.
    pub simulation: SimulationConfig,
    /// Visual effect instances.
    pub effects: EffectsConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Input configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Keybindings (action name -> key name).
    pub keybindings: HashMap<String, String>,
}

/// Frame driver configuration for headless runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Fixed wall-clock seconds per frame.
    pub frame_dt: f32,
    /// Number of frames to run.
    pub frames: u32,
    /// Simulation speed at startup, clamped to `[0, 1]`.
    pub initial_speed: f32,
    /// RNG seed for effect pauses. `None` seeds from the OS.
    pub seed: Option<u64>,
}

/// Effect instances spawned at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EffectsConfig {
    /// One entry per lightning bolt.
    pub lightning: Vec<LightningSettings>,
}

/// Serialized form of a single lightning effect.
///
/// Positions are plain arrays so this crate stays free of math types; the
/// effects crate converts them on load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LightningSettings {
    /// Seconds for the bolt to grow from start to end.
    pub appear_duration: f32,
    /// Seconds the fully struck bolt is held before fading.
    pub disappear_delay: f32,
    /// Seconds for the bolt and glow to shrink to nothing.
    pub disappear_duration: f32,
    /// Glow radius while the bolt is visible.
    pub glow_radius: f32,
    /// Bolt radius while growing.
    pub bolt_radius_min: f32,
    /// Bolt radius at the strike.
    pub bolt_radius_max: f32,
    /// World-space start of the bolt.
    pub start: [f32; 3],
    /// World-space end of the bolt.
    pub end: [f32; 3],
    /// Optional RGBA tint pushed once at setup.
    pub color: Option<[f32; 4]>,
    /// Optional noise frequency pushed once at setup.
    pub noise_scale: Option<f32>,
    /// Optional noise displacement pushed once at setup.
    pub noise_amplitude: Option<f32>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Show the time scale overlay.
    pub show_time_scale: bool,
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for InputConfig {
    fn default() -> Self {
        let keybindings = HashMap::from([
            (TIME_SCALE_UP_ACTION.to_string(), "E".to_string()),
            (TIME_SCALE_DOWN_ACTION.to_string(), "Q".to_string()),
        ]);
        Self { keybindings }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            frame_dt: 1.0 / 60.0,
            frames: 600,
            initial_speed: 1.0,
            seed: None,
        }
    }
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            lightning: vec![LightningSettings::default()],
        }
    }
}

impl Default for LightningSettings {
    fn default() -> Self {
        Self {
            appear_duration: 0.3,
            disappear_delay: 0.2,
            disappear_duration: 0.2,
            glow_radius: 0.01,
            bolt_radius_min: 0.01,
            bolt_radius_max: 0.05,
            start: [0.0, 4.0, 0.0],
            end: [0.0, 0.0, 0.0],
            color: None,
            noise_scale: None,
            noise_amplitude: None,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            show_time_scale: true,
            log_level: "info".to_string(),
        }
    }
}

impl InputConfig {
    /// Returns the key name bound to `action`, if any.
    pub fn key_for(&self, action: &str) -> Option<&str> {
        self.keybindings.get(action).map(String::as_str)
    }
}

/// Platform config directory for this application (`<config>/nebula`).
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("nebula"))
        .ok_or(ConfigError::NoConfigDir)
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

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

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
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
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(4))
                .unwrap();
        assert!(ron_str.contains("appear_duration"));
        assert!(ron_str.contains("frames: 600"));
    }

    #[test]
    fn test_default_keybindings() {
        let input = InputConfig::default();
        assert_eq!(input.key_for(TIME_SCALE_UP_ACTION), Some("E"));
        assert_eq!(input.key_for(TIME_SCALE_DOWN_ACTION), Some("Q"));
        assert_eq!(input.key_for("jump"), None);
    }

    #[test]
    fn test_default_lightning_matches_effect_defaults() {
        let effects = EffectsConfig::default();
        assert_eq!(effects.lightning.len(), 1);
        let bolt = &effects.lightning[0];
        assert_eq!(bolt.appear_duration, 0.3);
        assert_eq!(bolt.bolt_radius_min, 0.01);
        assert_eq!(bolt.bolt_radius_max, 0.05);
        assert!(bolt.color.is_none());
    }

    #[test]
    fn test_missing_section_uses_default() {
        let ron_str = "(input: (), debug: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.simulation, SimulationConfig::default());
        assert_eq!(config.effects, EffectsConfig::default());
    }

    #[test]
    fn test_partial_lightning_entry_fills_defaults() {
        let ron_str = "(effects: (lightning: [(appear_duration: 1.5), (glow_radius: 0.2)]))";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.effects.lightning.len(), 2);
        assert_eq!(config.effects.lightning[0].appear_duration, 1.5);
        assert_eq!(config.effects.lightning[0].disappear_delay, 0.2);
        assert_eq!(config.effects.lightning[1].glow_radius, 0.2);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.simulation.frames = 42;
        config.simulation.seed = Some(7);
        config.effects.lightning[0].color = Some([0.6, 0.7, 1.0, 1.0]);

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join("config.ron").exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.debug.log_level = "trace".to_string();
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert_eq!(result.unwrap().debug.log_level, "trace");
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
        std::fs::write(dir.path().join("config.ron"), "{{not valid}}").unwrap();
        let result = Config::load_or_create(dir.path());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
