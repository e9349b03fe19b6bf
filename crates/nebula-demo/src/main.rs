//! Headless demo: runs lightning effects under a keyboard-adjustable time scale.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p nebula-demo -- --frames 1200 --seed 7` for a
//! reproducible twenty second run.

mod script;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use bevy_ecs::prelude::*;
use clap::Parser;
use nebula_config::{
    CliArgs, Config, TIME_SCALE_DOWN_ACTION, TIME_SCALE_UP_ACTION, default_config_dir,
};
use nebula_debug::{OverlayQueue, TimeScaler, time_scale_overlay_system, time_scaler_system};
use nebula_ecs::{
    ActionBindings, EngineSchedule, EngineSchedules, InputState, SimulationSpeed, TimeRes,
    create_world,
};
use nebula_effects::{
    LightningConfig, LightningEffect, lightning_system, lightning_uniform_system, spawn_lightning,
};
use nebula_materials::MaterialParams;
use tracing::{info, warn};

use crate::script::KeyScript;

fn main() {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = match args.config.clone().map(Ok).unwrap_or_else(default_config_dir) {
        Ok(dir) => Some(dir),
        Err(e) => {
            eprintln!("Failed to resolve config directory: {e}, using defaults");
            None
        }
    };

    // Load or create config, then apply CLI overrides
    let mut config = config_dir
        .as_deref()
        .map(|dir| {
            Config::load_or_create(dir).unwrap_or_else(|e| {
                eprintln!("Failed to load config: {e}, using defaults");
                Config::default()
            })
        })
        .unwrap_or_default();
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.as_ref().map(|dir| dir.join("logs"));
    nebula_log::init_logging(log_dir.as_deref(), cfg!(debug_assertions), Some(&config));

    let mut world = create_world();
    let strikes = setup_world(&mut world, &config);
    let mut schedules = build_schedules(&config);

    let script = KeyScript::slow_down_and_recover(
        config.simulation.frames,
        config.input.key_for(TIME_SCALE_DOWN_ACTION).unwrap_or("Q"),
        config.input.key_for(TIME_SCALE_UP_ACTION).unwrap_or("E"),
    );

    info!(
        frames = config.simulation.frames,
        frame_dt = config.simulation.frame_dt,
        speed = config.simulation.initial_speed,
        effects = config.effects.lightning.len(),
        "Starting lightning demo"
    );

    let mut last_label = String::new();
    for frame in 0..config.simulation.frames {
        world.resource_scope(|world, mut input: Mut<'_, InputState>| {
            script.apply(frame, &mut input, world.resource::<ActionBindings>());
        });

        schedules.run(&mut world, config.simulation.frame_dt);

        for label in world.resource_mut::<OverlayQueue>().drain() {
            if label.text != last_label {
                info!(frame, "{}", label.text);
                last_label = label.text;
            }
        }
    }

    let time = world.resource::<TimeRes>();
    info!(
        ticks = time.tick,
        simulated_seconds = time.elapsed,
        final_speed = world.resource::<SimulationSpeed>().get(),
        strikes = strikes.load(Ordering::Relaxed),
        "Demo finished"
    );
}

/// Insert demo resources and spawn one entity per configured lightning bolt.
///
/// Returns a counter shared with every effect's strike listener.
fn setup_world(world: &mut World, config: &Config) -> Arc<AtomicU64> {
    world.insert_resource(SimulationSpeed::new(config.simulation.initial_speed));
    world.insert_resource(ActionBindings::from_pairs(
        config
            .input
            .keybindings
            .iter()
            .map(|(action, key)| (action.as_str(), key.as_str())),
    ));
    world.insert_resource(TimeScaler::default());
    world.insert_resource(OverlayQueue::default());

    let strikes = Arc::new(AtomicU64::new(0));
    for (index, settings) in config.effects.lightning.iter().enumerate() {
        let seed = config
            .simulation
            .seed
            .map(|seed| seed.wrapping_add(index as u64));
        let mut effect = match LightningEffect::new(LightningConfig::from(settings), seed) {
            Ok(effect) => effect,
            Err(e) => {
                warn!(index, error = %e, "Skipping invalid lightning effect");
                continue;
            }
        };

        let counter = Arc::clone(&strikes);
        effect.on_strike(move || {
            let total = counter.fetch_add(1, Ordering::Relaxed) + 1;
            tracing::debug!(effect = index, total, "Lightning strike");
        });
        spawn_lightning(world, effect, MaterialParams::new());
    }
    strikes
}

fn build_schedules(config: &Config) -> EngineSchedules {
    let mut schedules = EngineSchedules::new();
    schedules.add_system(EngineSchedule::PreUpdate, time_scaler_system);
    schedules.add_system(EngineSchedule::Update, lightning_system);
    schedules.add_system(EngineSchedule::Render, lightning_uniform_system);
    if config.debug.show_time_scale {
        schedules.add_system(
            EngineSchedule::Render,
            time_scale_overlay_system::<OverlayQueue>,
        );
    }
    schedules
}
