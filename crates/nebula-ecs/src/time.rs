//! Frame clock and simulation speed resources.

use bevy_ecs::prelude::*;

/// Process-wide simulation speed factor, always within `[0, 1]`.
///
/// Owned by the world rather than held in a global; the frame clock reads it
/// when scaling delta time and debug tools write it.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SimulationSpeed(f32);

impl SimulationSpeed {
    /// Creates a speed factor, clamping `value` into `[0, 1]`.
    pub fn new(value: f32) -> Self {
        Self(clamp_speed(value))
    }

    /// Current factor.
    pub fn get(self) -> f32 {
        self.0
    }

    /// Replaces the factor, clamping into `[0, 1]`.
    pub fn set(&mut self, value: f32) {
        self.0 = clamp_speed(value);
    }
}

impl Default for SimulationSpeed {
    fn default() -> Self {
        Self(1.0)
    }
}

fn clamp_speed(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Per-frame timing, advanced once at the start of every frame.
///
/// `delta` and `elapsed` are scaled by [`SimulationSpeed`]; `unscaled_delta`
/// is the raw wall-clock frame time.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct TimeRes {
    /// Scaled seconds since the previous frame.
    pub delta: f32,
    /// Wall-clock seconds since the previous frame.
    pub unscaled_delta: f32,
    /// Scaled seconds since the clock started.
    pub elapsed: f32,
    /// Number of frames advanced so far.
    pub tick: u64,
}

impl TimeRes {
    /// Advances the clock by one frame of `raw_dt` wall-clock seconds.
    pub fn advance(&mut self, raw_dt: f32, speed: SimulationSpeed) {
        let raw_dt = raw_dt.max(0.0);
        self.unscaled_delta = raw_dt;
        self.delta = raw_dt * speed.get();
        self.elapsed += self.delta;
        self.tick += 1;
    }
}
