//! Debug control that nudges the simulation speed from two key bindings.

use bevy_ecs::prelude::*;
use nebula_config::{TIME_SCALE_DOWN_ACTION, TIME_SCALE_UP_ACTION};
use nebula_ecs::{InputState, SimulationSpeed};

use crate::overlay::{LabelStyle, OverlayPainter, ScreenRect};

/// Speed change per key press.
pub const TIME_SCALE_STEP: f32 = 0.1;

/// Where the readout is drawn.
pub const LABEL_RECT: ScreenRect = ScreenRect {
    x: 10.0,
    y: 10.0,
    width: 400.0,
    height: 200.0,
};

/// Readout font size in pixels.
pub const LABEL_FONT_SIZE: u32 = 24;

/// Readout colour (red).
pub const LABEL_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

/// Adjusts [`SimulationSpeed`] on key-press edges and draws a percentage readout.
///
/// The label style is derived from the painter's base style on the first draw
/// and kept for the lifetime of this value.
#[derive(Resource, Debug, Clone)]
pub struct TimeScaler {
    increase_action: String,
    decrease_action: String,
    label_style: Option<LabelStyle>,
}

impl Default for TimeScaler {
    fn default() -> Self {
        Self::new(TIME_SCALE_UP_ACTION, TIME_SCALE_DOWN_ACTION)
    }
}

impl TimeScaler {
    /// Scaler reacting to the given action names.
    pub fn new(increase_action: &str, decrease_action: &str) -> Self {
        Self {
            increase_action: increase_action.to_string(),
            decrease_action: decrease_action.to_string(),
            label_style: None,
        }
    }

    /// Net step count for this frame: +1 per increase edge, -1 per decrease
    /// edge. Both edges in one frame cancel out.
    pub fn input_delta(&self, input: &InputState) -> i32 {
        let mut delta = 0;
        if input.just_pressed(&self.increase_action) {
            delta += 1;
        }
        if input.just_pressed(&self.decrease_action) {
            delta -= 1;
        }
        delta
    }

    /// `clamp(speed + delta * 0.1, 0, 1)`.
    pub fn scaled(speed: f32, delta: i32) -> f32 {
        (speed + delta as f32 * TIME_SCALE_STEP).clamp(0.0, 1.0)
    }

    /// Apply this frame's edges to `speed`. Returns `true` if a step was taken.
    pub fn update(&self, input: &InputState, speed: &mut SimulationSpeed) -> bool {
        let delta = self.input_delta(input);
        if delta == 0 {
            return false;
        }
        let previous = speed.get();
        speed.set(Self::scaled(previous, delta));
        tracing::info!(from = previous, to = speed.get(), "time scale changed");
        true
    }

    /// Readout text, e.g. `Time Scale: 60%`.
    pub fn label_text(speed: f32) -> String {
        let percent = (speed * 100.0).round() as i32;
        format!("Time Scale: {percent}%")
    }

    /// Draw the readout, building the cached style on first use.
    pub fn draw<P: OverlayPainter + ?Sized>(&mut self, speed: SimulationSpeed, painter: &mut P) {
        let style = self.label_style.get_or_insert_with(|| {
            let mut style = painter.base_label_style();
            style.font_size = LABEL_FONT_SIZE;
            style.color = LABEL_COLOR;
            style
        });
        painter.draw_label(LABEL_RECT, &Self::label_text(speed.get()), style);
    }

    /// The cached label style, `None` before the first draw.
    pub fn label_style(&self) -> Option<&LabelStyle> {
        self.label_style.as_ref()
    }
}

/// Apply time scale key presses to the world's [`SimulationSpeed`].
pub fn time_scaler_system(
    input: Res<'_, InputState>,
    scaler: Res<'_, TimeScaler>,
    mut speed: ResMut<'_, SimulationSpeed>,
) {
    if scaler.input_delta(&input) != 0 {
        scaler.update(&input, &mut speed);
    }
}

/// Queue the time scale readout into the overlay.
pub fn time_scale_overlay_system<P: OverlayPainter + Resource>(
    speed: Res<'_, SimulationSpeed>,
    mut scaler: ResMut<'_, TimeScaler>,
    mut painter: ResMut<'_, P>,
) {
    scaler.draw(*speed, &mut *painter);
}
