//! Shader parameter names used by the lightning material.

use nebula_materials::{UniformLayout, UniformSlot};

pub const START_POSITION: &str = "_StartPos";
pub const END_POSITION: &str = "_EndPos";
pub const PROGRESS: &str = "_Progress";
pub const BOLT_RADIUS: &str = "_BoltRadius";
pub const GLOW_RADIUS: &str = "_GlowRadius";
pub const NOISE_SCALE: &str = "_NoiseScale";
pub const NOISE_OFFSET: &str = "_NoiseOffset";
pub const NOISE_AMPLITUDE: &str = "_NoiseAmplitude";
pub const COLOR: &str = "_Color";

/// Uniform block layout of the lightning shader, one vec4 per parameter.
pub fn uniform_layout() -> UniformLayout {
    UniformLayout::new([
        UniformSlot::vector(START_POSITION),
        UniformSlot::vector(END_POSITION),
        UniformSlot::float(PROGRESS, 0.0),
        UniformSlot::float(BOLT_RADIUS, 0.0),
        UniformSlot::float(GLOW_RADIUS, 0.0),
        UniformSlot::float(NOISE_SCALE, 1.0),
        UniformSlot::float(NOISE_OFFSET, 0.0),
        UniformSlot::float(NOISE_AMPLITUDE, 1.0),
        UniformSlot::color(COLOR, [1.0, 1.0, 1.0, 1.0]),
    ])
}
