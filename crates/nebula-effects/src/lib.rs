//! Shader-driven visual effects.
//!
//! The lightning effect runs a perpetual appear / strike / fade / pause cycle
//! as an explicit state machine advanced once per frame, writing into a
//! material's [`ShaderParams`](nebula_materials::ShaderParams).

mod error;
pub mod ids;
mod lightning;
mod listeners;
mod ramp;
mod system;

pub use error::EffectError;
pub use lightning::{
    LightningConfig, LightningEffect, LightningPhase, PAUSE_MAX_SECONDS, PAUSE_MIN_SECONDS,
};
pub use listeners::{ListenerId, StrikeListeners};
pub use ramp::{LinearRamp, RampStep, clamp01, lerp};
pub use system::{LightningUniforms, lightning_system, lightning_uniform_system, spawn_lightning};
