//! Lightning bolt animation: configuration and the per-frame state machine.

use bevy_ecs::prelude::Component;
use glam::Vec3;
use nebula_config::LightningSettings;
use nebula_ecs::TimeRes;
use nebula_materials::ShaderParams;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::EffectError;
use crate::ids;
use crate::listeners::{ListenerId, StrikeListeners};
use crate::ramp::{LinearRamp, RampStep, lerp};

/// Shortest random pause between two bolts, in seconds.
pub const PAUSE_MIN_SECONDS: f32 = 0.5;
/// Longest random pause between two bolts, in seconds.
pub const PAUSE_MAX_SECONDS: f32 = 2.0;

// ---------------------------------------------------------------------------
// LightningConfig
// ---------------------------------------------------------------------------

/// Immutable per-instance configuration of a lightning bolt.
#[derive(Debug, Clone, PartialEq)]
pub struct LightningConfig {
    /// Seconds for `_Progress` to ramp from 0 to 1.
    pub appear_duration: f32,
    /// Seconds the struck bolt is held before fading.
    pub disappear_delay: f32,
    /// Seconds for bolt and glow radius to fall to 0.
    pub disappear_duration: f32,
    /// Glow radius while visible, in `[0, 1]`.
    pub glow_radius: f32,
    /// Bolt radius while growing, in `[0, 1]`.
    pub bolt_radius_min: f32,
    /// Bolt radius at the strike, in `[0, 1]`.
    pub bolt_radius_max: f32,
    /// World-space start of the bolt.
    pub start: Vec3,
    /// World-space end of the bolt.
    pub end: Vec3,
    /// Tint pushed once at setup.
    pub color: Option<[f32; 4]>,
    /// Noise frequency pushed once at setup.
    pub noise_scale: Option<f32>,
    /// Noise displacement pushed once at setup.
    pub noise_amplitude: Option<f32>,
}

impl Default for LightningConfig {
    fn default() -> Self {
        Self::from(&LightningSettings::default())
    }
}

impl From<&LightningSettings> for LightningConfig {
    fn from(s: &LightningSettings) -> Self {
        Self {
            appear_duration: s.appear_duration,
            disappear_delay: s.disappear_delay,
            disappear_duration: s.disappear_duration,
            glow_radius: s.glow_radius,
            bolt_radius_min: s.bolt_radius_min,
            bolt_radius_max: s.bolt_radius_max,
            start: Vec3::from_array(s.start),
            end: Vec3::from_array(s.end),
            color: s.color,
            noise_scale: s.noise_scale,
            noise_amplitude: s.noise_amplitude,
        }
    }
}

impl LightningConfig {
    /// Check range constraints: non-negative durations, radii in `[0, 1]`,
    /// `bolt_radius_min <= bolt_radius_max`, finite positions.
    pub fn validate(&self) -> Result<(), EffectError> {
        for (field, value) in [
            ("appear_duration", self.appear_duration),
            ("disappear_delay", self.disappear_delay),
            ("disappear_duration", self.disappear_duration),
        ] {
            if !value.is_finite() {
                return Err(EffectError::NonFinite { field });
            }
            if value < 0.0 {
                return Err(EffectError::NegativeDuration { field, value });
            }
        }

        for (field, value) in [
            ("glow_radius", self.glow_radius),
            ("bolt_radius_min", self.bolt_radius_min),
            ("bolt_radius_max", self.bolt_radius_max),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(EffectError::RadiusOutOfRange { field, value });
            }
        }

        if self.bolt_radius_min > self.bolt_radius_max {
            return Err(EffectError::BoltRadiusInverted {
                min: self.bolt_radius_min,
                max: self.bolt_radius_max,
            });
        }

        if !self.start.is_finite() {
            return Err(EffectError::NonFinite { field: "start" });
        }
        if !self.end.is_finite() {
            return Err(EffectError::NonFinite { field: "end" });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Phases
// ---------------------------------------------------------------------------

/// Observable phase of an active effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightningPhase {
    /// Growing from start to end.
    Appearing,
    /// The strike instant. Never observed between frames.
    Struck,
    /// Holding the struck bolt.
    WaitingToFade,
    /// Shrinking bolt and glow.
    Fading,
    /// Random pause before the next bolt.
    Pausing,
}

/// Suspension for a fixed amount of frame time.
#[derive(Debug, Clone, PartialEq)]
struct Wait {
    duration: f32,
    elapsed: f32,
}

impl Wait {
    fn new(duration: f32) -> Self {
        Self {
            duration,
            elapsed: 0.0,
        }
    }

    /// Returns `true` once the full duration has elapsed.
    fn advance(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        self.elapsed >= self.duration
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    /// Start of a cycle: reset glow, noise offset and bolt radius.
    BeginCycle,
    Appearing(LinearRamp),
    Struck,
    WaitingToFade(Wait),
    Fading(LinearRamp),
    Pausing(Wait),
}

/// Transient state of a running effect. Dropped on deactivation.
#[derive(Debug, Clone)]
struct LightningAnimation {
    phase: Phase,
    /// Last value written to `_Progress`.
    progress: f32,
    /// Fraction of the current ramp, 0 outside ramps.
    fraction: f32,
}

// ---------------------------------------------------------------------------
// LightningEffect
// ---------------------------------------------------------------------------

/// A recurring lightning bolt driven through shader parameters.
///
/// After [`activate`](Self::activate), every [`tick`](Self::tick) advances the
/// cycle by the frame's scaled delta time:
///
/// 1. appear: `_Progress` ramps 0 → 1 over `appear_duration`
/// 2. strike: bolt radius jumps to max and strike listeners run
/// 3. hold for `disappear_delay`
/// 4. fade: bolt and glow radius ramp to 0 over `disappear_duration`
/// 5. pause for a random 0.5–2 s, then back to 1
///
/// A ramp entered during a frame consumes that frame's delta; a wait entered
/// during a frame starts counting on the next one.
#[derive(Component, Debug)]
pub struct LightningEffect {
    config: LightningConfig,
    listeners: StrikeListeners,
    rng: ChaCha8Rng,
    animation: Option<LightningAnimation>,
    strikes: u64,
}

impl LightningEffect {
    /// Build an inactive effect. `seed` fixes the pause sequence; `None`
    /// draws a random seed.
    ///
    /// # Errors
    ///
    /// Returns the first range violation found by [`LightningConfig::validate`].
    pub fn new(config: LightningConfig, seed: Option<u64>) -> Result<Self, EffectError> {
        config.validate()?;
        let seed = seed.unwrap_or_else(rand::random);
        Ok(Self {
            config,
            listeners: StrikeListeners::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            animation: None,
            strikes: 0,
        })
    }

    pub fn config(&self) -> &LightningConfig {
        &self.config
    }

    /// Subscribe to the strike notification.
    pub fn on_strike(&mut self, callback: impl FnMut() + Send + Sync + 'static) -> ListenerId {
        self.listeners.subscribe(callback)
    }

    pub fn listeners_mut(&mut self) -> &mut StrikeListeners {
        &mut self.listeners
    }

    /// Run setup and start the cycle. Reactivating an active effect restarts it.
    ///
    /// Setup zeroes progress, glow and bolt radius and pushes the endpoints
    /// and appearance values, which stay fixed for every cycle.
    pub fn activate<P: ShaderParams + ?Sized>(&mut self, params: &mut P) {
        params.set_float(ids::PROGRESS, 0.0);
        params.set_float(ids::GLOW_RADIUS, 0.0);
        params.set_float(ids::BOLT_RADIUS, 0.0);
        params.set_vector(ids::START_POSITION, self.config.start);
        params.set_vector(ids::END_POSITION, self.config.end);
        if let Some(color) = self.config.color {
            params.set_color(ids::COLOR, color);
        }
        if let Some(scale) = self.config.noise_scale {
            params.set_float(ids::NOISE_SCALE, scale);
        }
        if let Some(amplitude) = self.config.noise_amplitude {
            params.set_float(ids::NOISE_AMPLITUDE, amplitude);
        }

        self.animation = Some(LightningAnimation {
            phase: Phase::BeginCycle,
            progress: 0.0,
            fraction: 0.0,
        });
        tracing::debug!(start = ?self.config.start, end = ?self.config.end, "lightning activated");
    }

    /// Stop the cycle. Parameter values are left as last written.
    pub fn deactivate(&mut self) {
        if self.animation.take().is_some() {
            tracing::debug!(strikes = self.strikes, "lightning deactivated");
        }
    }

    pub fn is_active(&self) -> bool {
        self.animation.is_some()
    }

    /// Current phase, `None` while inactive.
    pub fn phase(&self) -> Option<LightningPhase> {
        self.animation.as_ref().map(|anim| match anim.phase {
            Phase::BeginCycle | Phase::Appearing(_) => LightningPhase::Appearing,
            Phase::Struck => LightningPhase::Struck,
            Phase::WaitingToFade(_) => LightningPhase::WaitingToFade,
            Phase::Fading(_) => LightningPhase::Fading,
            Phase::Pausing(_) => LightningPhase::Pausing,
        })
    }

    /// Last value written to `_Progress`, 0 while inactive.
    pub fn progress(&self) -> f32 {
        self.animation.as_ref().map_or(0.0, |anim| anim.progress)
    }

    /// Fraction of the running ramp, 0 outside appear and fade.
    pub fn fraction(&self) -> f32 {
        self.animation.as_ref().map_or(0.0, |anim| anim.fraction)
    }

    /// Total strikes since construction.
    pub fn strike_count(&self) -> u64 {
        self.strikes
    }

    /// Advance the cycle by one frame. Does nothing while inactive.
    pub fn tick<P: ShaderParams + ?Sized>(&mut self, time: &TimeRes, params: &mut P) {
        let Some(mut anim) = self.animation.take() else {
            return;
        };
        let dt = time.delta;

        loop {
            match &mut anim.phase {
                Phase::BeginCycle => {
                    params.set_float(ids::GLOW_RADIUS, self.config.glow_radius);
                    params.set_float(ids::NOISE_OFFSET, time.elapsed);
                    params.set_float(ids::BOLT_RADIUS, self.config.bolt_radius_min);
                    anim.phase = Phase::Appearing(LinearRamp::new(self.config.appear_duration));
                    tracing::trace!(noise_offset = time.elapsed, "lightning appearing");
                }
                Phase::Appearing(ramp) => {
                    let step = ramp.step(dt);
                    anim.fraction = step.fraction();
                    anim.progress = anim.fraction;
                    params.set_float(ids::PROGRESS, anim.progress);
                    if let RampStep::Sample(_) = step {
                        break;
                    }
                    anim.phase = Phase::Struck;
                }
                Phase::Struck => {
                    params.set_float(ids::BOLT_RADIUS, self.config.bolt_radius_max);
                    self.strikes += 1;
                    tracing::debug!(strike = self.strikes, time = time.elapsed, "lightning struck");
                    self.listeners.notify();
                    anim.fraction = 0.0;
                    anim.phase = Phase::WaitingToFade(Wait::new(self.config.disappear_delay));
                    break;
                }
                Phase::WaitingToFade(wait) => {
                    if !wait.advance(dt) {
                        break;
                    }
                    anim.phase = Phase::Fading(LinearRamp::new(self.config.disappear_duration));
                    tracing::trace!("lightning fading");
                }
                Phase::Fading(ramp) => {
                    let step = ramp.step(dt);
                    let t = step.fraction();
                    anim.fraction = t;
                    params.set_float(ids::BOLT_RADIUS, lerp(self.config.bolt_radius_max, 0.0, t));
                    params.set_float(ids::GLOW_RADIUS, lerp(self.config.glow_radius, 0.0, t));
                    if let RampStep::Sample(_) = step {
                        break;
                    }
                    anim.progress = 0.0;
                    anim.fraction = 0.0;
                    params.set_float(ids::PROGRESS, 0.0);
                    let pause = self.next_pause();
                    tracing::trace!(pause, "lightning pausing");
                    anim.phase = Phase::Pausing(Wait::new(pause));
                    break;
                }
                Phase::Pausing(wait) => {
                    if !wait.advance(dt) {
                        break;
                    }
                    anim.phase = Phase::BeginCycle;
                }
            }
        }

        self.animation = Some(anim);
    }

    fn next_pause(&mut self) -> f32 {
        self.rng.random_range(PAUSE_MIN_SECONDS..=PAUSE_MAX_SECONDS)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
