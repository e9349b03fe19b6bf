//! Frame-driven linear ramp from 0 to 1.

/// Clamp `t` into `[0, 1]`. NaN maps to 0.
#[inline]
pub fn clamp01(t: f32) -> f32 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

/// Unclamped linear interpolation from `a` to `b`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Result of advancing a [`LinearRamp`] by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RampStep {
    /// The ramp is still running; apply this fraction and wait for the next frame.
    Sample(f32),
    /// The ramp has finished; apply exactly `1.0` and continue in the same frame.
    Complete,
}

impl RampStep {
    /// Fraction to apply for this step. `Complete` is always exactly `1.0`.
    pub fn fraction(self) -> f32 {
        match self {
            RampStep::Sample(t) => t,
            RampStep::Complete => 1.0,
        }
    }
}

/// Linear ramp over a fixed duration, advanced once per frame.
///
/// While less time than `duration` has accumulated, each step adds the frame
/// delta and yields `clamp01(elapsed / duration)`. The first step after that
/// yields [`RampStep::Complete`], so the endpoint is always applied even when a
/// single oversized frame overshoots the whole duration. A zero duration
/// completes on the first step without any samples.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRamp {
    duration: f32,
    elapsed: f32,
}

impl LinearRamp {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            elapsed: 0.0,
        }
    }

    /// Advance by `dt` seconds.
    pub fn step(&mut self, dt: f32) -> RampStep {
        if self.elapsed < self.duration {
            self.elapsed += dt;
            RampStep::Sample(clamp01(self.elapsed / self.duration))
        } else {
            RampStep::Complete
        }
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Fraction reached so far, without advancing.
    pub fn fraction(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            clamp01(self.elapsed / self.duration)
        }
    }
}
