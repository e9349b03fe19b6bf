//! Debug tooling: the simulation time scaler and its on-screen readout.
//!
//! Drawing goes through the [`OverlayPainter`] seam so the host's immediate-mode
//! GUI stays outside this crate. [`OverlayQueue`] is the in-world painter the
//! systems write into; a renderer drains it once per frame.

mod overlay;
mod time_scaler;

pub use overlay::{LabelStyle, OverlayPainter, OverlayQueue, QueuedLabel, ScreenRect};
pub use time_scaler::{
    LABEL_COLOR, LABEL_FONT_SIZE, LABEL_RECT, TIME_SCALE_STEP, TimeScaler, time_scale_overlay_system,
    time_scaler_system,
};
