//! Immediate-mode text overlay seam.

use bevy_ecs::prelude::*;

/// Screen-space rectangle in logical pixels, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Font size and colour of a text label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    /// Font size in pixels.
    pub font_size: u32,
    /// Linear RGBA text colour.
    pub color: [f32; 4],
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_size: 14,
            color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// Host-provided immediate-mode text drawing.
pub trait OverlayPainter {
    /// The skin's default label style, used as the base for custom styles.
    fn base_label_style(&self) -> LabelStyle;

    /// Draw `text` inside `rect` this frame.
    fn draw_label(&mut self, rect: ScreenRect, text: &str, style: &LabelStyle);
}

/// A label waiting to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct QueuedLabel {
    pub rect: ScreenRect,
    pub text: String,
    pub style: LabelStyle,
}

/// Painter that collects labels for the renderer to draw and drain.
#[derive(Resource, Debug, Clone, Default)]
pub struct OverlayQueue {
    base_style: LabelStyle,
    labels: Vec<QueuedLabel>,
}

impl OverlayQueue {
    /// Queue with a custom base style.
    pub fn with_base_style(base_style: LabelStyle) -> Self {
        Self {
            base_style,
            labels: Vec::new(),
        }
    }

    /// Labels queued since the last drain.
    pub fn labels(&self) -> &[QueuedLabel] {
        &self.labels
    }

    /// Take all queued labels.
    pub fn drain(&mut self) -> Vec<QueuedLabel> {
        std::mem::take(&mut self.labels)
    }
}

impl OverlayPainter for OverlayQueue {
    fn base_label_style(&self) -> LabelStyle {
        self.base_style.clone()
    }

    fn draw_label(&mut self, rect: ScreenRect, text: &str, style: &LabelStyle) {
        self.labels.push(QueuedLabel {
            rect,
            text: text.to_string(),
            style: style.clone(),
        });
    }
}
