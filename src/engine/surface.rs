//! Drawing seam between the renderer and whatever owns the pixels.

use super::color::Rgba;
use glam::Vec2;

/// The handful of 2D primitives one frame needs.
///
/// Implementations should treat every call as best-effort; a failed draw is
/// a missing pixel, not an error.
pub trait DrawSurface {
    /// Backing size in pixels.
    fn size(&self) -> (f64, f64);

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba);

    /// Straight segment with round caps.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f64);

    /// Filled circle, optionally with a soft halo of `glow` blur in its own color.
    fn fill_disc(&mut self, center: Vec2, radius: f64, color: Rgba, glow: Option<f64>);

    fn stroke_circle(&mut self, center: Vec2, radius: f64, color: Rgba, width: f64);
}
