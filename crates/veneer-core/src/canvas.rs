//! Renderer and font capability traits.
//!
//! Veneer never rasterizes anything itself. The host supplies a [`Canvas`]
//! that consumes primitive draw calls and a [`Font`] that answers metric
//! queries; both are borrowed for the duration of a frame. Z-order is call
//! order, and draws outside the current scissor rectangle are the backend's
//! responsibility to suppress.

use crate::color::Color;
use crate::geometry::{Rect, Vec2};

pub trait Canvas {
    /// Viewport extents, used to clamp panel move/scale.
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    fn draw_rect(&mut self, rect: Rect, color: Color);
    /// Circle inscribed in `rect`.
    fn draw_circle(&mut self, rect: Rect, color: Color);
    fn draw_triangle(&mut self, points: [Vec2; 3], color: Color);
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color);
    fn draw_text(&mut self, rect: Rect, text: &[u8], font: &dyn Font, background: Color, foreground: Color);
    /// Set the clip rectangle for subsequent draws.
    fn scissor(&mut self, rect: Rect);
}

pub trait Font {
    /// Line height in pixels.
    fn height(&self) -> f32;
    /// Horizontal advance of `text` (UTF-8 bytes) in pixels.
    fn width(&self, text: &[u8]) -> f32;
}
