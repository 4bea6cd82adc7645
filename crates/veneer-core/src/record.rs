//! Draw-call recorder backend.
//!
//! [`Record`] implements [`Canvas`] by appending every call to a list, and
//! [`MonoFont`] is a fixed-advance [`Font`]. Together they are the reference
//! backend: tests assert against the recorded calls, and hosts can use them
//! to inspect exactly what a frame would draw.

use crate::canvas::{Canvas, Font};
use crate::color::Color;
use crate::geometry::{Rect, Vec2};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Rect { rect: Rect, color: Color },
    Circle { rect: Rect, color: Color },
    Triangle { points: [Vec2; 3], color: Color },
    Line { from: Vec2, to: Vec2, color: Color },
    Text { rect: Rect, text: Vec<u8>, foreground: Color },
    Scissor { rect: Rect },
}

pub struct Record {
    width: f32,
    height: f32,
    pub calls: Vec<DrawCall>,
}

impl Record {
    pub fn new(width: f32, height: f32) -> Self {
        Record {
            width,
            height,
            calls: Vec::new(),
        }
    }

    /// The scissor rectangle in effect after the last recorded call.
    pub fn current_scissor(&self) -> Option<Rect> {
        self.calls.iter().rev().find_map(|call| match call {
            DrawCall::Scissor { rect } => Some(*rect),
            _ => None,
        })
    }
}

impl Canvas for Record {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::Rect { rect, color });
    }

    fn draw_circle(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::Circle { rect, color });
    }

    fn draw_triangle(&mut self, points: [Vec2; 3], color: Color) {
        self.calls.push(DrawCall::Triangle { points, color });
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.calls.push(DrawCall::Line { from, to, color });
    }

    fn draw_text(
        &mut self,
        rect: Rect,
        text: &[u8],
        _font: &dyn Font,
        _background: Color,
        foreground: Color,
    ) {
        self.calls.push(DrawCall::Text {
            rect,
            text: text.to_vec(),
            foreground,
        });
    }

    fn scissor(&mut self, rect: Rect) {
        self.calls.push(DrawCall::Scissor { rect });
    }
}

/// Fixed-advance font: every decoded character is `advance` pixels wide.
#[derive(Clone, Copy, Debug)]
pub struct MonoFont {
    pub advance: f32,
    pub line_height: f32,
}

impl MonoFont {
    pub fn new(advance: f32, line_height: f32) -> Self {
        MonoFont {
            advance,
            line_height,
        }
    }
}

impl Font for MonoFont {
    fn height(&self) -> f32 {
        self.line_height
    }

    fn width(&self, text: &[u8]) -> f32 {
        let mut chars = 0usize;
        let mut at = 0usize;
        while at < text.len() {
            let (_, consumed) = crate::utf8::decode(&text[at..]);
            at += consumed.max(1);
            chars += 1;
        }
        self.advance * chars as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_scissor() {
        let mut canvas = Record::new(800.0, 600.0);
        canvas.draw_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLACK);
        assert_eq!(canvas.current_scissor(), None);
        canvas.scissor(Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(canvas.current_scissor(), Some(Rect::new(1.0, 2.0, 3.0, 4.0)));
        assert_eq!(canvas.calls.len(), 2);
    }

    #[test]
    fn test_mono_font_counts_characters() {
        let font = MonoFont::new(7.0, 14.0);
        assert_eq!(font.width(b"abcd"), 28.0);
        // Multi-byte characters advance once each.
        assert_eq!(font.width("héllo".as_bytes()), 35.0);
    }
}
