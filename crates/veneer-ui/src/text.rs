//! Aligned, padded text label with background fill.

use crate::style::{Align, TextStyle};
use veneer_core::{Canvas, Font, Rect};

pub fn text(canvas: &mut dyn Canvas, font: &dyn Font, rect: Rect, style: &TextStyle, string: &[u8]) {
    let text_width = font.width(string);
    let label_y = rect.y + style.padding.y;
    let label_h = (rect.h - 2.0 * style.padding.y).max(0.0);
    let (label_x, label_w) = match style.align {
        Align::Left => (
            rect.x + style.padding.x,
            (rect.w - 2.0 * style.padding.x).max(0.0),
        ),
        Align::Centered => {
            let label_w = 3.0 * style.padding.x + text_width;
            let mid = rect.x + style.padding.x + (rect.w - 2.0 * style.padding.x) / 2.0;
            (mid - label_w / 2.0, label_w)
        }
        Align::Right => {
            let label_x = (rect.x + rect.w) - (2.0 * style.padding.x + text_width);
            (label_x.max(rect.x), text_width + 2.0 * style.padding.x)
        }
    };

    canvas.draw_rect(rect, style.background);
    canvas.draw_text(
        Rect::new(label_x, label_y, label_w, label_h),
        string,
        font,
        style.background,
        style.foreground,
    );
}
