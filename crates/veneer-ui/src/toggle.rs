//! Check box and radio button. One algorithm, two draw shapes.

use crate::style::{Align, TextStyle, ToggleKind, ToggleStyle};
use crate::text;
use veneer_core::{Canvas, Color, Font, Input, Rect};

fn draw_shape(canvas: &mut dyn Canvas, kind: ToggleKind, rect: Rect, color: Color) {
    match kind {
        ToggleKind::Check => canvas.draw_rect(rect, color),
        ToggleKind::Radio => canvas.draw_circle(rect, color),
    }
}

/// Returns the (possibly flipped) active state. Flips on a completed click:
/// a click latched inside the cursor sub-rect while the pointer is back up.
pub fn toggle(
    canvas: &mut dyn Canvas,
    font: &dyn Font,
    rect: Rect,
    active: bool,
    label: Option<&[u8]>,
    style: &ToggleStyle,
    kind: ToggleKind,
    input: Option<&Input>,
) -> bool {
    let toggle_w = rect.w.max(font.height() + 2.0 * style.padding.x);
    let toggle_h = rect.h.max(font.height() + 2.0 * style.padding.y);
    let mut active = active;

    let select = Rect::new(
        rect.x + style.padding.x,
        rect.y + style.padding.y,
        font.height() + 2.0 * style.padding.y,
        font.height() + 2.0 * style.padding.y,
    );
    let cursor_pad = (select.w / 8.0).floor();
    let cursor = Rect::new(
        select.x + cursor_pad,
        select.y + cursor_pad,
        select.w - 2.0 * cursor_pad,
        select.h - 2.0 * cursor_pad,
    );

    if let Some(input) = input {
        if !input.mouse_down && input.mouse_clicked > 0 && input.clicked_in(cursor) {
            active = !active;
        }
    }

    draw_shape(canvas, kind, select, style.background);
    if active {
        draw_shape(canvas, kind, cursor, style.foreground);
    }

    if let Some(label) = label {
        let inner_x = rect.x + select.w + style.padding.x * 2.0;
        let inner_y = (rect.y + select.h / 2.0) - font.height() / 2.0;
        let inner = Rect::new(
            inner_x,
            inner_y,
            (rect.x + toggle_w) - (inner_x + style.padding.x),
            (rect.y + toggle_h) - (inner_y + style.padding.y),
        );
        let label_style = TextStyle {
            padding: veneer_core::Vec2::default(),
            align: Align::Left,
            background: style.foreground,
            foreground: style.font,
        };
        text::text(canvas, font, inner, &label_style, label);
    }
    active
}
