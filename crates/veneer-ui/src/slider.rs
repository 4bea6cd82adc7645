//! Slider and progress bar.

use crate::style::SliderStyle;
use veneer_core::{Canvas, Input, Rect};

/// Step-quantized horizontal slider. Returns the (possibly dragged) value,
/// always clamped to `[min, max]`. A drag engages only when both the latched
/// press position and the current pointer are inside the track, so a drag
/// that started elsewhere cannot pick the cursor up in passing.
pub fn slider(
    canvas: &mut dyn Canvas,
    rect: Rect,
    min: f32,
    val: f32,
    max: f32,
    step: f32,
    style: &SliderStyle,
    input: Option<&Input>,
) -> f32 {
    let track = Rect::new(
        rect.x,
        rect.y,
        rect.w.max(2.0 * style.padding.x),
        rect.h.max(2.0 * style.padding.y),
    );
    let slider_min = min.min(max);
    let slider_max = min.max(max);
    let mut value = val.clamp(slider_min, slider_max);
    debug_assert!(step > 0.0, "slider step must be positive");
    if step <= 0.0 {
        canvas.draw_rect(track, style.background);
        return value;
    }
    let steps = (slider_max - slider_min) / step;

    let inner_w = track.w - 2.0 * style.padding.x;
    let cursor_w = inner_w / (steps + 1.0);
    let cursor_h = track.h - 2.0 * style.padding.y;
    let mut cursor_x = track.x + style.padding.x + cursor_w * ((value - slider_min) / step);
    let cursor_y = track.y + style.padding.y;

    if let Some(input) = input {
        if input.mouse_down && input.mouse_in(track) && input.clicked_in(track) {
            let d = input.mouse_pos.x - (cursor_x + cursor_w / 2.0);
            let pxstep = inner_w / steps;
            if d.abs() >= pxstep {
                let moved = (d.abs() / pxstep).floor() * step;
                value += if d > 0.0 { moved } else { -moved };
                value = value.clamp(slider_min, slider_max);
                // Cursor position is a pure function of the clamped value.
                cursor_x = track.x + style.padding.x + cursor_w * ((value - slider_min) / step);
            }
        }
    }

    canvas.draw_rect(track, style.background);
    canvas.draw_rect(
        Rect::new(cursor_x, cursor_y, cursor_w, cursor_h),
        style.foreground,
    );
    value
}

/// One-dimensional fill bar. With `modifiable`, a held pointer inside the
/// rect sets the value directly from the pointer's x ratio.
pub fn progress(
    canvas: &mut dyn Canvas,
    rect: Rect,
    value: usize,
    max: usize,
    modifiable: bool,
    style: &SliderStyle,
    input: Option<&Input>,
) -> usize {
    let bar = Rect::new(
        rect.x,
        rect.y,
        rect.w.max(2.0 * style.padding.x + 1.0),
        rect.h.max(2.0 * style.padding.y + 1.0),
    );
    let mut value = value.min(max);

    if let Some(input) = input {
        if modifiable && input.mouse_down && input.mouse_in(bar) {
            let ratio = ((input.mouse_pos.x - bar.x) / bar.w).clamp(0.0, 1.0);
            value = (max as f32 * ratio) as usize;
        }
    }
    if max == 0 {
        canvas.draw_rect(bar, style.background);
        return value;
    }

    value = value.min(max);
    let scale = value as f32 / max as f32;
    let cursor = Rect::new(
        bar.x + style.padding.x,
        bar.y + style.padding.y,
        (bar.w - 2.0 * style.padding.x) * scale,
        bar.h - 2.0 * style.padding.y,
    );
    canvas.draw_rect(bar, style.background);
    canvas.draw_rect(cursor, style.foreground);
    value
}
