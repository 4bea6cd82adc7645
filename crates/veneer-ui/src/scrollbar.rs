//! Vertical scrollbar: stepper buttons plus a ratio-sized drag cursor.

use crate::button::button_triangle;
use crate::style::{ButtonBehavior, ButtonStyle, Heading, ScrollStyle};
use veneer_core::{Canvas, Input, Rect, Vec2};

/// Returns the new scroll offset, clamped to `[0, target - track height]`.
///
/// `target` is the total content height. When everything fits
/// (`target <= bar height`), the offset is 0 and no interaction happens.
/// Dragging the cursor requires the previous frame's pointer to have been
/// inside the cursor — the one-frame lag keeps the cursor from jumping to a
/// press that lands on it mid-motion.
pub fn scroll(
    canvas: &mut dyn Canvas,
    rect: Rect,
    offset: f32,
    target: f32,
    step: f32,
    style: &ScrollStyle,
    input: Option<&Input>,
) -> f32 {
    let bar_w = rect.w.max(0.0);
    let bar_h = rect.h.max(2.0 * bar_w);
    canvas.draw_rect(Rect::new(rect.x, rect.y, bar_w, bar_h), style.background);
    if target <= bar_h {
        return 0.0;
    }

    let stepper = ButtonStyle {
        border: 1.0,
        padding: Vec2::new(bar_w / 4.0, bar_w / 4.0),
        background: style.background,
        foreground: style.foreground,
        content: style.foreground,
        highlight: style.background,
        highlight_content: style.foreground,
    };
    let up_pressed = button_triangle(
        canvas,
        Rect::new(rect.x, rect.y, bar_w, bar_w),
        &stepper,
        Heading::Up,
        ButtonBehavior::Default,
        input,
    );
    let down_pressed = button_triangle(
        canvas,
        Rect::new(rect.x, rect.y + bar_h - bar_w, bar_w, bar_w),
        &stepper,
        Heading::Down,
        ButtonBehavior::Default,
        input,
    );

    // Track between the two steppers.
    let track = Rect::new(rect.x, rect.y + bar_w, bar_w, bar_h - 2.0 * bar_w);
    let step = step.min(track.h);
    let max_offset = target - track.h;
    let mut offset = offset.clamp(0.0, max_offset);

    let cursor_h = (track.h / target) * track.h;
    let mut cursor_y = track.y + (offset / target) * track.h;

    if let Some(input) = input {
        let cursor = Rect::new(track.x, cursor_y, bar_w, cursor_h);
        let in_track = input.mouse_in(track);
        let in_cursor = input.prev_in(cursor);
        if input.mouse_down && in_track && in_cursor {
            let pixels = input.mouse_delta.y;
            offset = (offset + (pixels / track.h) * target).clamp(0.0, max_offset);
            cursor_y += pixels;
        } else if up_pressed || down_pressed {
            offset = if down_pressed {
                (offset + step).min(max_offset)
            } else {
                (offset - step).max(0.0)
            };
            cursor_y = track.y + (offset / target) * track.h;
        }
    }
    canvas.draw_rect(Rect::new(track.x, cursor_y, bar_w, cursor_h), style.foreground);
    offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_core::{Color, Record};

    fn style() -> ScrollStyle {
        ScrollStyle {
            background: Color::rgb(41, 41, 41),
            foreground: Color::rgb(70, 70, 70),
            border: Color::rgb(45, 45, 45),
        }
    }

    #[test]
    fn test_small_target_returns_zero() {
        let mut canvas = Record::new(400.0, 300.0);
        let rect = Rect::new(200.0, 0.0, 16.0, 132.0);
        let offset = scroll(&mut canvas, rect, 50.0, 100.0, 25.0, &style(), None);
        assert_eq!(offset, 0.0);
        // Only the background was drawn: no steppers, no cursor.
        assert_eq!(canvas.calls.len(), 1);
    }

    #[test]
    fn test_offset_clamped_to_content() {
        let mut canvas = Record::new(400.0, 300.0);
        let rect = Rect::new(200.0, 0.0, 16.0, 132.0);
        // Track is 132 - 32 = 100; max offset = 400 - 100 = 300.
        let offset = scroll(&mut canvas, rect, 1000.0, 400.0, 25.0, &style(), None);
        assert_eq!(offset, 300.0);
    }

    #[test]
    fn test_negative_offset_normalized_to_zero() {
        let mut canvas = Record::new(400.0, 300.0);
        let rect = Rect::new(200.0, 0.0, 16.0, 132.0);
        let offset = scroll(&mut canvas, rect, -50.0, 400.0, 25.0, &style(), None);
        assert_eq!(offset, 0.0);
    }

    #[test]
    fn test_stepper_click_moves_by_step() {
        let mut canvas = Record::new(400.0, 300.0);
        let rect = Rect::new(200.0, 0.0, 16.0, 132.0);
        // Click the down stepper (bottom 16px square).
        let mut input = veneer_core::Input::default();
        input.begin();
        input.motion(208, 124);
        input.button(208, 124, true);
        input.end();
        let offset = scroll(&mut canvas, rect, 0.0, 400.0, 25.0, &style(), Some(&input));
        assert_eq!(offset, 25.0);

        // Up from 10 clamps at 0.
        let mut canvas = Record::new(400.0, 300.0);
        let mut input = veneer_core::Input::default();
        input.begin();
        input.motion(208, 8);
        input.button(208, 8, true);
        input.end();
        let offset = scroll(&mut canvas, rect, 10.0, 400.0, 25.0, &style(), Some(&input));
        assert_eq!(offset, 0.0);
    }

    #[test]
    fn test_drag_requires_previous_frame_in_cursor() {
        let rect = Rect::new(200.0, 0.0, 16.0, 132.0);
        // Cursor at offset 0: y in [16, 16 + 25) (track 100, target 400).
        // Frame 1: press inside the cursor. Frame 2: drag down 40px.
        let mut input = veneer_core::Input::default();
        input.begin();
        input.motion(208, 20);
        input.button(208, 20, true);
        input.end();

        input.begin();
        input.motion(208, 60);
        input.end();

        let mut canvas = Record::new(400.0, 300.0);
        let offset = scroll(&mut canvas, rect, 0.0, 400.0, 25.0, &style(), Some(&input));
        // 40px over a 100px track of 400px content = 160.
        assert_eq!(offset, 160.0);

        // Same motion, but the press (and previous position) was outside
        // the cursor: no drag.
        let mut input = veneer_core::Input::default();
        input.begin();
        input.motion(208, 90);
        input.button(208, 90, true);
        input.end();
        input.begin();
        input.motion(208, 60);
        input.end();
        let mut canvas = Record::new(400.0, 300.0);
        let offset = scroll(&mut canvas, rect, 0.0, 400.0, 25.0, &style(), Some(&input));
        assert_eq!(offset, 0.0);
    }
}
