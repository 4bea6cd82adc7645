//! Push buttons: plain frame, centered label, and directional triangle.

use crate::style::{Align, ButtonBehavior, ButtonStyle, Heading, TextStyle};
use crate::text;
use veneer_core::{Canvas, Font, Input, Rect, Vec2};

/// Corner points of a triangle inset into `rect` by the given padding and
/// pointing toward `heading`.
pub fn triangle_points(rect: Rect, pad: Vec2, heading: Heading) -> [Vec2; 3] {
    let w = rect.w.max(4.0 * pad.x) - 2.0 * pad.x;
    let h = rect.h.max(4.0 * pad.y) - 2.0 * pad.y;
    let x = rect.x + pad.x;
    let y = rect.y + pad.y;
    let w_half = w / 2.0;
    let h_half = h / 2.0;
    match heading {
        Heading::Up => [
            Vec2::new(x + w_half, y),
            Vec2::new(x, y + h),
            Vec2::new(x + w, y + h),
        ],
        Heading::Right => [
            Vec2::new(x, y),
            Vec2::new(x, y + h),
            Vec2::new(x + w, y + h_half),
        ],
        Heading::Down => [
            Vec2::new(x, y),
            Vec2::new(x + w_half, y + h),
            Vec2::new(x + w, y),
        ],
        Heading::Left => [
            Vec2::new(x, y + h_half),
            Vec2::new(x + w, y + h),
            Vec2::new(x + w, y),
        ],
    }
}

/// Frame-and-fill base button. Hover recoloring is independent of firing:
/// `Default` fires only on the frame a click edge lands inside the rect
/// while the pointer is down; `Repeater` fires every frame the pointer is
/// held inside with the latched click inside.
pub fn button(
    canvas: &mut dyn Canvas,
    rect: Rect,
    style: &ButtonStyle,
    input: Option<&Input>,
    behavior: ButtonBehavior,
) -> bool {
    let mut fired = false;
    let mut background = style.background;
    if let Some(input) = input {
        if input.mouse_in(rect) {
            background = style.highlight;
            if input.clicked_in(rect) {
                fired = match behavior {
                    ButtonBehavior::Default => input.mouse_down && input.mouse_clicked > 0,
                    ButtonBehavior::Repeater => input.mouse_down,
                };
            }
        }
    }

    canvas.draw_rect(rect, style.foreground);
    canvas.draw_rect(
        Rect::new(
            rect.x + style.border,
            rect.y + style.border,
            rect.w - 2.0 * style.border,
            rect.h - 2.0 * style.border,
        ),
        background,
    );
    fired
}

/// Base button with a centered label, grown to fit the font if needed.
pub fn button_text(
    canvas: &mut dyn Canvas,
    font: &dyn Font,
    rect: Rect,
    style: &ButtonStyle,
    string: &[u8],
    behavior: ButtonBehavior,
    input: Option<&Input>,
) -> bool {
    let mut rect = rect;
    rect.w = rect.w.max(font.height() + 2.0 * style.padding.x);
    rect.h = rect.h.max(font.height() + 2.0 * style.padding.y);

    let hovered = input.is_some_and(|input| input.mouse_in(rect));
    let (background, content) = if hovered {
        (style.highlight, style.highlight_content)
    } else {
        (style.background, style.content)
    };
    let fired = button(canvas, rect, style, input, behavior);

    let inner = Rect::new(
        rect.x + style.border,
        rect.y + style.border,
        rect.w - 2.0 * style.border,
        rect.h - 2.0 * style.border,
    );
    let label = TextStyle {
        padding: style.padding,
        align: Align::Centered,
        background,
        foreground: content,
    };
    text::text(canvas, font, inner, &label, string);
    fired
}

/// Base button with a directional triangle as content.
pub fn button_triangle(
    canvas: &mut dyn Canvas,
    rect: Rect,
    style: &ButtonStyle,
    heading: Heading,
    behavior: ButtonBehavior,
    input: Option<&Input>,
) -> bool {
    let fired = button(canvas, rect, style, input, behavior);
    let points = triangle_points(rect, style.padding, heading);
    let color = if input.is_some_and(|input| input.mouse_in(rect)) {
        style.highlight_content
    } else {
        style.content
    };
    canvas.draw_triangle(points, color);
    fired
}
