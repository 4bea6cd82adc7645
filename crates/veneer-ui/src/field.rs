//! Single-line text field over a caller-owned byte buffer.
//!
//! The caller owns both the bytes and the length; `edit` returns the new
//! length each frame. The buffer's capacity is `buffer.len()` — overflow is
//! silently dropped, never written past.

use crate::style::{FieldStyle, Filter};
use veneer_core::{Canvas, Font, Input, Key, Rect, utf8};

/// Accept or reject one decoded character for a filter. Rejection applies
/// to the whole character, never to partial bytes.
fn filter_char(unicode: u32, len: usize, filter: Filter) -> bool {
    if filter == Filter::Default {
        return true;
    }
    if len > 1 {
        return false;
    }
    let Some(c) = char::from_u32(unicode) else {
        return false;
    };
    match filter {
        Filter::Default => true,
        Filter::Float => c.is_ascii_digit() || c == '.' || c == '-',
        Filter::Decimal => c.is_ascii_digit(),
        Filter::Hex => c.is_ascii_hexdigit(),
        Filter::Octal => ('0'..='7').contains(&c),
        Filter::Binary => c == '0' || c == '1',
    }
}

/// Append the frame's typed text to `buffer[..len]` through `filter`,
/// character by character. Returns the new length.
fn buffer_input(buffer: &mut [u8], mut len: usize, filter: Filter, input: &Input) -> usize {
    let text = &input.text;
    let mut at = 0usize;
    while at < text.len() {
        let (unicode, glyph_len) = utf8::decode(&text[at..]);
        if glyph_len == 0 || at + glyph_len > text.len() {
            break;
        }
        if len + glyph_len <= buffer.len() && filter_char(unicode, glyph_len, filter) {
            buffer[len..len + glyph_len].copy_from_slice(&text[at..at + glyph_len]);
            len += glyph_len;
        }
        at += glyph_len;
    }
    len
}

/// Remove the last decoded character: continuation bytes, then the lead.
fn trim_last_char(buffer: &[u8], len: usize) -> usize {
    let mut len = len;
    while len > 0 && buffer[len - 1] & 0xC0 == 0x80 {
        len -= 1;
    }
    len.saturating_sub(1)
}

/// Immediate-mode text field. Activation follows the pointer (click inside
/// activates, click elsewhere deactivates); while active, backspace/delete
/// remove one character, enter/escape deactivate, and typed text is appended
/// through the style's filter. The display window left-truncates so the
/// caret at the end of the text is always visible.
pub fn edit(
    canvas: &mut dyn Canvas,
    font: &dyn Font,
    rect: Rect,
    buffer: &mut [u8],
    len: usize,
    active: &mut bool,
    style: &FieldStyle,
    input: Option<&Input>,
) -> usize {
    let field = Rect::new(
        rect.x,
        rect.y,
        rect.w.max(2.0 * style.padding.x),
        rect.h.max(font.height()),
    );
    let mut len = len.min(buffer.len());

    canvas.draw_rect(field, style.background);
    canvas.draw_rect(
        Rect::new(field.x + 1.0, field.y, field.w - 1.0, field.h),
        style.foreground,
    );

    if let Some(input) = input {
        if input.mouse_clicked > 0 && input.mouse_down {
            *active = input.mouse_in(field);
        }
        if *active {
            if input.key_pressed(Key::Backspace) || input.key_pressed(Key::Del) {
                len = trim_last_char(buffer, len);
            }
            if input.key_pressed(Key::Enter) || input.key_pressed(Key::Escape) {
                *active = false;
            }
            if input.key_pressed(Key::Space) && len < buffer.len() {
                buffer[len] = b' ';
                len += 1;
            }
            if !input.text.is_empty() && len < buffer.len() {
                len = buffer_input(buffer, len, style.filter, input);
            }
        }
    }

    if len > 0 {
        let label_w = field.w - 2.0 * style.padding.x;
        let cursor_width = font.width(b"X");

        // Drop leading characters until the tail and the caret fit.
        let mut offset = 0usize;
        let mut text_width = font.width(&buffer[..len]);
        while offset < len && text_width + cursor_width > label_w {
            let (_, consumed) = utf8::decode(&buffer[offset..len]);
            offset += consumed.max(1);
            text_width = font.width(&buffer[offset..len]);
        }

        let label = Rect::new(
            field.x + style.padding.x,
            field.y + style.padding.y,
            label_w,
            field.h - 2.0 * style.padding.y,
        );
        canvas.draw_text(label, &buffer[offset..len], font, style.foreground, style.font);
        if *active && style.show_cursor {
            canvas.draw_rect(
                Rect::new(label.x + text_width, label.y, cursor_width, label.h),
                style.background,
            );
        }
    }
    len
}
