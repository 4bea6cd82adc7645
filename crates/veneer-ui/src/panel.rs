//! Movable, scalable panel with a title bar and a scrolled content area.
//!
//! [`Panel`] is the only persistent record: position, size, scroll offset,
//! minimized state, and flags. Everything else lives for one frame inside a
//! [`PanelFrame`], handed out by [`Panel::begin`] and consumed by
//! [`PanelFrame::end`]. Dropping a frame without ending it restores the
//! full-canvas scissor so an abandoned frame cannot leak a stale clip.

use bitflags::bitflags;
use veneer_core::{Canvas, Color, ColorRole, Config, Font, Input, Rect, Vec2};

use crate::button::{button, button_text, button_triangle};
use crate::chart::{histogram, plot};
use crate::field::edit;
use crate::layout::Layout;
use crate::scrollbar::scroll;
use crate::slider::{progress, slider};
use crate::style::{
    Align, ButtonBehavior, ButtonStyle, FieldStyle, Filter, Heading, HistoStyle, PlotStyle,
    ScrollStyle, SliderStyle, TextStyle, ToggleKind, ToggleStyle,
};
use crate::text::text;
use crate::toggle::toggle;

/// Longest serialized `i32` plus slack for mid-edit garbage.
const NUMBER_BUFFER: usize = 16;

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct PanelFlags: u32 {
        const BORDER = 1 << 0;
        const MOVEABLE = 1 << 1;
        const SCALEABLE = 1 << 2;
        const CLOSEABLE = 1 << 3;
        const MINIMIZABLE = 1 << 4;
        const SCROLLBAR = 1 << 5;
        const HIDDEN = 1 << 6;
        /// Embedded panel: no scrollbar forced, no own scissor at `end`.
        const TAB = 1 << 7;
    }
}

/// Persistent panel record, owned by the caller and passed back every frame.
/// Losing it resets the panel to its defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Panel {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Vertical scroll offset in pixels.
    pub offset: f32,
    pub minimized: bool,
    pub flags: PanelFlags,
}

impl Panel {
    pub fn new(x: f32, y: f32, w: f32, h: f32, flags: PanelFlags) -> Self {
        Panel {
            x,
            y,
            w,
            h,
            offset: 0.0,
            minimized: false,
            flags,
        }
    }

    pub fn hidden(&self) -> bool {
        self.flags.contains(PanelFlags::HIDDEN)
    }

    /// Open the panel for one frame. Returns `None` while the panel is
    /// hidden; calling every frame is how a hidden panel revives once the
    /// caller clears the flag.
    ///
    /// Handles move/scale dragging against the previous frame's pointer
    /// position, draws the title bar with its close/minimize buttons, and
    /// clips the canvas to the content area.
    pub fn begin<'a>(
        &'a mut self,
        title: Option<&str>,
        config: &'a Config,
        canvas: &'a mut dyn Canvas,
        font: &'a dyn Font,
        input: Option<&'a Input>,
    ) -> Option<PanelFrame<'a>> {
        if self.hidden() {
            return None;
        }
        let mut flags = self.flags;
        if !flags.contains(PanelFlags::TAB) {
            flags |= PanelFlags::SCROLLBAR;
        }

        let header_height =
            font.height() + 3.0 * config.item_padding.y + config.panel_padding.y;

        if flags.contains(PanelFlags::MOVEABLE)
            && let Some(input) = input
        {
            let header = Rect::new(self.x, self.y, self.w, header_height);
            if input.mouse_down && input.prev_in(header) {
                self.x = (self.x + input.mouse_delta.x)
                    .min(canvas.width() - self.w)
                    .max(0.0);
                self.y = (self.y + input.mouse_delta.y)
                    .min(canvas.height() - self.h)
                    .max(0.0);
            }
        }

        if flags.contains(PanelFlags::SCALEABLE)
            && let Some(input) = input
        {
            let scaler = scaler_rect(self.x, self.y, self.h, config);
            if input.mouse_down && input.prev_in(scaler) {
                self.x = (self.x + input.mouse_delta.x)
                    .min(canvas.width() - self.w)
                    .max(0.0);
                self.w = (self.w - input.mouse_delta.x)
                    .min(canvas.width() - self.x)
                    .max(config.panel_min_size.x);
                self.h = (self.h + input.mouse_delta.y)
                    .min(canvas.height() - self.y)
                    .max(config.panel_min_size.y);
            }
        }

        canvas.draw_rect(
            Rect::new(self.x, self.y, self.w, header_height),
            config.color(ColorRole::Titlebar),
        );

        let clip_h = if flags.contains(PanelFlags::SCROLLBAR) {
            self.h - header_height - (config.panel_padding.y + config.item_padding.y)
        } else {
            Rect::UNBOUNDED.h
        };
        let clip = Rect::new(self.x, self.y + header_height - 1.0, self.w, clip_h);

        let mut header_x = self.x + config.panel_padding.x;
        let mut header_w = self.w - 2.0 * config.panel_padding.x;

        if flags.contains(PanelFlags::CLOSEABLE) {
            let glyph: &[u8] = b"x";
            let close = Rect::new(
                header_x,
                self.y + config.panel_padding.y,
                font.width(glyph) + 2.0 * config.item_padding.x,
                font.height() + 2.0 * config.item_padding.y,
            );
            canvas.draw_text(
                close,
                glyph,
                font,
                config.color(ColorRole::Panel),
                config.color(ColorRole::Text),
            );
            header_w -= close.w;
            header_x += close.h - config.item_padding.x;
            if let Some(input) = input
                && input.mouse_in(close)
                && input.clicked_in(close)
                && !input.mouse_down
                && input.mouse_clicked > 0
            {
                self.flags |= PanelFlags::HIDDEN;
                flags |= PanelFlags::HIDDEN;
            }
        }

        if flags.contains(PanelFlags::MINIMIZABLE) {
            let glyph: &[u8] = if self.minimized { b"+" } else { b"-" };
            let toggle = Rect::new(
                header_x,
                self.y + config.panel_padding.y,
                font.width(glyph) + 3.0 * config.item_padding.x,
                font.height() + 2.0 * config.item_padding.y,
            );
            canvas.draw_text(
                toggle,
                glyph,
                font,
                config.color(ColorRole::Panel),
                config.color(ColorRole::Text),
            );
            header_w -= toggle.w;
            header_x += toggle.w - config.item_padding.x;
            if let Some(input) = input
                && input.mouse_in(toggle)
                && input.clicked_in(toggle)
                && !input.mouse_down
                && input.mouse_clicked > 0
            {
                self.minimized = !self.minimized;
            }
        }

        if let Some(title) = title {
            let label = Rect::new(
                header_x + config.item_padding.x,
                self.y + config.panel_padding.y,
                header_w - 3.0 * config.item_padding.x,
                font.height() + 2.0 * config.item_padding.y,
            );
            canvas.draw_text(
                label,
                title.as_bytes(),
                font,
                config.color(ColorRole::Panel),
                config.color(ColorRole::Text),
            );
        }

        let mut width = self.w;
        let mut height = 0.0;
        if flags.contains(PanelFlags::SCROLLBAR) {
            width = self.w - config.scrollbar_width;
            height = self.h - header_height;
            if !self.minimized {
                canvas.draw_rect(
                    Rect::new(self.x, self.y + header_height, self.w, self.h - header_height),
                    config.color(ColorRole::Panel),
                );
            }
        }

        if flags.contains(PanelFlags::BORDER) {
            let border = config.color(ColorRole::Border);
            let edge = if flags.contains(PanelFlags::SCROLLBAR) {
                width + config.scrollbar_width
            } else {
                width
            };
            canvas.draw_line(
                Vec2::new(self.x, self.y),
                Vec2::new(self.x + self.w, self.y),
                border,
            );
            canvas.draw_line(
                Vec2::new(self.x, self.y),
                Vec2::new(self.x, self.y + header_height),
                border,
            );
            canvas.draw_line(
                Vec2::new(self.x + edge, self.y),
                Vec2::new(self.x + edge, self.y + header_height),
                border,
            );
        }
        canvas.scissor(clip);

        let layout = Layout::new(self.x, width, self.y, header_height);
        Some(PanelFrame {
            panel: self,
            config,
            canvas,
            font,
            input,
            flags,
            header_height,
            width,
            height,
            clip,
            layout,
            finished: false,
        })
    }
}

fn scaler_rect(x: f32, y: f32, h: f32, config: &Config) -> Rect {
    Rect::new(
        x + config.item_padding.x,
        y + h - config.scaler_size.y,
        (config.scaler_size.x - config.item_padding.x).max(0.0),
        (config.scaler_size.y - config.item_padding.y).max(0.0),
    )
}

/// One frame of panel content. Widget methods allocate through the
/// row/column cursor and no-op while the panel is minimized.
pub struct PanelFrame<'a> {
    pub(crate) panel: &'a mut Panel,
    pub(crate) config: &'a Config,
    pub(crate) canvas: &'a mut dyn Canvas,
    pub(crate) font: &'a dyn Font,
    pub(crate) input: Option<&'a Input>,
    /// Effective flags; SCROLLBAR is forced onto non-TAB panels.
    pub(crate) flags: PanelFlags,
    pub(crate) header_height: f32,
    /// Content width (panel width minus scrollbar column).
    pub(crate) width: f32,
    /// Content height below the header, scrollbar panels only.
    pub(crate) height: f32,
    pub(crate) clip: Rect,
    pub(crate) layout: Layout,
    pub(crate) finished: bool,
}

impl PanelFrame<'_> {
    pub(crate) fn skip(&self) -> bool {
        self.panel.minimized || self.flags.contains(PanelFlags::HIDDEN)
    }

    /// Start a new row of `columns` equal-width slots, `height` pixels tall.
    pub fn row(&mut self, height: f32, columns: usize) {
        if self.skip() {
            return;
        }
        self.layout.row(height, columns, self.config.item_spacing.y);
        self.canvas.draw_rect(
            Rect::new(
                self.layout.x,
                self.layout.at_y,
                self.layout.width,
                height + self.config.panel_padding.y,
            ),
            self.config.color(ColorRole::Panel),
        );
    }

    /// Skip up to `columns` slots; exhausting the row starts an identical one.
    pub fn separator(&mut self, columns: usize) {
        if self.skip() {
            return;
        }
        if self.layout.separator(columns) {
            self.repeat_row();
        }
    }

    fn repeat_row(&mut self) {
        let height = self.layout.row_height - self.config.item_spacing.y;
        let columns = self.layout.row_columns;
        self.row(height, columns);
    }

    pub(crate) fn alloc(&mut self) -> Rect {
        if self.layout.row_full() {
            self.repeat_row();
        }
        self.layout.alloc(self.config, self.panel.offset)
    }

    pub fn text(&mut self, string: &str, align: Align) {
        if self.skip() {
            return;
        }
        let bounds = self.alloc();
        let style = TextStyle {
            padding: self.config.item_padding,
            align,
            background: self.config.color(ColorRole::Panel),
            foreground: self.config.color(ColorRole::Text),
        };
        text(self.canvas, self.font, bounds, &style, string.as_bytes());
    }

    pub fn button_text(&mut self, string: &str, behavior: ButtonBehavior) -> bool {
        if self.skip() {
            return false;
        }
        let bounds = self.alloc();
        let style = self.button_style();
        button_text(
            self.canvas,
            self.font,
            bounds,
            &style,
            string.as_bytes(),
            behavior,
            self.input,
        )
    }

    /// Flat button drawn entirely in `color`.
    pub fn button_color(&mut self, color: Color, behavior: ButtonBehavior) -> bool {
        if self.skip() {
            return false;
        }
        let bounds = self.alloc();
        let style = ButtonStyle {
            border: 1.0,
            padding: self.config.item_padding,
            background: color,
            foreground: color,
            content: color,
            highlight: color,
            highlight_content: self.config.color(ColorRole::ButtonHoverFont),
        };
        button(self.canvas, bounds, &style, self.input, behavior)
    }

    pub fn button_triangle(&mut self, heading: Heading, behavior: ButtonBehavior) -> bool {
        if self.skip() {
            return false;
        }
        let bounds = self.alloc();
        let style = self.button_style();
        button_triangle(self.canvas, bounds, &style, heading, behavior, self.input)
    }

    /// Latching button: drawn pressed while `value` is set, flips on click.
    pub fn button_toggle(&mut self, string: &str, value: bool) -> bool {
        if self.skip() {
            return value;
        }
        let bounds = self.alloc();
        let config = self.config;
        let style = if value {
            ButtonStyle {
                border: 1.0,
                padding: config.item_padding,
                background: config.color(ColorRole::ButtonHover),
                foreground: config.color(ColorRole::ButtonBorder),
                content: config.color(ColorRole::Button),
                highlight: config.color(ColorRole::ButtonHover),
                highlight_content: config.color(ColorRole::Button),
            }
        } else {
            ButtonStyle {
                border: 1.0,
                padding: config.item_padding,
                background: config.color(ColorRole::Button),
                foreground: config.color(ColorRole::ButtonBorder),
                content: config.color(ColorRole::Text),
                highlight: config.color(ColorRole::Button),
                highlight_content: config.color(ColorRole::Text),
            }
        };
        let fired = button_text(
            self.canvas,
            self.font,
            bounds,
            &style,
            string.as_bytes(),
            ButtonBehavior::Default,
            self.input,
        );
        if fired { !value } else { value }
    }

    pub fn check(&mut self, label: &str, active: bool) -> bool {
        if self.skip() {
            return active;
        }
        let bounds = self.alloc();
        let style = ToggleStyle {
            padding: self.config.item_padding,
            font: self.config.color(ColorRole::Text),
            background: self.config.color(ColorRole::Check),
            foreground: self.config.color(ColorRole::CheckActive),
        };
        toggle(
            self.canvas,
            self.font,
            bounds,
            active,
            Some(label.as_bytes()),
            &style,
            ToggleKind::Check,
            self.input,
        )
    }

    pub fn radio(&mut self, label: &str, active: bool) -> bool {
        if self.skip() {
            return active;
        }
        let bounds = self.alloc();
        let style = ToggleStyle {
            padding: self.config.item_padding,
            font: self.config.color(ColorRole::Text),
            background: self.config.color(ColorRole::Option),
            foreground: self.config.color(ColorRole::OptionActive),
        };
        toggle(
            self.canvas,
            self.font,
            bounds,
            active,
            Some(label.as_bytes()),
            &style,
            ToggleKind::Radio,
            self.input,
        )
    }

    pub fn slider(&mut self, min: f32, value: f32, max: f32, step: f32) -> f32 {
        if self.skip() {
            return value;
        }
        let bounds = self.alloc();
        let style = SliderStyle {
            padding: self.config.item_padding,
            background: self.config.color(ColorRole::Slider),
            foreground: self.config.color(ColorRole::SliderCursor),
        };
        slider(self.canvas, bounds, min, value, max, step, &style, self.input)
    }

    pub fn progress(&mut self, value: usize, max: usize, modifiable: bool) -> usize {
        if self.skip() {
            return value;
        }
        let bounds = self.alloc();
        let style = SliderStyle {
            padding: self.config.item_padding,
            background: self.config.color(ColorRole::Progress),
            foreground: self.config.color(ColorRole::ProgressCursor),
        };
        progress(self.canvas, bounds, value, max, modifiable, &style, self.input)
    }

    /// Single-line text field over a caller-owned byte buffer. Returns the
    /// new length of the valid prefix.
    pub fn edit(
        &mut self,
        buffer: &mut [u8],
        len: usize,
        active: &mut bool,
        filter: Filter,
    ) -> usize {
        if self.skip() {
            return len;
        }
        let bounds = self.alloc();
        let style = FieldStyle {
            padding: self.config.item_padding,
            show_cursor: true,
            filter,
            font: self.config.color(ColorRole::Text),
            background: self.config.color(ColorRole::Input),
            foreground: self.config.color(ColorRole::InputBorder),
        };
        edit(
            self.canvas,
            self.font,
            bounds,
            buffer,
            len,
            active,
            &style,
            self.input,
        )
    }

    /// Integer field with stepper buttons. The value re-serializes every
    /// frame; a changed field length re-parses it, keeping the old value
    /// when the text does not parse. Returns whether the field stays active.
    pub fn spinner(
        &mut self,
        min: i32,
        value: &mut i32,
        max: i32,
        step: i32,
        active: bool,
    ) -> bool {
        if self.skip() {
            return active;
        }
        let bounds = self.alloc();
        let config = self.config;
        *value = (*value).clamp(min, max);

        let mut buffer = [0u8; NUMBER_BUFFER];
        let serialized = value.to_string();
        let len = serialized.len();
        buffer[..len].copy_from_slice(serialized.as_bytes());

        let stepper_h = bounds.h / 2.0;
        let stepper_w = bounds.h - config.item_padding.x;
        let stepper_x = bounds.x + bounds.w - stepper_w;
        let style = self.stepper_style(stepper_h);
        let up = button_triangle(
            self.canvas,
            Rect::new(stepper_x, bounds.y, stepper_w, stepper_h),
            &style,
            Heading::Up,
            ButtonBehavior::Default,
            self.input,
        );
        let down = button_triangle(
            self.canvas,
            Rect::new(stepper_x, bounds.y + stepper_h, stepper_w, stepper_h),
            &style,
            Heading::Down,
            ButtonBehavior::Default,
            self.input,
        );
        if up || down {
            *value = (*value + if up { step } else { -step }).clamp(min, max);
        }

        let field = Rect::new(bounds.x, bounds.y, bounds.w - stepper_w, bounds.h);
        let field_style = FieldStyle {
            padding: config.item_padding,
            show_cursor: false,
            filter: Filter::Float,
            font: config.color(ColorRole::Text),
            background: config.color(ColorRole::Spinner),
            foreground: config.color(ColorRole::SpinnerBorder),
        };
        let mut is_active = active;
        let new_len = edit(
            self.canvas,
            self.font,
            field,
            &mut buffer,
            len,
            &mut is_active,
            &field_style,
            self.input,
        );
        if new_len != len
            && let Ok(text) = std::str::from_utf8(&buffer[..new_len])
            && let Ok(parsed) = text.parse::<i32>()
        {
            *value = parsed;
        }
        is_active
    }

    /// Step through a fixed item list with up/down buttons. Returns the new
    /// current index; the caller stores it.
    pub fn selector(&mut self, items: &[&str], current: usize) -> usize {
        debug_assert!(!items.is_empty(), "selector needs at least one item");
        if items.is_empty() {
            return current;
        }
        let mut current = current;
        if current >= items.len() {
            log::warn!(
                "selector index {current} past item count {}, clamping",
                items.len()
            );
            current = items.len() - 1;
        }
        if self.skip() {
            return current;
        }
        let bounds = self.alloc();
        let config = self.config;

        self.canvas
            .draw_rect(bounds, config.color(ColorRole::SelectorBorder));
        self.canvas.draw_rect(
            Rect::new(bounds.x + 1.0, bounds.y + 1.0, bounds.w - 2.0, bounds.h - 2.0),
            config.color(ColorRole::Selector),
        );

        let stepper_h = bounds.h / 2.0;
        let stepper_w = bounds.h - config.item_padding.x;
        let stepper_x = bounds.x + bounds.w - stepper_w;
        let style = self.stepper_style(stepper_h);
        let up = button_triangle(
            self.canvas,
            Rect::new(stepper_x, bounds.y, stepper_w, stepper_h),
            &style,
            Heading::Up,
            ButtonBehavior::Default,
            self.input,
        );
        let down = button_triangle(
            self.canvas,
            Rect::new(stepper_x, bounds.y + stepper_h, stepper_w, stepper_h),
            &style,
            Heading::Down,
            ButtonBehavior::Default,
            self.input,
        );
        if down && current < items.len() - 1 {
            current += 1;
        } else if up && current > 0 {
            current -= 1;
        }

        let label = Rect::new(
            bounds.x + config.item_padding.x,
            bounds.y + config.item_padding.y,
            bounds.w - (stepper_w + 2.0 * config.item_padding.x),
            bounds.h - 2.0 * config.item_padding.y,
        );
        self.canvas.draw_text(
            label,
            items[current].as_bytes(),
            self.font,
            config.color(ColorRole::Panel),
            config.color(ColorRole::Text),
        );
        current
    }

    /// Line chart; returns the hovered value index.
    pub fn plot(&mut self, values: &[f32]) -> Option<usize> {
        if self.skip() {
            return None;
        }
        let bounds = self.alloc();
        let style = PlotStyle {
            padding: self.config.item_padding,
            background: self.config.color(ColorRole::Plot),
            foreground: self.config.color(ColorRole::PlotLines),
            highlight: self.config.color(ColorRole::PlotHighlight),
        };
        plot(self.canvas, bounds, values, &style, self.input)
    }

    /// Bar chart; returns the hovered bar index.
    pub fn histogram(&mut self, values: &[f32]) -> Option<usize> {
        if self.skip() {
            return None;
        }
        let bounds = self.alloc();
        let style = HistoStyle {
            padding: self.config.item_padding,
            background: self.config.color(ColorRole::Histo),
            foreground: self.config.color(ColorRole::HistoBars),
            negative: self.config.color(ColorRole::HistoNegative),
            highlight: self.config.color(ColorRole::HistoHighlight),
        };
        histogram(self.canvas, bounds, values, &style, self.input)
    }

    fn button_style(&self) -> ButtonStyle {
        let config = self.config;
        ButtonStyle {
            border: 1.0,
            padding: config.item_padding,
            background: config.color(ColorRole::Button),
            foreground: config.color(ColorRole::ButtonBorder),
            content: config.color(ColorRole::Text),
            highlight: config.color(ColorRole::ButtonHover),
            highlight_content: config.color(ColorRole::ButtonHoverFont),
        }
    }

    /// Spinner/selector arrows: no hover highlight, padding sized so the
    /// triangle fits the half-height button.
    fn stepper_style(&self, stepper_h: f32) -> ButtonStyle {
        let config = self.config;
        let pad = (stepper_h - self.font.height()).max(3.0);
        ButtonStyle {
            border: 1.0,
            padding: Vec2::new(pad, pad),
            background: config.color(ColorRole::Button),
            foreground: config.color(ColorRole::ButtonBorder),
            content: config.color(ColorRole::Text),
            highlight: config.color(ColorRole::Button),
            highlight_content: config.color(ColorRole::Text),
        }
    }

    /// Close the frame: final row advance, scrollbar with offset write-back,
    /// scaler handle, border, then the full-canvas scissor. Returns the
    /// content height accumulated below the header.
    pub fn end(mut self) -> f32 {
        self.finish()
    }

    fn finish(&mut self) -> f32 {
        debug_assert!(!self.finished);
        self.finished = true;

        let full = Rect::new(0.0, 0.0, self.canvas.width(), self.canvas.height());
        if self.flags.contains(PanelFlags::HIDDEN) {
            self.canvas.scissor(full);
            return 0.0;
        }
        self.layout.at_y += self.layout.row_height;

        let config = self.config;
        let panel = &mut *self.panel;
        if !self.flags.contains(PanelFlags::TAB) {
            self.canvas
                .scissor(Rect::new(panel.x, panel.y, panel.w + 1.0, panel.h + 1.0));
        }

        let mut height = self.height;
        if self.flags.contains(PanelFlags::SCROLLBAR) && !panel.minimized {
            let bordered = self.flags.contains(PanelFlags::BORDER);
            let bar = Rect::new(
                panel.x + self.width,
                if bordered { panel.y + 1.0 } else { panel.y } + self.header_height,
                config.scrollbar_width,
                if bordered { self.height - 1.0 } else { self.height },
            );
            let target = (self.layout.at_y - panel.y) - self.header_height;
            let style = ScrollStyle {
                background: config.color(ColorRole::Scrollbar),
                foreground: config.color(ColorRole::ScrollbarCursor),
                border: config.color(ColorRole::ScrollbarBorder),
            };
            panel.offset = scroll(
                self.canvas,
                bar,
                panel.offset,
                target,
                self.height * 0.25,
                &style,
                self.input,
            );
            let footer_y = panel.y + self.height + self.header_height - config.panel_padding.y;
            self.canvas.draw_rect(
                Rect::new(panel.x, footer_y, self.width, config.panel_padding.y),
                config.color(ColorRole::Panel),
            );
        } else {
            height = self.layout.at_y - panel.y;
        }

        if self.flags.contains(PanelFlags::SCALEABLE) && !panel.minimized {
            self.canvas.draw_rect(
                scaler_rect(panel.x, panel.y, panel.h, config),
                config.color(ColorRole::Scaler),
            );
        }

        if self.flags.contains(PanelFlags::BORDER) {
            let border = config.color(ColorRole::Border);
            let edge = if self.flags.contains(PanelFlags::SCROLLBAR) {
                self.width + config.scrollbar_width
            } else {
                self.width
            };
            let bottom = if panel.minimized {
                panel.y + self.header_height
            } else if self.flags.contains(PanelFlags::SCROLLBAR) {
                panel.y + height + self.header_height
            } else {
                panel.y + height + config.item_padding.y
            };
            self.canvas.draw_line(
                Vec2::new(panel.x, bottom),
                Vec2::new(panel.x + edge, bottom),
                border,
            );
            self.canvas.draw_line(
                Vec2::new(panel.x, panel.y),
                Vec2::new(panel.x, bottom),
                border,
            );
            self.canvas.draw_line(
                Vec2::new(panel.x + edge, panel.y),
                Vec2::new(panel.x + edge, bottom),
                border,
            );
        }
        self.canvas.scissor(full);
        height
    }
}

impl Drop for PanelFrame<'_> {
    fn drop(&mut self) {
        if !self.finished {
            let full = Rect::new(0.0, 0.0, self.canvas.width(), self.canvas.height());
            self.canvas.scissor(full);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_core::{DrawCall, Input, MonoFont, Record};

    fn fixture() -> (Config, MonoFont, Record) {
        (
            Config::default(),
            MonoFont::new(8.0, 14.0),
            Record::new(800.0, 600.0),
        )
    }

    // font 14 high, item_padding.y 4, panel_padding.y 10
    const HEADER: f32 = 14.0 + 3.0 * 4.0 + 10.0;

    #[test]
    fn test_hidden_panel_does_not_open() {
        let (config, font, mut canvas) = fixture();
        let mut panel = Panel::new(0.0, 0.0, 200.0, 200.0, PanelFlags::HIDDEN);
        assert!(
            panel
                .begin(Some("x"), &config, &mut canvas, &font, None)
                .is_none()
        );
        assert!(canvas.calls.is_empty());
    }

    #[test]
    fn test_first_widget_lands_below_header() {
        let (config, font, mut canvas) = fixture();
        let mut panel = Panel::new(0.0, 0.0, 200.0, 200.0, PanelFlags::empty());
        let mut ui = panel
            .begin(None, &config, &mut canvas, &font, None)
            .unwrap();
        ui.row(30.0, 1);
        let bounds = ui.alloc();
        assert_eq!(bounds.y, HEADER);
        assert_eq!(bounds.x, config.panel_padding.x);
        // content width loses the scrollbar column and both paddings
        assert_eq!(
            bounds.w,
            200.0 - config.scrollbar_width - 2.0 * config.panel_padding.x
        );
        assert_eq!(bounds.h, 30.0);
        ui.end();
    }

    #[test]
    fn test_move_drag_follows_pointer() {
        let (config, font, mut canvas) = fixture();
        let mut panel = Panel::new(100.0, 100.0, 200.0, 200.0, PanelFlags::MOVEABLE);

        let mut input = Input::default();
        input.begin();
        input.motion(150, 110);
        input.button(150, 110, true);
        input.end();
        // pointer starts inside the header, next frame it drags
        input.begin();
        input.motion(170, 140);
        input.end();

        let ui = panel
            .begin(None, &config, &mut canvas, &font, Some(&input))
            .unwrap();
        ui.end();
        assert_eq!(panel.x, 120.0);
        assert_eq!(panel.y, 130.0);
    }

    #[test]
    fn test_move_clamps_to_canvas() {
        let (config, font, mut canvas) = fixture();
        let mut panel = Panel::new(10.0, 10.0, 200.0, 200.0, PanelFlags::MOVEABLE);

        let mut input = Input::default();
        input.begin();
        input.motion(20, 20);
        input.button(20, 20, true);
        input.end();
        input.begin();
        input.motion(-500, 20);
        input.end();

        let ui = panel
            .begin(None, &config, &mut canvas, &font, Some(&input))
            .unwrap();
        ui.end();
        assert_eq!(panel.x, 0.0);
    }

    #[test]
    fn test_scale_respects_min_size() {
        let (config, font, mut canvas) = fixture();
        let mut panel = Panel::new(100.0, 100.0, 200.0, 200.0, PanelFlags::SCALEABLE);

        // scaler handle sits at the bottom-left corner
        let grab_x = 100 + config.item_padding.x as i32 + 2;
        let grab_y = (100.0 + 200.0 - config.scaler_size.y) as i32 + 2;
        let mut input = Input::default();
        input.begin();
        input.motion(grab_x, grab_y);
        input.button(grab_x, grab_y, true);
        input.end();
        input.begin();
        input.motion(grab_x, grab_y - 400);
        input.end();

        let ui = panel
            .begin(None, &config, &mut canvas, &font, Some(&input))
            .unwrap();
        ui.end();
        assert_eq!(panel.h, config.panel_min_size.y);
    }

    #[test]
    fn test_close_button_hides_panel() {
        let (config, font, mut canvas) = fixture();
        let mut panel = Panel::new(0.0, 0.0, 200.0, 200.0, PanelFlags::CLOSEABLE);

        // close box: x = panel_padding.x, y = panel_padding.y,
        // w = width("x") + 2*item_padding.x, h = font + 2*item_padding.y
        let mut input = Input::default();
        input.begin();
        input.motion(20, 15);
        input.button(20, 15, true);
        input.button(20, 15, false);
        input.end();

        let ui = panel
            .begin(None, &config, &mut canvas, &font, Some(&input))
            .unwrap();
        ui.end();
        assert!(panel.hidden());
        assert!(
            panel
                .begin(None, &config, &mut canvas, &font, Some(&input))
                .is_none()
        );
    }

    #[test]
    fn test_minimize_toggles_and_widgets_skip() {
        let (config, font, mut canvas) = fixture();
        let mut panel = Panel::new(0.0, 0.0, 200.0, 200.0, PanelFlags::MINIMIZABLE);

        let mut input = Input::default();
        input.begin();
        input.motion(20, 15);
        input.button(20, 15, true);
        input.button(20, 15, false);
        input.end();

        let ui = panel
            .begin(Some("mini"), &config, &mut canvas, &font, Some(&input))
            .unwrap();
        ui.end();
        assert!(panel.minimized);

        // a minimized frame with widgets draws exactly what an empty one does
        let mut empty = Record::new(800.0, 600.0);
        let mut with_widgets = Record::new(800.0, 600.0);
        {
            let ui = panel
                .begin(Some("mini"), &config, &mut empty, &font, None)
                .unwrap();
            ui.end();
        }
        {
            let mut ui = panel
                .begin(Some("mini"), &config, &mut with_widgets, &font, None)
                .unwrap();
            ui.row(30.0, 1);
            assert!(!ui.button_text("hidden", ButtonBehavior::Default));
            ui.end();
        }
        assert_eq!(empty.calls, with_widgets.calls);
    }

    #[test]
    fn test_end_restores_full_canvas_scissor() {
        let (config, font, mut canvas) = fixture();
        let mut panel = Panel::new(0.0, 0.0, 200.0, 200.0, PanelFlags::empty());
        let ui = panel
            .begin(None, &config, &mut canvas, &font, None)
            .unwrap();
        ui.end();
        assert_eq!(
            canvas.current_scissor(),
            Some(Rect::new(0.0, 0.0, 800.0, 600.0))
        );
    }

    #[test]
    fn test_dropped_frame_restores_scissor() {
        let (config, font, mut canvas) = fixture();
        let mut panel = Panel::new(0.0, 0.0, 200.0, 200.0, PanelFlags::empty());
        {
            let mut ui = panel
                .begin(None, &config, &mut canvas, &font, None)
                .unwrap();
            ui.row(30.0, 1);
            // abandoned without end()
        }
        assert_eq!(
            canvas.current_scissor(),
            Some(Rect::new(0.0, 0.0, 800.0, 600.0))
        );
    }

    #[test]
    fn test_tab_panel_end_returns_content_height() {
        let (config, font, mut canvas) = fixture();
        let mut panel = Panel::new(0.0, 0.0, 200.0, 400.0, PanelFlags::TAB);
        let mut ui = panel
            .begin(Some("t"), &config, &mut canvas, &font, None)
            .unwrap();
        ui.row(30.0, 1);
        ui.text("line", Align::Left);
        let height = ui.end();
        // header + one row (height + spacing)
        assert_eq!(height, HEADER + 30.0 + config.item_spacing.y);
    }

    #[test]
    fn test_scrollbar_offset_written_back() {
        let (config, font, mut canvas) = fixture();
        let mut panel = Panel::new(0.0, 0.0, 200.0, 120.0, PanelFlags::empty());
        panel.offset = 5000.0;
        let ui = panel
            .begin(None, &config, &mut canvas, &font, None)
            .unwrap();
        let content = ui.end();
        // no rows: target is one header-sized row, below the bar height
        assert_eq!(panel.offset, 0.0);
        assert_eq!(content, 120.0 - HEADER);
    }

    #[test]
    fn test_spinner_steps_and_clamps() {
        let (config, font, mut canvas) = fixture();
        let mut panel = Panel::new(0.0, 0.0, 300.0, 200.0, PanelFlags::empty());
        let mut ui = panel
            .begin(None, &config, &mut canvas, &font, None)
            .unwrap();
        ui.row(30.0, 1);
        let mut value = 150;
        // no input: value only clamps
        assert!(!ui.spinner(0, &mut value, 100, 10, false));
        assert_eq!(value, 100);
        ui.end();
    }

    #[test]
    fn test_selector_clamps_out_of_range_index() {
        let (config, font, mut canvas) = fixture();
        let mut panel = Panel::new(0.0, 0.0, 300.0, 200.0, PanelFlags::empty());
        let mut ui = panel
            .begin(None, &config, &mut canvas, &font, None)
            .unwrap();
        ui.row(30.0, 1);
        let picked = ui.selector(&["a", "b", "c"], 9);
        assert_eq!(picked, 2);
        ui.end();
    }

    #[test]
    fn test_row_draws_background_strip() {
        let (config, font, mut canvas) = fixture();
        let mut panel = Panel::new(0.0, 0.0, 200.0, 200.0, PanelFlags::empty());
        {
            let mut ui = panel
                .begin(None, &config, &mut canvas, &font, None)
                .unwrap();
            ui.row(30.0, 2);
            ui.end();
        }
        // begin emits titlebar, content background, scissor; the row strip
        // is the next call
        match canvas.calls[3] {
            DrawCall::Rect { rect, .. } => {
                assert_eq!(rect.y, HEADER);
                assert_eq!(rect.w, 200.0 - config.scrollbar_width);
            }
            ref other => panic!("expected rect, got {other:?}"),
        }
    }
}
