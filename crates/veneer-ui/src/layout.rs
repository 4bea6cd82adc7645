//! Row/column layout allocator.
//!
//! A panel's content is placed into rows of N equal-width columns. The
//! cursor is strictly append-only within a frame: each row advances `at_y`
//! monotonically and there is no backward placement.

use veneer_core::{Config, Rect};

#[derive(Clone, Copy, Debug)]
pub struct Layout {
    /// Panel left edge.
    pub x: f32,
    /// Content width (panel width minus the scrollbar column, if any).
    pub width: f32,
    /// Top of the current row in content space (before scroll offset).
    pub at_y: f32,
    /// Current row height including the vertical item spacing.
    pub row_height: f32,
    pub row_columns: usize,
    pub index: usize,
}

impl Layout {
    pub fn new(x: f32, width: f32, at_y: f32, first_row_height: f32) -> Self {
        Layout {
            x,
            width,
            at_y,
            row_height: first_row_height,
            row_columns: 0,
            index: 0,
        }
    }

    /// Start a new row of `columns` equal slots, `height` pixels tall.
    pub fn row(&mut self, height: f32, columns: usize, spacing_y: f32) {
        self.index = 0;
        self.at_y += self.row_height;
        self.row_columns = columns;
        self.row_height = height + spacing_y;
    }

    /// All column slots of the current row are taken.
    pub fn row_full(&self) -> bool {
        self.index >= self.row_columns
    }

    /// Consume up to `columns` slots without placing anything. Returns true
    /// when the row was exhausted (the caller advances to a fresh row).
    pub fn separator(&mut self, columns: usize) -> bool {
        let columns = columns.min(self.row_columns.saturating_sub(self.index));
        self.index += columns;
        self.row_full()
    }

    /// Hand out the next column's rectangle. `offset` is the panel's scroll
    /// offset; the caller must have opened a row with free slots.
    pub fn alloc(&mut self, config: &Config, offset: f32) -> Rect {
        debug_assert!(!self.row_full(), "alloc on a full row");
        let columns = self.row_columns.max(1) as f32;
        let padding = 2.0 * config.panel_padding.x;
        let spacing = (columns - 1.0) * config.item_spacing.x;
        let item_width = (self.width - padding - spacing) / columns;

        let rect = Rect::new(
            self.x + config.panel_padding.x
                + self.index as f32 * (item_width + config.item_spacing.x),
            self.at_y - offset,
            item_width,
            self.row_height - config.item_spacing.y,
        );
        self.index += 1;
        rect
    }
}
