//! Nested containers: collapsible tabs, scrollable groups, and shelves.
//!
//! Each container runs a full child panel cycle inside the parent frame.
//! Only one small state record persists per container (`minimized` for a
//! tab, the scroll offset for a group or shelf); the child panel itself is
//! rebuilt from the parent's allocator every frame. The child clip is welded
//! to the parent's with a one-pixel overlap so shared borders survive
//! rasterization, and the parent clip is restored when the scope ends.

use veneer_core::{ColorRole, Rect};

use crate::button::button_text;
use crate::panel::{Panel, PanelFlags, PanelFrame};
use crate::style::{ButtonBehavior, ButtonStyle};

/// Collapsible inline section.
#[derive(Clone, Copy, Debug, Default)]
pub struct TabState {
    pub minimized: bool,
}

/// Scrollable sub-region filling one allocator cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct GroupState {
    pub offset: f32,
}

/// Tabbed sub-region: a row of selector buttons above a scrollable body.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShelfState {
    pub offset: f32,
}

/// Intersect the parent and child clips, widened by one pixel on each side
/// so the welded border is not clipped away.
fn weld_clip(parent: Rect, child: Rect) -> Rect {
    let x = parent.x.max(child.x) - 1.0;
    let y = parent.y.max(child.y) - 1.0;
    let w = ((parent.x + parent.w).min(child.x + child.w) - x + 2.0).max(0.0);
    let h = ((parent.y + parent.h).min(child.y + child.h) - y + 2.0).max(0.0);
    Rect::new(x, y, w, h)
}

impl PanelFrame<'_> {
    /// Collapsible section spanning the full content width. The body closure
    /// runs inside the child frame; while minimized only the header shows.
    /// Returns the (possibly toggled) minimized state.
    pub fn tab(
        &mut self,
        state: &mut TabState,
        title: &str,
        body: impl FnOnce(&mut PanelFrame),
    ) -> bool {
        if self.skip() {
            return state.minimized;
        }

        // the tab takes a full-width row of its own, sized afterwards from
        // the child's actual height
        let saved_columns = self.layout.row_columns;
        self.layout.row(0.0, 1, 0.0);
        let bounds = self.layout.alloc(self.config, self.panel.offset);

        let mut child = Panel::new(
            bounds.x,
            bounds.y + 1.0,
            bounds.w,
            Rect::UNBOUNDED.h,
            PanelFlags::BORDER | PanelFlags::MINIMIZABLE | PanelFlags::TAB,
        );
        child.minimized = state.minimized;

        let child_height = match child.begin(
            Some(title),
            self.config,
            &mut *self.canvas,
            self.font,
            self.input,
        ) {
            Some(mut frame) => {
                frame.canvas.scissor(weld_clip(self.clip, frame.clip));
                body(&mut frame);
                frame.end()
            }
            None => 0.0,
        };
        state.minimized = child.minimized;

        self.layout.row_height = child_height + self.config.item_spacing.y;
        self.layout.row_columns = saved_columns.max(1);
        self.layout.index = self.layout.row_columns;
        self.canvas.scissor(self.clip);
        state.minimized
    }

    /// Scrollable titled sub-region filling the next allocator cell.
    pub fn group(&mut self, state: &mut GroupState, title: &str, body: impl FnOnce(&mut PanelFrame)) {
        if self.skip() {
            return;
        }
        let bounds = self.alloc();

        let mut child = Panel::new(
            bounds.x,
            bounds.y,
            bounds.w,
            bounds.h,
            PanelFlags::BORDER | PanelFlags::SCROLLBAR | PanelFlags::TAB,
        );
        child.offset = state.offset;

        if let Some(mut frame) = child.begin(
            Some(title),
            self.config,
            &mut *self.canvas,
            self.font,
            self.input,
        ) {
            frame.canvas.scissor(weld_clip(self.clip, frame.clip));
            body(&mut frame);
            // re-weld against the group's outer rect so its bottom border
            // and scrollbar stay visible while the frame closes
            let outer = Rect::new(
                frame.clip.x,
                frame.clip.y,
                bounds.x + bounds.w - frame.clip.x,
                bounds.y + bounds.h - frame.clip.y,
            );
            frame.canvas.scissor(weld_clip(self.clip, outer));
            frame.end();
        }
        state.offset = child.offset;
        self.canvas.scissor(self.clip);
    }

    /// Row of tab-selector buttons above a scrollable body. Clicking a
    /// button switches the selection; the new index is returned to the
    /// caller, not retained.
    pub fn shelf(
        &mut self,
        state: &mut ShelfState,
        titles: &[&str],
        active: usize,
        body: impl FnOnce(&mut PanelFrame),
    ) -> usize {
        if titles.is_empty() {
            return active;
        }
        let mut active = active;
        if active >= titles.len() {
            log::warn!(
                "shelf selection {active} past tab count {}, clamping",
                titles.len()
            );
            active = titles.len() - 1;
        }
        if self.skip() {
            return active;
        }
        let bounds = self.alloc();
        let config = self.config;

        let header_h = config.panel_padding.y + 3.0 * config.item_padding.y + self.font.height();
        let count = titles.len() as f32;
        let item_width = (bounds.w - count) / count;
        let style = ButtonStyle {
            border: 1.0,
            padding: config.item_padding,
            background: config.color(ColorRole::Button),
            foreground: config.color(ColorRole::ButtonBorder),
            content: config.color(ColorRole::Text),
            highlight: config.color(ColorRole::Button),
            highlight_content: config.color(ColorRole::Text),
        };
        for (i, title) in titles.iter().enumerate() {
            let mut button = Rect::new(
                bounds.x + i as f32 * (item_width + 1.0),
                bounds.y,
                item_width,
                header_h,
            );
            if i != active {
                // inactive tabs sit a little lower, detached from the body
                button.y += config.item_padding.y;
                button.h -= config.item_padding.y;
            }
            if button_text(
                self.canvas,
                self.font,
                button,
                &style,
                title.as_bytes(),
                ButtonBehavior::Default,
                self.input,
            ) {
                active = i;
            }
        }

        let mut child = Panel::new(
            bounds.x,
            bounds.y + header_h,
            bounds.w,
            bounds.h - header_h,
            PanelFlags::BORDER | PanelFlags::SCROLLBAR | PanelFlags::TAB,
        );
        child.offset = state.offset;

        if let Some(mut frame) = child.begin(
            None,
            self.config,
            &mut *self.canvas,
            self.font,
            self.input,
        ) {
            frame.canvas.scissor(weld_clip(self.clip, frame.clip));
            body(&mut frame);
            let outer = Rect::new(
                frame.clip.x,
                frame.clip.y,
                bounds.x + bounds.w - frame.clip.x,
                bounds.y + bounds.h - frame.clip.y,
            );
            frame.canvas.scissor(weld_clip(self.clip, outer));
            frame.end();
        }
        state.offset = child.offset;
        self.canvas.scissor(self.clip);
        active
    }
}
