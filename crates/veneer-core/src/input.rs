//! Per-frame input snapshot.
//!
//! The host consolidates its event stream into one [`Input`] per frame via a
//! fixed begin/feed/end protocol:
//!
//! 1. [`Input::begin`] once,
//! 2. any number of [`Input::motion`], [`Input::button`], [`Input::key`],
//!    [`Input::character`] feeds in event order,
//! 3. [`Input::end`] once.
//!
//! Widgets treat the snapshot as read-only. Only the latched click position
//! and the current down flag are used for hit-testing; the edge counters
//! gate "first activation this frame" semantics.

use crate::geometry::{Rect, Vec2};
use crate::utf8;
use smallvec::SmallVec;

/// Capacity of the typed-text buffer in bytes. Characters that do not fit
/// are dropped for the frame.
pub const TEXT_MAX: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Shift,
    Ctrl,
    Del,
    Enter,
    Tab,
    Backspace,
    Escape,
    Space,
}

impl Key {
    pub const COUNT: usize = 8;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct KeyState {
    pub down: bool,
    /// Edge transitions this frame; reset by [`Input::begin`].
    pub clicked: u32,
}

#[derive(Clone, Debug, Default)]
pub struct Input {
    pub mouse_pos: Vec2,
    pub mouse_prev: Vec2,
    /// `mouse_pos - mouse_prev`; valid only after [`Input::end`].
    pub mouse_delta: Vec2,
    pub mouse_down: bool,
    /// Button edge transitions this frame.
    pub mouse_clicked: u32,
    /// Position latched at the most recent button edge.
    pub mouse_clicked_pos: Vec2,
    pub keys: [KeyState; Key::COUNT],
    /// UTF-8 bytes typed this frame, bounded by [`TEXT_MAX`].
    pub text: SmallVec<[u8; TEXT_MAX]>,
}

impl Input {
    /// Open the frame: clear edge counters and the text buffer, remember the
    /// previous pointer position.
    pub fn begin(&mut self) {
        self.mouse_clicked = 0;
        self.text.clear();
        self.mouse_prev = self.mouse_pos;
        for key in &mut self.keys {
            key.clicked = 0;
        }
    }

    pub fn motion(&mut self, x: i32, y: i32) {
        self.mouse_pos = Vec2::new(x as f32, y as f32);
    }

    pub fn key(&mut self, key: Key, down: bool) {
        let state = &mut self.keys[key as usize];
        if state.down == down {
            return;
        }
        state.down = down;
        state.clicked += 1;
    }

    pub fn button(&mut self, x: i32, y: i32, down: bool) {
        if self.mouse_down == down {
            return;
        }
        self.mouse_clicked_pos = Vec2::new(x as f32, y as f32);
        self.mouse_down = down;
        self.mouse_clicked += 1;
    }

    /// Feed one typed character as UTF-8 bytes. The glyph is decoded,
    /// validated, and re-encoded into the text buffer; overflow drops it.
    pub fn character(&mut self, glyph: &[u8]) {
        let (unicode, consumed) = utf8::decode(glyph);
        if consumed == 0 {
            // Empty or truncated glyph: nothing to substitute for.
            return;
        }
        let len = utf8::len_for(unicode);
        if len == 0 || self.text.len() + len > TEXT_MAX {
            log::debug!("typed character dropped, text buffer full");
            return;
        }
        let mut encoded = [0u8; utf8::MAX_BYTES];
        let written = utf8::encode(unicode, &mut encoded);
        self.text.extend_from_slice(&encoded[..written]);
    }

    /// Close the frame and derive the pointer delta.
    pub fn end(&mut self) {
        self.mouse_delta = self.mouse_pos - self.mouse_prev;
    }

    pub fn mouse_in(&self, rect: Rect) -> bool {
        rect.contains(self.mouse_pos)
    }

    pub fn prev_in(&self, rect: Rect) -> bool {
        rect.contains(self.mouse_prev)
    }

    pub fn clicked_in(&self, rect: Rect) -> bool {
        rect.contains(self.mouse_clicked_pos)
    }

    pub fn key_pressed(&self, key: Key) -> bool {
        let state = &self.keys[key as usize];
        state.down && state.clicked > 0
    }
}
