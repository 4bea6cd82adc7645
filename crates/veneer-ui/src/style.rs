//! Per-call widget style records and the closed behavior enums.
//!
//! Styles are immutable per-call configuration; the panel layer builds them
//! from a [`veneer_core::Config`], but hosts driving widgets directly can
//! fill them by hand.

use veneer_core::{Color, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonBehavior {
    /// Fire once, on the frame the click edge lands inside the rect.
    Default,
    /// Fire every frame the pointer is held down inside the rect.
    Repeater,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleKind {
    /// Square check box.
    Check,
    /// Round option button.
    Radio,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heading {
    Up,
    Right,
    Down,
    Left,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Centered,
    Right,
}

/// Character filter for [`crate::field::edit`]. Rejection is per decoded
/// character, never per byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Filter {
    Default,
    Float,
    Decimal,
    Hex,
    Octal,
    Binary,
}

#[derive(Clone, Copy, Debug)]
pub struct TextStyle {
    pub padding: Vec2,
    pub align: Align,
    pub background: Color,
    pub foreground: Color,
}

#[derive(Clone, Copy, Debug)]
pub struct ButtonStyle {
    pub border: f32,
    pub padding: Vec2,
    pub background: Color,
    /// Border/frame color.
    pub foreground: Color,
    pub content: Color,
    pub highlight: Color,
    pub highlight_content: Color,
}

#[derive(Clone, Copy, Debug)]
pub struct ToggleStyle {
    pub padding: Vec2,
    pub font: Color,
    pub background: Color,
    pub foreground: Color,
}

/// Shared by the slider and the progress bar.
#[derive(Clone, Copy, Debug)]
pub struct SliderStyle {
    pub padding: Vec2,
    pub background: Color,
    pub foreground: Color,
}

#[derive(Clone, Copy, Debug)]
pub struct FieldStyle {
    pub padding: Vec2,
    pub show_cursor: bool,
    pub filter: Filter,
    pub font: Color,
    pub background: Color,
    /// Inner fill color.
    pub foreground: Color,
}

#[derive(Clone, Copy, Debug)]
pub struct PlotStyle {
    pub padding: Vec2,
    pub background: Color,
    pub foreground: Color,
    pub highlight: Color,
}

#[derive(Clone, Copy, Debug)]
pub struct HistoStyle {
    pub padding: Vec2,
    pub background: Color,
    pub foreground: Color,
    pub negative: Color,
    pub highlight: Color,
}

#[derive(Clone, Copy, Debug)]
pub struct ScrollStyle {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
}
