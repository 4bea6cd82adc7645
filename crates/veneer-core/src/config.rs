//! Spacing constants and the color palette.
//!
//! There is no process-wide style table: the host builds a [`Config`]
//! (usually [`Config::default`]) and passes a reference into every panel
//! call. Hosts restyle by editing fields or [`Config::set_color`].

use crate::color::Color;
use crate::geometry::Vec2;

/// Every themable surface in the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorRole {
    Text,
    Panel,
    Border,
    Titlebar,
    Button,
    ButtonHover,
    ButtonHoverFont,
    ButtonBorder,
    Check,
    CheckActive,
    Option,
    OptionActive,
    Slider,
    SliderCursor,
    Progress,
    ProgressCursor,
    Input,
    InputBorder,
    Spinner,
    SpinnerBorder,
    Selector,
    SelectorBorder,
    Histo,
    HistoBars,
    HistoNegative,
    HistoHighlight,
    Plot,
    PlotLines,
    PlotHighlight,
    Scrollbar,
    ScrollbarCursor,
    ScrollbarBorder,
    Scaler,
}

impl ColorRole {
    pub const COUNT: usize = 33;
}

#[derive(Clone, Debug)]
pub struct Config {
    pub scrollbar_width: f32,
    pub panel_padding: Vec2,
    pub panel_min_size: Vec2,
    pub item_spacing: Vec2,
    pub item_padding: Vec2,
    pub scaler_size: Vec2,
    colors: [Color; ColorRole::COUNT],
}

impl Config {
    pub fn color(&self, role: ColorRole) -> Color {
        self.colors[role as usize]
    }

    pub fn set_color(&mut self, role: ColorRole, color: Color) {
        self.colors[role as usize] = color;
    }
}

impl Default for Config {
    fn default() -> Self {
        use ColorRole::*;
        let mut colors = [Color::BLACK; ColorRole::COUNT];
        let mut set = |role: ColorRole, c: Color| colors[role as usize] = c;
        set(Text, Color::rgb(100, 100, 100));
        set(Panel, Color::rgb(45, 45, 45));
        set(Border, Color::rgb(100, 100, 100));
        set(Titlebar, Color::rgb(45, 45, 45));
        set(Button, Color::rgb(45, 45, 45));
        set(ButtonHover, Color::rgb(100, 100, 100));
        set(ButtonHoverFont, Color::rgb(45, 45, 45));
        set(ButtonBorder, Color::rgb(100, 100, 100));
        set(Check, Color::rgb(100, 100, 100));
        set(CheckActive, Color::rgb(45, 45, 45));
        set(Option, Color::rgb(100, 100, 100));
        set(OptionActive, Color::rgb(45, 45, 45));
        set(Slider, Color::rgb(100, 100, 100));
        set(SliderCursor, Color::rgb(45, 45, 45));
        set(Progress, Color::rgb(100, 100, 100));
        set(ProgressCursor, Color::rgb(45, 45, 45));
        set(Input, Color::rgb(45, 45, 45));
        set(InputBorder, Color::rgb(100, 100, 100));
        set(Spinner, Color::rgb(45, 45, 45));
        set(SpinnerBorder, Color::rgb(100, 100, 100));
        set(Selector, Color::rgb(45, 45, 45));
        set(SelectorBorder, Color::rgb(100, 100, 100));
        set(Histo, Color::rgb(100, 100, 100));
        set(HistoBars, Color::rgb(45, 45, 45));
        set(HistoNegative, Color::WHITE);
        set(HistoHighlight, Color::rgb(255, 0, 0));
        set(Plot, Color::rgb(100, 100, 100));
        set(PlotLines, Color::rgb(45, 45, 45));
        set(PlotHighlight, Color::rgb(255, 0, 0));
        set(Scrollbar, Color::rgb(41, 41, 41));
        set(ScrollbarCursor, Color::rgb(70, 70, 70));
        set(ScrollbarBorder, Color::rgb(45, 45, 45));
        set(Scaler, Color::rgb(100, 100, 100));
        Config {
            scrollbar_width: 16.0,
            panel_padding: Vec2::new(15.0, 10.0),
            panel_min_size: Vec2::new(64.0, 64.0),
            item_spacing: Vec2::new(8.0, 8.0),
            item_padding: Vec2::new(4.0, 4.0),
            scaler_size: Vec2::new(16.0, 16.0),
            colors,
        }
    }
}
