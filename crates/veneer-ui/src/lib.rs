//! Widgets, layout, and the panel state machine.
//!
//! Widgets come in two layers:
//!
//! - Free functions in [`button`], [`toggle`], [`slider`], [`field`],
//!   [`chart`], [`scrollbar`], [`text`] — stateless, pure functions of
//!   `(rect, style, input snapshot)` that emit draw calls and return a
//!   result value. Use these directly for custom layouts.
//! - Methods on [`panel::PanelFrame`] — the same widgets placed through the
//!   panel's row/column allocator and styled from a [`veneer_core::Config`].
//!
//! A typical frame:
//!
//! ```rust
//! use veneer_core::*;
//! use veneer_ui::ButtonBehavior;
//! use veneer_ui::panel::{Panel, PanelFlags};
//!
//! let config = Config::default();
//! let font = MonoFont::new(8.0, 14.0);
//! let mut canvas = Record::new(800.0, 600.0);
//! let mut input = Input::default();
//! let mut panel = Panel::new(50.0, 50.0, 200.0, 200.0, PanelFlags::BORDER);
//!
//! input.begin();
//! input.end();
//!
//! if let Some(mut ui) = panel.begin(Some("demo"), &config, &mut canvas, &font, Some(&input)) {
//!     ui.row(30.0, 2);
//!     if ui.button_text("ok", ButtonBehavior::Default) { /* fired this frame */ }
//!     ui.end();
//! }
//! ```
//!
//! The caller owns every persistent record ([`panel::Panel`], container
//! states, edit buffers) and passes them back in each frame; losing a record
//! resets that panel to its defaults.

pub mod button;
pub mod chart;
pub mod container;
pub mod field;
pub mod layout;
pub mod panel;
pub mod scrollbar;
pub mod slider;
pub mod style;
pub mod text;
pub mod toggle;

pub use container::{GroupState, ShelfState, TabState};
pub use panel::{Panel, PanelFlags, PanelFrame};
pub use style::*;
