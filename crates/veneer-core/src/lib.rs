//! # Veneer core
//!
//! Veneer is an immediate-mode widget engine: the caller re-describes its
//! whole interface every frame and the engine answers with primitive draw
//! calls. This crate holds the pieces everything else is built on:
//!
//! - [`geometry`] — `Vec2` and `Rect`.
//! - [`color`] — 8-bit RGBA colors and hex parsing.
//! - [`utf8`] — the UTF-8 codec used by the input snapshot and text widgets.
//! - [`input`] — the consolidated per-frame pointer/key/text snapshot.
//! - [`canvas`] — the renderer and font capability traits the host supplies.
//! - [`config`] — spacing constants and the color palette, passed explicitly
//!   into every panel call.
//! - [`record`] — a `Canvas` that records draw calls, used as the reference
//!   backend in tests and demos.
//!
//! ## Frame protocol
//!
//! ```rust
//! use veneer_core::*;
//!
//! let mut input = Input::default();
//! input.begin();
//! input.motion(40, 40);
//! input.button(40, 40, true);
//! input.end();
//! assert!(input.mouse_down);
//! ```
//!
//! The snapshot is read-only for widgets; only the begin/feed/end protocol
//! mutates it. `mouse_delta` is valid only after `end`.

pub mod canvas;
pub mod color;
pub mod config;
pub mod geometry;
pub mod input;
pub mod record;
pub mod utf8;

pub use canvas::*;
pub use color::*;
pub use config::*;
pub use geometry::*;
pub use input::*;
pub use record::*;
