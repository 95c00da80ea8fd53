//! Terminal rendering for the game.
//!
//! Rendering goes through a small framebuffer instead of a widget toolkit:
//! [`GameView`] turns a snapshot into glyphs, and [`TerminalRenderer`] flushes
//! only the glyphs that changed since the previous frame.
//!
//! Stage cells are drawn two columns wide to compensate for the usual terminal
//! glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockdrop_core as core;
pub use blockdrop_types as types;

pub use fb::{FrameBuffer, Glyph, GlyphStyle};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
