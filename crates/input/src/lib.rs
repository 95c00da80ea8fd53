//! Terminal input.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s and detects
//! the quit keys. Key repeat timing is left to the terminal.

pub mod map;

pub use blockdrop_types as types;

pub use map::{handle_key_event, should_quit};
