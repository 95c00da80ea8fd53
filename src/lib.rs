//! Blockdrop (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary and the
//! integration tests can use `blockdrop::{core, input, term, types}`.

pub mod event_log;

pub use blockdrop_core as core;
pub use blockdrop_input as input;
pub use blockdrop_term as term;
pub use blockdrop_types as types;
