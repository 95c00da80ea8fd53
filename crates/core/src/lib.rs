//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every rule of the game and nothing else. It has no
//! dependencies on the terminal, input devices or the clock, which keeps it:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Testable**: every rule is a plain function or method over plain data
//! - **Portable**: it runs the same in a terminal, a GUI or a headless test
//!
//! # Module Structure
//!
//! - [`tetrominos`]: the seven base shapes and their colors
//! - [`rng`]: uniform random piece selection
//! - [`stage`]: the playing field, with row sweeping
//! - [`player`]: the falling piece and its position
//! - [`collision`]: the single "would this overlap?" predicate
//! - [`rotation`]: quarter-turn rotation, rejected on collision (no wall kicks)
//! - [`drop`]: one engine step (fall one row, or merge, sweep, score and respawn)
//! - [`scoring`]: flat line score, level thresholds and fall intervals
//! - [`scheduler`]: the gravity timer as data
//! - [`game_state`]: the aggregate the front ends drive
//! - [`session`]: `GameState` plus scheduler, the controller used by the binary
//!
//! # Game Rules
//!
//! - Pieces spawn at (5, 0) and fall one row per interval
//! - A piece that cannot move down merges into the stage
//! - Full rows are removed and replaced by empty rows at the top
//! - Every cleared row is worth 10 points
//! - The level goes up once the cumulative row count reaches `level * 10`
//! - A piece that merges while still on row 0 ends the game
//!
//! # Example
//!
//! ```
//! use blockdrop_core::{GameConfig, GameState};
//! use blockdrop_core::types::GameAction;
//!
//! let mut game = GameState::new(GameConfig::default().with_seed(12345));
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! assert!(game.apply_action(GameAction::SoftDrop));
//!
//! assert_eq!(game.score(), 0);
//! assert_eq!(game.level(), 1);
//! ```

pub mod collision;
pub mod config;
pub mod drop;
pub mod game_state;
pub mod player;
pub mod rng;
pub mod rotation;
pub mod scheduler;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod stage;
pub mod tetrominos;

pub use blockdrop_types as types;

// Re-export commonly used types for convenience
pub use collision::collides;
pub use config::{GameConfig, IntervalPolicy};
pub use drop::{handle_drop, DropInput, DropOutcome, IntervalUpdate};
pub use game_state::GameState;
pub use player::{Offset, Player, Position};
pub use rng::PieceRng;
pub use rotation::try_rotate;
pub use scheduler::DropScheduler;
pub use scoring::{drop_interval_ms, line_clear_score, update_level_and_speed, Progression};
pub use session::GameSession;
pub use snapshot::GameSnapshot;
pub use stage::Stage;
pub use tetrominos::{color_of, shape_of, ShapeMatrix, Tetromino};
