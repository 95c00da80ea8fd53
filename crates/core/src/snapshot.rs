use crate::player::Player;
use crate::stage::Stage;
use crate::tetrominos::{shape_of, Tetromino};
use crate::types::{PieceKind, START_LEVEL};

/// Read-only view handed to renderers.
///
/// `stage` already has the active piece composited on top of the merged cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub stage: Stage,
    pub player: Player,
    pub next: Tetromino,
    pub score: u32,
    pub level: u32,
    pub rows_cleared: u32,
    /// `None` while stopped (not started or game over)
    pub fall_interval_ms: Option<u32>,
    pub started: bool,
    pub paused: bool,
    pub game_over: bool,
    pub game_id: u32,
}

impl GameSnapshot {
    /// Accepts input and advances on ticks
    pub fn playable(&self) -> bool {
        self.started && !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            stage: Stage::default(),
            player: Player::placeholder(),
            next: shape_of(PieceKind::Empty),
            score: 0,
            level: START_LEVEL,
            rows_cleared: 0,
            fall_interval_ms: None,
            started: false,
            paused: false,
            game_over: false,
            game_id: 0,
        }
    }
}
