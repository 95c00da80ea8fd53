//! Drop/merge engine - the single step that moves a piece down or locks it
//!
//! One call either advances the piece by a row, or (when it cannot move down)
//! merges it, sweeps full rows, scores them, checks for game over and spawns
//! the next piece. The outcome is computed from borrowed inputs and returned
//! whole, so callers commit it in one go.

use std::borrow::Cow;

use crate::collision::collides;
use crate::config::GameConfig;
use crate::player::{Offset, Player};
use crate::rng::PieceRng;
use crate::scoring::line_clear_score;
use crate::stage::Stage;
use crate::tetrominos::Tetromino;
use crate::types::{Cell, PieceKind};

/// State the engine reads.
#[derive(Debug, Clone, Copy)]
pub struct DropInput<'a> {
    pub player: &'a Player,
    pub stage: &'a Stage,
    pub next: &'a Tetromino,
    pub score: u32,
}

/// What the step asks of the fall interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalUpdate {
    /// Piece is still falling; leave the interval alone
    Keep,
    /// A new piece spawned; fall back to this interval
    Reset(u32),
    /// Game over; stop ticking
    Stop,
}

/// Result of one engine step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropOutcome<'a> {
    pub player: Player,
    /// Borrowed when the piece only moved, owned after a merge
    pub stage: Cow<'a, Stage>,
    pub score: u32,
    pub next: Tetromino,
    pub game_over: bool,
    pub interval: IntervalUpdate,
    pub rows_cleared: u32,
    /// Kind of the piece that merged this step, if any
    pub locked: Option<PieceKind>,
}

/// Run one step.
///
/// Game over is decided by the landing row alone: a piece that merges while
/// its bounding box still starts on row 0 ends the game, whether or not it
/// completed any rows. The player is then returned unchanged.
pub fn handle_drop<'a>(
    input: DropInput<'a>,
    config: &GameConfig,
    rng: &mut PieceRng,
) -> DropOutcome<'a> {
    let DropInput {
        player,
        stage,
        next,
        score,
    } = input;

    if !collides(player, stage, Offset::DOWN) {
        return DropOutcome {
            player: Player {
                collided: false,
                ..player.moved(Offset::DOWN)
            },
            stage: Cow::Borrowed(stage),
            score,
            next: *next,
            game_over: false,
            interval: IntervalUpdate::Keep,
            rows_cleared: 0,
            locked: None,
        };
    }

    let mut merged = stage.clone();
    merged.stamp(&player.stamp_cells(Cell::merged));

    let full_rows = merged.full_row_count();
    let swept = merged.sweep_rows();
    debug_assert_eq!(full_rows, swept);
    let rows_cleared = swept as u32;
    let score = score.saturating_add(line_clear_score(rows_cleared));
    let locked = Some(player.kind());

    if player.pos.y < 1 {
        return DropOutcome {
            player: *player,
            stage: Cow::Owned(merged),
            score,
            next: *next,
            game_over: true,
            interval: IntervalUpdate::Stop,
            rows_cleared,
            locked,
        };
    }

    DropOutcome {
        player: Player::spawn(next, config.spawn()),
        stage: Cow::Owned(merged),
        score,
        next: rng.random_tetromino(),
        game_over: false,
        interval: IntervalUpdate::Reset(config.base_drop_ms),
        rows_cleared,
        locked,
    }
}
