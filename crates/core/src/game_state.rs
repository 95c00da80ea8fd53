//! Game state module - the aggregate every front end drives
//!
//! `GameState` ties the stage, the active piece, the next-piece slot and the
//! progression counters together. All mutation goes through `start`,
//! `restart`, `tick` and `apply_action`; each engine step is computed from
//! borrowed state by [`handle_drop`] and then committed in one block.

use std::borrow::Cow;

use crate::collision::collides;
use crate::config::{GameConfig, IntervalPolicy};
use crate::drop::{handle_drop, DropInput, DropOutcome, IntervalUpdate};
use crate::player::{Offset, Player};
use crate::rng::PieceRng;
use crate::rotation::try_rotate;
use crate::scoring::{line_clear_score, update_level_and_speed_from};
use crate::snapshot::GameSnapshot;
use crate::stage::Stage;
use crate::tetrominos::Tetromino;
use crate::types::{Cell, GameAction, LockEvent, PieceKind, START_LEVEL};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    stage: Stage,
    player: Player,
    next: Tetromino,
    rng: PieceRng,
    score: u32,
    level: u32,
    /// Cumulative rows cleared this game
    rows_cleared: u32,
    /// `None` means stopped: before the first start and after game over
    fall_interval: Option<u32>,
    game_over: bool,
    started: bool,
    /// Monotonic game counter (increments on every start/restart)
    game_id: u32,
    /// Last merge event (consumed by observers)
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create an idle game. Nothing moves until [`start`](Self::start).
    ///
    /// Panics if `config` fails [`GameConfig::validate`].
    pub fn new(config: GameConfig) -> Self {
        config.validate();

        let mut rng = match config.seed {
            Some(seed) => PieceRng::new(seed),
            None => PieceRng::from_entropy(),
        };
        let next = rng.random_tetromino();

        Self {
            config,
            stage: Stage::new(config.height, config.width),
            player: Player::placeholder(),
            next,
            rng,
            score: 0,
            level: START_LEVEL,
            rows_cleared: 0,
            fall_interval: None,
            game_over: false,
            started: false,
            game_id: 0,
            last_event: None,
        }
    }

    /// Start the first game. No-op once started.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.restart();
    }

    /// Throw away the current game and begin a fresh one.
    pub fn restart(&mut self) {
        let first = self.rng.random_tetromino();
        let next = self.rng.random_tetromino();

        self.stage.clear();
        self.player = Player::spawn(&first, self.config.spawn());
        self.next = next;
        self.score = 0;
        self.level = START_LEVEL;
        self.rows_cleared = 0;
        self.fall_interval = Some(self.config.base_drop_ms);
        self.game_over = false;
        self.started = true;
        self.game_id = self.game_id.wrapping_add(1);
        self.last_event = None;
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn next(&self) -> &Tetromino {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    pub fn fall_interval(&self) -> Option<u32> {
        self.fall_interval
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    pub fn seed(&self) -> Option<u64> {
        self.rng.seed()
    }

    /// True while ticks and movement are accepted
    pub fn is_active(&self) -> bool {
        self.started && !self.game_over
    }

    /// Replace the stage, e.g. to replay a recorded position.
    ///
    /// Panics if the dimensions differ from the configured ones.
    pub fn set_stage(&mut self, stage: Stage) {
        assert!(
            stage.height() == self.config.height && stage.width() == self.config.width,
            "stage {}x{} does not match the configured {}x{}",
            stage.height(),
            stage.width(),
            self.config.height,
            self.config.width
        );
        self.stage = stage;
    }

    /// Replace the active piece, e.g. to replay a recorded position.
    pub fn set_player(&mut self, player: Player) {
        self.player = player;
    }

    /// Take and clear the last merge event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Gravity tick: one engine step. Returns false when ignored.
    pub fn tick(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.step();
        true
    }

    /// Apply a game action. Returns true if the state changed.
    ///
    /// `Pause` is a scheduling concern and is ignored here; see
    /// [`GameSession`](crate::session::GameSession).
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Restart => {
                self.restart();
                return true;
            }
            GameAction::Pause => return false,
            _ => {}
        }

        if !self.is_active() {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.try_shift(Offset::LEFT),
            GameAction::MoveRight => self.try_shift(Offset::RIGHT),
            GameAction::SoftDrop => {
                self.step();
                true
            }
            GameAction::Rotate => match try_rotate(&self.player, &self.stage) {
                Some(rotated) => {
                    self.player = rotated;
                    true
                }
                None => false,
            },
            GameAction::Pause | GameAction::Restart => false,
        }
    }

    /// By-value form of [`apply_action`](Self::apply_action)
    pub fn with_action(mut self, action: GameAction) -> Self {
        self.apply_action(action);
        self
    }

    /// Stage with the active piece composited on top
    pub fn display_stage(&self) -> Stage {
        let mut out = self.stage.clone();
        self.display_into(&mut out);
        out
    }

    /// Allocation-reusing form of [`display_stage`](Self::display_stage).
    ///
    /// Piece cells show as `Active`, or `Merged` once the piece has collided.
    pub fn display_into(&self, out: &mut Stage) {
        out.copy_from(&self.stage);
        let make_cell: fn(PieceKind) -> Cell = if self.player.collided {
            Cell::merged
        } else {
            Cell::active
        };
        out.stamp(&self.player.stamp_cells(make_cell));
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.display_into(&mut out.stage);
        out.player = self.player;
        out.next = self.next;
        out.score = self.score;
        out.level = self.level;
        out.rows_cleared = self.rows_cleared;
        out.fall_interval_ms = self.fall_interval;
        out.started = self.started;
        out.paused = false;
        out.game_over = self.game_over;
        out.game_id = self.game_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn try_shift(&mut self, offset: Offset) -> bool {
        if collides(&self.player, &self.stage, offset) {
            return false;
        }
        self.player = self.player.moved(offset);
        true
    }

    /// Run the engine once and commit its outcome.
    fn step(&mut self) {
        let DropOutcome {
            player,
            stage,
            score,
            next,
            game_over,
            interval,
            rows_cleared,
            locked,
        } = handle_drop(
            DropInput {
                player: &self.player,
                stage: &self.stage,
                next: &self.next,
                score: self.score,
            },
            &self.config,
            &mut self.rng,
        );
        let merged_stage = match stage {
            Cow::Owned(stage) => Some(stage),
            Cow::Borrowed(_) => None,
        };

        let previous_level = self.level;
        let mut total_rows = self.rows_cleared;
        let mut level = self.level;
        let mut level_interval = None;
        if rows_cleared > 0 {
            let progression = update_level_and_speed_from(
                self.config.base_drop_ms,
                total_rows,
                level,
                rows_cleared,
            );
            total_rows = progression.total_cleared;
            level = progression.level;
            level_interval = Some(progression.drop_time_ms);
        }

        let fall_interval = match interval {
            IntervalUpdate::Keep => self.fall_interval,
            IntervalUpdate::Stop => None,
            IntervalUpdate::Reset(base) => Some(match self.config.interval_policy {
                IntervalPolicy::ResetToBase => level_interval.unwrap_or(base),
                IntervalPolicy::FollowLevel => self.config.interval_for_level(level),
            }),
        };

        if let Some(stage) = merged_stage {
            self.stage = stage;
        }
        self.player = player;
        self.next = next;
        self.score = score;
        self.level = level;
        self.rows_cleared = total_rows;
        self.fall_interval = fall_interval;
        self.game_over = game_over;

        if let Some(kind) = locked {
            self.last_event = Some(LockEvent {
                kind,
                rows_cleared,
                points: line_clear_score(rows_cleared),
                score,
                level,
                total_rows,
                leveled_up: level > previous_level,
                game_over,
            });
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
